mod village_service;

pub use village_service::VillageService;
