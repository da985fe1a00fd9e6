mod village_service_service;

pub use village_service_service::VillageServiceService;
