mod official_service;

pub use official_service::OfficialService;
