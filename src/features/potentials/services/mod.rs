mod potential_service;

pub use potential_service::PotentialService;
