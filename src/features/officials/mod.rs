pub mod defaults;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgOfficialRepository;
pub use services::OfficialService;
