pub mod catalog;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod sync;

pub use repositories::PgSettingsRepository;
pub use services::SettingsService;
