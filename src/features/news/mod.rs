pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod slug;

pub use repositories::PgNewsRepository;
pub use services::NewsService;
pub use slug::SlugGenerator;
