pub mod dtos;
pub mod handlers;
pub mod models;
pub mod queue;
pub mod repositories;
pub mod routes;
pub mod tracking;
pub mod workers;

pub use queue::PageViewQueue;
pub use repositories::PgPageViewRepository;
pub use workers::PageViewWriter;
