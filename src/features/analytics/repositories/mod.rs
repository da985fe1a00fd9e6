mod page_view_repository;

#[cfg(test)]
mod memory;

pub use page_view_repository::{PageViewRepository, PgPageViewRepository};

#[cfg(test)]
pub use memory::InMemoryPageViewRepository;
