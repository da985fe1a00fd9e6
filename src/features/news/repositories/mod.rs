mod news_repository;

#[cfg(test)]
mod memory;

pub use news_repository::{NewsRepository, PgNewsRepository};

#[cfg(test)]
pub use memory::InMemoryNewsRepository;
