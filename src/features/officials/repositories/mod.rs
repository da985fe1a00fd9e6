mod official_repository;

#[cfg(test)]
mod memory;

pub use official_repository::{OfficialRepository, PgOfficialRepository};

#[cfg(test)]
pub use memory::InMemoryOfficialRepository;
