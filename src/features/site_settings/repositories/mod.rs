mod settings_repository;

#[cfg(test)]
mod memory;

pub use settings_repository::{PgSettingsRepository, SettingsRepository};

#[cfg(test)]
pub use memory::InMemorySettingsRepository;
