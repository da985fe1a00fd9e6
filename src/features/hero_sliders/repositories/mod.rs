mod hero_slider_repository;

#[cfg(test)]
mod memory;

pub use hero_slider_repository::{HeroSliderRepository, PgHeroSliderRepository};

#[cfg(test)]
pub use memory::InMemoryHeroSliderRepository;
