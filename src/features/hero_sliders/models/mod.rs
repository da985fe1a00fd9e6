mod hero_slider;

pub use hero_slider::{HeroSlider, HeroSliderChanges, MediaType, NewHeroSlider};
