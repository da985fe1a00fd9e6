mod hero_slider_service;

pub use hero_slider_service::HeroSliderService;
