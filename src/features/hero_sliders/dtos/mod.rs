mod hero_slider_dto;

pub use hero_slider_dto::{CreateHeroSliderDto, HeroSliderResponseDto, UpdateHeroSliderDto};
