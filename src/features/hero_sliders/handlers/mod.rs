mod hero_slider_handler;

pub use hero_slider_handler::*;
