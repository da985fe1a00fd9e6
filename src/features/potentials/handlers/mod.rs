mod potential_handler;

pub use potential_handler::*;
