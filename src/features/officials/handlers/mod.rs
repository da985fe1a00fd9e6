mod official_handler;

pub use official_handler::*;
