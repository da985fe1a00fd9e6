mod page_view_handler;

pub use page_view_handler::*;
