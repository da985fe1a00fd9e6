mod page_view_writer;

pub use page_view_writer::PageViewWriter;
