mod news;

pub use news::{News, NewsChanges, NewsFilter, NewsStatus, NewNews};
