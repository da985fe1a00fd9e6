mod page_view_dto;

pub use page_view_dto::TrackPageViewDto;
