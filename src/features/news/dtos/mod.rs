mod news_dto;

pub use news_dto::{
    AdminNewsQuery, AuthorSummaryDto, CreateNewsDto, NewsResponseDto, UpdateNewsDto,
};
