use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Publication state matching database enum
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "news_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NewsStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// News article joined with its author's display fields
#[derive(Debug, Clone, FromRow)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub featured_image_url: Option<String>,
    pub status: NewsStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: i64,
    pub author_full_name: String,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for inserting an article; the slug is already resolved
#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub featured_image_url: Option<String>,
    pub status: NewsStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: i64,
}

/// Column changes for an update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct NewsChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub featured_image_url: Option<String>,
    pub status: Option<NewsStatus>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Listing filter
#[derive(Debug, Clone, Copy, Default)]
pub struct NewsFilter {
    pub status: Option<NewsStatus>,
    /// Order by publish date instead of creation date
    pub by_publish_date: bool,
}

impl NewsFilter {
    pub fn published() -> Self {
        Self {
            status: Some(NewsStatus::Published),
            by_publish_date: true,
        }
    }
}
