use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::news::models::{News, NewsStatus};
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::types::PaginationQuery;
use crate::shared::validation::non_blank;

/// Request DTO for creating an article
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNewsDto {
    #[validate(length(min = 5, max = 255, message = "Title must be 5-255 characters"))]
    pub title: String,

    #[validate(length(min = 20, message = "Content must be at least 20 characters"))]
    pub content: String,

    /// Defaults to `draft`
    #[serde(default)]
    pub status: NewsStatus,

    pub featured_image_url: Option<String>,

    pub published_at: Option<DateTime<Utc>>,
}

impl CreateNewsDto {
    /// Trim the title so length rules apply to what gets stored
    pub fn trimmed(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self
    }
}

/// Request DTO for updating an article; blank or omitted fields are left unchanged
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateNewsDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<NewsStatus>,
    pub featured_image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl UpdateNewsDto {
    /// Drop blank fields and validate the ones that remain
    pub fn normalized(self) -> Result<Self> {
        let title = non_blank(self.title);
        let content = self.content.filter(|c| !c.trim().is_empty());

        if let Some(title) = &title {
            let len = title.chars().count();
            if !(5..=255).contains(&len) {
                return Err(AppError::Validation(
                    "Title must be 5-255 characters".to_string(),
                ));
            }
        }
        if let Some(content) = &content {
            if content.chars().count() < 20 {
                return Err(AppError::Validation(
                    "Content must be at least 20 characters".to_string(),
                ));
            }
        }

        Ok(Self {
            title,
            content,
            status: self.status,
            featured_image_url: non_blank(self.featured_image_url),
            published_at: self.published_at,
        })
    }
}

/// Admin listing query
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AdminNewsQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Only articles in this state
    pub status: Option<NewsStatus>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl AdminNewsQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::new(self.page, self.limit)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorSummaryDto {
    pub id: i64,
    pub full_name: String,
    pub username: String,
}

/// Response DTO for an article
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsResponseDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub featured_image_url: Option<String>,
    pub status: NewsStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: i64,
    pub author: AuthorSummaryDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<News> for NewsResponseDto {
    fn from(n: News) -> Self {
        Self {
            id: n.id,
            title: n.title,
            slug: n.slug,
            content: n.content,
            featured_image_url: n.featured_image_url,
            status: n.status,
            published_at: n.published_at,
            author_id: n.author_id,
            author: AuthorSummaryDto {
                id: n.author_id,
                full_name: n.author_full_name,
                username: n.author_username,
            },
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_to_draft() {
        let dto: CreateNewsDto = serde_json::from_value(serde_json::json!({
            "title": "Kerja Bakti Minggu Ini",
            "content": "Warga diharapkan hadir pukul tujuh pagi."
        }))
        .unwrap();
        assert_eq!(dto.status, NewsStatus::Draft);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_title_length_counts_after_trim() {
        let dto = CreateNewsDto {
            title: "    Abc    ".into(),
            content: "Warga diharapkan hadir pukul tujuh pagi.".into(),
            status: NewsStatus::Draft,
            featured_image_url: None,
            published_at: None,
        };
        assert!(dto.validate().is_ok());

        let dto = dto.trimmed();
        assert_eq!(dto.title, "Abc");
        assert!(dto.validate().unwrap_err().field_errors().contains_key("title"));
    }

    #[test]
    fn test_create_rejects_short_fields() {
        let dto = CreateNewsDto {
            title: "Hai".into(),
            content: "pendek".into(),
            status: NewsStatus::Draft,
            featured_image_url: None,
            published_at: None,
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("content"));
    }

    #[test]
    fn test_update_blank_title_is_ignored() {
        let dto = UpdateNewsDto {
            title: Some("   ".into()),
            ..Default::default()
        }
        .normalized()
        .unwrap();
        assert!(dto.title.is_none());
    }

    #[test]
    fn test_update_short_title_is_rejected() {
        let result = UpdateNewsDto {
            title: Some("Abc".into()),
            ..Default::default()
        }
        .normalized();
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
