use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::hero_sliders::models::{
    HeroSlider, HeroSliderChanges, MediaType, NewHeroSlider,
};
use crate::shared::validation::non_blank;

fn default_active() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateHeroSliderDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    pub subtitle: Option<String>,

    #[validate(length(min = 1, message = "Media URL is required"))]
    pub media_url: String,

    pub media_type: MediaType,

    pub link_url: Option<String>,

    #[validate(length(max = 100, message = "Link text must be at most 100 characters"))]
    pub link_text: Option<String>,

    #[serde(default)]
    pub display_order: i32,

    /// Defaults to `true`
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CreateHeroSliderDto {
    pub fn into_new(self) -> Result<NewHeroSlider> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }

        Ok(NewHeroSlider {
            title,
            subtitle: non_blank(self.subtitle),
            media_url: self.media_url.trim().to_string(),
            media_type: self.media_type,
            link_url: non_blank(self.link_url),
            link_text: non_blank(self.link_text),
            display_order: self.display_order,
            is_active: self.is_active,
        })
    }
}

/// Partial update; omitted or blank text fields are left unchanged
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateHeroSliderDto {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<MediaType>,
    pub link_url: Option<String>,
    pub link_text: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateHeroSliderDto {
    pub fn into_changes(self) -> Result<HeroSliderChanges> {
        let title = non_blank(self.title);
        if title.as_ref().is_some_and(|t| t.chars().count() > 255) {
            return Err(AppError::Validation(
                "Title must be 1-255 characters".to_string(),
            ));
        }

        Ok(HeroSliderChanges {
            title,
            subtitle: non_blank(self.subtitle),
            media_url: non_blank(self.media_url),
            media_type: self.media_type,
            link_url: non_blank(self.link_url),
            link_text: non_blank(self.link_text),
            display_order: self.display_order,
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeroSliderResponseDto {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub media_url: String,
    pub media_type: MediaType,
    pub link_url: Option<String>,
    pub link_text: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HeroSlider> for HeroSliderResponseDto {
    fn from(s: HeroSlider) -> Self {
        Self {
            id: s.id,
            title: s.title,
            subtitle: s.subtitle,
            media_url: s.media_url,
            media_type: s.media_type,
            link_url: s.link_url,
            link_text: s.link_text,
            display_order: s.display_order,
            is_active: s.is_active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_to_active() {
        let dto: CreateHeroSliderDto = serde_json::from_str(
            r#"{"title": "Panen Raya", "media_url": "https://x/y.jpg", "media_type": "image"}"#,
        )
        .unwrap();
        let new = dto.into_new().unwrap();
        assert!(new.is_active);
        assert_eq!(new.display_order, 0);
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let dto = CreateHeroSliderDto {
            title: "   ".to_string(),
            subtitle: None,
            media_url: "https://x/y.jpg".to_string(),
            media_type: MediaType::Image,
            link_url: None,
            link_text: None,
            display_order: 0,
            is_active: true,
        };
        assert!(matches!(dto.into_new(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unknown_media_type_fails_to_parse() {
        let parsed: std::result::Result<CreateHeroSliderDto, _> = serde_json::from_str(
            r#"{"title": "x", "media_url": "u", "media_type": "gif"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_update_drops_blank_fields() {
        let changes = UpdateHeroSliderDto {
            title: Some("".to_string()),
            is_active: Some(false),
            ..Default::default()
        }
        .into_changes()
        .unwrap();
        assert!(changes.title.is_none());
        assert_eq!(changes.is_active, Some(false));
    }
}
