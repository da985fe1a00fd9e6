use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Slider media kind matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "media_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

#[derive(Debug, Clone, FromRow)]
pub struct HeroSlider {
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

#[derive(Debug, Clone)]
pub struct NewHeroSlider {
    pub title: String,
    pub subtitle: Option<String>,
    pub media_url: String,
    pub media_type: MediaType,
    pub link_url: Option<String>,
    pub link_text: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
}

/// Column changes; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct HeroSliderChanges {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<MediaType>,
    pub link_url: Option<String>,
    pub link_text: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
