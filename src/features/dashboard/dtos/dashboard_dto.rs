use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::features::analytics::models::PopularPage;
use crate::features::auth::model::UserRole;
use crate::features::news::models::NewsStatus;

/// Live (non-deleted) row counts per content type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ContentStatsDto {
    pub total_news: i64,
    pub total_officials: i64,
    pub total_potentials: i64,
    pub total_services: i64,
    pub total_contacts: i64,
    pub unread_contacts: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RecentNewsDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub featured_image_url: Option<String>,
    pub status: NewsStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RecentContactDto {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Views and distinct visitors over rolling windows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrafficStatsDto {
    pub today_views: i64,
    pub today_visitors: i64,
    pub week_views: i64,
    pub week_visitors: i64,
    pub month_views: i64,
    pub month_visitors: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SystemInfoDto {
    pub current_user: String,
    pub current_role: UserRole,
    pub app_version: String,
    /// `connected` or `disconnected`
    pub database_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub content_stats: ContentStatsDto,
    pub recent_news: Vec<RecentNewsDto>,
    pub recent_contacts: Vec<RecentContactDto>,
    pub analytics: TrafficStatsDto,
    pub popular_pages: Vec<PopularPage>,
    pub system_info: SystemInfoDto,
}
