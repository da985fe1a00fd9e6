use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use sqlx::PgPool;

use crate::core::database;
use crate::core::error::{AppError, Result};
use crate::features::analytics::models::PopularPage;
use crate::features::analytics::repositories::PageViewRepository;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::dashboard::dtos::*;
use crate::shared::constants::{DASHBOARD_RECENT_LIMIT, DASHBOARD_TOP_PAGES_LIMIT};

/// Days covered by the "month" traffic window and the popular page ranking
const MONTH_WINDOW_DAYS: i64 = 30;
const WEEK_WINDOW_DAYS: i64 = 7;

/// Service for the admin dashboard overview
pub struct DashboardService {
    pool: PgPool,
    page_views: Arc<dyn PageViewRepository>,
    app_version: String,
}

/// Log a failed section and fall back to its empty value so the rest of the
/// overview still renders
fn section_or_default<T: Default>(section: &str, result: Result<T>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!("Dashboard section '{}' unavailable: {:?}", section, e);
        T::default()
    })
}

/// Start of the current UTC day
fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Views and visitors for today, the last 7 days and the last 30 days
pub async fn traffic_stats(
    repo: &dyn PageViewRepository,
    now: DateTime<Utc>,
) -> Result<TrafficStatsDto> {
    let today = start_of_day(now);
    let week = now - Duration::days(WEEK_WINDOW_DAYS);
    let month = now - Duration::days(MONTH_WINDOW_DAYS);

    Ok(TrafficStatsDto {
        today_views: repo.count_views(today).await?,
        today_visitors: repo.count_visitors(today).await?,
        week_views: repo.count_views(week).await?,
        week_visitors: repo.count_visitors(week).await?,
        month_views: repo.count_views(month).await?,
        month_visitors: repo.count_visitors(month).await?,
    })
}

/// Most viewed pages of the last 30 days
pub async fn popular_pages(
    repo: &dyn PageViewRepository,
    now: DateTime<Utc>,
) -> Result<Vec<PopularPage>> {
    repo.popular_pages(now - Duration::days(MONTH_WINDOW_DAYS), DASHBOARD_TOP_PAGES_LIMIT)
        .await
}

impl DashboardService {
    pub fn new(
        pool: PgPool,
        page_views: Arc<dyn PageViewRepository>,
        app_version: String,
    ) -> Self {
        Self {
            pool,
            page_views,
            app_version,
        }
    }

    pub async fn overview(&self, user: &AuthenticatedUser) -> DashboardDto {
        let now = Utc::now();

        let content_stats = section_or_default("content_stats", self.content_stats().await);
        let recent_news = section_or_default("recent_news", self.recent_news().await);
        let recent_contacts =
            section_or_default("recent_contacts", self.recent_contacts().await);
        let analytics = section_or_default(
            "analytics",
            traffic_stats(self.page_views.as_ref(), now).await,
        );
        let popular_pages = section_or_default(
            "popular_pages",
            popular_pages(self.page_views.as_ref(), now).await,
        );

        let database_status = if database::ping(&self.pool).await {
            "connected"
        } else {
            "disconnected"
        };

        DashboardDto {
            content_stats,
            recent_news,
            recent_contacts,
            analytics,
            popular_pages,
            system_info: SystemInfoDto {
                current_user: user.username.clone(),
                current_role: user.role,
                app_version: self.app_version.clone(),
                database_status: database_status.to_string(),
            },
        }
    }

    async fn content_stats(&self) -> Result<ContentStatsDto> {
        sqlx::query_as::<_, ContentStatsDto>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM news WHERE deleted_at IS NULL) AS total_news,
                (SELECT COUNT(*) FROM village_officials WHERE deleted_at IS NULL) AS total_officials,
                (SELECT COUNT(*) FROM potentials WHERE deleted_at IS NULL) AS total_potentials,
                (SELECT COUNT(*) FROM services WHERE deleted_at IS NULL) AS total_services,
                COUNT(*) AS total_contacts,
                COUNT(*) FILTER (WHERE NOT is_read) AS unread_contacts
            FROM contacts
            WHERE deleted_at IS NULL
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get content counts: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn recent_news(&self) -> Result<Vec<RecentNewsDto>> {
        sqlx::query_as::<_, RecentNewsDto>(
            "SELECT id, title, slug, featured_image_url, status, published_at, created_at
             FROM news
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC, id DESC
             LIMIT $1",
        )
        .bind(DASHBOARD_RECENT_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch recent news: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn recent_contacts(&self) -> Result<Vec<RecentContactDto>> {
        sqlx::query_as::<_, RecentContactDto>(
            "SELECT id, name, subject, is_read, created_at
             FROM contacts
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC, id DESC
             LIMIT $1",
        )
        .bind(DASHBOARD_RECENT_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch recent contacts: {:?}", e);
            AppError::Database(e)
        })
    }
}
