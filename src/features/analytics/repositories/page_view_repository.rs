use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::analytics::models::{NewPageView, PopularPage};

#[async_trait]
pub trait PageViewRepository: Send + Sync {
    async fn insert(&self, view: &NewPageView) -> Result<()>;

    async fn count_views(&self, since: DateTime<Utc>) -> Result<i64>;

    async fn count_visitors(&self, since: DateTime<Utc>) -> Result<i64>;

    async fn popular_pages(&self, since: DateTime<Utc>, limit: i64) -> Result<Vec<PopularPage>>;
}

pub struct PgPageViewRepository {
    pool: PgPool,
}

impl PgPageViewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(action: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        tracing::error!("Failed to {}: {:?}", action, e);
        AppError::Database(e)
    }
}

#[async_trait]
impl PageViewRepository for PgPageViewRepository {
    async fn insert(&self, view: &NewPageView) -> Result<()> {
        sqlx::query(
            "INSERT INTO page_views (page_url, page_title, referrer, visitor_id, user_agent, viewed_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&view.page_url)
        .bind(&view.page_title)
        .bind(&view.referrer)
        .bind(&view.visitor_id)
        .bind(&view.user_agent)
        .bind(view.viewed_at)
        .execute(&self.pool)
        .await
        .map_err(db_error("record page view"))?;
        Ok(())
    }

    async fn count_views(&self, since: DateTime<Utc>) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM page_views WHERE viewed_at >= $1")
            .bind(since)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("count page views"))
    }

    async fn count_visitors(&self, since: DateTime<Utc>) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT visitor_id) FROM page_views WHERE viewed_at >= $1",
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("count visitors"))
    }

    async fn popular_pages(&self, since: DateTime<Utc>, limit: i64) -> Result<Vec<PopularPage>> {
        sqlx::query_as::<_, PopularPage>(
            "SELECT page_url,
                    COALESCE(MAX(page_title), page_url) AS page_title,
                    COUNT(*) AS view_count
             FROM page_views
             WHERE viewed_at >= $1
             GROUP BY page_url
             ORDER BY view_count DESC, page_url ASC
             LIMIT $2",
        )
        .bind(since)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("rank pages"))
    }
}
