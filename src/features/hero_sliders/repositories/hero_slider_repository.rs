use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::hero_sliders::models::{HeroSlider, HeroSliderChanges, NewHeroSlider};

#[async_trait]
pub trait HeroSliderRepository: Send + Sync {
    /// Number of non-deleted sliders, active or not
    async fn count(&self) -> Result<i64>;

    /// Active sliders by display order, newest first within an order
    async fn list_active(&self) -> Result<Vec<HeroSlider>>;

    async fn list_all(&self) -> Result<Vec<HeroSlider>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<HeroSlider>>;

    async fn insert(&self, data: &NewHeroSlider) -> Result<HeroSlider>;

    async fn update(&self, id: i64, changes: &HeroSliderChanges) -> Result<Option<HeroSlider>>;

    async fn soft_delete(&self, id: i64) -> Result<bool>;
}

const SLIDER_COLUMNS: &str = "id, title, subtitle, media_url, media_type, link_url, link_text, \
     display_order, is_active, created_at, updated_at";

pub struct PgHeroSliderRepository {
    pool: PgPool,
}

impl PgHeroSliderRepository {
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
impl HeroSliderRepository for PgHeroSliderRepository {
    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hero_sliders WHERE deleted_at IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("count hero sliders"))
    }

    async fn list_active(&self) -> Result<Vec<HeroSlider>> {
        let sql = format!(
            "SELECT {} FROM hero_sliders
             WHERE deleted_at IS NULL AND is_active
             ORDER BY display_order ASC, created_at DESC",
            SLIDER_COLUMNS
        );
        sqlx::query_as::<_, HeroSlider>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list active hero sliders"))
    }

    async fn list_all(&self) -> Result<Vec<HeroSlider>> {
        let sql = format!(
            "SELECT {} FROM hero_sliders
             WHERE deleted_at IS NULL
             ORDER BY display_order ASC, created_at DESC",
            SLIDER_COLUMNS
        );
        sqlx::query_as::<_, HeroSlider>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list hero sliders"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<HeroSlider>> {
        let sql = format!(
            "SELECT {} FROM hero_sliders WHERE id = $1 AND deleted_at IS NULL",
            SLIDER_COLUMNS
        );
        sqlx::query_as::<_, HeroSlider>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch hero slider"))
    }

    async fn insert(&self, data: &NewHeroSlider) -> Result<HeroSlider> {
        let sql = format!(
            "INSERT INTO hero_sliders
                (title, subtitle, media_url, media_type, link_url, link_text, display_order, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {}",
            SLIDER_COLUMNS
        );
        sqlx::query_as::<_, HeroSlider>(&sql)
            .bind(&data.title)
            .bind(&data.subtitle)
            .bind(&data.media_url)
            .bind(data.media_type)
            .bind(&data.link_url)
            .bind(&data.link_text)
            .bind(data.display_order)
            .bind(data.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("create hero slider"))
    }

    async fn update(&self, id: i64, changes: &HeroSliderChanges) -> Result<Option<HeroSlider>> {
        let sql = format!(
            "UPDATE hero_sliders SET
                title = COALESCE($2, title),
                subtitle = COALESCE($3, subtitle),
                media_url = COALESCE($4, media_url),
                media_type = COALESCE($5, media_type),
                link_url = COALESCE($6, link_url),
                link_text = COALESCE($7, link_text),
                display_order = COALESCE($8, display_order),
                is_active = COALESCE($9, is_active),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {}",
            SLIDER_COLUMNS
        );
        sqlx::query_as::<_, HeroSlider>(&sql)
            .bind(id)
            .bind(&changes.title)
            .bind(&changes.subtitle)
            .bind(&changes.media_url)
            .bind(changes.media_type)
            .bind(&changes.link_url)
            .bind(&changes.link_text)
            .bind(changes.display_order)
            .bind(changes.is_active)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("update hero slider"))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE hero_sliders SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_error("delete hero slider"))?;
        Ok(result.rows_affected() > 0)
    }
}
