use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::news::models::{News, NewsChanges, NewsFilter, NewNews};
use crate::features::news::slug::SlugLookup;
use crate::shared::types::PaginationQuery;

/// Persistence for news articles; soft-deleted rows are invisible to every method
#[async_trait]
pub trait NewsRepository: SlugLookup {
    /// Insert an article. A slug already in use surfaces as `AppError::Conflict`.
    async fn insert(&self, data: &NewNews) -> Result<News>;

    async fn find_by_id(&self, id: i64) -> Result<Option<News>>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<News>>;

    async fn list(&self, filter: NewsFilter, pagination: &PaginationQuery)
        -> Result<(Vec<News>, i64)>;

    /// Apply changes; `Ok(None)` when the article does not exist.
    async fn update(&self, id: i64, changes: &NewsChanges) -> Result<Option<News>>;

    /// Returns false when nothing was deleted
    async fn soft_delete(&self, id: i64) -> Result<bool>;
}

const NEWS_SELECT: &str = r#"
    SELECT
        n.id, n.title, n.slug, n.content, n.featured_image_url, n.status,
        n.published_at, n.author_id,
        u.full_name AS author_full_name, u.username AS author_username,
        n.created_at, n.updated_at
"#;

pub struct PgNewsRepository {
    pool: PgPool,
}

impl PgNewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlugLookup for PgNewsRepository {
    async fn slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM news
                WHERE slug = $1
                AND deleted_at IS NULL
                AND ($2::BIGINT IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check slug: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[async_trait]
impl NewsRepository for PgNewsRepository {
    async fn insert(&self, data: &NewNews) -> Result<News> {
        let sql = format!(
            r#"
            WITH n AS (
                INSERT INTO news
                    (title, slug, content, featured_image_url, status, published_at, author_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
            )
            {} FROM n JOIN users u ON u.id = n.author_id
            "#,
            NEWS_SELECT
        );
        sqlx::query_as::<_, News>(&sql)
            .bind(&data.title)
            .bind(&data.slug)
            .bind(&data.content)
            .bind(&data.featured_image_url)
            .bind(data.status)
            .bind(data.published_at)
            .bind(data.author_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Slug"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<News>> {
        let sql = format!(
            "{} FROM news n JOIN users u ON u.id = n.author_id
             WHERE n.id = $1 AND n.deleted_at IS NULL",
            NEWS_SELECT
        );
        sqlx::query_as::<_, News>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch news: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<News>> {
        let sql = format!(
            "{} FROM news n JOIN users u ON u.id = n.author_id
             WHERE n.slug = $1 AND n.deleted_at IS NULL",
            NEWS_SELECT
        );
        sqlx::query_as::<_, News>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch news by slug: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list(
        &self,
        filter: NewsFilter,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<News>, i64)> {
        let order = if filter.by_publish_date {
            "n.published_at DESC NULLS LAST, n.created_at DESC"
        } else {
            "n.created_at DESC"
        };
        let sql = format!(
            "{} FROM news n JOIN users u ON u.id = n.author_id
             WHERE n.deleted_at IS NULL AND ($1::news_status IS NULL OR n.status = $1)
             ORDER BY {}
             LIMIT $2 OFFSET $3",
            NEWS_SELECT, order
        );

        let items = sqlx::query_as::<_, News>(&sql)
            .bind(filter.status)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list news: {:?}", e);
                AppError::Database(e)
            })?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM news
             WHERE deleted_at IS NULL AND ($1::news_status IS NULL OR status = $1)",
        )
        .bind(filter.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count news: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((items, total))
    }

    async fn update(&self, id: i64, changes: &NewsChanges) -> Result<Option<News>> {
        let sql = format!(
            r#"
            WITH n AS (
                UPDATE news SET
                    title = COALESCE($2, title),
                    slug = COALESCE($3, slug),
                    content = COALESCE($4, content),
                    featured_image_url = COALESCE($5, featured_image_url),
                    status = COALESCE($6, status),
                    published_at = COALESCE($7, published_at),
                    updated_at = NOW()
                WHERE id = $1 AND deleted_at IS NULL
                RETURNING *
            )
            {} FROM n JOIN users u ON u.id = n.author_id
            "#,
            NEWS_SELECT
        );
        sqlx::query_as::<_, News>(&sql)
            .bind(id)
            .bind(&changes.title)
            .bind(&changes.slug)
            .bind(&changes.content)
            .bind(&changes.featured_image_url)
            .bind(changes.status)
            .bind(changes.published_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Slug"))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE news SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete news: {:?}", e);
            AppError::Database(e)
        })?;
        Ok(result.rows_affected() > 0)
    }
}
