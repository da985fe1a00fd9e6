use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::officials::models::{NewOfficial, OfficialChanges, VillageOfficial};

#[async_trait]
pub trait OfficialRepository: Send + Sync {
    async fn count(&self) -> Result<i64>;

    /// Ordered by hamlet number (unassigned last), then display order
    async fn list(&self) -> Result<Vec<VillageOfficial>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<VillageOfficial>>;

    async fn insert(&self, data: &NewOfficial) -> Result<VillageOfficial>;

    /// Insert several rows in one transaction
    async fn insert_many(&self, data: &[NewOfficial]) -> Result<u64>;

    async fn update(&self, id: i64, changes: &OfficialChanges) -> Result<Option<VillageOfficial>>;

    async fn soft_delete(&self, id: i64) -> Result<bool>;
}

const OFFICIAL_COLUMNS: &str = "id, name, position, photo_url, bio, display_order, \
     hamlet_number, hamlet_name, created_at, updated_at";

const INSERT_OFFICIAL: &str = "INSERT INTO village_officials
        (name, position, photo_url, bio, display_order, hamlet_number, hamlet_name)
     VALUES ($1, $2, $3, $4, $5, $6, $7)";

pub struct PgOfficialRepository {
    pool: PgPool,
}

impl PgOfficialRepository {
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
impl OfficialRepository for PgOfficialRepository {
    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM village_officials WHERE deleted_at IS NULL",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("count officials"))
    }

    async fn list(&self) -> Result<Vec<VillageOfficial>> {
        let sql = format!(
            "SELECT {} FROM village_officials
             WHERE deleted_at IS NULL
             ORDER BY hamlet_number ASC NULLS LAST, display_order ASC, id ASC",
            OFFICIAL_COLUMNS
        );
        sqlx::query_as::<_, VillageOfficial>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list officials"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<VillageOfficial>> {
        let sql = format!(
            "SELECT {} FROM village_officials WHERE id = $1 AND deleted_at IS NULL",
            OFFICIAL_COLUMNS
        );
        sqlx::query_as::<_, VillageOfficial>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch official"))
    }

    async fn insert(&self, data: &NewOfficial) -> Result<VillageOfficial> {
        let sql = format!("{} RETURNING {}", INSERT_OFFICIAL, OFFICIAL_COLUMNS);
        sqlx::query_as::<_, VillageOfficial>(&sql)
            .bind(&data.name)
            .bind(&data.position)
            .bind(&data.photo_url)
            .bind(&data.bio)
            .bind(data.display_order)
            .bind(data.hamlet_number)
            .bind(&data.hamlet_name)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("create official"))
    }

    async fn insert_many(&self, data: &[NewOfficial]) -> Result<u64> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin transaction"))?;

        let mut created = 0;
        for official in data {
            let result = sqlx::query(INSERT_OFFICIAL)
                .bind(&official.name)
                .bind(&official.position)
                .bind(&official.photo_url)
                .bind(&official.bio)
                .bind(official.display_order)
                .bind(official.hamlet_number)
                .bind(&official.hamlet_name)
                .execute(&mut *tx)
                .await
                .map_err(db_error("create official"))?;
            created += result.rows_affected();
        }

        tx.commit().await.map_err(db_error("commit officials"))?;
        Ok(created)
    }

    async fn update(&self, id: i64, changes: &OfficialChanges) -> Result<Option<VillageOfficial>> {
        // $7/$9 flag whether the nullable hamlet columns are being written
        let sql = format!(
            "UPDATE village_officials SET
                name = COALESCE($2, name),
                position = COALESCE($3, position),
                photo_url = COALESCE($4, photo_url),
                bio = COALESCE($5, bio),
                display_order = COALESCE($6, display_order),
                hamlet_number = CASE WHEN $7 THEN $8 ELSE hamlet_number END,
                hamlet_name = CASE WHEN $9 THEN $10 ELSE hamlet_name END,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {}",
            OFFICIAL_COLUMNS
        );
        sqlx::query_as::<_, VillageOfficial>(&sql)
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.position)
            .bind(&changes.photo_url)
            .bind(&changes.bio)
            .bind(changes.display_order)
            .bind(changes.hamlet_number.is_some())
            .bind(changes.hamlet_number.flatten())
            .bind(changes.hamlet_name.is_some())
            .bind(changes.hamlet_name.clone().flatten())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("update official"))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE village_officials SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_error("delete official"))?;
        Ok(result.rows_affected() > 0)
    }
}
