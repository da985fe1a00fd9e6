use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::potentials::dtos::{CreatePotentialDto, UpdatePotentialDto};
use crate::features::potentials::models::{Potential, PotentialType};

const POTENTIAL_COLUMNS: &str =
    "id, title, description, cover_image_url, type, created_at, updated_at";

pub struct PotentialService {
    pool: PgPool,
}

impl PotentialService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Newest first, optionally restricted to one category
    pub async fn list(&self, potential_type: Option<PotentialType>) -> Result<Vec<Potential>> {
        let sql = format!(
            "SELECT {} FROM potentials
             WHERE deleted_at IS NULL AND ($1::potential_type IS NULL OR type = $1)
             ORDER BY created_at DESC, id DESC",
            POTENTIAL_COLUMNS
        );
        sqlx::query_as::<_, Potential>(&sql)
            .bind(potential_type)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list potentials: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Potential> {
        let sql = format!(
            "SELECT {} FROM potentials WHERE id = $1 AND deleted_at IS NULL",
            POTENTIAL_COLUMNS
        );
        sqlx::query_as::<_, Potential>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch potential: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound("Potential not found".to_string()))
    }

    pub async fn create(&self, dto: CreatePotentialDto) -> Result<Potential> {
        let sql = format!(
            "INSERT INTO potentials (title, description, cover_image_url, type)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            POTENTIAL_COLUMNS
        );
        let potential = sqlx::query_as::<_, Potential>(&sql)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(&dto.cover_image_url)
            .bind(dto.potential_type)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create potential: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Potential created: {} ({})", potential.title, potential.id);
        Ok(potential)
    }

    pub async fn update(&self, id: i64, dto: UpdatePotentialDto) -> Result<Potential> {
        let sql = format!(
            "UPDATE potentials SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                cover_image_url = COALESCE($4, cover_image_url),
                type = COALESCE($5, type),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {}",
            POTENTIAL_COLUMNS
        );
        sqlx::query_as::<_, Potential>(&sql)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(&dto.cover_image_url)
            .bind(dto.potential_type)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update potential: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound("Potential not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(
            "UPDATE potentials SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete potential: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Potential not found".to_string()));
        }
        tracing::info!("Potential deleted: {}", id);
        Ok(())
    }
}
