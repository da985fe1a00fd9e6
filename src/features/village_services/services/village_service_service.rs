use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::village_services::dtos::{CreateServiceDto, UpdateServiceDto};
use crate::features::village_services::models::VillageService;

const SERVICE_COLUMNS: &str =
    "id, service_name, description, requirements, created_at, updated_at";

pub struct VillageServiceService {
    pool: PgPool,
}

impl VillageServiceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<VillageService>> {
        let sql = format!(
            "SELECT {} FROM services WHERE deleted_at IS NULL ORDER BY service_name ASC",
            SERVICE_COLUMNS
        );
        sqlx::query_as::<_, VillageService>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list services: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VillageService> {
        let sql = format!(
            "SELECT {} FROM services WHERE id = $1 AND deleted_at IS NULL",
            SERVICE_COLUMNS
        );
        sqlx::query_as::<_, VillageService>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch service: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    pub async fn create(&self, dto: CreateServiceDto) -> Result<VillageService> {
        let sql = format!(
            "INSERT INTO services (service_name, description, requirements)
             VALUES ($1, $2, $3)
             RETURNING {}",
            SERVICE_COLUMNS
        );
        let service = sqlx::query_as::<_, VillageService>(&sql)
            .bind(&dto.service_name)
            .bind(&dto.description)
            .bind(&dto.requirements)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create service: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Service created: {} ({})", service.service_name, service.id);
        Ok(service)
    }

    pub async fn update(&self, id: i64, dto: UpdateServiceDto) -> Result<VillageService> {
        let sql = format!(
            "UPDATE services SET
                service_name = COALESCE($2, service_name),
                description = COALESCE($3, description),
                requirements = COALESCE($4, requirements),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {}",
            SERVICE_COLUMNS
        );
        sqlx::query_as::<_, VillageService>(&sql)
            .bind(id)
            .bind(&dto.service_name)
            .bind(&dto.description)
            .bind(&dto.requirements)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update service: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(
            "UPDATE services SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete service: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Service not found".to_string()));
        }
        tracing::info!("Service deleted: {}", id);
        Ok(())
    }
}
