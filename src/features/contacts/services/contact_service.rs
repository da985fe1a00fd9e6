use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::contacts::dtos::CreateContactDto;
use crate::features::contacts::models::Contact;
use crate::shared::types::PaginationQuery;

const CONTACT_COLUMNS: &str =
    "id, name, email, subject, message, is_read, created_at, updated_at";

pub struct ContactService {
    pool: PgPool,
}

impl ContactService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, dto: CreateContactDto) -> Result<Contact> {
        let sql = format!(
            "INSERT INTO contacts (name, email, subject, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            CONTACT_COLUMNS
        );
        let contact = sqlx::query_as::<_, Contact>(&sql)
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&dto.subject)
            .bind(&dto.message)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to save contact message: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Contact message received: {}", contact.id);
        Ok(contact)
    }

    /// Newest first, with the total for pagination
    pub async fn list(&self, pagination: &PaginationQuery) -> Result<(Vec<Contact>, i64)> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM contacts WHERE deleted_at IS NULL",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count contacts: {:?}", e);
            AppError::Database(e)
        })?;

        let sql = format!(
            "SELECT {} FROM contacts
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2",
            CONTACT_COLUMNS
        );
        let items = sqlx::query_as::<_, Contact>(&sql)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list contacts: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((items, total))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Contact> {
        let sql = format!(
            "SELECT {} FROM contacts WHERE id = $1 AND deleted_at IS NULL",
            CONTACT_COLUMNS
        );
        sqlx::query_as::<_, Contact>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch contact: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound("Contact message not found".to_string()))
    }

    pub async fn mark_as_read(&self, id: i64) -> Result<Contact> {
        let sql = format!(
            "UPDATE contacts SET is_read = TRUE, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {}",
            CONTACT_COLUMNS
        );
        sqlx::query_as::<_, Contact>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to mark contact as read: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound("Contact message not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(
            "UPDATE contacts SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete contact: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Contact message not found".to_string()));
        }
        Ok(())
    }
}
