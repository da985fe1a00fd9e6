use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Round-trip a trivial query; used for the dashboard's database status
pub async fn ping(pool: &PgPool) -> bool {
    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Database ping failed: {:?}", e);
            false
        }
    }
}

/// Map a storage error to the application taxonomy.
///
/// Unique violations become `Conflict` (surfaced as 400), foreign key
/// violations become `BadRequest`; everything else stays a database error.
pub fn map_db_error(e: sqlx::Error, what: &str) -> crate::core::error::AppError {
    use crate::core::error::AppError;

    if let sqlx::Error::Database(db_err) = &e {
        match db_err.code().as_deref() {
            Some("23505") => {
                return AppError::Conflict(format!("{} already exists", what));
            }
            Some("23503") => {
                return AppError::BadRequest("Referenced record does not exist".to_string());
            }
            _ => {}
        }
    }

    tracing::error!("Database error on {}: {:?}", what, e);
    AppError::Database(e)
}
