use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Message submitted through the public contact form
#[derive(Debug, Clone, FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
