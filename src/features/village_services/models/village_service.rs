use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Administrative service offered by the village office
#[derive(Debug, Clone, FromRow)]
pub struct VillageService {
    pub id: i64,
    pub service_name: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
