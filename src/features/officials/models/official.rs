use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct VillageOfficial {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub display_order: i32,
    /// Hamlet (dusun) the official heads, if any
    pub hamlet_number: Option<i32>,
    pub hamlet_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewOfficial {
    pub name: String,
    pub position: String,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub display_order: i32,
    pub hamlet_number: Option<i32>,
    pub hamlet_name: Option<String>,
}

/// Column changes. Plain options keep the stored value on `None`; the hamlet
/// fields use `Some(None)` to clear.
#[derive(Debug, Clone, Default)]
pub struct OfficialChanges {
    pub name: Option<String>,
    pub position: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub display_order: Option<i32>,
    pub hamlet_number: Option<Option<i32>>,
    pub hamlet_name: Option<Option<String>>,
}
