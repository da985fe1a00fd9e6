use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Category of a local potential, matching the database enum
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "potential_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PotentialType {
    Umkm,
    Tourism,
    Agriculture,
    #[default]
    Other,
}

#[derive(Debug, Clone, FromRow)]
pub struct Potential {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    #[sqlx(rename = "type")]
    pub potential_type: PotentialType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_wire_names() {
        assert_eq!(serde_json::to_string(&PotentialType::Umkm).unwrap(), "\"umkm\"");
        let parsed: PotentialType = serde_json::from_str("\"agriculture\"").unwrap();
        assert_eq!(parsed, PotentialType::Agriculture);
        assert!(serde_json::from_str::<PotentialType>("\"mining\"").is_err());
    }
}
