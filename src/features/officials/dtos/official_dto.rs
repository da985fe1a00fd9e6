use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::officials::models::{NewOfficial, OfficialChanges, VillageOfficial};
use crate::shared::types::double_option;
use crate::shared::validation::{non_blank, require_trimmed};

const HAMLET_RANGE: std::ops::RangeInclusive<i32> = 1..=20;

fn check_hamlet(number: Option<i32>) -> Result<()> {
    match number {
        Some(n) if !HAMLET_RANGE.contains(&n) => Err(AppError::Validation(
            "hamlet_number must be between 1 and 20".to_string(),
        )),
        _ => Ok(()),
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOfficialDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Position must be 1-255 characters"))]
    pub position: String,

    pub photo_url: Option<String>,

    pub bio: Option<String>,

    #[serde(default)]
    pub display_order: i32,

    /// Hamlet number, 1-20
    pub hamlet_number: Option<i32>,

    pub hamlet_name: Option<String>,
}

impl CreateOfficialDto {
    pub fn into_new(self) -> Result<NewOfficial> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        check_hamlet(self.hamlet_number)?;

        Ok(NewOfficial {
            name: require_trimmed(&self.name, "Name").map_err(AppError::Validation)?,
            position: require_trimmed(&self.position, "Position")
                .map_err(AppError::Validation)?,
            photo_url: non_blank(self.photo_url),
            bio: non_blank(self.bio),
            display_order: self.display_order,
            hamlet_number: self.hamlet_number,
            hamlet_name: non_blank(self.hamlet_name),
        })
    }
}

/// Partial update. Blank text fields are ignored; send `null` for
/// `hamlet_number` or `hamlet_name` to clear them.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateOfficialDto {
    pub name: Option<String>,
    pub position: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub display_order: Option<i32>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub hamlet_number: Option<Option<i32>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub hamlet_name: Option<Option<String>>,
}

impl UpdateOfficialDto {
    pub fn into_changes(self) -> Result<OfficialChanges> {
        check_hamlet(self.hamlet_number.flatten())?;

        Ok(OfficialChanges {
            name: non_blank(self.name),
            position: non_blank(self.position),
            photo_url: non_blank(self.photo_url),
            bio: non_blank(self.bio),
            display_order: self.display_order,
            hamlet_number: self.hamlet_number,
            hamlet_name: self.hamlet_name.map(non_blank),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OfficialResponseDto {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub display_order: i32,
    pub hamlet_number: Option<i32>,
    pub hamlet_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<VillageOfficial> for OfficialResponseDto {
    fn from(o: VillageOfficial) -> Self {
        Self {
            id: o.id,
            name: o.name,
            position: o.position,
            photo_url: o.photo_url,
            bio: o.bio,
            display_order: o.display_order,
            hamlet_number: o.hamlet_number,
            hamlet_name: o.hamlet_name,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(hamlet: Option<i32>) -> CreateOfficialDto {
        CreateOfficialDto {
            name: "Budi".to_string(),
            position: "Kepala Dusun".to_string(),
            photo_url: None,
            bio: None,
            display_order: 3,
            hamlet_number: hamlet,
            hamlet_name: Some("Dusun I".to_string()),
        }
    }

    #[test]
    fn test_hamlet_number_bounds() {
        assert!(create(Some(1)).into_new().is_ok());
        assert!(create(Some(20)).into_new().is_ok());
        assert!(create(None).into_new().is_ok());
        assert!(matches!(
            create(Some(0)).into_new(),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            create(Some(21)).into_new(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut dto = create(None);
        dto.name = "  ".to_string();
        assert!(dto.into_new().is_err());
    }

    #[test]
    fn test_update_null_clears_hamlet() {
        let dto: UpdateOfficialDto =
            serde_json::from_str(r#"{"hamlet_number": null, "hamlet_name": null}"#).unwrap();
        let changes = dto.into_changes().unwrap();
        assert_eq!(changes.hamlet_number, Some(None));
        assert_eq!(changes.hamlet_name, Some(None));
    }

    #[test]
    fn test_update_omitted_hamlet_is_untouched() {
        let dto: UpdateOfficialDto = serde_json::from_str(r#"{"name": "Siti"}"#).unwrap();
        let changes = dto.into_changes().unwrap();
        assert_eq!(changes.name.as_deref(), Some("Siti"));
        assert_eq!(changes.hamlet_number, None);
        assert_eq!(changes.hamlet_name, None);
    }

    #[test]
    fn test_update_rejects_out_of_range_hamlet() {
        let dto: UpdateOfficialDto = serde_json::from_str(r#"{"hamlet_number": 42}"#).unwrap();
        assert!(dto.into_changes().is_err());
    }
}
