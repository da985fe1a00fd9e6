use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::potentials::models::{Potential, PotentialType};
use crate::shared::validation::{non_blank, require_trimmed};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePotentialDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    pub description: Option<String>,

    pub cover_image_url: Option<String>,

    #[serde(rename = "type")]
    pub potential_type: PotentialType,
}

impl CreatePotentialDto {
    pub fn normalized(self) -> Result<Self> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(Self {
            title: require_trimmed(&self.title, "Title").map_err(AppError::Validation)?,
            description: non_blank(self.description),
            cover_image_url: non_blank(self.cover_image_url),
            potential_type: self.potential_type,
        })
    }
}

/// Partial update; blank or omitted fields are left unchanged
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePotentialDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(rename = "type")]
    pub potential_type: Option<PotentialType>,
}

impl UpdatePotentialDto {
    pub fn normalized(self) -> Result<Self> {
        let title = non_blank(self.title);
        if title.as_ref().is_some_and(|t| t.chars().count() > 255) {
            return Err(AppError::Validation(
                "Title must be 1-255 characters".to_string(),
            ));
        }
        Ok(Self {
            title,
            description: non_blank(self.description),
            cover_image_url: non_blank(self.cover_image_url),
            potential_type: self.potential_type,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PotentialQuery {
    /// Only potentials of this category
    #[serde(rename = "type")]
    pub potential_type: Option<PotentialType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PotentialResponseDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(rename = "type")]
    pub potential_type: PotentialType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Potential> for PotentialResponseDto {
    fn from(p: Potential) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            cover_image_url: p.cover_image_url,
            potential_type: p.potential_type,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reads_type_field() {
        let dto: CreatePotentialDto =
            serde_json::from_str(r#"{"title": "Kopi Arabika", "type": "umkm"}"#).unwrap();
        let dto = dto.normalized().unwrap();
        assert_eq!(dto.potential_type, PotentialType::Umkm);
        assert_eq!(dto.description, None);
    }

    #[test]
    fn test_create_requires_type() {
        let parsed: std::result::Result<CreatePotentialDto, _> =
            serde_json::from_str(r#"{"title": "Air Terjun"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_update_rejects_long_title() {
        let dto = UpdatePotentialDto {
            title: Some("a".repeat(256)),
            ..Default::default()
        };
        assert!(dto.normalized().is_err());
    }
}
