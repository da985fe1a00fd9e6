use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::village_services::models::VillageService;
use crate::shared::validation::{non_blank, require_trimmed};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateServiceDto {
    #[validate(length(min = 1, max = 255, message = "Service name must be 1-255 characters"))]
    pub service_name: String,

    pub description: Option<String>,

    /// Documents the applicant must bring
    pub requirements: Option<String>,
}

impl CreateServiceDto {
    pub fn normalized(self) -> Result<Self> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(Self {
            service_name: require_trimmed(&self.service_name, "Service name")
                .map_err(AppError::Validation)?,
            description: non_blank(self.description),
            requirements: non_blank(self.requirements),
        })
    }
}

/// Partial update; blank or omitted fields are left unchanged
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateServiceDto {
    pub service_name: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
}

impl UpdateServiceDto {
    pub fn normalized(self) -> Result<Self> {
        let service_name = non_blank(self.service_name);
        if service_name.as_ref().is_some_and(|n| n.chars().count() > 255) {
            return Err(AppError::Validation(
                "Service name must be 1-255 characters".to_string(),
            ));
        }
        Ok(Self {
            service_name,
            description: non_blank(self.description),
            requirements: non_blank(self.requirements),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceResponseDto {
    pub id: i64,
    pub service_name: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<VillageService> for ServiceResponseDto {
    fn from(s: VillageService) -> Self {
        Self {
            id: s.id,
            service_name: s.service_name,
            description: s.description,
            requirements: s.requirements,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_name() {
        let dto = CreateServiceDto {
            service_name: "   ".to_string(),
            description: None,
            requirements: None,
        };
        assert!(matches!(dto.normalized(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_create_trims_fields() {
        let dto = CreateServiceDto {
            service_name: "  Surat Keterangan Domisili ".to_string(),
            description: Some("".to_string()),
            requirements: Some(" KTP, KK ".to_string()),
        }
        .normalized()
        .unwrap();
        assert_eq!(dto.service_name, "Surat Keterangan Domisili");
        assert_eq!(dto.description, None);
        assert_eq!(dto.requirements.as_deref(), Some("KTP, KK"));
    }

    #[test]
    fn test_update_ignores_blank_name() {
        let dto = UpdateServiceDto {
            service_name: Some(" ".to_string()),
            ..Default::default()
        }
        .normalized()
        .unwrap();
        assert!(dto.service_name.is_none());
    }
}
