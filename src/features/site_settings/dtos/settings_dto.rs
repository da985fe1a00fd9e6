use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::features::site_settings::catalog;
use crate::features::site_settings::models::{SettingEntry, SettingGroup, SiteSetting};

/// One setting in a write request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingInputDto {
    pub setting_key: String,
    /// `null` stores the setting as unset
    pub setting_value: Option<String>,
    /// general, profile, social or government (default: general)
    pub setting_group: Option<String>,
}

impl SettingInputDto {
    pub fn into_entry(self) -> Result<SettingEntry> {
        let group = match self.setting_group.as_deref().map(str::trim) {
            None | Some("") => SettingGroup::General,
            Some(raw) => raw.parse().map_err(AppError::Validation)?,
        };

        Ok(SettingEntry {
            key: self.setting_key.trim().to_string(),
            value: self.setting_value,
            group,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiteSettingResponseDto {
    pub id: i64,
    pub setting_key: String,
    pub setting_value: Option<String>,
    pub setting_group: String,
    /// Catalog description, when the key is a known one
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SiteSetting> for SiteSettingResponseDto {
    fn from(s: SiteSetting) -> Self {
        let description = catalog::find(&s.setting_key).map(|d| d.description.to_string());
        Self {
            id: s.id,
            setting_key: s.setting_key,
            setting_value: s.setting_value,
            setting_group: s.setting_group,
            description,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Flat `key -> value` view; unset values are empty strings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingsMapDto(pub BTreeMap<String, String>);

/// Full records keyed by group tag
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupedSettingsDto(pub BTreeMap<String, Vec<SiteSettingResponseDto>>);

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkUpdateResponseDto {
    /// Entries written, mirrored keys included
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_defaults_to_general() {
        let entry = SettingInputDto {
            setting_key: " site_name ".into(),
            setting_value: Some("Desa".into()),
            setting_group: None,
        }
        .into_entry()
        .unwrap();
        assert_eq!(entry.key, "site_name");
        assert_eq!(entry.group, SettingGroup::General);
    }

    #[test]
    fn test_unknown_group_is_validation_error() {
        let err = SettingInputDto {
            setting_key: "x".into(),
            setting_value: None,
            setting_group: Some("misc".into()),
        }
        .into_entry()
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
