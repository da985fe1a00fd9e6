use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Group tag of a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SettingGroup {
    General,
    Profile,
    Social,
    Government,
}

impl SettingGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            SettingGroup::General => "general",
            SettingGroup::Profile => "profile",
            SettingGroup::Social => "social",
            SettingGroup::Government => "government",
        }
    }
}

impl std::fmt::Display for SettingGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SettingGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(SettingGroup::General),
            "profile" => Ok(SettingGroup::Profile),
            "social" => Ok(SettingGroup::Social),
            "government" => Ok(SettingGroup::Government),
            other => Err(format!(
                "Unknown setting group '{}' (expected general, profile, social or government)",
                other
            )),
        }
    }
}

/// Stored setting row
#[derive(Debug, Clone, FromRow)]
pub struct SiteSetting {
    pub id: i64,
    pub setting_key: String,
    /// `None` means unset, which is distinct from an empty string
    pub setting_value: Option<String>,
    pub setting_group: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One `(key, value, group)` triple of a write batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingEntry {
    pub key: String,
    pub value: Option<String>,
    pub group: SettingGroup,
}

impl SettingEntry {
    pub fn new(key: impl Into<String>, value: Option<&str>, group: SettingGroup) -> Self {
        Self {
            key: key.into(),
            value: value.map(str::to_string),
            group,
        }
    }
}
