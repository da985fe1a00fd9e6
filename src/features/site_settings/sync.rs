//! Mirroring of profile keys into their public-facing general keys.
//!
//! Synthesized entries are appended after the caller's entries and the batch
//! is applied in order, so when a caller sends both a mirror source and its
//! target explicitly, the mirrored value is the one that sticks.

use crate::core::error::{AppError, Result};
use crate::features::site_settings::models::{SettingEntry, SettingGroup};

/// `(source, target)` pairs; targets always land in the general group
pub const MIRRORED_KEYS: &[(&str, &str)] = &[
    ("village_name", "site_name"),
    ("village_district", "district"),
    ("village_regency", "regency"),
    ("village_address", "contact_address"),
];

/// Keys whose values are capped at [`MAX_REGION_VALUE_LEN`] characters
const REGION_KEYS: &[&str] = &["district", "regency"];

pub const MAX_REGION_VALUE_LEN: usize = 255;
pub const MAX_KEY_LEN: usize = 100;

pub fn mirror_target(key: &str) -> Option<&'static str> {
    MIRRORED_KEYS
        .iter()
        .find(|(source, _)| *source == key)
        .map(|(_, target)| *target)
}

/// Append one mirrored entry per mirror-source entry; originals are untouched
pub fn expand_with_mirrors(mut entries: Vec<SettingEntry>) -> Vec<SettingEntry> {
    let mirrored: Vec<SettingEntry> = entries
        .iter()
        .filter_map(|entry| {
            mirror_target(&entry.key).map(|target| SettingEntry {
                key: target.to_string(),
                value: entry.value.clone(),
                group: SettingGroup::General,
            })
        })
        .collect();

    entries.extend(mirrored);
    entries
}

/// Reject the whole batch if any entry is invalid
pub fn validate_batch(entries: &[SettingEntry]) -> Result<()> {
    if entries.is_empty() {
        return Err(AppError::Validation("No settings provided".to_string()));
    }

    for entry in entries {
        let key_len = entry.key.chars().count();
        if key_len == 0 || key_len > MAX_KEY_LEN {
            return Err(AppError::Validation(format!(
                "setting_key must be 1-{} characters",
                MAX_KEY_LEN
            )));
        }

        if REGION_KEYS.contains(&entry.key.as_str()) {
            let too_long = entry
                .value
                .as_deref()
                .is_some_and(|v| v.chars().count() > MAX_REGION_VALUE_LEN);
            if too_long {
                return Err(AppError::Validation(format!(
                    "{} must be {} characters or less",
                    entry.key, MAX_REGION_VALUE_LEN
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use SettingGroup::{General, Profile};

    #[test]
    fn test_village_name_is_mirrored_to_site_name() {
        let batch = expand_with_mirrors(vec![SettingEntry::new(
            "village_name",
            Some("Desa Makmur"),
            Profile,
        )]);

        assert_eq!(
            batch,
            vec![
                SettingEntry::new("village_name", Some("Desa Makmur"), Profile),
                SettingEntry::new("site_name", Some("Desa Makmur"), General),
            ]
        );
    }

    #[test]
    fn test_every_mirror_pair_is_applied_in_input_order() {
        let batch = expand_with_mirrors(vec![
            SettingEntry::new("village_address", Some("Jl. Merdeka 1"), Profile),
            SettingEntry::new("village_head", Some("Pak Lurah"), Profile),
            SettingEntry::new("village_district", Some("Kec. Sukamaju"), Profile),
            SettingEntry::new("village_regency", Some("Kab. Sejahtera"), Profile),
        ]);

        let tail: Vec<(&str, Option<&str>)> = batch[4..]
            .iter()
            .map(|e| (e.key.as_str(), e.value.as_deref()))
            .collect();
        assert_eq!(
            tail,
            vec![
                ("contact_address", Some("Jl. Merdeka 1")),
                ("district", Some("Kec. Sukamaju")),
                ("regency", Some("Kab. Sejahtera")),
            ]
        );
        assert!(batch[4..].iter().all(|e| e.group == General));
    }

    #[test]
    fn test_explicit_target_is_kept_and_followed_by_mirror() {
        let batch = expand_with_mirrors(vec![
            SettingEntry::new("site_name", Some("Nama Lain"), General),
            SettingEntry::new("village_name", Some("Desa Makmur"), Profile),
        ]);

        assert_eq!(batch.len(), 3);
        let last_site_name = batch.iter().rev().find(|e| e.key == "site_name").unwrap();
        assert_eq!(last_site_name.value.as_deref(), Some("Desa Makmur"));
    }

    #[test]
    fn test_unset_value_is_mirrored_as_unset() {
        let batch = expand_with_mirrors(vec![SettingEntry::new("village_regency", None, Profile)]);
        assert_eq!(batch[1], SettingEntry::new("regency", None, General));
    }

    #[test]
    fn test_non_mirrored_keys_pass_through() {
        let batch = expand_with_mirrors(vec![SettingEntry::new(
            "facebook_url",
            Some("https://facebook.com/desa"),
            SettingGroup::Social,
        )]);
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_validation_rejects_long_region_values() {
        let long = "a".repeat(256);
        let err = validate_batch(&[
            SettingEntry::new("site_name", Some("Desa"), General),
            SettingEntry::new("district", Some(&long), General),
        ])
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("district")));

        let exact = "a".repeat(255);
        assert!(validate_batch(&[SettingEntry::new("regency", Some(&exact), General)]).is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_batch_and_bad_keys() {
        assert!(validate_batch(&[]).is_err());
        assert!(validate_batch(&[SettingEntry::new("", Some("x"), General)]).is_err());
        assert!(validate_batch(&[SettingEntry::new("k".repeat(101), None, General)]).is_err());
    }
}
