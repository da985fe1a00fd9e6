use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::site_settings::catalog::DEFAULT_SETTINGS;
use crate::features::site_settings::models::{SettingEntry, SettingGroup, SiteSetting};
use crate::features::site_settings::repositories::SettingsRepository;
use crate::features::site_settings::sync::{expand_with_mirrors, validate_batch};

/// Service for site settings
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Insert every catalog key missing from storage, leaving existing rows alone.
    ///
    /// Concurrent callers may race; the losing inserts are ignored by the
    /// unique key. Returns the number of rows created.
    pub async fn ensure_defaults(&self) -> Result<u64> {
        let existing: HashSet<String> = self.repo.existing_keys().await?.into_iter().collect();

        let missing: Vec<SettingEntry> = DEFAULT_SETTINGS
            .iter()
            .filter(|d| !existing.contains(d.key))
            .map(|d| d.to_entry())
            .collect();

        if missing.is_empty() {
            tracing::debug!("All default settings present");
            return Ok(0);
        }

        let created = self.repo.insert_missing(&missing).await?;
        tracing::info!("Created {} missing default settings", created);
        Ok(created)
    }

    /// Flat `key -> value` map of every setting; unset values become ""
    pub async fn public_map(&self) -> Result<BTreeMap<String, String>> {
        self.ensure_defaults().await?;
        Ok(to_flat_map(self.repo.list_all().await?))
    }

    pub async fn group_map(&self, group: SettingGroup) -> Result<BTreeMap<String, String>> {
        self.ensure_defaults().await?;
        Ok(to_flat_map(self.repo.list_by_group(group.as_str()).await?))
    }

    /// Full records grouped by group tag
    pub async fn grouped(&self) -> Result<BTreeMap<String, Vec<SiteSetting>>> {
        self.ensure_defaults().await?;

        let mut grouped: BTreeMap<String, Vec<SiteSetting>> = BTreeMap::new();
        for setting in self.repo.list_all().await? {
            grouped
                .entry(setting.setting_group.clone())
                .or_default()
                .push(setting);
        }
        Ok(grouped)
    }

    /// Expand the batch with mirrored keys, validate all of it, then apply
    /// it atomically. Returns the number of entries applied, mirrors included.
    pub async fn bulk_update(&self, entries: Vec<SettingEntry>) -> Result<usize> {
        let batch = expand_with_mirrors(entries);
        validate_batch(&batch)?;

        self.repo.apply_batch(&batch).await?;
        tracing::info!("Applied {} setting updates", batch.len());
        Ok(batch.len())
    }

    /// Single-entry write; mirrors apply just as for a batch of one
    pub async fn upsert(&self, entry: SettingEntry) -> Result<SiteSetting> {
        let key = entry.key.clone();
        self.bulk_update(vec![entry]).await?;

        self.repo
            .find_by_key(&key)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Setting {} vanished after upsert", key)))
    }
}

fn to_flat_map(settings: Vec<SiteSetting>) -> BTreeMap<String, String> {
    settings
        .into_iter()
        .map(|s| (s.setting_key, s.setting_value.unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::site_settings::repositories::InMemorySettingsRepository;
    use SettingGroup::{General, Profile};

    fn service() -> (SettingsService, Arc<InMemorySettingsRepository>) {
        let repo = Arc::new(InMemorySettingsRepository::new());
        (SettingsService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_village_name_update_persists_site_name() {
        let (service, repo) = service();

        let count = service
            .bulk_update(vec![SettingEntry::new(
                "village_name",
                Some("Desa Makmur"),
                Profile,
            )])
            .await
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(repo.value_of("village_name"), Some(Some("Desa Makmur".into())));
        assert_eq!(repo.value_of("site_name"), Some(Some("Desa Makmur".into())));
    }

    #[tokio::test]
    async fn test_mirror_overrides_explicit_target_in_same_batch() {
        let (service, repo) = service();
        service
            .bulk_update(vec![
                SettingEntry::new("village_name", Some("Desa Makmur"), Profile),
                SettingEntry::new("site_name", Some("Website Lain"), General),
            ])
            .await
            .unwrap();

        assert_eq!(repo.value_of("site_name"), Some(Some("Desa Makmur".into())));
    }

    #[tokio::test]
    async fn test_invalid_district_rejects_whole_batch() {
        let (service, repo) = service();
        let long = "x".repeat(256);

        let err = service
            .bulk_update(vec![
                SettingEntry::new("village_name", Some("Desa Makmur"), Profile),
                SettingEntry::new("district", Some(&long), General),
            ])
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(repo.write_count(), 0);
        assert_eq!(repo.value_of("village_name"), None);
    }

    #[tokio::test]
    async fn test_long_village_district_is_rejected_through_its_mirror() {
        let (service, repo) = service();
        let long = "x".repeat(300);

        let result = service
            .bulk_update(vec![SettingEntry::new("village_district", Some(&long), Profile)])
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(repo.write_count(), 0);
    }

    #[tokio::test]
    async fn test_failure_midway_leaves_no_partial_state() {
        let (service, repo) = service();
        repo.fail_batches_at_entry(1);

        let result = service
            .bulk_update(vec![SettingEntry::new(
                "village_name",
                Some("Desa Makmur"),
                Profile,
            )])
            .await;

        assert!(result.is_err());
        assert_eq!(repo.value_of("village_name"), None);
        assert_eq!(repo.value_of("site_name"), None);
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent_and_preserves_edits() {
        let (service, repo) = service();

        let first = service.ensure_defaults().await.unwrap();
        assert_eq!(first as usize, DEFAULT_SETTINGS.len());
        let before = repo.value_of("village_head");

        service
            .bulk_update(vec![SettingEntry::new("village_name", Some("Desa Makmur"), Profile)])
            .await
            .unwrap();

        let second = service.ensure_defaults().await.unwrap();
        assert_eq!(second, 0);
        assert_eq!(repo.value_of("village_head"), before);
        assert_eq!(repo.value_of("village_name"), Some(Some("Desa Makmur".into())));
        assert_eq!(repo.value_of("site_name"), Some(Some("Desa Makmur".into())));
    }

    #[tokio::test]
    async fn test_bootstrap_fills_only_missing_keys() {
        let (service, repo) = service();
        service
            .bulk_update(vec![SettingEntry::new("facebook_url", Some("https://fb.com/desa"), SettingGroup::Social)])
            .await
            .unwrap();

        let created = service.ensure_defaults().await.unwrap();
        assert_eq!(created as usize, DEFAULT_SETTINGS.len() - 1);
        assert_eq!(repo.value_of("facebook_url"), Some(Some("https://fb.com/desa".into())));
    }

    #[tokio::test]
    async fn test_public_map_renders_unset_as_empty_string() {
        let (service, _) = service();
        service
            .bulk_update(vec![SettingEntry::new("custom_banner", None, General)])
            .await
            .unwrap();

        let map = service.public_map().await.unwrap();
        assert_eq!(map.get("custom_banner").map(String::as_str), Some(""));
        assert_eq!(map.get("site_name").map(String::as_str), Some("[Nama Desa]"));
        assert_eq!(map.len(), DEFAULT_SETTINGS.len() + 1);
    }

    #[tokio::test]
    async fn test_group_map_and_grouped_view() {
        let (service, _) = service();

        let social = service.group_map(SettingGroup::Social).await.unwrap();
        assert_eq!(social.len(), 5);
        assert!(social.contains_key("tiktok_url"));

        let grouped = service.grouped().await.unwrap();
        assert_eq!(grouped["general"].len(), 11);
        assert_eq!(grouped["profile"].len(), 12);
        assert_eq!(grouped["government"].len(), 1);
    }

    #[tokio::test]
    async fn test_single_upsert_returns_record_and_mirrors() {
        let (service, repo) = service();
        let saved = service
            .upsert(SettingEntry::new("village_address", Some("Jl. Desa No. 1"), Profile))
            .await
            .unwrap();

        assert_eq!(saved.setting_key, "village_address");
        assert_eq!(saved.setting_group, "profile");
        assert_eq!(
            repo.value_of("contact_address"),
            Some(Some("Jl. Desa No. 1".into()))
        );
    }
}
