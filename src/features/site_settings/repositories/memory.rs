use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::site_settings::models::{SettingEntry, SiteSetting};
use crate::features::site_settings::repositories::SettingsRepository;

#[derive(Default)]
struct State {
    rows: Vec<SiteSetting>,
    writes: usize,
}

/// Vec-backed store; batches are applied to a copy and swapped in on success
#[derive(Default)]
pub struct InMemorySettingsRepository {
    state: Mutex<State>,
    /// Fail a batch when it reaches this many entries
    fail_at_entry: Mutex<Option<usize>>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_batches_at_entry(&self, index: usize) {
        *self.fail_at_entry.lock().unwrap() = Some(index);
    }

    /// Number of successful row writes so far
    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    pub fn value_of(&self, key: &str) -> Option<Option<String>> {
        self.state
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|r| r.setting_key == key)
            .map(|r| r.setting_value.clone())
    }

    fn upsert(rows: &mut Vec<SiteSetting>, entry: &SettingEntry) {
        let now = Utc::now();
        match rows.iter_mut().find(|r| r.setting_key == entry.key) {
            Some(row) => {
                row.setting_value = entry.value.clone();
                row.setting_group = entry.group.as_str().to_string();
                row.updated_at = now;
            }
            None => {
                let id = rows.len() as i64 + 1;
                rows.push(SiteSetting {
                    id,
                    setting_key: entry.key.clone(),
                    setting_value: entry.value.clone(),
                    setting_group: entry.group.as_str().to_string(),
                    created_at: now,
                    updated_at: now,
                });
            }
        }
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn list_all(&self) -> Result<Vec<SiteSetting>> {
        let mut rows = self.state.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| {
            (&a.setting_group, &a.setting_key).cmp(&(&b.setting_group, &b.setting_key))
        });
        Ok(rows)
    }

    async fn list_by_group(&self, group: &str) -> Result<Vec<SiteSetting>> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|r| r.setting_group == group)
            .collect())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<SiteSetting>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().find(|r| r.setting_key == key).cloned())
    }

    async fn existing_keys(&self) -> Result<Vec<String>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().map(|r| r.setting_key.clone()).collect())
    }

    async fn insert_missing(&self, entries: &[SettingEntry]) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        let mut created = 0;
        for entry in entries {
            if state.rows.iter().all(|r| r.setting_key != entry.key) {
                Self::upsert(&mut state.rows, entry);
                state.writes += 1;
                created += 1;
            }
        }
        Ok(created)
    }

    async fn apply_batch(&self, entries: &[SettingEntry]) -> Result<u64> {
        let fail_at = *self.fail_at_entry.lock().unwrap();
        let mut state = self.state.lock().unwrap();
        let mut staged = state.rows.clone();

        for (index, entry) in entries.iter().enumerate() {
            if fail_at == Some(index) {
                return Err(AppError::Internal("simulated write failure".to_string()));
            }
            Self::upsert(&mut staged, entry);
        }

        state.rows = staged;
        state.writes += entries.len();
        Ok(entries.len() as u64)
    }
}
