use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::site_settings::models::{SettingEntry, SiteSetting};

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// All settings ordered by group then key
    async fn list_all(&self) -> Result<Vec<SiteSetting>>;

    async fn list_by_group(&self, group: &str) -> Result<Vec<SiteSetting>>;

    async fn find_by_key(&self, key: &str) -> Result<Option<SiteSetting>>;

    async fn existing_keys(&self) -> Result<Vec<String>>;

    /// Insert entries whose key is absent; existing keys are never touched.
    /// Returns the number of rows created.
    async fn insert_missing(&self, entries: &[SettingEntry]) -> Result<u64>;

    /// Upsert every entry in order inside one transaction
    async fn apply_batch(&self, entries: &[SettingEntry]) -> Result<u64>;
}

const SETTING_COLUMNS: &str =
    "id, setting_key, setting_value, setting_group, created_at, updated_at";

pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(action: &str) -> impl FnOnce(sqlx::Error) -> AppError + '_ {
    move |e| {
        tracing::error!("Failed to {}: {:?}", action, e);
        AppError::Database(e)
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn list_all(&self) -> Result<Vec<SiteSetting>> {
        let sql = format!(
            "SELECT {} FROM site_settings ORDER BY setting_group, setting_key",
            SETTING_COLUMNS
        );
        sqlx::query_as::<_, SiteSetting>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list settings"))
    }

    async fn list_by_group(&self, group: &str) -> Result<Vec<SiteSetting>> {
        let sql = format!(
            "SELECT {} FROM site_settings WHERE setting_group = $1 ORDER BY setting_key",
            SETTING_COLUMNS
        );
        sqlx::query_as::<_, SiteSetting>(&sql)
            .bind(group)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list settings by group"))
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<SiteSetting>> {
        let sql = format!(
            "SELECT {} FROM site_settings WHERE setting_key = $1",
            SETTING_COLUMNS
        );
        sqlx::query_as::<_, SiteSetting>(&sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch setting"))
    }

    async fn existing_keys(&self) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT setting_key FROM site_settings")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list setting keys"))
    }

    async fn insert_missing(&self, entries: &[SettingEntry]) -> Result<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("begin settings bootstrap"))?;

        let mut created = 0;
        for entry in entries {
            let result = sqlx::query(
                r#"
                INSERT INTO site_settings (setting_key, setting_value, setting_group)
                VALUES ($1, $2, $3)
                ON CONFLICT (setting_key) DO NOTHING
                "#,
            )
            .bind(&entry.key)
            .bind(&entry.value)
            .bind(entry.group.as_str())
            .execute(&mut *tx)
            .await
            .map_err(db_error("insert default setting"))?;
            created += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(db_error("commit settings bootstrap"))?;
        Ok(created)
    }

    async fn apply_batch(&self, entries: &[SettingEntry]) -> Result<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("begin settings update"))?;

        let mut applied = 0;
        for entry in entries {
            let result = sqlx::query(
                r#"
                INSERT INTO site_settings (setting_key, setting_value, setting_group)
                VALUES ($1, $2, $3)
                ON CONFLICT (setting_key) DO UPDATE SET
                    setting_value = EXCLUDED.setting_value,
                    setting_group = EXCLUDED.setting_group,
                    updated_at = NOW()
                "#,
            )
            .bind(&entry.key)
            .bind(&entry.value)
            .bind(entry.group.as_str())
            .execute(&mut *tx)
            .await
            .map_err(db_error("upsert setting"))?;
            applied += result.rows_affected();
        }

        // Dropping the transaction on an early return rolls everything back
        tx.commit()
            .await
            .map_err(db_error("commit settings update"))?;
        Ok(applied)
    }
}
