use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::officials::defaults::default_officials;
use crate::features::officials::models::{NewOfficial, OfficialChanges, VillageOfficial};
use crate::features::officials::repositories::OfficialRepository;

pub struct OfficialService {
    repo: Arc<dyn OfficialRepository>,
}

impl OfficialService {
    pub fn new(repo: Arc<dyn OfficialRepository>) -> Self {
        Self { repo }
    }

    /// Seed the placeholder officials when the table has no live rows.
    /// Returns the number of rows created.
    pub async fn ensure_defaults(&self) -> Result<u64> {
        if self.repo.count().await? > 0 {
            tracing::debug!("Officials present, skipping bootstrap");
            return Ok(0);
        }

        let created = self.repo.insert_many(&default_officials()).await?;
        tracing::info!("Created {} default officials", created);
        Ok(created)
    }

    /// Public listing; bootstraps on an empty table
    pub async fn list(&self) -> Result<Vec<VillageOfficial>> {
        self.ensure_defaults().await?;
        self.repo.list().await
    }

    pub async fn list_admin(&self) -> Result<Vec<VillageOfficial>> {
        self.repo.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VillageOfficial> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Official not found".to_string()))
    }

    pub async fn create(&self, data: NewOfficial) -> Result<VillageOfficial> {
        let official = self.repo.insert(&data).await?;
        tracing::info!("Official created: {} ({})", official.name, official.id);
        Ok(official)
    }

    pub async fn update(&self, id: i64, changes: OfficialChanges) -> Result<VillageOfficial> {
        self.repo
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound("Official not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repo.soft_delete(id).await? {
            return Err(AppError::NotFound("Official not found".to_string()));
        }
        tracing::info!("Official deleted: {}", id);
        Ok(())
    }
}
