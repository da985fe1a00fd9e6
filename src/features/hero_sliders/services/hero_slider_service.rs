use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::hero_sliders::defaults::default_slider;
use crate::features::hero_sliders::models::{HeroSlider, HeroSliderChanges, NewHeroSlider};
use crate::features::hero_sliders::repositories::HeroSliderRepository;

pub struct HeroSliderService {
    repo: Arc<dyn HeroSliderRepository>,
}

impl HeroSliderService {
    pub fn new(repo: Arc<dyn HeroSliderRepository>) -> Self {
        Self { repo }
    }

    /// Insert the placeholder slider when no slider exists at all.
    ///
    /// Returns whether a row was created. Concurrent first reads may both insert.
    pub async fn ensure_default(&self) -> Result<bool> {
        if self.repo.count().await? > 0 {
            tracing::debug!("Hero sliders present, skipping bootstrap");
            return Ok(false);
        }

        self.repo.insert(&default_slider()).await?;
        tracing::info!("Created default hero slider");
        Ok(true)
    }

    pub async fn list_active(&self) -> Result<Vec<HeroSlider>> {
        self.ensure_default().await?;
        self.repo.list_active().await
    }

    pub async fn list_all(&self) -> Result<Vec<HeroSlider>> {
        self.repo.list_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<HeroSlider> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hero slider not found".to_string()))
    }

    pub async fn create(&self, data: NewHeroSlider) -> Result<HeroSlider> {
        let slider = self.repo.insert(&data).await?;
        tracing::info!("Hero slider created: {}", slider.id);
        Ok(slider)
    }

    pub async fn update(&self, id: i64, changes: HeroSliderChanges) -> Result<HeroSlider> {
        self.repo
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound("Hero slider not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repo.soft_delete(id).await? {
            return Err(AppError::NotFound("Hero slider not found".to_string()));
        }
        tracing::info!("Hero slider deleted: {}", id);
        Ok(())
    }
}
