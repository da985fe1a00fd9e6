use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::Result;
use crate::features::hero_sliders::models::{HeroSlider, HeroSliderChanges, NewHeroSlider};
use crate::features::hero_sliders::repositories::HeroSliderRepository;

#[derive(Default)]
pub struct InMemoryHeroSliderRepository {
    rows: Mutex<Vec<(HeroSlider, bool)>>,
}

impl InMemoryHeroSliderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(mut sliders: Vec<HeroSlider>) -> Vec<HeroSlider> {
        sliders.sort_by(|a, b| a.display_order.cmp(&b.display_order).then(b.id.cmp(&a.id)));
        sliders
    }

    fn live(&self) -> Vec<HeroSlider> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, deleted)| !deleted)
            .map(|(s, _)| s.clone())
            .collect()
    }
}

#[async_trait]
impl HeroSliderRepository for InMemoryHeroSliderRepository {
    async fn count(&self) -> Result<i64> {
        Ok(self.live().len() as i64)
    }

    async fn list_active(&self) -> Result<Vec<HeroSlider>> {
        Ok(Self::sorted(
            self.live().into_iter().filter(|s| s.is_active).collect(),
        ))
    }

    async fn list_all(&self) -> Result<Vec<HeroSlider>> {
        Ok(Self::sorted(self.live()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<HeroSlider>> {
        Ok(self.live().into_iter().find(|s| s.id == id))
    }

    async fn insert(&self, data: &NewHeroSlider) -> Result<HeroSlider> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let slider = HeroSlider {
            id: rows.len() as i64 + 1,
            title: data.title.clone(),
            subtitle: data.subtitle.clone(),
            media_url: data.media_url.clone(),
            media_type: data.media_type,
            link_url: data.link_url.clone(),
            link_text: data.link_text.clone(),
            display_order: data.display_order,
            is_active: data.is_active,
            created_at: now,
            updated_at: now,
        };
        rows.push((slider.clone(), false));
        Ok(slider)
    }

    async fn update(&self, id: i64, changes: &HeroSliderChanges) -> Result<Option<HeroSlider>> {
        let mut rows = self.rows.lock().unwrap();
        let Some((slider, _)) = rows.iter_mut().find(|(s, deleted)| !deleted && s.id == id) else {
            return Ok(None);
        };
        if let Some(v) = &changes.title {
            slider.title = v.clone();
        }
        if let Some(v) = &changes.subtitle {
            slider.subtitle = Some(v.clone());
        }
        if let Some(v) = &changes.media_url {
            slider.media_url = v.clone();
        }
        if let Some(v) = changes.media_type {
            slider.media_type = v;
        }
        if let Some(v) = &changes.link_url {
            slider.link_url = Some(v.clone());
        }
        if let Some(v) = &changes.link_text {
            slider.link_text = Some(v.clone());
        }
        if let Some(v) = changes.display_order {
            slider.display_order = v;
        }
        if let Some(v) = changes.is_active {
            slider.is_active = v;
        }
        slider.updated_at = Utc::now();
        Ok(Some(slider.clone()))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|(s, deleted)| !deleted && s.id == id) {
            Some(row) => {
                row.1 = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
