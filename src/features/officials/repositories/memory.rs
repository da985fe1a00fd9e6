use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::Result;
use crate::features::officials::models::{NewOfficial, OfficialChanges, VillageOfficial};
use crate::features::officials::repositories::OfficialRepository;

#[derive(Default)]
pub struct InMemoryOfficialRepository {
    rows: Mutex<Vec<(VillageOfficial, bool)>>,
}

impl InMemoryOfficialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn live(&self) -> Vec<VillageOfficial> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, deleted)| !deleted)
            .map(|(o, _)| o.clone())
            .collect()
    }
}

#[async_trait]
impl OfficialRepository for InMemoryOfficialRepository {
    async fn count(&self) -> Result<i64> {
        Ok(self.live().len() as i64)
    }

    async fn list(&self) -> Result<Vec<VillageOfficial>> {
        let mut officials = self.live();
        officials.sort_by_key(|o| {
            (
                o.hamlet_number.is_none(),
                o.hamlet_number,
                o.display_order,
                o.id,
            )
        });
        Ok(officials)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<VillageOfficial>> {
        Ok(self.live().into_iter().find(|o| o.id == id))
    }

    async fn insert(&self, data: &NewOfficial) -> Result<VillageOfficial> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let official = VillageOfficial {
            id: rows.len() as i64 + 1,
            name: data.name.clone(),
            position: data.position.clone(),
            photo_url: data.photo_url.clone(),
            bio: data.bio.clone(),
            display_order: data.display_order,
            hamlet_number: data.hamlet_number,
            hamlet_name: data.hamlet_name.clone(),
            created_at: now,
            updated_at: now,
        };
        rows.push((official.clone(), false));
        Ok(official)
    }

    async fn insert_many(&self, data: &[NewOfficial]) -> Result<u64> {
        for official in data {
            self.insert(official).await?;
        }
        Ok(data.len() as u64)
    }

    async fn update(&self, id: i64, changes: &OfficialChanges) -> Result<Option<VillageOfficial>> {
        let mut rows = self.rows.lock().unwrap();
        let Some((official, _)) = rows.iter_mut().find(|(o, deleted)| !deleted && o.id == id)
        else {
            return Ok(None);
        };
        if let Some(v) = &changes.name {
            official.name = v.clone();
        }
        if let Some(v) = &changes.position {
            official.position = v.clone();
        }
        if let Some(v) = &changes.photo_url {
            official.photo_url = Some(v.clone());
        }
        if let Some(v) = &changes.bio {
            official.bio = Some(v.clone());
        }
        if let Some(v) = changes.display_order {
            official.display_order = v;
        }
        if let Some(v) = changes.hamlet_number {
            official.hamlet_number = v;
        }
        if let Some(v) = &changes.hamlet_name {
            official.hamlet_name = v.clone();
        }
        official.updated_at = Utc::now();
        Ok(Some(official.clone()))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|(o, deleted)| !deleted && o.id == id) {
            Some(row) => {
                row.1 = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
