use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::error::{AppError, Result};
use crate::features::analytics::models::{NewPageView, PopularPage};
use crate::features::analytics::repositories::PageViewRepository;

#[derive(Default)]
pub struct InMemoryPageViewRepository {
    views: Mutex<Vec<NewPageView>>,
    failing: Mutex<bool>,
}

impl InMemoryPageViewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_inserts(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    pub fn recorded(&self) -> Vec<NewPageView> {
        self.views.lock().unwrap().clone()
    }

    fn since(&self, since: DateTime<Utc>) -> Vec<NewPageView> {
        self.views
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.viewed_at >= since)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PageViewRepository for InMemoryPageViewRepository {
    async fn insert(&self, view: &NewPageView) -> Result<()> {
        if *self.failing.lock().unwrap() {
            return Err(AppError::Internal("page_views unavailable".to_string()));
        }
        self.views.lock().unwrap().push(view.clone());
        Ok(())
    }

    async fn count_views(&self, since: DateTime<Utc>) -> Result<i64> {
        Ok(self.since(since).len() as i64)
    }

    async fn count_visitors(&self, since: DateTime<Utc>) -> Result<i64> {
        let visitors: HashSet<String> =
            self.since(since).into_iter().map(|v| v.visitor_id).collect();
        Ok(visitors.len() as i64)
    }

    async fn popular_pages(&self, since: DateTime<Utc>, limit: i64) -> Result<Vec<PopularPage>> {
        let mut grouped: BTreeMap<String, (Option<String>, i64)> = BTreeMap::new();
        for view in self.since(since) {
            let entry = grouped.entry(view.page_url).or_insert((None, 0));
            entry.0 = entry.0.take().max(view.page_title);
            entry.1 += 1;
        }

        let mut pages: Vec<PopularPage> = grouped
            .into_iter()
            .map(|(url, (title, count))| PopularPage {
                page_title: title.unwrap_or_else(|| url.clone()),
                page_url: url,
                view_count: count,
            })
            .collect();
        pages.sort_by(|a, b| {
            b.view_count
                .cmp(&a.view_count)
                .then_with(|| a.page_url.cmp(&b.page_url))
        });
        pages.truncate(limit.max(0) as usize);
        Ok(pages)
    }
}
