use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::news::models::{News, NewsChanges, NewsFilter, NewNews};
use crate::features::news::repositories::NewsRepository;
use crate::features::news::slug::SlugLookup;
use crate::shared::types::PaginationQuery;

struct Row {
    news: News,
    deleted: bool,
}

/// Vec-backed store that enforces slug uniqueness among live rows like the
/// partial unique index does
#[derive(Default)]
pub struct InMemoryNewsRepository {
    rows: Mutex<Vec<Row>>,
    /// Number of upcoming writes that fail as if a concurrent writer won the slug
    phantom_conflicts: AtomicUsize,
}

impl InMemoryNewsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_writes_with_conflict(&self, count: usize) {
        self.phantom_conflicts.store(count, Ordering::SeqCst);
    }

    pub fn live_slugs(&self) -> Vec<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| !r.deleted)
            .map(|r| r.news.slug.clone())
            .collect()
    }

    fn take_phantom_conflict(&self) -> bool {
        self.phantom_conflicts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    fn slug_taken(rows: &[Row], slug: &str, exclude_id: Option<i64>) -> bool {
        rows.iter()
            .any(|r| !r.deleted && r.news.slug == slug && Some(r.news.id) != exclude_id)
    }
}

#[async_trait]
impl SlugLookup for InMemoryNewsRepository {
    async fn slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(Self::slug_taken(&rows, slug, exclude_id))
    }
}

#[async_trait]
impl NewsRepository for InMemoryNewsRepository {
    async fn insert(&self, data: &NewNews) -> Result<News> {
        if self.take_phantom_conflict() {
            return Err(AppError::Conflict("Slug already exists".to_string()));
        }

        let mut rows = self.rows.lock().unwrap();
        if Self::slug_taken(&rows, &data.slug, None) {
            return Err(AppError::Conflict("Slug already exists".to_string()));
        }

        let now = Utc::now();
        let news = News {
            id: rows.len() as i64 + 1,
            title: data.title.clone(),
            slug: data.slug.clone(),
            content: data.content.clone(),
            featured_image_url: data.featured_image_url.clone(),
            status: data.status,
            published_at: data.published_at,
            author_id: data.author_id,
            author_full_name: format!("Penulis {}", data.author_id),
            author_username: format!("penulis_{}", data.author_id),
            created_at: now,
            updated_at: now,
        };
        rows.push(Row {
            news: news.clone(),
            deleted: false,
        });
        Ok(news)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<News>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| !r.deleted && r.news.id == id)
            .map(|r| r.news.clone()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<News>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| !r.deleted && r.news.slug == slug)
            .map(|r| r.news.clone()))
    }

    async fn list(
        &self,
        filter: NewsFilter,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<News>, i64)> {
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<News> = rows
            .iter()
            .filter(|r| !r.deleted)
            .filter(|r| filter.status.is_none_or(|s| r.news.status == s))
            .map(|r| r.news.clone())
            .collect();
        if filter.by_publish_date {
            matching.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(b.id.cmp(&a.id)));
        } else {
            matching.sort_by(|a, b| b.id.cmp(&a.id));
        }

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect();
        Ok((page, total))
    }

    async fn update(&self, id: i64, changes: &NewsChanges) -> Result<Option<News>> {
        if changes.slug.is_some() && self.take_phantom_conflict() {
            return Err(AppError::Conflict("Slug already exists".to_string()));
        }

        let mut rows = self.rows.lock().unwrap();
        if let Some(slug) = &changes.slug {
            if Self::slug_taken(&rows, slug, Some(id)) {
                return Err(AppError::Conflict("Slug already exists".to_string()));
            }
        }

        let Some(row) = rows.iter_mut().find(|r| !r.deleted && r.news.id == id) else {
            return Ok(None);
        };
        let news = &mut row.news;
        if let Some(title) = &changes.title {
            news.title = title.clone();
        }
        if let Some(slug) = &changes.slug {
            news.slug = slug.clone();
        }
        if let Some(content) = &changes.content {
            news.content = content.clone();
        }
        if let Some(url) = &changes.featured_image_url {
            news.featured_image_url = Some(url.clone());
        }
        if let Some(status) = changes.status {
            news.status = status;
        }
        if let Some(at) = changes.published_at {
            news.published_at = Some(at);
        }
        news.updated_at = Utc::now();
        Ok(Some(news.clone()))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| !r.deleted && r.news.id == id) {
            Some(row) => {
                row.deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
