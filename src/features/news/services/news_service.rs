use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::news::dtos::{CreateNewsDto, UpdateNewsDto};
use crate::features::news::models::{News, NewsChanges, NewsFilter, NewsStatus, NewNews};
use crate::features::news::repositories::NewsRepository;
use crate::features::news::slug::SlugGenerator;
use crate::shared::types::PaginationQuery;
use crate::shared::validation::non_blank;

/// Service for news articles
pub struct NewsService {
    repo: Arc<dyn NewsRepository>,
    slugs: SlugGenerator,
}

impl NewsService {
    pub fn new(repo: Arc<dyn NewsRepository>, slugs: SlugGenerator) -> Self {
        Self { repo, slugs }
    }

    /// Published articles, newest publish date first
    pub async fn list_published(&self, pagination: &PaginationQuery) -> Result<(Vec<News>, i64)> {
        self.repo.list(NewsFilter::published(), pagination).await
    }

    /// Every article, optionally filtered by status, newest first
    pub async fn list_all(
        &self,
        status: Option<NewsStatus>,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<News>, i64)> {
        let filter = NewsFilter {
            status,
            by_publish_date: false,
        };
        self.repo.list(filter, pagination).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<News> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("News {} not found", id)))
    }

    /// Public lookup; drafts and archived articles are reported as missing
    pub async fn get_published_by_id(&self, id: i64) -> Result<News> {
        self.get_by_id(id)
            .await
            .and_then(|n| published_or_not_found(n, || format!("News {} not found", id)))
    }

    pub async fn get_published_by_slug(&self, slug: &str) -> Result<News> {
        self.repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("News '{}' not found", slug)))
            .and_then(|n| published_or_not_found(n, || format!("News '{}' not found", slug)))
    }

    pub async fn create(&self, author: &AuthenticatedUser, dto: CreateNewsDto) -> Result<News> {
        let title = dto.title.trim().to_string();
        let published_at = match (dto.status, dto.published_at) {
            (NewsStatus::Published, None) => Some(Utc::now()),
            (_, at) => at,
        };

        let mut data = NewNews {
            slug: self.slugs.generate(self.repo.as_ref(), &title, None).await?,
            title,
            content: dto.content,
            featured_image_url: non_blank(dto.featured_image_url),
            status: dto.status,
            published_at,
            author_id: author.user_id,
        };

        let news = match self.repo.insert(&data).await {
            Err(AppError::Conflict(_)) => {
                tracing::warn!("Slug '{}' claimed concurrently, regenerating", data.slug);
                data.slug = self
                    .slugs
                    .generate(self.repo.as_ref(), &data.title, None)
                    .await?;
                self.repo.insert(&data).await?
            }
            other => other?,
        };

        tracing::info!(
            "User {} created news {} ({})",
            author.username,
            news.id,
            news.slug
        );
        Ok(news)
    }

    /// Partial update. The slug is recomputed only when the title actually changes.
    pub async fn update(&self, id: i64, dto: UpdateNewsDto) -> Result<News> {
        let dto = dto.normalized()?;
        let existing = self.get_by_id(id).await?;

        let title = dto.title.filter(|t| *t != existing.title);
        let slug = match &title {
            Some(t) => Some(self.slugs.generate(self.repo.as_ref(), t, Some(id)).await?),
            None => None,
        };

        let status = dto.status.unwrap_or(existing.status);
        let published_at = match (status, dto.published_at.or(existing.published_at)) {
            (NewsStatus::Published, None) => Some(Utc::now()),
            (_, at) => at,
        };

        let mut changes = NewsChanges {
            title,
            slug,
            content: dto.content,
            featured_image_url: dto.featured_image_url,
            status: Some(status),
            published_at,
        };

        let result = match self.repo.update(id, &changes).await {
            Err(AppError::Conflict(_)) if changes.title.is_some() => {
                let title = changes.title.clone().unwrap_or_default();
                tracing::warn!("Slug for news {} claimed concurrently, regenerating", id);
                let slug = self
                    .slugs
                    .generate(self.repo.as_ref(), &title, Some(id))
                    .await?;
                changes.slug = Some(slug);
                self.repo.update(id, &changes).await?
            }
            other => other?,
        };

        result.ok_or_else(|| AppError::NotFound(format!("News {} not found", id)))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repo.soft_delete(id).await? {
            return Err(AppError::NotFound(format!("News {} not found", id)));
        }
        tracing::info!("Deleted news {}", id);
        Ok(())
    }
}

fn published_or_not_found(news: News, message: impl FnOnce() -> String) -> Result<News> {
    if news.status == NewsStatus::Published {
        Ok(news)
    } else {
        Err(AppError::NotFound(message()))
    }
}
