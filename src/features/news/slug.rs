//! URL slugs for news articles.
//!
//! A slug is the title lower-cased with every run of characters outside
//! `[a-z0-9]` collapsed into one hyphen. When the base is taken, a random
//! numeric suffix is appended and storage is consulted again, up to a
//! bounded number of attempts.

use std::sync::Arc;

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use uuid::Uuid;

use crate::core::config::SlugConfig;
use crate::core::error::AppError;

/// Base used when a title has no ASCII letters or digits at all
pub const FALLBACK_SLUG: &str = "berita";

/// Longest base kept before a suffix is added
const MAX_BASE_LEN: usize = 240;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

#[derive(Debug, Error)]
pub enum SlugError {
    /// The collision check itself could not be performed
    #[error("slug lookup failed: {0}")]
    Storage(#[source] AppError),

    #[error("no free slug found after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

impl From<SlugError> for AppError {
    fn from(e: SlugError) -> Self {
        tracing::error!("Slug generation failed: {}", e);
        match e {
            SlugError::Storage(inner) => inner,
            SlugError::Exhausted { .. } => {
                AppError::Internal("Could not generate a unique slug".to_string())
            }
        }
    }
}

/// Storage query used for collision checks
#[async_trait]
pub trait SlugLookup: Send + Sync {
    /// Whether a non-deleted article other than `exclude_id` already uses `slug`
    async fn slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, AppError>;
}

/// Source of the numeric suffix appended on collision
pub trait SuffixSource: Send + Sync {
    /// A value in `0..upper`
    fn next_suffix(&self, upper: u32) -> u32;
}

/// Suffixes drawn from the v4 UUID generator
pub struct RandomSuffix;

impl SuffixSource for RandomSuffix {
    fn next_suffix(&self, upper: u32) -> u32 {
        (Uuid::new_v4().as_u128() % u128::from(upper.max(1))) as u32
    }
}

/// Deterministic base slug for a title
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = NON_SLUG_CHARS.replace_all(&lowered, "-");
    let mut base = hyphenated.trim_matches('-').to_string();

    if base.len() > MAX_BASE_LEN {
        // Output is pure ASCII here, so byte truncation is safe
        base.truncate(MAX_BASE_LEN);
        base = base.trim_end_matches('-').to_string();
    }

    if base.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        base
    }
}

/// Resolves collision-free slugs against storage
#[derive(Clone)]
pub struct SlugGenerator {
    config: SlugConfig,
    suffixes: Arc<dyn SuffixSource>,
}

impl SlugGenerator {
    pub fn new(config: SlugConfig) -> Self {
        Self::with_suffix_source(config, Arc::new(RandomSuffix))
    }

    pub fn with_suffix_source(config: SlugConfig, suffixes: Arc<dyn SuffixSource>) -> Self {
        Self { config, suffixes }
    }

    /// Produce a slug for `title` that no other non-deleted article uses.
    ///
    /// `exclude_id` is the article being updated, or `None` for a new one.
    /// Does not write anything; the caller stores the slug with the record.
    pub async fn generate<L>(
        &self,
        lookup: &L,
        title: &str,
        exclude_id: Option<i64>,
    ) -> Result<String, SlugError>
    where
        L: SlugLookup + ?Sized,
    {
        let base = slugify(title);
        let max_attempts = self.config.max_attempts.max(1);

        let mut candidate = base.clone();
        for attempt in 1..=max_attempts {
            let taken = lookup
                .slug_exists(&candidate, exclude_id)
                .await
                .map_err(SlugError::Storage)?;

            if !taken {
                return Ok(candidate);
            }

            tracing::debug!("Slug '{}' taken (attempt {})", candidate, attempt);
            let suffix = self.suffixes.next_suffix(self.config.suffix_max);
            candidate = format!("{}-{}", base, suffix);
        }

        Err(SlugError::Exhausted {
            attempts: max_attempts,
        })
    }
}
