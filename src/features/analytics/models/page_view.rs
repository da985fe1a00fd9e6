use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A single recorded visit, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct NewPageView {
    pub page_url: String,
    pub page_title: Option<String>,
    pub referrer: Option<String>,
    /// SHA-256 hex of the client address
    pub visitor_id: String,
    pub user_agent: Option<String>,
    pub viewed_at: DateTime<Utc>,
}

/// Page ranked by view count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PopularPage {
    pub page_url: String,
    pub page_title: String,
    pub view_count: i64,
}
