use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl Meta {
    pub fn paginated(total: i64, pagination: &PaginationQuery) -> Self {
        let limit = pagination.limit();
        Self {
            total,
            page: pagination.page(),
            limit,
            total_pages: (total + limit - 1) / limit,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Standard pagination query parameters for all list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_limit")]
    #[param(minimum = 1, maximum = 100)]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationQuery {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Page number clamped to at least 1
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    /// Calculate SQL OFFSET from page number; saturates for absurdly large pages
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }

    /// Get clamped limit (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

/// Distinguish an explicit `null` from an omitted field.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`: omitted
/// yields `None`, `null` yields `Some(None)`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_clamps_bounds() {
        let q = PaginationQuery::new(0, 0);
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 1);
        assert_eq!(q.offset(), 0);

        let q = PaginationQuery::new(3, 500);
        assert_eq!(q.limit(), MAX_PAGE_SIZE);
        assert_eq!(q.offset(), 200);
    }

    #[test]
    fn test_offset_saturates_for_huge_page() {
        let q = PaginationQuery::new(i64::MAX, 10);
        assert_eq!(q.offset(), i64::MAX);

        let meta = Meta::paginated(3, &q);
        assert_eq!(meta.page, i64::MAX);
        assert_eq!(meta.total_pages, 1);
    }

    #[test]
    fn test_pagination_defaults_from_empty_query() {
        let q: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_meta_total_pages_rounds_up() {
        let meta = Meta::paginated(21, &PaginationQuery::new(2, 10));
        assert_eq!(
            meta,
            Meta {
                total: 21,
                page: 2,
                limit: 10,
                total_pages: 3
            }
        );

        let empty = Meta::paginated(0, &PaginationQuery::default());
        assert_eq!(empty.total_pages, 0);
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        hamlet: Option<Option<i32>>,
    }

    #[test]
    fn test_double_option_distinguishes_null_from_missing() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"hamlet": null}"#).unwrap();
        let set: Patch = serde_json::from_str(r#"{"hamlet": 3}"#).unwrap();
        assert_eq!(missing.hamlet, None);
        assert_eq!(null.hamlet, Some(None));
        assert_eq!(set.hamlet, Some(Some(3)));
    }
}
