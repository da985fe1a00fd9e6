/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ACCOUNTS
// =============================================================================

/// Username of the account seeded on first start
pub const SUPERADMIN_USERNAME: &str = "superadmin";

/// Display name of the seeded account
pub const SUPERADMIN_FULL_NAME: &str = "Super Administrator";

// =============================================================================
// DASHBOARD
// =============================================================================

/// Number of recent news/contacts shown on the dashboard
pub const DASHBOARD_RECENT_LIMIT: i64 = 5;

/// Number of top pages shown on the dashboard
pub const DASHBOARD_TOP_PAGES_LIMIT: i64 = 5;
