use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use crate::features::users::models::UserRole;

/// Identity attached to a request by the auth middleware
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    /// Check if user is super admin
    pub fn is_super_admin(&self) -> bool {
        self.role.is_super_admin()
    }

    /// Check if user has admin-level access (superadmin or admin)
    pub fn has_admin_access(&self) -> bool {
        self.role.has_admin_access()
    }

    /// Check if user may manage news (any role)
    pub fn has_author_access(&self) -> bool {
        self.role.has_author_access()
    }
}

/// Claims carried by issued access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub user_id: i64,
    pub username: String,
    pub role: UserRole,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
            role: claims.role,
        }
    }
}
