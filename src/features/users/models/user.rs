use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Account role enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    Author,
}

impl UserRole {
    pub fn is_super_admin(self) -> bool {
        matches!(self, UserRole::SuperAdmin)
    }

    /// Admin-level access (superadmin or admin)
    pub fn has_admin_access(self) -> bool {
        matches!(self, UserRole::SuperAdmin | UserRole::Admin)
    }

    /// Author-level access; every role can write news
    pub fn has_author_access(self) -> bool {
        matches!(
            self,
            UserRole::SuperAdmin | UserRole::Admin | UserRole::Author
        )
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::SuperAdmin => write!(f, "superadmin"),
            UserRole::Admin => write!(f, "admin"),
            UserRole::Author => write!(f, "author"),
        }
    }
}

/// Database model for an account
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new account (password already hashed)
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub full_name: String,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Partial update; `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<UserRole>,
}
