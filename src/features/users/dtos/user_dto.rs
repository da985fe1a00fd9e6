use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::users::models::{User, UserRole};
use crate::shared::validation::{non_blank, USERNAME_REGEX};

/// Request DTO for creating an account
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: String,

    #[validate(
        length(min = 3, max = 100, message = "Username must be 3-100 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username must start with a letter or underscore and contain only letters, digits and underscores"
        )
    )]
    pub username: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,

    pub role: UserRole,
}

/// Request DTO for updating an account; blank or omitted fields are left unchanged
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
}

impl UpdateUserDto {
    /// Drop blank fields and validate the ones that remain
    pub fn normalized(self) -> Result<Self> {
        let full_name = non_blank(self.full_name);
        let username = non_blank(self.username);
        let password = self.password.filter(|p| !p.is_empty());

        if let Some(name) = &full_name {
            if name.chars().count() > 255 {
                return Err(AppError::Validation(
                    "Full name must be 1-255 characters".to_string(),
                ));
            }
        }
        if let Some(username) = &username {
            let len = username.chars().count();
            if !(3..=100).contains(&len) || !USERNAME_REGEX.is_match(username) {
                return Err(AppError::Validation(
                    "Username must be 3-100 characters of letters, digits and underscores, not starting with a digit".to_string(),
                ));
            }
        }
        if let Some(password) = &password {
            if !(6..=72).contains(&password.len()) {
                return Err(AppError::Validation(
                    "Password must be 6-72 characters".to_string(),
                ));
            }
        }

        Ok(Self {
            full_name,
            username,
            password,
            role: self.role,
        })
    }
}

/// Response DTO for an account; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: i64,
    pub full_name: String,
    pub username: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            full_name: u.full_name,
            username: u.username,
            role: u.role,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
