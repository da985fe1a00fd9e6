use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto};
use crate::features::auth::jwt::JwtService;
use crate::features::auth::password::verify_password;
use crate::features::users::UserService;

/// Credential check and token issuance
pub struct AuthService {
    users: Arc<UserService>,
    jwt: Arc<JwtService>,
}

impl AuthService {
    pub fn new(users: Arc<UserService>, jwt: Arc<JwtService>) -> Self {
        Self { users, jwt }
    }

    pub async fn login(&self, dto: LoginRequestDto) -> Result<LoginResponseDto> {
        let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

        let user = self
            .users
            .find_by_username(dto.username.trim())
            .await?
            .ok_or_else(invalid)?;

        if !verify_password(dto.password, user.password_hash.clone()).await? {
            tracing::info!("Failed login attempt for {}", user.username);
            return Err(invalid());
        }

        let token = self.jwt.issue_token(user.id, &user.username, user.role)?;
        tracing::info!("User {} logged in", user.username);

        Ok(LoginResponseDto {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt.expires_in(),
            role: user.role,
            user: user.into(),
        })
    }
}
