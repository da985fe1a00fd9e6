use sqlx::PgPool;

use crate::core::config::SeedConfig;
use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::password::hash_password;
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto};
use crate::features::users::models::{CreateUser, UpdateUser, User, UserRole};
use crate::shared::constants::{SUPERADMIN_FULL_NAME, SUPERADMIN_USERNAME};

const USER_COLUMNS: &str =
    "id, full_name, username, password_hash, role, created_at, updated_at";

/// Service for account administration
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let sql = format!(
            "SELECT {} FROM users WHERE username = $1 AND deleted_at IS NULL",
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch user by username: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User> {
        let sql = format!(
            "SELECT {} FROM users WHERE id = $1 AND deleted_at IS NULL",
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch user: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Get an account the caller is allowed to see
    pub async fn get_visible(&self, caller: &AuthenticatedUser, id: i64) -> Result<User> {
        let user = self.get_by_id(id).await?;
        if user.role.is_super_admin() && !caller.is_super_admin() {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(user)
    }

    /// List accounts ordered by username; superadmins are hidden from other roles
    pub async fn list(&self, caller: &AuthenticatedUser) -> Result<Vec<User>> {
        let sql = format!(
            "SELECT {} FROM users
             WHERE deleted_at IS NULL AND ($1 OR role <> 'superadmin')
             ORDER BY username ASC",
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(caller.is_super_admin())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list users: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn create(&self, caller: &AuthenticatedUser, dto: CreateUserDto) -> Result<User> {
        authorize_assign_role(caller, dto.role)?;

        let data = CreateUser {
            full_name: dto.full_name.trim().to_string(),
            username: dto.username,
            password_hash: hash_password(dto.password).await?,
            role: dto.role,
        };

        let user = self.insert(&data).await?;
        tracing::info!(
            "User {} created account {} ({})",
            caller.username,
            user.username,
            user.role
        );
        Ok(user)
    }

    async fn insert(&self, data: &CreateUser) -> Result<User> {
        let sql = format!(
            "INSERT INTO users (full_name, username, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(&data.full_name)
            .bind(&data.username)
            .bind(&data.password_hash)
            .bind(data.role)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Username"))
    }

    pub async fn update(
        &self,
        caller: &AuthenticatedUser,
        id: i64,
        dto: UpdateUserDto,
    ) -> Result<User> {
        let dto = dto.normalized()?;
        let target = self.get_visible(caller, id).await?;
        authorize_edit(caller, &target)?;
        if let Some(role) = dto.role {
            authorize_assign_role(caller, role)?;
        }

        let password_hash = match dto.password {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };
        let changes = UpdateUser {
            full_name: dto.full_name,
            username: dto.username,
            password_hash,
            role: dto.role,
        };

        let sql = format!(
            "UPDATE users SET
                full_name = COALESCE($2, full_name),
                username = COALESCE($3, username),
                password_hash = COALESCE($4, password_hash),
                role = COALESCE($5, role),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {}",
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(changes.full_name)
            .bind(changes.username)
            .bind(changes.password_hash)
            .bind(changes.role)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Username"))?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub async fn delete(&self, caller: &AuthenticatedUser, id: i64) -> Result<()> {
        let target = self.get_visible(caller, id).await?;
        authorize_delete(caller, &target)?;

        let result = sqlx::query(
            "UPDATE users SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete user: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        tracing::info!("User {} deleted account {}", caller.username, target.username);
        Ok(())
    }

    /// Create the built-in superadmin account if it does not exist yet
    pub async fn ensure_superadmin(&self, seed: &SeedConfig) -> Result<()> {
        if self.find_by_username(SUPERADMIN_USERNAME).await?.is_some() {
            tracing::debug!("Superadmin account already present");
            return Ok(());
        }

        let password = seed.superadmin_default_password.clone().ok_or_else(|| {
            AppError::Internal(
                "SUPERADMIN_DEFAULT_PASSWORD must be set to seed the superadmin account"
                    .to_string(),
            )
        })?;

        let data = CreateUser {
            full_name: SUPERADMIN_FULL_NAME.to_string(),
            username: SUPERADMIN_USERNAME.to_string(),
            password_hash: hash_password(password).await?,
            role: UserRole::SuperAdmin,
        };

        match self.insert(&data).await {
            Ok(_) => {
                tracing::info!("Seeded superadmin account");
                Ok(())
            }
            // Another instance seeded it first
            Err(AppError::Conflict(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Only a superadmin may hand out the superadmin role
fn authorize_assign_role(caller: &AuthenticatedUser, role: UserRole) -> Result<()> {
    if role.is_super_admin() && !caller.is_super_admin() {
        return Err(AppError::Forbidden(
            "Only a superadmin can assign the superadmin role".to_string(),
        ));
    }
    Ok(())
}

/// Superadmin accounts are editable by superadmins only
fn authorize_edit(caller: &AuthenticatedUser, target: &User) -> Result<()> {
    if target.role.is_super_admin() && !caller.is_super_admin() {
        return Err(AppError::Forbidden(
            "Only a superadmin can edit a superadmin account".to_string(),
        ));
    }
    Ok(())
}

fn authorize_delete(caller: &AuthenticatedUser, target: &User) -> Result<()> {
    if target.role.is_super_admin() {
        return Err(AppError::Forbidden(
            "Superadmin accounts cannot be deleted".to_string(),
        ));
    }
    if target.id == caller.user_id {
        return Err(AppError::BadRequest(
            "You cannot delete your own account".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_admin_user, create_super_admin_user};
    use chrono::Utc;

    fn account(id: i64, role: UserRole) -> User {
        User {
            id,
            full_name: "Akun Uji".into(),
            username: format!("akun_{}", id),
            password_hash: "x".into(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_admin_cannot_assign_superadmin() {
        let admin = create_admin_user();
        assert!(matches!(
            authorize_assign_role(&admin, UserRole::SuperAdmin),
            Err(AppError::Forbidden(_))
        ));
        assert!(authorize_assign_role(&admin, UserRole::Author).is_ok());
        assert!(authorize_assign_role(&create_super_admin_user(), UserRole::SuperAdmin).is_ok());
    }

    #[test]
    fn test_admin_cannot_edit_superadmin() {
        let target = account(50, UserRole::SuperAdmin);
        assert!(authorize_edit(&create_admin_user(), &target).is_err());
        assert!(authorize_edit(&create_super_admin_user(), &target).is_ok());
    }

    #[test]
    fn test_superadmin_is_never_deletable() {
        let target = account(50, UserRole::SuperAdmin);
        assert!(matches!(
            authorize_delete(&create_super_admin_user(), &target),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_cannot_delete_self() {
        let admin = create_admin_user();
        let me = account(admin.user_id, UserRole::Admin);
        assert!(matches!(
            authorize_delete(&admin, &me),
            Err(AppError::BadRequest(_))
        ));
        assert!(authorize_delete(&admin, &account(99, UserRole::Author)).is_ok());
    }
}
