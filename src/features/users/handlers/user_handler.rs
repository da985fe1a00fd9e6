use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAdmin;
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

/// List accounts
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    responses(
        (status = 200, description = "Accounts ordered by username", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn list_users(
    RequireAdmin(caller): RequireAdmin,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let users = service.list(&caller).await?;
    let dtos: Vec<UserResponseDto> = users.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Get an account by ID
#[utoipa::path(
    get,
    path = "/api/v1/admin/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Account found", body = ApiResponse<UserResponseDto>),
        (status = 404, description = "Account not found")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn get_user(
    RequireAdmin(caller): RequireAdmin,
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let user = service.get_visible(&caller, id).await?;
    Ok(Json(ApiResponse::success(Some(user.into()), None, None)))
}

/// Create an account
#[utoipa::path(
    post,
    path = "/api/v1/admin/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error or duplicate username"),
        (status = 403, description = "Role not permitted")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn create_user(
    RequireAdmin(caller): RequireAdmin,
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.create(&caller, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(user.into()),
            Some("User created successfully".to_string()),
            None,
        )),
    ))
}

/// Update an account
#[utoipa::path(
    put,
    path = "/api/v1/admin/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Account updated", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error or duplicate username"),
        (status = 403, description = "Role not permitted"),
        (status = 404, description = "Account not found")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn update_user(
    RequireAdmin(caller): RequireAdmin,
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let user = service.update(&caller, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(user.into()),
        Some("User updated successfully".to_string()),
        None,
    )))
}

/// Soft-delete an account
#[utoipa::path(
    delete,
    path = "/api/v1/admin/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 400, description = "Cannot delete own account"),
        (status = 403, description = "Superadmin accounts cannot be deleted"),
        (status = 404, description = "Account not found")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn delete_user(
    RequireAdmin(caller): RequireAdmin,
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&caller, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("User deleted successfully".to_string()),
        None,
    )))
}
