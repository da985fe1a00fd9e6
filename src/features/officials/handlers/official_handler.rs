use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAdmin;
use crate::features::officials::dtos::{
    CreateOfficialDto, OfficialResponseDto, UpdateOfficialDto,
};
use crate::features::officials::services::OfficialService;
use crate::shared::types::ApiResponse;

/// List village officials (public)
#[utoipa::path(
    get,
    path = "/api/v1/officials",
    responses(
        (status = 200, description = "Officials by hamlet then display order", body = ApiResponse<Vec<OfficialResponseDto>>)
    ),
    tag = "officials"
)]
pub async fn list_officials(
    State(service): State<Arc<OfficialService>>,
) -> Result<Json<ApiResponse<Vec<OfficialResponseDto>>>> {
    let officials = service.list().await?;
    let dtos = officials.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Get an official by ID (public)
#[utoipa::path(
    get,
    path = "/api/v1/officials/{id}",
    params(("id" = i64, Path, description = "Official ID")),
    responses(
        (status = 200, description = "Official found", body = ApiResponse<OfficialResponseDto>),
        (status = 404, description = "Official not found")
    ),
    tag = "officials"
)]
pub async fn get_official(
    State(service): State<Arc<OfficialService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<OfficialResponseDto>>> {
    let official = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(official.into()), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/officials",
    responses(
        (status = 200, description = "All officials", body = ApiResponse<Vec<OfficialResponseDto>>),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "officials"
)]
pub async fn list_admin_officials(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<OfficialService>>,
) -> Result<Json<ApiResponse<Vec<OfficialResponseDto>>>> {
    let officials = service.list_admin().await?;
    let dtos = officials.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/officials",
    request_body = CreateOfficialDto,
    responses(
        (status = 201, description = "Official created", body = ApiResponse<OfficialResponseDto>),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "officials"
)]
pub async fn create_official(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<OfficialService>>,
    AppJson(dto): AppJson<CreateOfficialDto>,
) -> Result<(StatusCode, Json<ApiResponse<OfficialResponseDto>>)> {
    let official = service.create(dto.into_new()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(official.into()),
            Some("Official created successfully".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/officials/{id}",
    params(("id" = i64, Path, description = "Official ID")),
    request_body = UpdateOfficialDto,
    responses(
        (status = 200, description = "Official updated", body = ApiResponse<OfficialResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Official not found")
    ),
    security(("bearer_auth" = [])),
    tag = "officials"
)]
pub async fn update_official(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<OfficialService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateOfficialDto>,
) -> Result<Json<ApiResponse<OfficialResponseDto>>> {
    let official = service.update(id, dto.into_changes()?).await?;
    Ok(Json(ApiResponse::success(
        Some(official.into()),
        Some("Official updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/officials/{id}",
    params(("id" = i64, Path, description = "Official ID")),
    responses(
        (status = 200, description = "Official deleted"),
        (status = 404, description = "Official not found")
    ),
    security(("bearer_auth" = [])),
    tag = "officials"
)]
pub async fn delete_official(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<OfficialService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Official deleted successfully".to_string()),
        None,
    )))
}
