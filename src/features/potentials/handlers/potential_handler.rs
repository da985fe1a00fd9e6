use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAdmin;
use crate::features::potentials::dtos::{
    CreatePotentialDto, PotentialQuery, PotentialResponseDto, UpdatePotentialDto,
};
use crate::features::potentials::services::PotentialService;
use crate::shared::types::ApiResponse;

/// List village potentials (public)
#[utoipa::path(
    get,
    path = "/api/v1/potentials",
    params(PotentialQuery),
    responses(
        (status = 200, description = "Potentials, newest first", body = ApiResponse<Vec<PotentialResponseDto>>),
        (status = 400, description = "Unknown type")
    ),
    tag = "potentials"
)]
pub async fn list_potentials(
    State(service): State<Arc<PotentialService>>,
    Query(query): Query<PotentialQuery>,
) -> Result<Json<ApiResponse<Vec<PotentialResponseDto>>>> {
    let items = service.list(query.potential_type).await?;
    let dtos = items.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Get a potential by ID (public)
#[utoipa::path(
    get,
    path = "/api/v1/potentials/{id}",
    params(("id" = i64, Path, description = "Potential ID")),
    responses(
        (status = 200, description = "Potential found", body = ApiResponse<PotentialResponseDto>),
        (status = 404, description = "Potential not found")
    ),
    tag = "potentials"
)]
pub async fn get_potential(
    State(service): State<Arc<PotentialService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<PotentialResponseDto>>> {
    let item = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(item.into()), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/potentials",
    request_body = CreatePotentialDto,
    responses(
        (status = 201, description = "Potential created", body = ApiResponse<PotentialResponseDto>),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "potentials"
)]
pub async fn create_potential(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<PotentialService>>,
    AppJson(dto): AppJson<CreatePotentialDto>,
) -> Result<(StatusCode, Json<ApiResponse<PotentialResponseDto>>)> {
    let item = service.create(dto.normalized()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(item.into()),
            Some("Potential created successfully".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/potentials/{id}",
    params(("id" = i64, Path, description = "Potential ID")),
    request_body = UpdatePotentialDto,
    responses(
        (status = 200, description = "Potential updated", body = ApiResponse<PotentialResponseDto>),
        (status = 404, description = "Potential not found")
    ),
    security(("bearer_auth" = [])),
    tag = "potentials"
)]
pub async fn update_potential(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<PotentialService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdatePotentialDto>,
) -> Result<Json<ApiResponse<PotentialResponseDto>>> {
    let item = service.update(id, dto.normalized()?).await?;
    Ok(Json(ApiResponse::success(
        Some(item.into()),
        Some("Potential updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/potentials/{id}",
    params(("id" = i64, Path, description = "Potential ID")),
    responses(
        (status = 200, description = "Potential deleted"),
        (status = 404, description = "Potential not found")
    ),
    security(("bearer_auth" = [])),
    tag = "potentials"
)]
pub async fn delete_potential(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<PotentialService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Potential deleted successfully".to_string()),
        None,
    )))
}
