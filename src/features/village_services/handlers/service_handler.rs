use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAdmin;
use crate::features::village_services::dtos::{
    CreateServiceDto, ServiceResponseDto, UpdateServiceDto,
};
use crate::features::village_services::services::VillageServiceService;
use crate::shared::types::ApiResponse;

/// List village services (public)
#[utoipa::path(
    get,
    path = "/api/v1/services",
    responses(
        (status = 200, description = "Services by name", body = ApiResponse<Vec<ServiceResponseDto>>)
    ),
    tag = "services"
)]
pub async fn list_services(
    State(service): State<Arc<VillageServiceService>>,
) -> Result<Json<ApiResponse<Vec<ServiceResponseDto>>>> {
    let items = service.list().await?;
    let dtos = items.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Get a village service by ID (public)
#[utoipa::path(
    get,
    path = "/api/v1/services/{id}",
    params(("id" = i64, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service found", body = ApiResponse<ServiceResponseDto>),
        (status = 404, description = "Service not found")
    ),
    tag = "services"
)]
pub async fn get_service(
    State(service): State<Arc<VillageServiceService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<ServiceResponseDto>>> {
    let item = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(item.into()), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/services",
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Service created", body = ApiResponse<ServiceResponseDto>),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "services"
)]
pub async fn create_service(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<VillageServiceService>>,
    AppJson(dto): AppJson<CreateServiceDto>,
) -> Result<(StatusCode, Json<ApiResponse<ServiceResponseDto>>)> {
    let item = service.create(dto.normalized()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(item.into()),
            Some("Service created successfully".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/services/{id}",
    params(("id" = i64, Path, description = "Service ID")),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Service updated", body = ApiResponse<ServiceResponseDto>),
        (status = 404, description = "Service not found")
    ),
    security(("bearer_auth" = [])),
    tag = "services"
)]
pub async fn update_service(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<VillageServiceService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateServiceDto>,
) -> Result<Json<ApiResponse<ServiceResponseDto>>> {
    let item = service.update(id, dto.normalized()?).await?;
    Ok(Json(ApiResponse::success(
        Some(item.into()),
        Some("Service updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/services/{id}",
    params(("id" = i64, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service deleted"),
        (status = 404, description = "Service not found")
    ),
    security(("bearer_auth" = [])),
    tag = "services"
)]
pub async fn delete_service(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<VillageServiceService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Service deleted successfully".to_string()),
        None,
    )))
}
