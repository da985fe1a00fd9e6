use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAdmin;
use crate::features::hero_sliders::dtos::{
    CreateHeroSliderDto, HeroSliderResponseDto, UpdateHeroSliderDto,
};
use crate::features::hero_sliders::models::HeroSlider;
use crate::features::hero_sliders::services::HeroSliderService;
use crate::shared::types::ApiResponse;

fn list_response(items: Vec<HeroSlider>) -> Json<ApiResponse<Vec<HeroSliderResponseDto>>> {
    let dtos = items.into_iter().map(Into::into).collect();
    Json(ApiResponse::success(Some(dtos), None, None))
}

/// Active sliders for the home page (public)
#[utoipa::path(
    get,
    path = "/api/v1/hero-sliders",
    responses(
        (status = 200, description = "Active sliders in display order", body = ApiResponse<Vec<HeroSliderResponseDto>>)
    ),
    tag = "hero-sliders"
)]
pub async fn list_active_sliders(
    State(service): State<Arc<HeroSliderService>>,
) -> Result<Json<ApiResponse<Vec<HeroSliderResponseDto>>>> {
    Ok(list_response(service.list_active().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/hero-sliders",
    responses(
        (status = 200, description = "All sliders", body = ApiResponse<Vec<HeroSliderResponseDto>>),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "hero-sliders"
)]
pub async fn list_sliders(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<HeroSliderService>>,
) -> Result<Json<ApiResponse<Vec<HeroSliderResponseDto>>>> {
    Ok(list_response(service.list_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/hero-sliders/{id}",
    params(("id" = i64, Path, description = "Slider ID")),
    responses(
        (status = 200, description = "Slider found", body = ApiResponse<HeroSliderResponseDto>),
        (status = 404, description = "Slider not found")
    ),
    security(("bearer_auth" = [])),
    tag = "hero-sliders"
)]
pub async fn get_slider(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<HeroSliderService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<HeroSliderResponseDto>>> {
    let slider = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(slider.into()), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/hero-sliders",
    request_body = CreateHeroSliderDto,
    responses(
        (status = 201, description = "Slider created", body = ApiResponse<HeroSliderResponseDto>),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "hero-sliders"
)]
pub async fn create_slider(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<HeroSliderService>>,
    AppJson(dto): AppJson<CreateHeroSliderDto>,
) -> Result<(StatusCode, Json<ApiResponse<HeroSliderResponseDto>>)> {
    let slider = service.create(dto.into_new()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(slider.into()),
            Some("Hero slider created successfully".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/hero-sliders/{id}",
    params(("id" = i64, Path, description = "Slider ID")),
    request_body = UpdateHeroSliderDto,
    responses(
        (status = 200, description = "Slider updated", body = ApiResponse<HeroSliderResponseDto>),
        (status = 404, description = "Slider not found")
    ),
    security(("bearer_auth" = [])),
    tag = "hero-sliders"
)]
pub async fn update_slider(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<HeroSliderService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateHeroSliderDto>,
) -> Result<Json<ApiResponse<HeroSliderResponseDto>>> {
    let slider = service.update(id, dto.into_changes()?).await?;
    Ok(Json(ApiResponse::success(
        Some(slider.into()),
        Some("Hero slider updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/hero-sliders/{id}",
    params(("id" = i64, Path, description = "Slider ID")),
    responses(
        (status = 200, description = "Slider deleted"),
        (status = 404, description = "Slider not found")
    ),
    security(("bearer_auth" = [])),
    tag = "hero-sliders"
)]
pub async fn delete_slider(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<HeroSliderService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Hero slider deleted successfully".to_string()),
        None,
    )))
}
