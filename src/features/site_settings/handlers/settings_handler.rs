use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAdmin;
use crate::features::site_settings::dtos::{
    BulkUpdateResponseDto, GroupedSettingsDto, SettingInputDto, SettingsMapDto,
    SiteSettingResponseDto,
};
use crate::features::site_settings::models::{SettingEntry, SettingGroup};
use crate::features::site_settings::services::SettingsService;
use crate::shared::types::ApiResponse;

/// All settings as a flat key/value map (public)
#[utoipa::path(
    get,
    path = "/api/v1/settings",
    responses(
        (status = 200, description = "Settings map; unset values are empty strings", body = ApiResponse<SettingsMapDto>)
    ),
    tag = "settings"
)]
pub async fn get_settings(
    State(service): State<Arc<SettingsService>>,
) -> Result<Json<ApiResponse<SettingsMapDto>>> {
    let map = service.public_map().await?;
    Ok(Json(ApiResponse::success(Some(SettingsMapDto(map)), None, None)))
}

/// Settings of one group as a flat key/value map (public)
#[utoipa::path(
    get,
    path = "/api/v1/settings/{group}",
    params(("group" = String, Path, description = "general, profile, social or government")),
    responses(
        (status = 200, description = "Settings map for the group", body = ApiResponse<SettingsMapDto>),
        (status = 400, description = "Unknown group")
    ),
    tag = "settings"
)]
pub async fn get_settings_by_group(
    State(service): State<Arc<SettingsService>>,
    AppPath(group): AppPath<String>,
) -> Result<Json<ApiResponse<SettingsMapDto>>> {
    let group: SettingGroup = group.parse().map_err(AppError::BadRequest)?;
    let map = service.group_map(group).await?;
    Ok(Json(ApiResponse::success(Some(SettingsMapDto(map)), None, None)))
}

/// Full setting records grouped by group
#[utoipa::path(
    get,
    path = "/api/v1/admin/settings",
    responses(
        (status = 200, description = "Settings grouped by group", body = ApiResponse<GroupedSettingsDto>),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "settings"
)]
pub async fn get_admin_settings(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<SettingsService>>,
) -> Result<Json<ApiResponse<GroupedSettingsDto>>> {
    let grouped = service
        .grouped()
        .await?
        .into_iter()
        .map(|(group, settings)| (group, settings.into_iter().map(Into::into).collect()))
        .collect();
    Ok(Json(ApiResponse::success(
        Some(GroupedSettingsDto(grouped)),
        None,
        None,
    )))
}

/// Update many settings at once; profile keys are mirrored into general keys
#[utoipa::path(
    put,
    path = "/api/v1/admin/settings",
    request_body = Vec<SettingInputDto>,
    responses(
        (status = 200, description = "Settings updated", body = ApiResponse<BulkUpdateResponseDto>),
        (status = 400, description = "Validation error; nothing was written")
    ),
    security(("bearer_auth" = [])),
    tag = "settings"
)]
pub async fn bulk_update_settings(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<SettingsService>>,
    AppJson(dtos): AppJson<Vec<SettingInputDto>>,
) -> Result<Json<ApiResponse<BulkUpdateResponseDto>>> {
    let entries = dtos
        .into_iter()
        .map(SettingInputDto::into_entry)
        .collect::<Result<Vec<SettingEntry>>>()?;

    let count = service.bulk_update(entries).await?;
    tracing::info!("User {} updated {} settings", user.username, count);

    Ok(Json(ApiResponse::success(
        Some(BulkUpdateResponseDto { count }),
        Some("Settings updated successfully".to_string()),
        None,
    )))
}

/// Create or update a single setting
#[utoipa::path(
    post,
    path = "/api/v1/admin/settings",
    request_body = SettingInputDto,
    responses(
        (status = 200, description = "Setting saved", body = ApiResponse<SiteSettingResponseDto>),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "settings"
)]
pub async fn upsert_setting(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<SettingsService>>,
    AppJson(dto): AppJson<SettingInputDto>,
) -> Result<Json<ApiResponse<SiteSettingResponseDto>>> {
    let setting = service.upsert(dto.into_entry()?).await?;
    Ok(Json(ApiResponse::success(
        Some(setting.into()),
        Some("Setting saved successfully".to_string()),
        None,
    )))
}
