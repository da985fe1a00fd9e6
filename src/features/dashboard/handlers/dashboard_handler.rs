use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::auth::guards::RequireAdmin;
use crate::features::dashboard::dtos::DashboardDto;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Admin overview: content counts, recent activity, traffic and system status
#[utoipa::path(
    get,
    path = "/api/v1/admin/dashboard",
    responses(
        (status = 200, description = "Dashboard overview", body = ApiResponse<DashboardDto>),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "dashboard"
)]
pub async fn get_dashboard(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardDto>>> {
    let overview = service.overview(&user).await;
    Ok(Json(ApiResponse::success(Some(overview), None, None)))
}
