use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Admin routes (auth middleware applied by caller)
pub fn admin_routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/v1/admin/dashboard", get(handlers::get_dashboard))
        .with_state(service)
}
