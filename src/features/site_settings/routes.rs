use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::site_settings::handlers;
use crate::features::site_settings::services::SettingsService;

pub fn public_routes(service: Arc<SettingsService>) -> Router {
    Router::new()
        .route("/api/v1/settings", get(handlers::get_settings))
        .route("/api/v1/settings/{group}", get(handlers::get_settings_by_group))
        .with_state(service)
}

/// Admin routes (auth middleware applied by caller)
pub fn admin_routes(service: Arc<SettingsService>) -> Router {
    Router::new()
        .route(
            "/api/v1/admin/settings",
            get(handlers::get_admin_settings)
                .put(handlers::bulk_update_settings)
                .post(handlers::upsert_setting),
        )
        .with_state(service)
}
