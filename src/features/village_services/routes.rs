use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::village_services::handlers;
use crate::features::village_services::services::VillageServiceService;

pub fn public_routes(service: Arc<VillageServiceService>) -> Router {
    Router::new()
        .route("/api/v1/services", get(handlers::list_services))
        .route("/api/v1/services/{id}", get(handlers::get_service))
        .with_state(service)
}

/// Admin routes (auth middleware applied by caller)
pub fn admin_routes(service: Arc<VillageServiceService>) -> Router {
    Router::new()
        .route("/api/v1/admin/services", post(handlers::create_service))
        .route(
            "/api/v1/admin/services/{id}",
            put(handlers::update_service).delete(handlers::delete_service),
        )
        .with_state(service)
}
