use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::potentials::handlers;
use crate::features::potentials::services::PotentialService;

pub fn public_routes(service: Arc<PotentialService>) -> Router {
    Router::new()
        .route("/api/v1/potentials", get(handlers::list_potentials))
        .route("/api/v1/potentials/{id}", get(handlers::get_potential))
        .with_state(service)
}

/// Admin routes (auth middleware applied by caller)
pub fn admin_routes(service: Arc<PotentialService>) -> Router {
    Router::new()
        .route("/api/v1/admin/potentials", post(handlers::create_potential))
        .route(
            "/api/v1/admin/potentials/{id}",
            put(handlers::update_potential).delete(handlers::delete_potential),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_admin_user, lazy_pool, with_auth};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn service() -> Arc<PotentialService> {
        Arc::new(PotentialService::new(lazy_pool()))
    }

    #[tokio::test]
    async fn test_unknown_type_filter_is_400() {
        let server = TestServer::new(public_routes(service())).unwrap();
        server
            .get("/api/v1/potentials")
            .add_query_param("type", "mining")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_unknown_type_is_400() {
        let app = with_auth(admin_routes(service()), create_admin_user());
        let server = TestServer::new(app).unwrap();
        server
            .post("/api/v1/admin/potentials")
            .json(&json!({"title": "Tambang", "type": "mining"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unauthenticated_create_is_401() {
        let server = TestServer::new(admin_routes(service())).unwrap();
        server
            .post("/api/v1/admin/potentials")
            .json(&json!({"title": "Kopi", "type": "umkm"}))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
