use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::officials::handlers;
use crate::features::officials::services::OfficialService;

pub fn public_routes(service: Arc<OfficialService>) -> Router {
    Router::new()
        .route("/api/v1/officials", get(handlers::list_officials))
        .route("/api/v1/officials/{id}", get(handlers::get_official))
        .with_state(service)
}

/// Admin routes (auth middleware applied by caller)
pub fn admin_routes(service: Arc<OfficialService>) -> Router {
    Router::new()
        .route(
            "/api/v1/admin/officials",
            get(handlers::list_admin_officials).post(handlers::create_official),
        )
        .route(
            "/api/v1/admin/officials/{id}",
            put(handlers::update_official).delete(handlers::delete_official),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::officials::repositories::InMemoryOfficialRepository;
    use crate::shared::test_helpers::{create_admin_user, with_auth};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let service = Arc::new(OfficialService::new(Arc::new(
            InMemoryOfficialRepository::new(),
        )));
        let app = public_routes(service.clone())
            .merge(with_auth(admin_routes(service), create_admin_user()));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_public_list_bootstraps() {
        let server = server();
        let body: Value = server.get("/api/v1/officials").await.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["position"], "Kepala Desa");
    }

    #[tokio::test]
    async fn test_invalid_hamlet_is_400() {
        let server = server();
        server
            .post("/api/v1/admin/officials")
            .json(&json!({"name": "Joko", "position": "Kepala Dusun", "hamlet_number": 25}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_with_null_clears_hamlet() {
        let server = server();
        let created: Value = server
            .post("/api/v1/admin/officials")
            .json(&json!({
                "name": "Joko",
                "position": "Kepala Dusun",
                "hamlet_number": 2,
                "hamlet_name": "Dusun II"
            }))
            .await
            .json();
        let id = created["data"]["id"].as_i64().unwrap();

        let response = server
            .put(&format!("/api/v1/admin/officials/{}", id))
            .json(&json!({"hamlet_number": null}))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["hamlet_number"], Value::Null);
        assert_eq!(body["data"]["hamlet_name"], "Dusun II");
    }
}
