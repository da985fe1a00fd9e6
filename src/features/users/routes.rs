use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Account administration routes (auth middleware applied by caller)
pub fn admin_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/api/v1/admin/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/v1/admin/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        create_author_user, lazy_pool, with_auth, with_super_admin_auth,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn service() -> Arc<UserService> {
        Arc::new(UserService::new(lazy_pool()))
    }

    #[tokio::test]
    async fn test_unauthenticated_request_is_rejected() {
        let server = TestServer::new(admin_routes(service())).unwrap();
        server
            .get("/api/v1/admin/users")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_author_cannot_manage_accounts() {
        let app = with_auth(admin_routes(service()), create_author_user());
        let server = TestServer::new(app).unwrap();
        server
            .get("/api/v1/admin/users")
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_create_with_short_password_is_rejected() {
        let server = TestServer::new(with_super_admin_auth(admin_routes(service()))).unwrap();
        let response = server
            .post("/api/v1/admin/users")
            .json(&json!({
                "full_name": "Operator Desa",
                "username": "operator",
                "password": "123",
                "role": "author"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_update_with_invalid_username_is_rejected() {
        let server = TestServer::new(with_super_admin_auth(admin_routes(service()))).unwrap();
        server
            .put("/api/v1/admin/users/5")
            .json(&json!({ "username": "9lives" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_bad_request() {
        let server = TestServer::new(with_super_admin_auth(admin_routes(service()))).unwrap();
        server
            .get("/api/v1/admin/users/abc")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
