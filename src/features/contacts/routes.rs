use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::contacts::handlers;
use crate::features::contacts::services::ContactService;

pub fn public_routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/v1/contacts", post(handlers::submit_contact))
        .with_state(service)
}

/// Admin routes (auth middleware applied by caller)
pub fn admin_routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/v1/admin/contacts", get(handlers::list_contacts))
        .route(
            "/api/v1/admin/contacts/{id}",
            get(handlers::get_contact).delete(handlers::delete_contact),
        )
        .route(
            "/api/v1/admin/contacts/{id}/read",
            patch(handlers::mark_contact_read),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_author_user, lazy_pool, with_auth};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn service() -> Arc<ContactService> {
        Arc::new(ContactService::new(lazy_pool()))
    }

    #[tokio::test]
    async fn test_blank_fields_are_rejected() {
        let server = TestServer::new(public_routes(service())).unwrap();
        let response = server
            .post("/api/v1/contacts")
            .json(&json!({
                "name": "  ",
                "email": "warga@example.com",
                "subject": "Halo",
                "message": "Pesan"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected() {
        let server = TestServer::new(public_routes(service())).unwrap();
        server
            .post("/api/v1/contacts")
            .json(&json!({"name": "Warga", "email": "warga@example.com"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_author_cannot_read_inbox() {
        let app = with_auth(admin_routes(service()), create_author_user());
        let server = TestServer::new(app).unwrap();
        server
            .get("/api/v1/admin/contacts")
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }
}
