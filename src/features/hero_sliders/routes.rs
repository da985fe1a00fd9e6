use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::hero_sliders::handlers;
use crate::features::hero_sliders::services::HeroSliderService;

pub fn public_routes(service: Arc<HeroSliderService>) -> Router {
    Router::new()
        .route("/api/v1/hero-sliders", get(handlers::list_active_sliders))
        .with_state(service)
}

/// Admin routes (auth middleware applied by caller)
pub fn admin_routes(service: Arc<HeroSliderService>) -> Router {
    Router::new()
        .route(
            "/api/v1/admin/hero-sliders",
            get(handlers::list_sliders).post(handlers::create_slider),
        )
        .route(
            "/api/v1/admin/hero-sliders/{id}",
            get(handlers::get_slider)
                .put(handlers::update_slider)
                .delete(handlers::delete_slider),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::hero_sliders::repositories::InMemoryHeroSliderRepository;
    use crate::shared::test_helpers::{create_admin_user, create_author_user, with_auth};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn service() -> Arc<HeroSliderService> {
        Arc::new(HeroSliderService::new(Arc::new(
            InMemoryHeroSliderRepository::new(),
        )))
    }

    fn server(service: Arc<HeroSliderService>) -> TestServer {
        let app = public_routes(service.clone())
            .merge(with_auth(admin_routes(service), create_admin_user()));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_public_list_returns_default_slider() {
        let server = server(service());
        let response = server.get("/api/v1/hero-sliders").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["media_type"], "image");
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let server = server(service());
        let response = server
            .post("/api/v1/admin/hero-sliders")
            .json(&json!({
                "title": "Festival Desa",
                "media_url": "https://cdn.example/festival.mp4",
                "media_type": "video",
                "display_order": 2
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let id = response.json::<Value>()["data"]["id"].as_i64().unwrap();

        let fetched: Value = server
            .get(&format!("/api/v1/admin/hero-sliders/{}", id))
            .await
            .json();
        assert_eq!(fetched["data"]["title"], "Festival Desa");
        assert_eq!(fetched["data"]["is_active"], true);
    }

    #[tokio::test]
    async fn test_missing_slider_is_404() {
        let server = server(service());
        server
            .delete("/api/v1/admin/hero-sliders/99")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_author_cannot_manage_sliders() {
        let app = with_auth(admin_routes(service()), create_author_user());
        let server = TestServer::new(app).unwrap();
        server
            .get("/api/v1/admin/hero-sliders")
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }
}
