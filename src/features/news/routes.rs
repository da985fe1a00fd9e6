use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::news::handlers;
use crate::features::news::services::NewsService;

/// Public read-only routes
pub fn public_routes(service: Arc<NewsService>) -> Router {
    Router::new()
        .route("/api/v1/posts", get(handlers::list_posts))
        .route("/api/v1/posts/{id}", get(handlers::get_post))
        .route("/api/v1/posts/slug/{slug}", get(handlers::get_post_by_slug))
        .with_state(service)
}

/// Management routes (auth middleware applied by caller)
pub fn admin_routes(service: Arc<NewsService>) -> Router {
    Router::new()
        .route(
            "/api/v1/admin/posts",
            get(handlers::list_admin_posts).post(handlers::create_post),
        )
        .route(
            "/api/v1/admin/posts/{id}",
            get(handlers::get_admin_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )
        .with_state(service)
}
