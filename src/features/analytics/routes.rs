use axum::{routing::post, Router};

use crate::features::analytics::handlers;
use crate::features::analytics::queue::PageViewQueue;

pub fn public_routes(queue: PageViewQueue) -> Router {
    Router::new()
        .route("/api/v1/page-views", post(handlers::track_page_view))
        .with_state(queue)
}
