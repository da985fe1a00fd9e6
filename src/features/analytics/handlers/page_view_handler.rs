use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::analytics::dtos::TrackPageViewDto;
use crate::features::analytics::models::NewPageView;
use crate::features::analytics::queue::PageViewQueue;
use crate::features::analytics::tracking::{client_ip, page_path, should_track, visitor_id};
use crate::shared::validation::non_blank;

fn header_text(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Record a page view (public).
///
/// Always answers 202 once the body is valid; the write happens in the
/// background and its outcome is only logged.
#[utoipa::path(
    post,
    path = "/api/v1/page-views",
    request_body = TrackPageViewDto,
    responses(
        (status = 202, description = "View accepted"),
        (status = 400, description = "Invalid body")
    ),
    tag = "analytics"
)]
pub async fn track_page_view(
    State(queue): State<PageViewQueue>,
    headers: HeaderMap,
    AppJson(dto): AppJson<TrackPageViewDto>,
) -> Result<StatusCode> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let raw_url = dto.page_url.trim();
    if !should_track(raw_url) {
        tracing::debug!("Skipping page view for {}", raw_url);
        return Ok(StatusCode::ACCEPTED);
    }

    // Only the path is stored so query strings and hosts group together
    let page_url = match page_path(raw_url) {
        "" => "/".to_string(),
        path => path.to_string(),
    };

    let view = NewPageView {
        page_url,
        page_title: non_blank(dto.page_title),
        referrer: non_blank(dto.referrer).or_else(|| header_text(&headers, header::REFERER)),
        visitor_id: visitor_id(&client_ip(&headers)),
        user_agent: header_text(&headers, header::USER_AGENT),
        viewed_at: Utc::now(),
    };
    queue.enqueue(view);

    Ok(StatusCode::ACCEPTED)
}
