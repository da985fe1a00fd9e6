use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAuthor;
use crate::features::news::dtos::{AdminNewsQuery, CreateNewsDto, NewsResponseDto, UpdateNewsDto};
use crate::features::news::models::News;
use crate::features::news::services::NewsService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

fn page_response(
    items: Vec<News>,
    total: i64,
    pagination: &PaginationQuery,
) -> Json<ApiResponse<Vec<NewsResponseDto>>> {
    let dtos: Vec<NewsResponseDto> = items.into_iter().map(Into::into).collect();
    Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta::paginated(total, pagination)),
    ))
}

/// List published news (public)
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Published news, newest first", body = ApiResponse<Vec<NewsResponseDto>>)
    ),
    tag = "news"
)]
pub async fn list_posts(
    State(service): State<Arc<NewsService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<NewsResponseDto>>>> {
    let (items, total) = service.list_published(&pagination).await?;
    Ok(page_response(items, total, &pagination))
}

/// Get a published article by ID (public)
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "News ID")),
    responses(
        (status = 200, description = "Article found", body = ApiResponse<NewsResponseDto>),
        (status = 404, description = "Article not found or not published")
    ),
    tag = "news"
)]
pub async fn get_post(
    State(service): State<Arc<NewsService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<NewsResponseDto>>> {
    let news = service.get_published_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(news.into()), None, None)))
}

/// Get a published article by slug (public)
#[utoipa::path(
    get,
    path = "/api/v1/posts/slug/{slug}",
    params(("slug" = String, Path, description = "News slug")),
    responses(
        (status = 200, description = "Article found", body = ApiResponse<NewsResponseDto>),
        (status = 404, description = "Article not found or not published")
    ),
    tag = "news"
)]
pub async fn get_post_by_slug(
    State(service): State<Arc<NewsService>>,
    AppPath(slug): AppPath<String>,
) -> Result<Json<ApiResponse<NewsResponseDto>>> {
    let news = service.get_published_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(news.into()), None, None)))
}

/// List all news regardless of status
#[utoipa::path(
    get,
    path = "/api/v1/admin/posts",
    params(AdminNewsQuery),
    responses(
        (status = 200, description = "News, newest first", body = ApiResponse<Vec<NewsResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "news"
)]
pub async fn list_admin_posts(
    RequireAuthor(_user): RequireAuthor,
    State(service): State<Arc<NewsService>>,
    Query(query): Query<AdminNewsQuery>,
) -> Result<Json<ApiResponse<Vec<NewsResponseDto>>>> {
    let pagination = query.pagination();
    let (items, total) = service.list_all(query.status, &pagination).await?;
    Ok(page_response(items, total, &pagination))
}

/// Get any article by ID
#[utoipa::path(
    get,
    path = "/api/v1/admin/posts/{id}",
    params(("id" = i64, Path, description = "News ID")),
    responses(
        (status = 200, description = "Article found", body = ApiResponse<NewsResponseDto>),
        (status = 404, description = "Article not found")
    ),
    security(("bearer_auth" = [])),
    tag = "news"
)]
pub async fn get_admin_post(
    RequireAuthor(_user): RequireAuthor,
    State(service): State<Arc<NewsService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<NewsResponseDto>>> {
    let news = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(news.into()), None, None)))
}

/// Create an article; the slug is derived from the title
#[utoipa::path(
    post,
    path = "/api/v1/admin/posts",
    request_body = CreateNewsDto,
    responses(
        (status = 201, description = "Article created", body = ApiResponse<NewsResponseDto>),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "news"
)]
pub async fn create_post(
    RequireAuthor(user): RequireAuthor,
    State(service): State<Arc<NewsService>>,
    AppJson(dto): AppJson<CreateNewsDto>,
) -> Result<(StatusCode, Json<ApiResponse<NewsResponseDto>>)> {
    let dto = dto.trimmed();
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let news = service.create(&user, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(news.into()),
            Some("News created successfully".to_string()),
            None,
        )),
    ))
}

/// Update an article
#[utoipa::path(
    put,
    path = "/api/v1/admin/posts/{id}",
    params(("id" = i64, Path, description = "News ID")),
    request_body = UpdateNewsDto,
    responses(
        (status = 200, description = "Article updated", body = ApiResponse<NewsResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Article not found")
    ),
    security(("bearer_auth" = [])),
    tag = "news"
)]
pub async fn update_post(
    RequireAuthor(_user): RequireAuthor,
    State(service): State<Arc<NewsService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateNewsDto>,
) -> Result<Json<ApiResponse<NewsResponseDto>>> {
    let news = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(news.into()),
        Some("News updated successfully".to_string()),
        None,
    )))
}

/// Soft-delete an article
#[utoipa::path(
    delete,
    path = "/api/v1/admin/posts/{id}",
    params(("id" = i64, Path, description = "News ID")),
    responses(
        (status = 200, description = "Article deleted"),
        (status = 404, description = "Article not found")
    ),
    security(("bearer_auth" = [])),
    tag = "news"
)]
pub async fn delete_post(
    RequireAuthor(_user): RequireAuthor,
    State(service): State<Arc<NewsService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("News deleted successfully".to_string()),
        None,
    )))
}
