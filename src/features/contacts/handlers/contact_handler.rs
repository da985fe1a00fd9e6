use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAdmin;
use crate::features::contacts::dtos::{ContactResponseDto, CreateContactDto};
use crate::features::contacts::services::ContactService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Submit a contact message (public)
#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Message stored"),
        (status = 400, description = "Missing or invalid field")
    ),
    tag = "contacts"
)]
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactDto>,
) -> Result<(StatusCode, Json<ApiResponse<()>>)> {
    service.create(dto.normalized()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            None,
            Some("Message sent successfully".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/contacts",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Messages, newest first", body = ApiResponse<Vec<ContactResponseDto>>),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "contacts"
)]
pub async fn list_contacts(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ContactService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ContactResponseDto>>>> {
    let (items, total) = service.list(&pagination).await?;
    let dtos = items.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta::paginated(total, &pagination)),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/contacts/{id}",
    params(("id" = i64, Path, description = "Contact message ID")),
    responses(
        (status = 200, description = "Message found", body = ApiResponse<ContactResponseDto>),
        (status = 404, description = "Message not found")
    ),
    security(("bearer_auth" = [])),
    tag = "contacts"
)]
pub async fn get_contact(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ContactService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<ContactResponseDto>>> {
    let contact = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(contact.into()), None, None)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/admin/contacts/{id}/read",
    params(("id" = i64, Path, description = "Contact message ID")),
    responses(
        (status = 200, description = "Message marked as read", body = ApiResponse<ContactResponseDto>),
        (status = 404, description = "Message not found")
    ),
    security(("bearer_auth" = [])),
    tag = "contacts"
)]
pub async fn mark_contact_read(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ContactService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<ContactResponseDto>>> {
    let contact = service.mark_as_read(id).await?;
    Ok(Json(ApiResponse::success(
        Some(contact.into()),
        Some("Message marked as read".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/contacts/{id}",
    params(("id" = i64, Path, description = "Contact message ID")),
    responses(
        (status = 200, description = "Message deleted"),
        (status = 404, description = "Message not found")
    ),
    security(("bearer_auth" = [])),
    tag = "contacts"
)]
pub async fn delete_contact(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ContactService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Message deleted successfully".to_string()),
        None,
    )))
}
