use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TrackPageViewDto {
    #[validate(length(min = 1, max = 2048, message = "page_url must be 1-2048 characters"))]
    pub page_url: String,

    #[validate(length(max = 255, message = "page_title must be at most 255 characters"))]
    pub page_title: Option<String>,

    /// Falls back to the `Referer` header
    #[validate(length(max = 2048, message = "referrer must be at most 2048 characters"))]
    pub referrer: Option<String>,
}
