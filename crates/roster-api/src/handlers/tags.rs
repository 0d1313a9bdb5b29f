//! Tag request handler

use axum::{extract::State, Json};
use roster_service::{CreateTagRequest, TagRequestResponse, TagService};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Ask for a three-letter tag
///
/// POST /tags
pub async fn create_tag_request(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTagRequest>,
) -> ApiResult<Json<TagRequestResponse>> {
    let service = TagService::new(state.service_context());
    let response = service.request_tag(request).await?;
    Ok(Json(response))
}
