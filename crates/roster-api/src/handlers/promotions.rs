//! Promotion and punishment handlers
//!
//! Both record an awaiting rank-change request; nothing is applied to the
//! member until the request is reviewed.

use axum::{extract::State, Json};
use roster_service::{CreateRankChangeRequest, RankChangeResponse, RankService};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Request a promotion one rank up
///
/// POST /promotions
pub async fn create_promotion(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateRankChangeRequest>,
) -> ApiResult<Json<RankChangeResponse>> {
    let service = RankService::new(state.service_context());
    let response = service.promote(request).await?;
    Ok(Json(response))
}

/// Request a punishment one rank down
///
/// POST /punishments
pub async fn create_punishment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateRankChangeRequest>,
) -> ApiResult<Json<RankChangeResponse>> {
    let service = RankService::new(state.service_context());
    let response = service.punish(request).await?;
    Ok(Json(response))
}
