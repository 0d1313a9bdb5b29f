//! Rank table handler

use axum::{extract::State, Json};
use roster_service::{RankResponse, RankService};

use crate::state::AppState;

/// GET /ranks
pub async fn list_ranks(State(state): State<AppState>) -> Json<Vec<RankResponse>> {
    Json(RankService::new(state.service_context()).rank_table())
}
