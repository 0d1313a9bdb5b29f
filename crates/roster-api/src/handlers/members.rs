//! Member handlers
//!
//! Roster administration and the member profile page.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use roster_service::{
    ListMembersQuery, MemberProfileResponse, MemberResponse, MemberService, ProfileService,
    SeedMemberRequest, UpdateMemberStatusRequest,
};

use crate::extractors::{Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// List members, highest rank first
///
/// GET /members?active=&limit=&offset=
pub async fn list_members(
    State(state): State<AppState>,
    Query(filter): Query<ListMembersQuery>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let members = service
        .list_members(filter.active, pagination.limit, pagination.offset)
        .await?;
    Ok(Json(members))
}

/// Pre-register a member
///
/// POST /members
pub async fn seed_member(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SeedMemberRequest>,
) -> ApiResult<Created<Json<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let member = service.seed_member(request).await?;
    Ok(Created(Json(member)))
}

/// Member profile with history and timeline
///
/// GET /members/{nick}
pub async fn get_member_profile(
    State(state): State<AppState>,
    Path(nick): Path<String>,
) -> ApiResult<Json<MemberProfileResponse>> {
    let nick = require_nick(&nick)?;
    let service = ProfileService::new(state.service_context());
    let profile = service.member_profile(nick).await?;
    Ok(Json(profile))
}

/// Activate or deactivate a member
///
/// PATCH /members/{nick}/status
pub async fn update_member_status(
    State(state): State<AppState>,
    Path(nick): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateMemberStatusRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let nick = require_nick(&nick)?;
    let service = MemberService::new(state.service_context());
    let member = service.set_active(nick, request.active).await?;
    Ok(Json(member))
}

fn require_nick(nick: &str) -> Result<&str, ApiError> {
    let nick = nick.trim();
    if nick.is_empty() {
        return Err(ApiError::invalid_path("nick is required"));
    }
    Ok(nick)
}
