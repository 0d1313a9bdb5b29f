//! Onboarding handlers
//!
//! The three steps a pre-registered member walks through to get system
//! access: take a code, put it in the profile motto, then register.

use axum::{extract::State, Json};
use roster_service::{
    ChallengeResponse, ConfirmChallengeRequest, IssueChallengeRequest, OnboardingService,
    RegisterRequest, RegistrationResponse, VerificationResponse,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// POST /onboarding/challenge
pub async fn issue_challenge(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IssueChallengeRequest>,
) -> ApiResult<Json<ChallengeResponse>> {
    let service = OnboardingService::new(state.service_context());
    let response = service.issue_challenge(request).await?;
    Ok(Json(response))
}

/// POST /onboarding/confirm
pub async fn confirm_challenge(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ConfirmChallengeRequest>,
) -> ApiResult<Json<VerificationResponse>> {
    let service = OnboardingService::new(state.service_context());
    let response = service.confirm_challenge(request).await?;
    Ok(Json(response))
}

/// POST /onboarding/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Json<RegistrationResponse>> {
    let service = OnboardingService::new(state.service_context());
    let response = service.complete_registration(request).await?;
    Ok(Json(response))
}
