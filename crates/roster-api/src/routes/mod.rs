//! Route definitions
//!
//! All API routes organized by workflow and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{courses, health, members, onboarding, promotions, ranks, sales, tags};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(rank_routes())
        .merge(course_routes())
        .merge(onboarding_routes())
        .merge(member_routes())
}

/// Rank table and rank-changing workflows
fn rank_routes() -> Router<AppState> {
    Router::new()
        .route("/ranks", get(ranks::list_ranks))
        .route("/promotions", post(promotions::create_promotion))
        .route("/punishments", post(promotions::create_punishment))
        .route("/sales", post(sales::create_sale))
}

fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/courses/applications", post(courses::apply_course))
        .route(
            "/companies/:company/courses",
            get(courses::get_company_courses),
        )
}

fn onboarding_routes() -> Router<AppState> {
    Router::new()
        .route("/onboarding/challenge", post(onboarding::issue_challenge))
        .route("/onboarding/confirm", post(onboarding::confirm_challenge))
        .route("/onboarding/register", post(onboarding::register))
}

/// Roster administration, profiles and tags
fn member_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/members",
            get(members::list_members).post(members::seed_member),
        )
        .route("/members/:nick", get(members::get_member_profile))
        .route("/members/:nick/status", patch(members::update_member_status))
        .route("/tags", post(tags::create_tag_request))
}
