//! Course handlers
//!
//! Endpoints for course applications and the per-company catalogue.

use axum::{
    extract::{Path, State},
    Json,
};
use roster_service::{
    ApplyCourseRequest, CompanyCoursesResponse, CourseApplicationResponse, CourseService,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Record a course completion
///
/// POST /courses/applications
pub async fn apply_course(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ApplyCourseRequest>,
) -> ApiResult<Json<CourseApplicationResponse>> {
    let service = CourseService::new(state.service_context());
    let response = service.apply_course(request).await?;
    Ok(Json(response))
}

/// List the courses of a company, by id or acronym
///
/// GET /companies/{company}/courses
pub async fn get_company_courses(
    State(state): State<AppState>,
    Path(company): Path<String>,
) -> ApiResult<Json<CompanyCoursesResponse>> {
    if company.trim().is_empty() {
        return Err(ApiError::invalid_path("company is required"));
    }

    let service = CourseService::new(state.service_context());
    let response = service.company_courses(&company).await?;
    Ok(Json(response))
}
