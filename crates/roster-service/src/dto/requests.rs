//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Workflow-specific rules (rank bounds, date formats, tag shape) are checked by
//! the services, so the messages here only cover missing or oversized fields.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Rank Change Requests
// ============================================================================

/// Promotion or punishment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRankChangeRequest {
    /// Member whose rank changes
    #[validate(length(min = 1, max = 64, message = "affected_nick is required"))]
    pub affected_nick: String,

    #[validate(length(min = 1, max = 2000, message = "reason is required"))]
    pub reason: String,

    /// Email of the promoter
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Free-text note on who authorized the change
    #[serde(default, alias = "optional_permission")]
    #[validate(length(max = 500, message = "permission must be at most 500 characters"))]
    pub permission: Option<String>,
}

// ============================================================================
// Sale Requests
// ============================================================================

/// Rank sale request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSaleRequest {
    #[validate(length(min = 1, max = 64, message = "buyer_nick is required"))]
    pub buyer_nick: String,

    pub purchased_rank_id: i32,

    #[validate(email(message = "Invalid email format"))]
    pub seller_email: String,

    #[validate(length(min = 1, max = 16, message = "seller_tag is required"))]
    pub seller_tag: String,
}

// ============================================================================
// Course Requests
// ============================================================================

/// How the applied course is identified
///
/// ```json
/// { "kind": "company", "course_id": 3, "company_id": 1 }
/// { "kind": "legacy", "course_name": "CFI" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CourseTarget {
    /// Course by id, scoped to a company
    Company { course_id: i32, company_id: i32 },
    /// Course by acronym inside the legacy training company
    Legacy { course_name: String },
}

/// Course application request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApplyCourseRequest {
    pub course: CourseTarget,

    #[validate(length(min = 1, max = 64, message = "student_nick is required"))]
    pub student_nick: String,

    /// `YYYY-MM-DD`
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,

    /// `HH:MM` or `HH:MM:SS`
    #[validate(length(min = 1, message = "time is required"))]
    pub time: String,

    #[validate(email(message = "Invalid email format"))]
    pub instructor_email: String,
}

// ============================================================================
// Onboarding Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IssueChallengeRequest {
    #[validate(length(min = 1, max = 64, message = "nick is required"))]
    pub nick: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConfirmChallengeRequest {
    #[validate(length(min = 1, max = 64, message = "nick is required"))]
    pub nick: String,

    #[validate(length(min = 1, max = 64, message = "code is required"))]
    pub code: String,
}

/// Credential creation after the challenge was confirmed
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64, message = "nick is required"))]
    pub nick: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Strength is checked by the onboarding service
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

// ============================================================================
// Tag Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTagRequest {
    /// Email of the member asking for the tag
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 16, message = "tag is required"))]
    pub tag: String,
}

// ============================================================================
// Member Requests
// ============================================================================

/// Pre-register a nick so its owner can go through onboarding
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SeedMemberRequest {
    #[validate(length(min = 1, max = 64, message = "nick must be 1-64 characters"))]
    pub nick: String,

    pub rank_id: Option<i32>,

    pub tag: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMemberStatusRequest {
    pub active: bool,
}

/// Roster listing filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMembersQuery {
    pub active: Option<bool>,
}
