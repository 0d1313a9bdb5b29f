//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Rank Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RankResponse {
    pub id: i32,
    pub name: String,
}

/// Result of a promotion or punishment request
#[derive(Debug, Clone, Serialize)]
pub struct RankChangeResponse {
    pub request_id: Uuid,
    pub affected_nick: String,
    pub previous_rank_name: String,
    pub new_rank_name: String,
    pub kind: String,
    pub status: String,
}

/// Result of a rank sale
#[derive(Debug, Clone, Serialize)]
pub struct SaleResponse {
    pub buyer_id: Uuid,
    pub buyer_nick: String,
    pub previous_rank: String,
    pub new_rank: String,
    pub seller_nick: String,
    pub created_new_member: bool,
    pub message: String,
}

// ============================================================================
// Course Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CompanyResponse {
    pub id: i32,
    pub acronym: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: i32,
    pub company_id: i32,
    pub acronym: String,
    pub name: String,
    pub mandatory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyCoursesResponse {
    pub company: CompanyResponse,
    pub courses: Vec<CourseResponse>,
}

/// Result of applying a course to a student
#[derive(Debug, Clone, Serialize)]
pub struct CourseApplicationResponse {
    pub success: bool,
    pub completion_id: Uuid,
    pub course_id: i32,
    pub course_acronym: String,
    pub student_id: Uuid,
    pub student_nick: String,
    /// Whether the student was provisioned by this application
    pub student_created: bool,
}

// ============================================================================
// Onboarding Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ChallengeResponse {
    pub nick: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationResponse {
    pub success: bool,
    pub nick: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub member: MemberResponse,
}

// ============================================================================
// Member Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub nick: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub rank_id: i32,
    pub rank_name: String,
    pub active: bool,
    pub has_system_access: bool,
    pub has_contract: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoter_tag: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagRequestResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub requested_tag: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A course on a member's record
#[derive(Debug, Clone, Serialize)]
pub struct CompletionResponse {
    pub id: Uuid,
    pub course_id: i32,
    pub course_acronym: Option<String>,
    pub course_name: Option<String>,
    pub instructor_nick: Option<String>,
    pub date_applied: NaiveDate,
    pub time_applied: NaiveTime,
    pub created_at: DateTime<Utc>,
}

/// A rank change on a member's record
#[derive(Debug, Clone, Serialize)]
pub struct RankChangeSummary {
    pub id: Uuid,
    pub kind: String,
    pub status: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    pub previous_rank_name: String,
    pub new_rank_name: String,
    pub promoter_nick: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoter_tag: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    Course,
    Promotion,
    Punishment,
    Sale,
    Tag,
}

/// One entry of the merged activity timeline
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub id: Uuid,
    pub kind: TimelineKind,
    pub title: String,
    /// Nick of whoever acted; "Sistema" for tag requests
    pub actor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_rank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Full record of one member
#[derive(Debug, Clone, Serialize)]
pub struct MemberProfileResponse {
    pub member: MemberResponse,
    /// Motto the member is expected to carry on the external profile
    pub mission: String,
    pub courses: Vec<CompletionResponse>,
    pub rank_changes: Vec<RankChangeSummary>,
    pub tag_requests: Vec<TagRequestResponse>,
    pub timeline: Vec<TimelineEntry>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
