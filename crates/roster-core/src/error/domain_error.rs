//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(String),

    #[error("Promoter not found: {0}")]
    PromoterNotFound(String),

    #[error("Member not found or inactive: {0}")]
    AffectedNotFoundOrInactive(String),

    #[error("Seller not found: {0}")]
    SellerNotFound(String),

    #[error("Instructor not found: {0}")]
    InstructorNotFound(String),

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid rank: {0}")]
    InvalidRank(i32),

    #[error("Invalid tag '{0}': expected exactly 3 letters")]
    InvalidTag(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Member is already at the highest rank")]
    AlreadyAtMaxRank,

    #[error("Member is already at the lowest rank")]
    AlreadyAtMinRank,

    #[error("Member already has a request awaiting review")]
    PendingRequestExists,

    #[error("Student has already completed this course")]
    AlreadyCompleted,

    #[error("Member is already registered")]
    AlreadyRegistered,

    #[error("Member already has an open tag request")]
    DuplicateTagRequest,

    #[error("Verification code does not match the profile motto")]
    ChallengeMismatch,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Member is not active")]
    MemberInactive,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Nick already in use: {0}")]
    NickAlreadyExists(String),

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Member already has system access")]
    SystemAccessAlreadyGranted,

    // =========================================================================
    // Upstream Errors
    // =========================================================================
    #[error("Profile lookup failed: {0}")]
    ProfileLookupFailed(String),

    /// Onboarding for a nick nobody pre-seeded. Reported as a server-side
    /// lookup failure rather than a 404, which existing clients rely on.
    #[error("Nick is not pre-registered: {0}")]
    NotPreRegistered(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Identity provider error: {0}")]
    IdentityError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::PromoterNotFound(_) => "UNKNOWN_PROMOTER",
            Self::AffectedNotFoundOrInactive(_) => "UNKNOWN_OR_INACTIVE_MEMBER",
            Self::SellerNotFound(_) => "UNKNOWN_SELLER",
            Self::InstructorNotFound(_) => "UNKNOWN_INSTRUCTOR",
            Self::StudentNotFound(_) => "UNKNOWN_STUDENT",
            Self::CourseNotFound(_) => "UNKNOWN_COURSE",
            Self::CompanyNotFound(_) => "UNKNOWN_COMPANY",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidRank(_) => "INVALID_RANK",
            Self::InvalidTag(_) => "INVALID_TAG",
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            // Business Rules
            Self::AlreadyAtMaxRank => "ALREADY_AT_MAX_RANK",
            Self::AlreadyAtMinRank => "ALREADY_AT_MIN_RANK",
            Self::PendingRequestExists => "PENDING_REQUEST_EXISTS",
            Self::AlreadyCompleted => "ALREADY_COMPLETED",
            Self::AlreadyRegistered => "ALREADY_REGISTERED",
            Self::DuplicateTagRequest => "DUPLICATE_TAG_REQUEST",
            Self::ChallengeMismatch => "CHALLENGE_MISMATCH",

            // Authorization
            Self::MemberInactive => "MEMBER_INACTIVE",

            // Conflict
            Self::NickAlreadyExists(_) => "NICK_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::SystemAccessAlreadyGranted => "SYSTEM_ACCESS_ALREADY_GRANTED",

            // Upstream
            Self::ProfileLookupFailed(_) => "PROFILE_LOOKUP_FAILED",
            Self::NotPreRegistered(_) => "NOT_PRE_REGISTERED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::IdentityError(_) => "IDENTITY_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MemberNotFound(_)
                | Self::PromoterNotFound(_)
                | Self::AffectedNotFoundOrInactive(_)
                | Self::SellerNotFound(_)
                | Self::InstructorNotFound(_)
                | Self::StudentNotFound(_)
                | Self::CourseNotFound(_)
                | Self::CompanyNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidRank(_)
                | Self::InvalidTag(_)
                | Self::WeakPassword(_)
        )
    }

    /// Check if this is a workflow rule violation
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Self::AlreadyAtMaxRank
                | Self::AlreadyAtMinRank
                | Self::PendingRequestExists
                | Self::AlreadyCompleted
                | Self::AlreadyRegistered
                | Self::DuplicateTagRequest
                | Self::ChallengeMismatch
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MemberInactive)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::NickAlreadyExists(_) | Self::EmailAlreadyExists | Self::SystemAccessAlreadyGranted
        )
    }

    /// Check if the profile directory caused this error
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::ProfileLookupFailed(_))
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authorization() {
            403
        } else if self.is_validation() || self.is_rule_violation() || self.is_upstream() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }
}
