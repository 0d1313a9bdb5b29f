//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Uniqueness invariants are enforced by the
//! store: `create` methods report a violated constraint as the matching
//! domain error instead of requiring a read-then-write check.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Company, Course, CourseCompletion, ExternalProfile, Member, RankChangeRequest, TagRequest,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Member>>;

    /// Find several members at once (missing ids are skipped)
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Member>>;

    /// Find member by nick (exact match)
    async fn find_by_nick(&self, nick: &str) -> RepoResult<Option<Member>>;

    /// Find member by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>>;

    /// Create a new member; a taken nick yields `NickAlreadyExists`
    async fn create(&self, member: &Member) -> RepoResult<()>;

    /// Create a member unless the nick is taken. Returns `true` if inserted.
    async fn create_if_absent(&self, member: &Member) -> RepoResult<bool>;

    /// Persist rank, flags and tags of an existing member
    async fn update(&self, member: &Member) -> RepoResult<()>;

    /// Activate or deactivate by nick. Returns `false` if no such member.
    async fn set_active(&self, nick: &str, active: bool) -> RepoResult<bool>;

    /// Set email and open the onboarding gate; a taken email yields `EmailAlreadyExists`
    async fn grant_system_access(&self, id: Uuid, email: &str) -> RepoResult<()>;

    /// Close a gate opened with `email`, restoring the member's previous email
    async fn revoke_system_access(
        &self,
        id: Uuid,
        email: &str,
        previous_email: Option<&str>,
    ) -> RepoResult<()>;

    /// List members ordered by rank descending, then nick
    async fn list(&self, active: Option<bool>, limit: i64, offset: i64)
        -> RepoResult<Vec<Member>>;
}

// ============================================================================
// Rank Change Repository
// ============================================================================

#[async_trait]
pub trait RankChangeRepository: Send + Sync {
    /// Whether the member has a promotion or punishment awaiting review
    async fn has_awaiting(&self, affected_id: Uuid) -> RepoResult<bool>;

    /// Append a request; a second awaiting request yields `PendingRequestExists`
    async fn create(&self, request: &RankChangeRequest) -> RepoResult<()>;

    /// History of a member, newest first
    async fn find_by_affected(&self, affected_id: Uuid) -> RepoResult<Vec<RankChangeRequest>>;
}

// ============================================================================
// Course Repository
// ============================================================================

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_ids(&self, ids: &[i32]) -> RepoResult<Vec<Course>>;

    /// Find a course only if it belongs to the given company
    async fn find_in_company(&self, course_id: i32, company_id: i32)
        -> RepoResult<Option<Course>>;

    /// Find a course by acronym within the company with the given acronym
    async fn find_by_acronym(
        &self,
        company_acronym: &str,
        course_acronym: &str,
    ) -> RepoResult<Option<Course>>;

    async fn find_company(&self, id: i32) -> RepoResult<Option<Company>>;

    /// Case-insensitive company lookup
    async fn find_company_by_acronym(&self, acronym: &str) -> RepoResult<Option<Company>>;

    async fn list_by_company(&self, company_id: i32) -> RepoResult<Vec<Course>>;
}

// ============================================================================
// Course Completion Repository
// ============================================================================

#[async_trait]
pub trait CompletionRepository: Send + Sync {
    async fn exists(&self, course_id: i32, student_id: Uuid) -> RepoResult<bool>;

    /// Record a completion; a repeat (course, student) pair yields `AlreadyCompleted`
    async fn create(&self, completion: &CourseCompletion) -> RepoResult<()>;

    /// Completions of a student, newest first
    async fn find_by_student(&self, student_id: Uuid) -> RepoResult<Vec<CourseCompletion>>;
}

// ============================================================================
// Tag Request Repository
// ============================================================================

#[async_trait]
pub trait TagRequestRepository: Send + Sync {
    /// Whether the member has an awaiting or approved tag request
    async fn has_open(&self, owner_id: Uuid) -> RepoResult<bool>;

    /// Insert a request; a second open request yields `DuplicateTagRequest`
    async fn create(&self, request: &TagRequest) -> RepoResult<()>;

    async fn find_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<TagRequest>>;
}

// ============================================================================
// External collaborators
// ============================================================================

/// Public profile lookup used by the onboarding gate
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// Fetch a profile by nick; any failure is reported as `ProfileLookupFailed`
    async fn fetch_profile(&self, nick: &str) -> RepoResult<ExternalProfile>;
}

/// Credential creation for members passing the onboarding gate
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Store credentials for a member whose gate is already open under
    /// `email`; any other state yields `SystemAccessAlreadyGranted`.
    async fn create_credentials(&self, member_id: Uuid, email: &str, password: &str)
        -> RepoResult<()>;
}
