//! # roster-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    normalize_email, Company, Course, CourseCompletion, ExternalProfile, Member, MemberDefaults,
    RankChangeKind, RankChangeRequest, RequestStatus, TagRequest,
};
pub use error::DomainError;
pub use traits::{
    CompletionRepository, CourseRepository, IdentityProvider, MemberRepository,
    ProfileDirectory, RankChangeRepository, RepoResult, TagRequestRepository,
};
pub use value_objects::{ranks, OnboardingCode, Rank, Tag};
