//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in roster-core.
//! Each repository handles database operations for a specific domain entity.

mod completion;
mod course;
mod credential;
mod error;
mod member;
mod rank_change;
mod tag_request;

pub use completion::PgCompletionRepository;
pub use course::PgCourseRepository;
pub use credential::PgCredentialStore;
pub use member::PgMemberRepository;
pub use rank_change::PgRankChangeRepository;
pub use tag_request::PgTagRequestRepository;
