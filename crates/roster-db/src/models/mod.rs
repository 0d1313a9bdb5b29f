//! Database models - SQLx-compatible structs for PostgreSQL tables

mod course;
mod member;
mod rank_change;
mod tag_request;

pub use course::{CompanyModel, CourseCompletionModel, CourseModel};
pub use member::MemberModel;
pub use rank_change::RankChangeRequestModel;
pub use tag_request::TagRequestModel;
