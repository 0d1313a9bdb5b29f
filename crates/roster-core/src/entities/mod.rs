//! Domain entities - core business objects

mod course;
mod member;
mod profile;
mod rank_change;
mod tag_request;

pub use course::{
    parse_date, parse_time, Company, Course, CourseCompletion, FOUNDATIONAL_COURSES,
    LEGACY_COMPANY_ACRONYM,
};
pub use member::{normalize_email, Member, MemberDefaults};
pub use profile::ExternalProfile;
pub use rank_change::{RankChangeKind, RankChangeRequest, RequestStatus};
pub use tag_request::TagRequest;
