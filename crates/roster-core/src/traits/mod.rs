//! Traits implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    CompletionRepository, CourseRepository, IdentityProvider, MemberRepository,
    ProfileDirectory, RankChangeRepository, RepoResult, TagRequestRepository,
};
