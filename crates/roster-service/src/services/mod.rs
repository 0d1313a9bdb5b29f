//! Workflow services
//!
//! Each service borrows the [`ServiceContext`] and runs one workflow per call:
//! validate input, check preconditions, then perform the write(s).

pub mod context;
pub mod course;
pub mod error;
pub mod guard;
pub mod member;
pub mod onboarding;
pub mod profile;
pub mod provisioning;
pub mod rank;
pub mod sale;
pub mod tag;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use course::CourseService;
pub use error::{ServiceError, ServiceResult};
pub use guard::PendingRequestGuard;
pub use member::MemberService;
pub use onboarding::OnboardingService;
pub use profile::ProfileService;
pub use provisioning::ProvisioningService;
pub use rank::RankService;
pub use sale::SaleService;
pub use tag::TagService;
