//! Value objects - immutable types that represent domain concepts

mod onboarding_code;
pub mod ranks;
mod tag;

pub use onboarding_code::OnboardingCode;
pub use ranks::Rank;
pub use tag::Tag;
