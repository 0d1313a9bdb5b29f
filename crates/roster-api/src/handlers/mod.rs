//! Route handlers
//!
//! All HTTP request handlers organized by workflow.

pub mod courses;
pub mod health;
pub mod members;
pub mod onboarding;
pub mod promotions;
pub mod ranks;
pub mod sales;
pub mod tags;
