//! # roster-service
//!
//! Application layer containing the workflow services and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    CourseService, MemberService, OnboardingService, PendingRequestGuard, ProfileService,
    ProvisioningService, RankService, SaleService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, TagService,
};

// Re-export DTOs for handlers
pub use dto::*;
