//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    ApplyCourseRequest, ConfirmChallengeRequest, CourseTarget, CreateRankChangeRequest,
    CreateSaleRequest, CreateTagRequest, IssueChallengeRequest, ListMembersQuery,
    RegisterRequest, SeedMemberRequest, UpdateMemberStatusRequest,
};

pub use responses::{
    ChallengeResponse, CompanyCoursesResponse, CompanyResponse,
    CompletionResponse, CourseApplicationResponse, CourseResponse, HealthChecks, HealthResponse,
    MemberProfileResponse, MemberResponse, RankChangeResponse, RankChangeSummary, RankResponse,
    ReadinessResponse, RegistrationResponse, SaleResponse, TagRequestResponse, TimelineEntry,
    TimelineKind, VerificationResponse,
};

pub use mappers::{CompletionWithDetails, RankChangeWithPromoter};
