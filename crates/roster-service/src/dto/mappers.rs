//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use roster_core::entities::{
    Company, Course, CourseCompletion, Member, RankChangeRequest, TagRequest,
};
use roster_core::{ranks, Rank};

use super::responses::{
    CompanyResponse, CompletionResponse, CourseResponse, MemberResponse, RankChangeSummary,
    RankResponse, TagRequestResponse,
};

// ============================================================================
// Rank & Member Mappers
// ============================================================================

impl From<Rank> for RankResponse {
    fn from(rank: Rank) -> Self {
        Self {
            id: rank.id,
            name: rank.name.to_string(),
        }
    }
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            nick: member.nick.clone(),
            email: member.email.clone(),
            rank_id: member.rank_id,
            rank_name: member.rank_name().to_string(),
            active: member.active,
            has_system_access: member.has_system_access,
            has_contract: member.has_contract,
            tag: member.tag.clone(),
            promoter_tag: member.promoter_tag.clone(),
            created_at: member.created_at,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self::from(&member)
    }
}

// ============================================================================
// Course Mappers
// ============================================================================

impl From<&Company> for CompanyResponse {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id,
            acronym: company.acronym.clone(),
            name: company.name.clone(),
        }
    }
}

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            company_id: course.company_id,
            acronym: course.acronym.clone(),
            name: course.name.clone(),
            mandatory: course.mandatory,
            rank_id: course.rank_id,
        }
    }
}

/// Completion joined with its course and instructor, when they still exist
pub struct CompletionWithDetails<'a> {
    pub completion: &'a CourseCompletion,
    pub course: Option<&'a Course>,
    pub instructor: Option<&'a Member>,
}

impl From<CompletionWithDetails<'_>> for CompletionResponse {
    fn from(data: CompletionWithDetails<'_>) -> Self {
        Self {
            id: data.completion.id,
            course_id: data.completion.course_id,
            course_acronym: data.course.map(|c| c.acronym.clone()),
            course_name: data.course.map(|c| c.name.clone()),
            instructor_nick: data.instructor.map(|m| m.nick.clone()),
            date_applied: data.completion.date_applied,
            time_applied: data.completion.time_applied,
            created_at: data.completion.created_at,
        }
    }
}

// ============================================================================
// Request Mappers
// ============================================================================

/// Rank change joined with its promoter, when it still exists
pub struct RankChangeWithPromoter<'a> {
    pub request: &'a RankChangeRequest,
    pub promoter: Option<&'a Member>,
}

impl From<RankChangeWithPromoter<'_>> for RankChangeSummary {
    fn from(data: RankChangeWithPromoter<'_>) -> Self {
        let request = data.request;
        Self {
            id: request.id,
            kind: request.kind.to_string(),
            status: request.status.to_string(),
            reason: request.reason.clone(),
            permission: request.permission.clone(),
            previous_rank_name: ranks::name_of(request.previous_rank_id).to_string(),
            new_rank_name: ranks::name_of(request.new_rank_id).to_string(),
            promoter_nick: data.promoter.map(|m| m.nick.clone()),
            promoter_tag: request.promoter_tag.clone(),
            created_at: request.created_at,
        }
    }
}

impl From<&TagRequest> for TagRequestResponse {
    fn from(request: &TagRequest) -> Self {
        Self {
            id: request.id,
            owner_id: request.owner_id,
            requested_tag: request.requested_tag.clone(),
            status: request.status.to_string(),
            created_at: request.created_at,
        }
    }
}
