//! Member profile and activity timeline

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDateTime, Utc};
use roster_core::entities::{
    Course, CourseCompletion, Member, RankChangeKind, RankChangeRequest, TagRequest,
};
use roster_core::{ranks, DomainError};
use tracing::instrument;
use uuid::Uuid;

use crate::dto::{
    CompletionResponse, CompletionWithDetails, MemberProfileResponse, MemberResponse,
    RankChangeSummary, RankChangeWithPromoter, TagRequestResponse, TimelineEntry, TimelineKind,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

const UNKNOWN_ACTOR: &str = "Desconhecido";
const SYSTEM_ACTOR: &str = "Sistema";
const ORG_TAG: &str = "DDM";

pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Everything on a member's record, plus the merged timeline (newest first)
    #[instrument(skip(self))]
    pub async fn member_profile(&self, nick: &str) -> ServiceResult<MemberProfileResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_nick(nick)
            .await?
            .ok_or_else(|| DomainError::MemberNotFound(nick.to_string()))?;

        let completions = self.ctx.completion_repo().find_by_student(member.id).await?;
        let changes = self.ctx.rank_change_repo().find_by_affected(member.id).await?;
        let tags = self.ctx.tag_request_repo().find_by_owner(member.id).await?;

        let actors = self.load_actors(&completions, &changes).await?;
        let courses = self.load_courses(&completions).await?;

        let mut timeline = Vec::with_capacity(completions.len() + changes.len() + tags.len());
        timeline.extend(
            completions
                .iter()
                .map(|c| course_entry(c, courses.get(&c.course_id), actors.get(&c.instructor_id))),
        );
        timeline.extend(
            changes
                .iter()
                .map(|r| rank_change_entry(r, actors.get(&r.promoter_id))),
        );
        timeline.extend(tags.iter().map(tag_entry));
        timeline.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));

        let completions = completions
            .iter()
            .map(|completion| {
                CompletionResponse::from(CompletionWithDetails {
                    completion,
                    course: courses.get(&completion.course_id),
                    instructor: actors.get(&completion.instructor_id),
                })
            })
            .collect();
        let rank_changes = changes
            .iter()
            .map(|request| {
                RankChangeSummary::from(RankChangeWithPromoter {
                    request,
                    promoter: actors.get(&request.promoter_id),
                })
            })
            .collect();

        Ok(MemberProfileResponse {
            mission: mission_for(&member),
            member: MemberResponse::from(member),
            courses: completions,
            rank_changes,
            tag_requests: tags.iter().map(TagRequestResponse::from).collect(),
            timeline,
        })
    }

    /// Instructors and promoters referenced by the record, in one lookup
    async fn load_actors(
        &self,
        completions: &[CourseCompletion],
        changes: &[RankChangeRequest],
    ) -> ServiceResult<HashMap<Uuid, Member>> {
        let ids: HashSet<Uuid> = completions
            .iter()
            .map(|c| c.instructor_id)
            .chain(changes.iter().map(|r| r.promoter_id))
            .collect();
        let ids: Vec<Uuid> = ids.into_iter().collect();

        let members = self.ctx.member_repo().find_by_ids(&ids).await?;
        Ok(members.into_iter().map(|m| (m.id, m)).collect())
    }

    /// Courses referenced by the completions, in one lookup
    async fn load_courses(
        &self,
        completions: &[CourseCompletion],
    ) -> ServiceResult<HashMap<i32, Course>> {
        let ids: HashSet<i32> = completions.iter().map(|c| c.course_id).collect();
        let ids: Vec<i32> = ids.into_iter().collect();

        let courses = self.ctx.course_repo().find_by_ids(&ids).await?;
        Ok(courses.into_iter().map(|c| (c.id, c)).collect())
    }
}

/// Motto a member is expected to display: `[DDM] <rank> [<sponsor tag>]`
fn mission_for(member: &Member) -> String {
    let tag = member
        .promoter_tag
        .as_deref()
        .or(member.tag.as_deref())
        .unwrap_or(ORG_TAG);
    format!("[{ORG_TAG}] {} [{tag}]", member.rank_name())
}

fn course_entry(
    completion: &CourseCompletion,
    course: Option<&Course>,
    instructor: Option<&Member>,
) -> TimelineEntry {
    // Courses are dated by when they were applied, not when they were recorded
    let occurred_at: DateTime<Utc> =
        NaiveDateTime::new(completion.date_applied, completion.time_applied).and_utc();

    TimelineEntry {
        id: completion.id,
        kind: TimelineKind::Course,
        title: course.map_or_else(|| format!("Curso {}", completion.course_id), |c| c.name.clone()),
        actor: instructor.map_or_else(|| UNKNOWN_ACTOR.to_string(), |m| m.nick.clone()),
        actor_rank: instructor.map(|m| m.rank_name().to_string()),
        status: None,
        reason: None,
        occurred_at,
    }
}

fn rank_change_entry(request: &RankChangeRequest, promoter: Option<&Member>) -> TimelineEntry {
    let new_rank = ranks::name_of(request.new_rank_id);
    let (kind, title) = match request.kind {
        RankChangeKind::Promotion => (TimelineKind::Promotion, format!("Promoção para {new_rank}")),
        RankChangeKind::Punishment => (TimelineKind::Punishment, format!("Punição para {new_rank}")),
        RankChangeKind::Sale => (TimelineKind::Sale, format!("Compra de {new_rank}")),
    };

    TimelineEntry {
        id: request.id,
        kind,
        title,
        actor: promoter.map_or_else(|| UNKNOWN_ACTOR.to_string(), |m| m.nick.clone()),
        actor_rank: promoter.map(|m| m.rank_name().to_string()),
        status: Some(request.status.to_string()),
        reason: Some(request.reason.clone()),
        occurred_at: request.created_at,
    }
}

fn tag_entry(request: &TagRequest) -> TimelineEntry {
    TimelineEntry {
        id: request.id,
        kind: TimelineKind::Tag,
        title: format!("Criação de TAG: [{}]", request.requested_tag),
        actor: SYSTEM_ACTOR.to_string(),
        actor_rank: None,
        status: Some(request.status.to_string()),
        reason: None,
        occurred_at: request.created_at,
    }
}
