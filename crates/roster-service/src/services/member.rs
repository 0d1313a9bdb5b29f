//! Member administration
//!
//! Pre-seeding nicks, activation and roster listing. Members are never
//! deleted; deactivation is the only way out of the roster.

use roster_core::entities::{Member, MemberDefaults};
use roster_core::{ranks, DomainError, Tag};
use tracing::{info, instrument};

use crate::dto::{MemberResponse, SeedMemberRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Pre-register a nick so its owner can complete onboarding
    #[instrument(skip(self, request), fields(nick = %request.nick))]
    pub async fn seed_member(&self, request: SeedMemberRequest) -> ServiceResult<MemberResponse> {
        let rank_id = request.rank_id.unwrap_or(ranks::MIN_RANK_ID);
        if !ranks::is_valid(rank_id) {
            return Err(DomainError::InvalidRank(rank_id).into());
        }

        let tag = request.tag.as_deref().map(Tag::parse).transpose()?;

        let mut member = Member::with_defaults(
            request.nick.trim(),
            MemberDefaults::seed().with_rank(rank_id),
        );
        member.tag = tag.map(Tag::into_inner);

        self.ctx.member_repo().create(&member).await?;

        info!(member_id = %member.id, rank_id, "Member seeded");
        Ok(MemberResponse::from(member))
    }

    /// Activate or deactivate a member
    #[instrument(skip(self))]
    pub async fn set_active(&self, nick: &str, active: bool) -> ServiceResult<MemberResponse> {
        let repo = self.ctx.member_repo();

        if !repo.set_active(nick, active).await? {
            return Err(DomainError::MemberNotFound(nick.to_string()).into());
        }

        let member = repo
            .find_by_nick(nick)
            .await?
            .ok_or_else(|| DomainError::MemberNotFound(nick.to_string()))?;

        info!(member_id = %member.id, active, "Member status changed");
        Ok(MemberResponse::from(member))
    }

    #[instrument(skip(self))]
    pub async fn get_member(&self, nick: &str) -> ServiceResult<MemberResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_nick(nick)
            .await?
            .ok_or_else(|| DomainError::MemberNotFound(nick.to_string()))?;

        Ok(MemberResponse::from(member))
    }

    /// Roster page, highest ranks first
    #[instrument(skip(self))]
    pub async fn list_members(
        &self,
        active: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().list(active, limit, offset).await?;
        Ok(members.into_iter().map(MemberResponse::from).collect())
    }
}
