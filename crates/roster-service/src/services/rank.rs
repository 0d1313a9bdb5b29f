//! Promotion and punishment requests
//!
//! Both directions record an awaiting request and leave the member's rank
//! untouched; the rank moves only when a reviewer approves the request.

use roster_core::entities::{Member, RankChangeKind, RankChangeRequest};
use roster_core::{normalize_email, ranks, DomainError, Rank};
use tracing::{info, instrument, warn};

use crate::dto::{CreateRankChangeRequest, RankChangeResponse, RankResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::guard::PendingRequestGuard;

pub struct RankService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RankService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The rank table in ascending order
    pub fn rank_table(&self) -> Vec<RankResponse> {
        ranks::all().iter().copied().map(RankResponse::from).collect()
    }

    /// Request a promotion to the next rank
    #[instrument(skip(self, request), fields(affected = %request.affected_nick))]
    pub async fn promote(&self, request: CreateRankChangeRequest) -> ServiceResult<RankChangeResponse> {
        self.request_change(RankChangeKind::Promotion, request).await
    }

    /// Request a punishment down to the previous rank
    #[instrument(skip(self, request), fields(affected = %request.affected_nick))]
    pub async fn punish(&self, request: CreateRankChangeRequest) -> ServiceResult<RankChangeResponse> {
        self.request_change(RankChangeKind::Punishment, request).await
    }

    async fn request_change(
        &self,
        kind: RankChangeKind,
        request: CreateRankChangeRequest,
    ) -> ServiceResult<RankChangeResponse> {
        let email = normalize_email(&request.email);
        let nick = request.affected_nick.trim();

        let promoter = self
            .ctx
            .member_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::PromoterNotFound(email.to_string()))?;

        let affected = self
            .ctx
            .member_repo()
            .find_by_nick(nick)
            .await?
            .filter(|m| m.active)
            .ok_or_else(|| DomainError::AffectedNotFoundOrInactive(nick.to_string()))?;

        let target = target_rank(kind, &affected)?;

        if PendingRequestGuard::new(self.ctx)
            .has_awaiting_request(affected.id, kind)
            .await?
        {
            warn!(member_id = %affected.id, "Rank change rejected: request already awaiting");
            return Err(DomainError::PendingRequestExists.into());
        }

        let record = RankChangeRequest::new(
            kind,
            promoter.id,
            affected.id,
            affected.rank_id,
            target.id,
            request.reason.trim(),
        )
        .with_permission(request.permission.filter(|p| !p.trim().is_empty()))
        .with_promoter_tag(promoter.tag.clone());

        self.ctx.rank_change_repo().create(&record).await?;

        info!(
            request_id = %record.id,
            kind = %kind,
            promoter = %promoter.nick,
            affected = %affected.nick,
            from = affected.rank_id,
            to = target.id,
            "Rank change requested"
        );

        Ok(RankChangeResponse {
            request_id: record.id,
            affected_nick: affected.nick,
            previous_rank_name: ranks::name_of(record.previous_rank_id).to_string(),
            new_rank_name: target.name.to_string(),
            kind: kind.to_string(),
            status: record.status.to_string(),
        })
    }
}

/// Rank a gated request moves the member to
fn target_rank(kind: RankChangeKind, member: &Member) -> Result<Rank, DomainError> {
    let current = member
        .rank()
        .ok_or(DomainError::InvalidRank(member.rank_id))?;

    match kind {
        RankChangeKind::Promotion => {
            ranks::rank_after(current.id).ok_or(DomainError::AlreadyAtMaxRank)
        }
        RankChangeKind::Punishment => {
            ranks::rank_before(current.id).ok_or(DomainError::AlreadyAtMinRank)
        }
        RankChangeKind::Sale => Err(DomainError::InternalError(
            "sales do not go through rank change requests".to_string(),
        )),
    }
}
