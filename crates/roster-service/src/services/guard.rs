//! Pending-request guard
//!
//! Fast-path check run before a gated rank change is inserted. The store's
//! single-awaiting-slot constraint stays authoritative, so a request that
//! slips past this check still fails with `PendingRequestExists`.

use roster_core::entities::RankChangeKind;
use tracing::instrument;
use uuid::Uuid;

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct PendingRequestGuard<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PendingRequestGuard<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Whether a new `kind` request for the member would be blocked.
    ///
    /// Promotions and punishments share one awaiting slot; sales never wait.
    #[instrument(skip(self))]
    pub async fn has_awaiting_request(
        &self,
        member_id: Uuid,
        kind: RankChangeKind,
    ) -> ServiceResult<bool> {
        if !kind.is_gated() {
            return Ok(false);
        }

        Ok(self.ctx.rank_change_repo().has_awaiting(member_id).await?)
    }
}
