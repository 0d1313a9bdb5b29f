//! Member provisioning
//!
//! The one place that creates members implicitly. Sales and foundational
//! courses call [`ProvisioningService::ensure_member`] with their own defaults.

use roster_core::entities::{Member, MemberDefaults};
use roster_core::DomainError;
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ProvisioningService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProvisioningService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Return the member with `nick`, creating it from `defaults` if unknown.
    ///
    /// The boolean is `true` only when this call inserted the member. If the
    /// nick is claimed between lookup and insert, the existing row is
    /// returned instead of creating a duplicate.
    #[instrument(skip(self, defaults))]
    pub async fn ensure_member(
        &self,
        nick: &str,
        defaults: MemberDefaults,
    ) -> ServiceResult<(Member, bool)> {
        let repo = self.ctx.member_repo();

        if let Some(existing) = repo.find_by_nick(nick).await? {
            return Ok((existing, false));
        }

        let member = Member::with_defaults(nick, defaults);
        if repo.create_if_absent(&member).await? {
            info!(member_id = %member.id, nick = %member.nick, rank_id = member.rank_id, "Member provisioned");
            return Ok((member, true));
        }

        debug!("Nick claimed concurrently, using existing member");
        let existing = repo
            .find_by_nick(nick)
            .await?
            .ok_or_else(|| DomainError::MemberNotFound(nick.to_string()))?;
        Ok((existing, false))
    }
}
