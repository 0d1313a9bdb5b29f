//! Rank sales
//!
//! A sale sets the buyer's rank directly and is recorded as an approved
//! rank change. It skips the pending-request guard and the rank ceiling,
//! so a sale can also move a member down.
//!
//! Updating (or creating) the buyer and appending the sale record are two
//! separate writes; a failure between them leaves the rank applied without
//! its history entry.

use roster_core::entities::{MemberDefaults, RankChangeKind, RankChangeRequest};
use roster_core::{normalize_email, ranks, DomainError};
use tracing::{info, instrument};

use crate::dto::{CreateSaleRequest, SaleResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::provisioning::ProvisioningService;

pub struct SaleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SaleService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(buyer = %request.buyer_nick, rank = request.purchased_rank_id))]
    pub async fn sell(&self, request: CreateSaleRequest) -> ServiceResult<SaleResponse> {
        let rank_id = request.purchased_rank_id;
        if !ranks::is_valid(rank_id) {
            return Err(DomainError::InvalidRank(rank_id).into());
        }

        let seller_email = normalize_email(&request.seller_email);
        let seller_tag = request.seller_tag.trim();
        let buyer_nick = request.buyer_nick.trim();

        let seller = self
            .ctx
            .member_repo()
            .find_by_email(&seller_email)
            .await?
            .ok_or_else(|| DomainError::SellerNotFound(seller_email.to_string()))?;

        let (mut buyer, created) = ProvisioningService::new(self.ctx)
            .ensure_member(buyer_nick, MemberDefaults::sold(rank_id, seller_tag))
            .await?;

        let previous_rank_id = if created {
            ranks::MIN_RANK_ID
        } else {
            let previous = buyer.rank_id;
            buyer.apply_sale(rank_id, seller_tag);
            self.ctx.member_repo().update(&buyer).await?;
            previous
        };

        let record = RankChangeRequest::new(
            RankChangeKind::Sale,
            seller.id,
            buyer.id,
            previous_rank_id,
            rank_id,
            format!("Venda de cargo realizada por {}", seller.nick),
        )
        .with_promoter_tag(Some(seller_tag.to_string()));

        self.ctx.rank_change_repo().create(&record).await?;

        let new_rank = ranks::name_of(rank_id).to_string();
        let message = if created {
            format!("Novo militar {} cadastrado com patente {new_rank}", buyer.nick)
        } else {
            format!("Militar {} promovido para {new_rank}", buyer.nick)
        };

        info!(
            request_id = %record.id,
            seller = %seller.nick,
            buyer = %buyer.nick,
            from = previous_rank_id,
            to = rank_id,
            created,
            "Rank sold"
        );

        Ok(SaleResponse {
            buyer_id: buyer.id,
            buyer_nick: buyer.nick,
            previous_rank: ranks::name_of(previous_rank_id).to_string(),
            new_rank,
            seller_nick: seller.nick,
            created_new_member: created,
            message,
        })
    }
}
