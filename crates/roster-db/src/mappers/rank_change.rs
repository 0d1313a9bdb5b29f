//! RankChangeRequest entity <-> model mapper

use roster_core::entities::{RankChangeKind, RankChangeRequest, RequestStatus};

use crate::models::RankChangeRequestModel;

/// Convert database kind string to RankChangeKind.
/// The column carries a CHECK constraint, so the fallback is unreachable in practice.
pub fn parse_kind(kind: &str) -> RankChangeKind {
    kind.parse().unwrap_or(RankChangeKind::Promotion)
}

/// Convert database status string to RequestStatus; unknown values count as rejected
pub fn parse_status(status: &str) -> RequestStatus {
    status.parse().unwrap_or(RequestStatus::Rejected)
}

/// Convert RankChangeRequestModel to RankChangeRequest entity
impl From<RankChangeRequestModel> for RankChangeRequest {
    fn from(model: RankChangeRequestModel) -> Self {
        RankChangeRequest {
            id: model.id,
            promoter_id: model.promoter_member_id,
            affected_id: model.affected_member_id,
            previous_rank_id: model.previous_rank_id,
            new_rank_id: model.new_rank_id,
            kind: parse_kind(&model.kind),
            reason: model.reason,
            permission: model.permission,
            status: parse_status(&model.status),
            promoter_tag: model.promoter_tag,
            created_at: model.created_at,
        }
    }
}
