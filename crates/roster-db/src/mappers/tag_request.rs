//! TagRequest entity <-> model mapper

use roster_core::entities::TagRequest;

use super::rank_change::parse_status;
use crate::models::TagRequestModel;

impl From<TagRequestModel> for TagRequest {
    fn from(model: TagRequestModel) -> Self {
        TagRequest {
            id: model.id,
            owner_id: model.owner_id,
            requested_tag: model.requested_tag,
            status: parse_status(&model.status),
            created_at: model.created_at,
        }
    }
}
