//! Tag request entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::RequestStatus;
use crate::value_objects::Tag;

/// A member's request for a callsign
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRequest {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub requested_tag: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl TagRequest {
    pub fn new(owner_id: Uuid, tag: Tag) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            requested_tag: tag.into_inner(),
            status: RequestStatus::Awaiting,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}
