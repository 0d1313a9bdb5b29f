//! Rank change request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for rank_change_requests table
#[derive(Debug, Clone, FromRow)]
pub struct RankChangeRequestModel {
    pub id: Uuid,
    pub promoter_member_id: Uuid,
    pub affected_member_id: Uuid,
    pub previous_rank_id: i32,
    pub new_rank_id: i32,
    pub kind: String,
    pub reason: String,
    pub permission: Option<String>,
    pub status: String,
    pub promoter_tag: Option<String>,
    pub created_at: DateTime<Utc>,
}
