//! Tag request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for tag_requests table
#[derive(Debug, Clone, FromRow)]
pub struct TagRequestModel {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub requested_tag: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
