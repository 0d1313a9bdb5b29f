//! Member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: Uuid,
    pub nick: String,
    pub email: Option<String>,
    pub rank_id: i32,
    pub active: bool,
    pub has_system_access: bool,
    pub has_contract: bool,
    pub tag: Option<String>,
    pub promoter_tag: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
