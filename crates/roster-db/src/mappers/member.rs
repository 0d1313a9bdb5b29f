//! Member entity <-> model mapper

use roster_core::entities::Member;
use uuid::Uuid;

use crate::models::MemberModel;

/// Convert MemberModel to Member entity
impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: model.id,
            nick: model.nick,
            email: model.email,
            rank_id: model.rank_id,
            active: model.active,
            has_system_access: model.has_system_access,
            has_contract: model.has_contract,
            tag: model.tag,
            promoter_tag: model.promoter_tag,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Member entity values for database insertion
pub struct MemberInsert<'a> {
    pub id: Uuid,
    pub nick: &'a str,
    pub email: Option<&'a str>,
    pub rank_id: i32,
    pub active: bool,
    pub has_system_access: bool,
    pub has_contract: bool,
    pub tag: Option<&'a str>,
    pub promoter_tag: Option<&'a str>,
}

impl<'a> MemberInsert<'a> {
    pub fn new(member: &'a Member) -> Self {
        Self {
            id: member.id,
            nick: &member.nick,
            // Empty email is stored as NULL so the unique index ignores it
            email: member.email.as_deref().filter(|e| !e.is_empty()),
            rank_id: member.rank_id,
            active: member.active,
            has_system_access: member.has_system_access,
            has_contract: member.has_contract,
            tag: member.tag.as_deref(),
            promoter_tag: member.promoter_tag.as_deref(),
        }
    }
}
