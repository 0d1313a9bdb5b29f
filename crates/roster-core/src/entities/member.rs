//! Member entity - a person record in the organization's roster

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{ranks, Rank};

/// Canonical form of an email: trimmed and lower-cased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Member entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
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

impl Member {
    /// Create a member at the entry rank with every flag cleared
    pub fn new(nick: impl Into<String>) -> Self {
        Self::with_defaults(nick, MemberDefaults::seed())
    }

    /// Create a member from a provisioning preset
    pub fn with_defaults(nick: impl Into<String>, defaults: MemberDefaults) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            nick: nick.into(),
            email: None,
            rank_id: defaults.rank_id,
            active: defaults.active,
            has_system_access: false,
            has_contract: defaults.has_contract,
            tag: None,
            promoter_tag: defaults.promoter_tag,
            created_at: now,
            updated_at: now,
        }
    }

    /// Current rank, if the stored id is still in the table
    pub fn rank(&self) -> Option<Rank> {
        ranks::find(self.rank_id)
    }

    /// Display name of the current rank
    #[inline]
    pub fn rank_name(&self) -> &'static str {
        ranks::name_of(self.rank_id)
    }

    /// Apply a purchased rank directly (sale branch for existing members)
    pub fn apply_sale(&mut self, rank_id: i32, seller_tag: &str) {
        self.rank_id = rank_id;
        self.active = true;
        self.has_contract = true;
        self.promoter_tag = Some(seller_tag.to_string());
        self.updated_at = Utc::now();
    }

    /// Open the onboarding gate for this member
    pub fn grant_system_access(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
        self.has_system_access = true;
        self.updated_at = Utc::now();
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.updated_at = Utc::now();
    }
}

/// Field values for an implicitly provisioned member
///
/// Sales and foundational courses both create members when the nick is
/// unknown; each passes its own preset to the single provisioning path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDefaults {
    pub rank_id: i32,
    pub active: bool,
    pub has_contract: bool,
    pub promoter_tag: Option<String>,
}

impl MemberDefaults {
    /// Buyer created by a sale: active and contracted at the purchased rank
    pub fn sold(rank_id: i32, seller_tag: &str) -> Self {
        Self {
            rank_id,
            active: true,
            has_contract: true,
            promoter_tag: Some(seller_tag.to_string()),
        }
    }

    /// Recruit created by a foundational course: entry rank, awaiting activation
    pub fn recruit(instructor_tag: Option<&str>) -> Self {
        Self {
            rank_id: ranks::MIN_RANK_ID,
            active: false,
            has_contract: false,
            promoter_tag: instructor_tag.map(str::to_string),
        }
    }

    /// Administrator pre-seed: active at the entry rank
    pub fn seed() -> Self {
        Self {
            rank_id: ranks::MIN_RANK_ID,
            active: true,
            has_contract: false,
            promoter_tag: None,
        }
    }

    pub fn with_rank(mut self, rank_id: i32) -> Self {
        self.rank_id = rank_id;
        self
    }
}
