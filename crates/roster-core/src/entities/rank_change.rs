//! Rank change request - append-only log of promotions, punishments and sales

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of rank change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankChangeKind {
    Promotion,
    Punishment,
    Sale,
}

impl RankChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Promotion => "promotion",
            Self::Punishment => "punishment",
            Self::Sale => "sale",
        }
    }

    /// Whether requests of this kind occupy the member's single awaiting slot.
    /// Sales are self-approving and never gated.
    #[inline]
    pub fn is_gated(self) -> bool {
        !matches!(self, Self::Sale)
    }
}

impl fmt::Display for RankChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankChangeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "promotion" => Ok(Self::Promotion),
            "punishment" => Ok(Self::Punishment),
            "sale" => Ok(Self::Sale),
            other => Err(format!("unknown rank change kind: {other}")),
        }
    }
}

/// Review status shared by rank change and tag requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Awaiting,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Awaiting => "awaiting",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Awaiting or approved; a rejected request no longer blocks a new one
    #[inline]
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "awaiting" => Ok(Self::Awaiting),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(format!("unknown request status: {other}")),
        }
    }
}

/// Rank change request entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankChangeRequest {
    pub id: Uuid,
    pub promoter_id: Uuid,
    pub affected_id: Uuid,
    pub previous_rank_id: i32,
    pub new_rank_id: i32,
    pub kind: RankChangeKind,
    pub reason: String,
    pub permission: Option<String>,
    pub status: RequestStatus,
    pub promoter_tag: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RankChangeRequest {
    /// Create a request; gated kinds start awaiting review, sales are approved
    pub fn new(
        kind: RankChangeKind,
        promoter_id: Uuid,
        affected_id: Uuid,
        previous_rank_id: i32,
        new_rank_id: i32,
        reason: impl Into<String>,
    ) -> Self {
        let status = if kind.is_gated() {
            RequestStatus::Awaiting
        } else {
            RequestStatus::Approved
        };
        Self {
            id: Uuid::new_v4(),
            promoter_id,
            affected_id,
            previous_rank_id,
            new_rank_id,
            kind,
            reason: reason.into(),
            permission: None,
            status,
            promoter_tag: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_permission(mut self, permission: Option<String>) -> Self {
        self.permission = permission;
        self
    }

    pub fn with_promoter_tag(mut self, tag: Option<String>) -> Self {
        self.promoter_tag = tag;
        self
    }

    #[inline]
    pub fn is_awaiting(&self) -> bool {
        self.status == RequestStatus::Awaiting
    }
}
