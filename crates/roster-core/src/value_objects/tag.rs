//! Tag - a member's 3-letter callsign

use std::fmt;

use serde::Serialize;

use crate::error::DomainError;

/// Validated, upper-cased 3-letter tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub const LEN: usize = 3;

    /// Parse a tag, accepting exactly three ASCII letters in any case
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        if raw.len() != Self::LEN || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidTag(raw.to_string()));
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
