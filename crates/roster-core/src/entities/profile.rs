//! External profile - data returned by the profile directory, never persisted

use serde::{Deserialize, Serialize};

/// Public profile of an applicant on the external directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalProfile {
    pub unique_id: String,
    pub name: String,
    /// Free-text field reused as the onboarding verification channel
    pub motto: Option<String>,
    pub figure_string: Option<String>,
    pub online: Option<bool>,
    pub member_since: Option<String>,
}

impl ExternalProfile {
    /// Verbatim comparison of the motto against a trimmed code
    pub fn motto_matches(&self, code: &str) -> bool {
        self.motto.as_deref() == Some(code.trim())
    }
}
