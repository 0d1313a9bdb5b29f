//! Profile lookup errors

use roster_core::DomainError;

/// Why a single lookup attempt failed
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("profile not found")]
    NotFound,

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint {0}")]
    BadEndpoint(String),

    #[error("malformed proxy response: {0}")]
    Envelope(String),

    #[error("invalid profile payload: {0}")]
    Payload(String),
}

impl From<LookupError> for DomainError {
    fn from(err: LookupError) -> Self {
        Self::ProfileLookupFailed(err.to_string())
    }
}
