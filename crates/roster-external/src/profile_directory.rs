//! HTTP profile directory - fetches public profiles for the onboarding gate

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use roster_common::ProfileApiConfig;
use roster_core::{DomainError, ExternalProfile, ProfileDirectory, RepoResult};

use crate::endpoint::ProfileEndpoint;
use crate::error::LookupError;
use crate::payload::decode_profile;

const USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// Profile directory backed by the public profile API.
///
/// Endpoints are tried in order with a fixed pause between attempts; the
/// first valid profile wins. No retry happens beyond the endpoint list.
#[derive(Clone)]
pub struct HttpProfileDirectory {
    client: Client,
    endpoints: Vec<ProfileEndpoint>,
    retry_delay: Duration,
}

impl HttpProfileDirectory {
    /// Build a directory from configuration
    pub fn new(config: &ProfileApiConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DomainError::InternalError(format!("profile http client: {e}")))?;

        Ok(Self {
            client,
            endpoints: ProfileEndpoint::chain(&config.urls, config.proxy_url.as_deref()),
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        })
    }

    /// Endpoints in attempt order
    pub fn endpoints(&self) -> &[ProfileEndpoint] {
        &self.endpoints
    }

    async fn attempt(&self, endpoint: &ProfileEndpoint, nick: &str) -> Result<ExternalProfile, LookupError> {
        let url = endpoint.url_for(nick)?;
        debug!(url = %url, "Fetching profile");

        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = resp.bytes().await?;
        decode_profile(&body, endpoint.is_proxied())
    }
}

#[async_trait]
impl ProfileDirectory for HttpProfileDirectory {
    #[instrument(skip(self))]
    async fn fetch_profile(&self, nick: &str) -> RepoResult<ExternalProfile> {
        let nick = nick.trim();
        if nick.is_empty() {
            return Err(DomainError::ValidationError("nick is required".to_string()));
        }

        let mut last_error = None;
        for (index, endpoint) in self.endpoints.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.retry_delay).await;
            }

            match self.attempt(endpoint, nick).await {
                Ok(profile) => return Ok(profile),
                Err(e) => {
                    warn!(attempt = index + 1, error = %e, "Profile lookup attempt failed");
                    last_error = Some(e);
                }
            }
        }

        let reason = last_error.map_or_else(|| "no endpoints configured".to_string(), |e| e.to_string());
        Err(DomainError::ProfileLookupFailed(format!("{nick}: {reason}")))
    }
}
