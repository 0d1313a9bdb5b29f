//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub profile_api: ProfileApiConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations at startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// External profile directory used by the onboarding gate
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileApiConfig {
    /// Profile endpoints tried in order; the nick is sent as the `name` query parameter
    #[serde(default = "default_profile_urls")]
    pub urls: Vec<String>,
    /// CORS proxy that wraps the first endpoint, tried right after it. Empty disables it.
    #[serde(default = "default_profile_proxy_url")]
    pub proxy_url: Option<String>,
    #[serde(default = "default_profile_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_profile_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for ProfileApiConfig {
    fn default() -> Self {
        Self {
            urls: default_profile_urls(),
            proxy_url: default_profile_proxy_url(),
            timeout_secs: default_profile_timeout_secs(),
            retry_delay_ms: default_profile_retry_delay_ms(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "roster".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_profile_urls() -> Vec<String> {
    vec![
        "https://www.habbo.com.br/api/public/users".to_string(),
        "https://www.habbo.com/api/public/users".to_string(),
    ]
}

#[allow(clippy::unnecessary_wraps)]
fn default_profile_proxy_url() -> Option<String> {
    Some("https://api.allorigins.win/get".to_string())
}

fn default_profile_timeout_secs() -> u64 {
    10
}

fn default_profile_retry_delay_ms() -> u64 {
    1000
}

/// Parse an optional variable, failing on a present but malformed value
fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        Err(_) => Ok(None),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: parse_var("API_PORT")?.ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
                run_migrations: parse_var("DATABASE_RUN_MIGRATIONS")?
                    .unwrap_or_else(default_run_migrations),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var("RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var("RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| parse_list(&s))
                    .unwrap_or_default(),
            },
            profile_api: ProfileApiConfig {
                urls: env::var("PROFILE_API_URLS")
                    .ok()
                    .map(|s| parse_list(&s))
                    .filter(|urls| !urls.is_empty())
                    .unwrap_or_else(default_profile_urls),
                proxy_url: match env::var("PROFILE_PROXY_URL") {
                    Ok(s) if s.trim().is_empty() => None,
                    Ok(s) => Some(s.trim().to_string()),
                    Err(_) => default_profile_proxy_url(),
                },
                timeout_secs: parse_var("PROFILE_API_TIMEOUT_SECS")?
                    .unwrap_or_else(default_profile_timeout_secs),
                retry_delay_ms: parse_var("PROFILE_API_RETRY_DELAY_MS")?
                    .unwrap_or_else(default_profile_retry_delay_ms),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
