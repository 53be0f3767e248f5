/// Application configuration module
use crate::errors::{ApiResult, DigestError};
use std::env;
use std::time::Duration;

/// Variable holding the webhook endpoint.
pub const WEBHOOK_URL_VAR: &str = "N8N_WEBHOOK_URL";

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Raw endpoint value; checked on every render pass by `webhook_url()`.
    pub webhook_url: Option<String>,
    pub fetch_timeout: Duration,
    pub bind_addr: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_url = lookup(WEBHOOK_URL_VAR);

        let fetch_timeout = Duration::from_secs(parse_u64(
            lookup("FETCH_TIMEOUT_SECONDS"),
            DEFAULT_TIMEOUT_SECONDS,
        ));

        let bind_addr = lookup("BIND_ADDR")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Self {
            webhook_url,
            fetch_timeout,
            bind_addr,
        }
    }

    /// Configuration pointing at a known endpoint with default settings
    pub fn with_webhook_url(url: impl Into<String>) -> Self {
        Self {
            webhook_url: Some(url.into()),
            fetch_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }

    /// Resolve the endpoint for a render pass
    pub fn webhook_url(&self) -> ApiResult<&str> {
        match self.webhook_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(DigestError::Configuration {
                variable: WEBHOOK_URL_VAR,
            }),
        }
    }
}

fn parse_u64(value: Option<String>, default: u64) -> u64 {
    value
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
