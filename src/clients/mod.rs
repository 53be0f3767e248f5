/// Webhook HTTP client
use crate::errors::FetchError;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = "cosmic-digest/1.0";

/// HTTP client wrapper with common configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Single-shot client for the digest webhook
#[derive(Clone)]
pub struct WebhookClient {
    http_client: HttpClient,
}

impl WebhookClient {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            http_client: HttpClient::new(timeout)?,
        })
    }

    /// GET the webhook once and return the raw body of a 2xx response
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(url, "Fetching webhook payload");

        let resp = self
            .http_client
            .get_client()
            .get(url)
            .send()
            .await
            .map_err(|e| {
                warn!("Webhook request failed: {}", e);
                FetchError::from(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!("Webhook responded with status {}", status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.bytes().await.map_err(|e| {
            warn!("Reading webhook body failed: {}", e);
            FetchError::from(e)
        })?;
        debug!(bytes = body.len(), "Webhook payload received");

        Ok(body.to_vec())
    }
}
