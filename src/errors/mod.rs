/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Failure of the single outbound webhook request
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("could not connect to webhook: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("webhook responded with HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connect(err)
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(err)
        }
    }
}

/// Fatal failures of a render pass
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("CONFIGURATION ERROR: the '{variable}' environment variable is not set")]
    Configuration { variable: &'static str },

    #[error("Connection error: could not fetch webhook data ({0})")]
    Fetch(#[from] FetchError),

    #[error("Webhook returned a body that is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Data structure invalid: {0}. Ensure the workflow returns 'apod' and 'weather' objects")]
    Schema(String),
}

impl DigestError {
    /// Stable code reported in the error envelope
    pub fn code(&self) -> &'static str {
        match self {
            DigestError::Configuration { .. } => "CONFIG_ERROR",
            DigestError::Fetch(FetchError::Timeout) => "UPSTREAM_TIMEOUT",
            DigestError::Fetch(FetchError::Connect(_)) => "UPSTREAM_UNREACHABLE",
            DigestError::Fetch(FetchError::Status(status)) => match status {
                404 => "UPSTREAM_404",
                500..=599 => "UPSTREAM_5XX",
                _ => "UPSTREAM_ERROR",
            },
            DigestError::Fetch(FetchError::Transport(_)) => "UPSTREAM_ERROR",
            DigestError::Parse(_) => "PARSE_ERROR",
            DigestError::Schema(_) => "SCHEMA_ERROR",
        }
    }
}

impl IntoResponse for DigestError {
    fn into_response(self) -> Response {
        let error_response = ErrorResponse {
            ok: false,
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };

        // Always return HTTP 200 with ok=false as per requirements
        (StatusCode::OK, Json(error_response)).into_response()
    }
}

/// Type alias for pipeline results
pub type ApiResult<T> = Result<T, DigestError>;
