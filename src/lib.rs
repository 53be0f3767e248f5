//! Cosmic Daily Digest: fetches the combined APOD + weather webhook payload
//! and turns it into display-ready values.
pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;

pub use config::AppConfig;
pub use domain::{DashboardView, MediaKind, MediaView, WebhookPayload};
pub use errors::{ApiResult, DigestError, FetchError};
pub use services::{normalize, validate_payload, DigestService};
