/// HTTP request handlers
use crate::domain::{DashboardView, Health};
use crate::errors::DigestError;
use crate::services::DigestService;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

const RAW_PAYLOAD_HINT: &str = "If Temperature/Wind Speed are missing, check the key names in the \
'weather' section above. They must be exactly 'temperature' and 'windspeed'.";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub digest_service: Arc<DigestService>,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    pub fetched_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            ok: true,
            fetched_at: Utc::now(),
            data,
        }
    }
}

/// Raw payload shown by the debug view
#[derive(Serialize)]
pub struct RawPayload {
    pub payload: Value,
    pub hint: &'static str,
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Run one render pass and return the normalized dashboard
pub async fn get_digest(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<DashboardView>>, DigestError> {
    let view = state.digest_service.render().await?;
    Ok(Json(SuccessResponse::new(view)))
}

/// Run one pass up to validation and expose the raw payload
pub async fn get_raw_digest(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<RawPayload>>, DigestError> {
    let payload = state.digest_service.inspect().await?;
    Ok(Json(SuccessResponse::new(RawPayload {
        payload: payload.raw,
        hint: RAW_PAYLOAD_HINT,
    })))
}
