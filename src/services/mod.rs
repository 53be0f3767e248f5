/// Render pipeline: resolve, fetch, validate, normalize
use crate::clients::WebhookClient;
use crate::config::AppConfig;
use crate::domain::{
    ApodSection, ApodView, DashboardView, MediaKind, MediaView, WeatherSection, WeatherView,
    WebhookPayload,
};
use crate::errors::{ApiResult, DigestError};
use crate::utils::{format_date, format_measure, format_time};
use serde_json::Value;
use tracing::{debug, info, warn};

const TITLE_MISSING: &str = "Title Missing";
const NO_EXPLANATION: &str = "No explanation available.";
const UNKNOWN_MEDIA: &str = "Unknown media type.";
const MEDIA_URL_MISSING: &str = "APOD media URL not available.";

/// Parse a webhook body and check that both sections are present
pub fn validate_payload(body: &[u8]) -> ApiResult<WebhookPayload> {
    let raw: Value = serde_json::from_slice(body)?;

    let apod = section(&raw, "apod")?;
    let weather = section(&raw, "weather")?;

    Ok(WebhookPayload {
        apod: ApodSection::from_value(apod),
        weather: WeatherSection::from_value(weather),
        raw,
    })
}

fn section<'a>(raw: &'a Value, key: &str) -> ApiResult<&'a Value> {
    match raw.get(key) {
        Some(v) if v.is_object() => Ok(v),
        Some(_) => Err(DigestError::Schema(format!("'{key}' is not an object"))),
        None => Err(DigestError::Schema(format!("missing '{key}' section"))),
    }
}

/// Turn a validated payload into display-ready values
pub fn normalize(payload: &WebhookPayload) -> DashboardView {
    DashboardView {
        apod: normalize_apod(&payload.apod),
        weather: normalize_weather(&payload.weather),
    }
}

fn normalize_apod(apod: &ApodSection) -> ApodView {
    let media_kind = MediaKind::classify(apod.media_type.as_deref());

    let media = match (&apod.url, media_kind) {
        (None, _) => MediaView::Missing {
            warning: MEDIA_URL_MISSING.to_string(),
        },
        (Some(url), MediaKind::Image) => MediaView::Image {
            url: url.clone(),
            caption: apod.title.clone(),
        },
        (Some(url), MediaKind::Video) => MediaView::Video { url: url.clone() },
        (Some(_), MediaKind::Unrecognized) => MediaView::Unrecognized {
            warning: UNKNOWN_MEDIA.to_string(),
        },
    };

    ApodView {
        title: apod
            .title
            .clone()
            .unwrap_or_else(|| TITLE_MISSING.to_string()),
        date: format_date(apod.date.as_deref()),
        explanation: apod
            .explanation
            .clone()
            .unwrap_or_else(|| NO_EXPLANATION.to_string()),
        media_kind,
        media,
    }
}

fn normalize_weather(weather: &WeatherSection) -> WeatherView {
    WeatherView {
        temperature: format_measure(weather.temperature.as_ref(), "°C"),
        windspeed: format_measure(weather.windspeed.as_ref(), " km/h"),
        local_time: format_time(weather.time.as_deref()),
    }
}

/// Runs one full pipeline pass per call. Holds no state between passes.
pub struct DigestService {
    config: AppConfig,
    client: WebhookClient,
}

impl DigestService {
    pub fn new(config: AppConfig, client: WebhookClient) -> Self {
        Self { config, client }
    }

    /// Fetch and validate, stopping short of normalization
    pub async fn inspect(&self) -> ApiResult<WebhookPayload> {
        let url = self.config.webhook_url().map_err(|e| {
            warn!("Render pass aborted: {}", e);
            e
        })?;

        let body = self.client.fetch(url).await?;
        let payload = validate_payload(&body).map_err(|e| {
            warn!("Webhook payload rejected: {}", e);
            e
        })?;
        debug!(payload = %payload.raw, "Validated webhook payload");

        Ok(payload)
    }

    /// Fetch, validate and normalize the dashboard
    pub async fn render(&self) -> ApiResult<DashboardView> {
        info!("Starting render pass");
        let payload = self.inspect().await?;
        let view = normalize(&payload);
        info!(media = ?view.apod.media_kind, "Render pass complete");
        Ok(view)
    }
}
