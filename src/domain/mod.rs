/// Domain models for the application
use crate::utils::{n_pick, s_pick};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Number, Value};

/// APOD section of the webhook payload, every field optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApodSection {
    pub title: Option<String>,
    pub date: Option<String>,
    pub explanation: Option<String>,
    pub media_type: Option<String>,
    pub url: Option<String>,
}

impl ApodSection {
    pub fn from_value(v: &Value) -> Self {
        Self {
            title: s_pick(v, "title"),
            date: s_pick(v, "date"),
            explanation: s_pick(v, "explanation"),
            media_type: s_pick(v, "media_type"),
            url: s_pick(v, "url"),
        }
    }
}

/// Weather section of the webhook payload, every field optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherSection {
    pub temperature: Option<Number>,
    pub windspeed: Option<Number>,
    pub time: Option<String>,
}

impl WeatherSection {
    pub fn from_value(v: &Value) -> Self {
        Self {
            temperature: n_pick(v, "temperature"),
            windspeed: n_pick(v, "windspeed"),
            time: s_pick(v, "time"),
        }
    }
}

/// Structurally valid webhook document
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookPayload {
    pub apod: ApodSection,
    pub weather: WeatherSection,
    /// Document as received, kept for the debug view
    pub raw: Value,
}

/// Display variant for the APOD media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
    Unrecognized,
}

impl MediaKind {
    /// Only the exact strings `image` and `video` are recognized
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            Some("image") => MediaKind::Image,
            Some("video") => MediaKind::Video,
            _ => MediaKind::Unrecognized,
        }
    }
}

/// What the presentation layer should show in the media slot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaView {
    Image { url: String, caption: Option<String> },
    Video { url: String },
    Unrecognized { warning: String },
    Missing { warning: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApodView {
    pub title: String,
    pub date: String,
    pub explanation: String,
    pub media_kind: MediaKind,
    pub media: MediaView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub temperature: String,
    pub windspeed: String,
    pub local_time: String,
}

/// Fully normalized, display-ready dashboard record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub apod: ApodView,
    pub weather: WeatherView,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_media() {
        assert_eq!(MediaKind::classify(Some("image")), MediaKind::Image);
        assert_eq!(MediaKind::classify(Some("video")), MediaKind::Video);
        assert_eq!(MediaKind::classify(Some("Image")), MediaKind::Unrecognized);
        assert_eq!(MediaKind::classify(Some("other")), MediaKind::Unrecognized);
        assert_eq!(MediaKind::classify(None), MediaKind::Unrecognized);
    }

    #[test]
    fn test_apod_section_tolerates_bad_fields() {
        let apod = ApodSection::from_value(&json!({
            "title": "Horsehead Nebula",
            "date": 20240305,
            "explanation": null,
            "media_type": ["image"],
        }));
        assert_eq!(apod.title.as_deref(), Some("Horsehead Nebula"));
        assert_eq!(apod.date.as_deref(), Some("20240305"));
        assert_eq!(apod.explanation, None);
        assert_eq!(apod.media_type, None);
        assert_eq!(apod.url, None);
    }

    #[test]
    fn test_weather_section_numeric_strings() {
        let weather = WeatherSection::from_value(&json!({
            "temperature": "18.2",
            "windspeed": "calm",
            "time": "2024-03-05T08:15",
        }));
        assert_eq!(weather.temperature, Number::from_f64(18.2));
        assert_eq!(weather.windspeed, None);
        assert_eq!(weather.time.as_deref(), Some("2024-03-05T08:15"));
    }

    #[test]
    fn test_media_view_serializes_tagged() {
        let view = MediaView::Video {
            url: "https://www.youtube.com/embed/abc".to_string(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "video");
        assert_eq!(json["url"], "https://www.youtube.com/embed/abc");
        assert_eq!(
            serde_json::to_value(MediaKind::Unrecognized).unwrap(),
            "unrecognized"
        );
    }
}
