use cosmic_digest::clients::WebhookClient;
use cosmic_digest::{AppConfig, DigestError, DigestService, FetchError, MediaKind, MediaView};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WEBHOOK_PATH: &str = "/webhook/cosmic-digest";

fn service_for(server: &MockServer, timeout: Duration) -> DigestService {
    let mut config = AppConfig::with_webhook_url(format!("{}{}", server.uri(), WEBHOOK_PATH));
    config.fetch_timeout = timeout;
    let client = WebhookClient::new(config.fetch_timeout).unwrap();
    DigestService::new(config, client)
}

fn sample_payload() -> serde_json::Value {
    json!({
        "apod": {
            "title": "Comet over the Dolomites",
            "date": "2024-03-05",
            "explanation": "A long-exposure view of a passing comet.",
            "media_type": "image",
            "url": "https://apod.nasa.gov/apod/image/2403/comet.jpg"
        },
        "weather": {
            "temperature": 18.2,
            "windspeed": null,
            "time": "2024-03-05T08:15:00Z"
        }
    })
}

#[tokio::test]
async fn test_render_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEBHOOK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let view = service_for(&server, Duration::from_secs(10))
        .render()
        .await
        .unwrap();

    assert_eq!(view.apod.media_kind, MediaKind::Image);
    assert!(matches!(view.apod.media, MediaView::Image { .. }));
    assert_eq!(view.apod.date, "March 05, 2024");
    assert_eq!(view.weather.temperature, "18.2°C");
    assert_eq!(view.weather.windspeed, "--");
    assert_eq!(view.weather.local_time, "08:15 AM");
}

#[tokio::test]
async fn test_every_render_fetches_again() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEBHOOK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_payload()))
        .expect(2)
        .mount(&server)
        .await;

    let service = service_for(&server, Duration::from_secs(10));
    let first = service.render().await.unwrap();
    let second = service.render().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_non_success_status_is_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEBHOOK_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("workflow inactive"))
        .expect(1)
        .mount(&server)
        .await;

    let err = service_for(&server, Duration::from_secs(10))
        .render()
        .await
        .unwrap_err();

    assert!(matches!(err, DigestError::Fetch(FetchError::Status(503))));
    assert_eq!(err.code(), "UPSTREAM_5XX");
}

#[tokio::test]
async fn test_slow_webhook_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEBHOOK_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_payload())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = service_for(&server, Duration::from_millis(200))
        .render()
        .await
        .unwrap_err();

    assert!(matches!(err, DigestError::Fetch(FetchError::Timeout)));
    assert_eq!(err.code(), "UPSTREAM_TIMEOUT");
}

#[tokio::test]
async fn test_html_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEBHOOK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Workflow started</html>"))
        .mount(&server)
        .await;

    let err = service_for(&server, Duration::from_secs(10))
        .render()
        .await
        .unwrap_err();

    assert!(matches!(err, DigestError::Parse(_)));
}

#[tokio::test]
async fn test_missing_section_is_schema_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEBHOOK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apod": {}})))
        .mount(&server)
        .await;

    let err = service_for(&server, Duration::from_secs(10))
        .render()
        .await
        .unwrap_err();

    assert!(matches!(err, DigestError::Schema(_)));
}

#[tokio::test]
async fn test_inspect_returns_raw_document() {
    let server = MockServer::start().await;
    let mut body = sample_payload();
    body["weather"]["wind_speed"] = json!(7.0);
    Mock::given(method("GET"))
        .and(path(WEBHOOK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let payload = service_for(&server, Duration::from_secs(10))
        .inspect()
        .await
        .unwrap();

    assert_eq!(payload.raw, body);
    assert_eq!(payload.weather.windspeed, None);
}

#[tokio::test]
async fn test_invalid_utf8_body_is_parse_error() {
    let server = MockServer::start().await;
    let body: &[u8] = b"{\"apod\":{\"title\":\"A\xff\xfe\"},\"weather\":{}}";
    Mock::given(method("GET"))
        .and(path(WEBHOOK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let err = service_for(&server, Duration::from_secs(10))
        .render()
        .await
        .unwrap_err();

    assert!(matches!(err, DigestError::Parse(_)));
    assert_eq!(err.code(), "PARSE_ERROR");
}

#[tokio::test]
async fn test_readings_keep_producer_number_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEBHOOK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"apod":{},"weather":{"temperature":12.0,"windspeed":9007199254740993}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let view = service_for(&server, Duration::from_secs(10))
        .render()
        .await
        .unwrap();

    assert_eq!(view.weather.temperature, "12.0°C");
    assert_eq!(view.weather.windspeed, "9007199254740993 km/h");
}
