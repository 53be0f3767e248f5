/// Main application entry point
use cosmic_digest::clients::WebhookClient;
use cosmic_digest::config::AppConfig;
use cosmic_digest::handlers::AppState;
use cosmic_digest::routes::build_router;
use cosmic_digest::services::DigestService;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env();
    match config.webhook_url() {
        Ok(url) => info!("Configuration loaded, webhook: {}", url),
        Err(e) => warn!("{}; every render pass will report this", e),
    }

    // Initialize client and service
    let client = WebhookClient::new(config.fetch_timeout)?;
    let bind_addr = config.bind_addr.clone();
    let state = AppState {
        digest_service: Arc::new(DigestService::new(config, client)),
    };

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("cosmic_digest listening on {}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
