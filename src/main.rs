use firstping_api::{api, config::Config, handlers::AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, builds the shared state
/// (enrichment cache, provider clients, email generator), and starts the
/// Axum server with CORS, tracing, body limits and rate limiting.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "firstping_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    config.log_missing_keys();

    let port = config.port;
    let app_state = Arc::new(AppState::from_config(&config));
    tracing::info!("Enrichment cache initialized (1h TTL)");
    if app_state.generator.is_ai_enabled() {
        tracing::info!("✓ Gemini generation enabled");
    }

    let app = api::rate_limited_router(app_state)?;

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("API available at http://localhost:{}", port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
