//! HTTP surface: route table and middleware.

use crate::handlers::{self, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Request size limit: 1MB is far above any form payload.
const MAX_BODY_BYTES: usize = 1024 * 1024;

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/business-types", get(handlers::business_types))
        .route("/api/services", get(handlers::services))
        .route("/api/tones", get(handlers::tones))
        .route("/api/generate", post(handlers::generate_emails))
        .route("/api/linkedin-profile", post(handlers::linkedin_profile))
        .route(
            "/api/company-news",
            get(handlers::company_news_without_name),
        )
        .route(
            "/api/company-news/:company_name",
            get(handlers::company_news),
        )
}

fn assemble(api: Router<Arc<AppState>>, state: Arc<AppState>) -> Router {
    // Health check bypasses rate limiting
    Router::new()
        .route("/api/health", get(handlers::health))
        .merge(api)
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Full application without rate limiting (tests, embedding).
pub fn router(state: Arc<AppState>) -> Router {
    assemble(api_routes(), state)
}

/// Full application with per-IP rate limiting on every route but health.
///
/// Requires the server to provide `ConnectInfo<SocketAddr>`.
pub fn rate_limited_router(state: Arc<AppState>) -> anyhow::Result<Router> {
    // 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("invalid rate limiter configuration"))?,
    );

    let api = api_routes().layer(ServiceBuilder::new().layer(GovernorLayer {
        config: governor_conf,
    }));

    Ok(assemble(api, state))
}
