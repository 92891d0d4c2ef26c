use crate::cache::{MokaCache, ResponseCache};
use crate::catalog;
use crate::config::Config;
use crate::enrichment::{fetch_company_news, fetch_linkedin_profile};
use crate::errors::{AppError, ResultExt};
use crate::gemini_client::{GeminiService, TextModel};
use crate::generator::EmailGenerator;
use crate::models::*;
use crate::services::{NewsApiService, ScrapingDogService};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;

/// Shared application state injected into handlers.
pub struct AppState {
    /// Enrichment cache shared by every request (1 hour TTL).
    pub cache: Arc<dyn ResponseCache>,
    /// LinkedIn scraping provider.
    pub scraper: ScrapingDogService,
    /// Company news provider.
    pub news: NewsApiService,
    /// Email generator (model + template fallback).
    pub generator: EmailGenerator,
}

impl AppState {
    /// Wires providers from configuration around the given cache.
    pub fn new(config: &Config, cache: Arc<dyn ResponseCache>) -> Self {
        let model = GeminiService::from_config(config)
            .map(|gemini| Arc::new(gemini) as Arc<dyn TextModel>);
        Self::with_generator(config, cache, EmailGenerator::new(model))
    }

    /// Same as `new` but with an explicit generator (e.g. a stub model).
    pub fn with_generator(
        config: &Config,
        cache: Arc<dyn ResponseCache>,
        generator: EmailGenerator,
    ) -> Self {
        Self {
            scraper: ScrapingDogService::new(config),
            news: NewsApiService::new(config),
            generator,
            cache,
        }
    }

    /// Production state: moka cache with the default TTL.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config, Arc::new(MokaCache::with_defaults()))
    }
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Cold Email Generator API is running".to_string(),
    })
}

/// GET /api/business-types
pub async fn business_types() -> Json<&'static [&'static str]> {
    Json(catalog::BUSINESS_TYPES)
}

/// GET /api/services
pub async fn services() -> Json<&'static [&'static str]> {
    Json(catalog::SERVICES)
}

/// GET /api/tones
pub async fn tones() -> Json<&'static [&'static str]> {
    Json(catalog::TONES)
}

/// POST /api/generate
///
/// Validates the form, enriches the target, and returns three drafts.
///
/// An individual target does not need a prior `/api/linkedin-profile` call:
/// the profile is fetched here (through the cache). If that fetch fails,
/// generation continues with an empty profile and no news.
pub async fn generate_emails(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(payload) = payload?;
    let request = payload.validate()?;
    tracing::info!(
        "POST /generate - target: {}, service: {}, tone: {}",
        request.target.target_type().as_str(),
        request.service,
        request.tone
    );

    let (recipient, news) = match request.target {
        Target::Business { business_type } => {
            let news =
                fetch_company_news(state.cache.as_ref(), &state.news, &business_type).await;
            (Recipient::Business { business_type }, news)
        }
        Target::Individual { linkedin_url } => {
            match fetch_linkedin_profile(state.cache.as_ref(), &state.scraper, &linkedin_url)
                .await
            {
                Ok(profile) => {
                    let news = if profile.company.trim().is_empty() {
                        Vec::new()
                    } else {
                        fetch_company_news(state.cache.as_ref(), &state.news, &profile.company)
                            .await
                    };
                    (Recipient::Individual(profile), news)
                }
                Err(e) => {
                    tracing::error!(
                        "Error fetching LinkedIn profile {}, continuing without it: {}",
                        linkedin_url,
                        e
                    );
                    (Recipient::Individual(Profile::default()), Vec::new())
                }
            }
        }
    };

    let ctx = OutreachContext {
        recipient,
        service: request.service,
        tone: request.tone,
        news,
    };

    let emails = state.generator.generate(&ctx).await;
    debug_assert_eq!(emails.len(), crate::generator::EMAIL_COUNT);

    Ok(Json(GenerateResponse { emails }))
}

/// POST /api/linkedin-profile
///
/// Every provider failure, including a provider "not found", answers 500.
pub async fn linkedin_profile(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<Json<ProfileResponse>, AppError> {
    let Json(payload) = payload?;
    let linkedin_url = payload
        .linkedin_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::BadRequest("LinkedIn URL is required".to_string()))?;

    tracing::info!("POST /linkedin-profile - url: {}", linkedin_url);

    let profile = fetch_linkedin_profile(state.cache.as_ref(), &state.scraper, linkedin_url)
        .await
        .map_err(AppError::into_provider_failure)
        .with_context(|| "Failed to retrieve LinkedIn profile data".to_string())?;

    Ok(Json(ProfileResponse { profile }))
}

/// GET /api/company-news/:company_name
pub async fn company_news(
    State(state): State<Arc<AppState>>,
    Path(company_name): Path<String>,
) -> Result<Json<NewsResponse>, AppError> {
    let company_name = company_name.trim();
    if company_name.is_empty() {
        return Err(missing_company_name());
    }

    tracing::info!("GET /company-news/{}", company_name);

    let news = fetch_company_news(state.cache.as_ref(), &state.news, company_name).await;
    Ok(Json(NewsResponse { news }))
}

/// GET /api/company-news (no name segment)
pub async fn company_news_without_name() -> AppError {
    missing_company_name()
}

fn missing_company_name() -> AppError {
    AppError::BadRequest("Company name is required".to_string())
}
