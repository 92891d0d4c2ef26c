use crate::config::Config;
use crate::errors::AppError;
use crate::models::*;
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Articles requested per news query.
pub const NEWS_PAGE_SIZE: usize = 5;

pub struct ScrapingDogService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ScrapingDogService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.scraping_dog_base_url.clone(),
            api_key: config.scraping_dog_api_key.clone(),
        }
    }

    /// Whether a real scraping credential is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Scrape a LinkedIn profile and normalize it.
    ///
    /// A provider 404 maps to `NotFound`; every other failure is an
    /// `ExternalApiError`.
    pub async fn fetch_profile(&self, linkedin_url: &str) -> Result<Profile, AppError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::InternalError("ScrapingDog API key not configured".to_string())
        })?;

        // Build URL with proper parameter encoding
        let url = reqwest::Url::parse_with_params(
            &format!("{}/linkedin", self.base_url),
            &[("api_key", api_key), ("url", linkedin_url)],
        )
        .map_err(|e| AppError::InternalError(format!("Failed to build URL: {}", e)))?;

        tracing::info!("ScrapingDog: fetching profile {}", linkedin_url);
        // Redact key from logs
        tracing::debug!(
            "ScrapingDog URL: {}/linkedin?api_key=[REDACTED]&url={}",
            self.base_url,
            linkedin_url
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            AppError::ExternalApiError(format!("ScrapingDog request failed: {}", e))
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "LinkedIn profile not found: {}",
                linkedin_url
            )));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "ScrapingDog returned status {}: {}",
                status, error_text
            )));
        }

        let payload: Value = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse ScrapingDog response: {}", e))
        })?;

        let profile = Profile::from_provider(&payload);
        tracing::info!(
            "ScrapingDog: profile fetched (name: '{}', company: '{}')",
            profile.name,
            profile.company
        );
        Ok(profile)
    }
}

pub struct NewsApiService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl NewsApiService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.news_api_base_url.clone(),
            api_key: config.news_api_key.clone(),
        }
    }

    /// Whether a real news credential is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search recent English-language articles mentioning `query`, newest first.
    pub async fn search(&self, query: &str) -> Result<Vec<NewsItem>, AppError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::InternalError("News API key not configured".to_string())
        })?;

        let page_size = NEWS_PAGE_SIZE.to_string();
        let url = reqwest::Url::parse_with_params(
            &format!("{}/v2/everything", self.base_url),
            &[
                ("apiKey", api_key),
                ("q", query),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
            ],
        )
        .map_err(|e| AppError::InternalError(format!("Failed to build URL: {}", e)))?;

        tracing::info!("News API: searching articles for '{}'", query);

        let response = self.client.get(url).send().await.map_err(|e| {
            AppError::ExternalApiError(format!("News API request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "News API returned status {}: {}",
                status, error_text
            )));
        }

        let result: NewsApiResponse = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse News API response: {}", e))
        })?;

        let items: Vec<NewsItem> = result
            .articles
            .into_iter()
            .take(NEWS_PAGE_SIZE)
            .map(NewsItem::from)
            .collect();

        tracing::info!("News API: {} articles for '{}'", items.len(), query);
        Ok(items)
    }
}
