/// Cache-then-fetch enrichment shared by the generate and lookup endpoints.
///
/// 1. Look up the cache (1 hour TTL)
/// 2. Serve demo data when the provider has no credential
/// 3. Otherwise call the provider, normalize, cache
use crate::cache::{news_key, profile_key, ResponseCache};
use crate::errors::AppError;
use crate::models::{NewsItem, Profile};
use crate::services::{NewsApiService, ScrapingDogService};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Fixed profile served when no scraping credential is configured.
pub fn demo_profile() -> Profile {
    Profile {
        name: "Jane Smith".to_string(),
        headline: "Marketing Director at Acme Corporation".to_string(),
        company: "Acme Corporation".to_string(),
        about: "Growth-focused digital marketer with 10+ years of experience in SaaS and eCommerce. Passionate about data-driven strategies and customer-centric approaches.".to_string(),
        recent_posts: vec![
            "Just published our case study on how we increased conversion rates by 45% using personalized email sequences.".to_string(),
            "Excited to announce our new product launch next month. Stay tuned for more details!".to_string(),
        ],
    }
}

/// Fixed news served when no news credential is configured.
pub fn demo_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            title: "Acme Corporation Announces New Product Line".to_string(),
            description:
                "The company is expanding its offerings with innovative solutions for the digital market."
                    .to_string(),
            url: "https://example.com/news/acme-new-products".to_string(),
            published_at: "2025-07-25T14:30:00Z".to_string(),
        },
        NewsItem {
            title: "Acme Corporation Reports Record Q2 Growth".to_string(),
            description: "The company exceeded market expectations with a 30% increase in revenue."
                .to_string(),
            url: "https://example.com/news/acme-q2-results".to_string(),
            published_at: "2025-07-15T09:45:00Z".to_string(),
        },
    ]
}

async fn cached<T: DeserializeOwned>(cache: &dyn ResponseCache, key: &str) -> Option<T> {
    let value = cache.get(key).await?;
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!("Ignoring undecodable cache entry '{}': {}", key, e);
            None
        }
    }
}

async fn store<T: Serialize>(cache: &dyn ResponseCache, key: String, data: &T) {
    match serde_json::to_value(data) {
        Ok(value) => cache.set(key, value).await,
        Err(e) => tracing::warn!("Failed to encode cache entry '{}': {}", key, e),
    }
}

/// Profile for `linkedin_url`, from cache or the scraping provider.
///
/// Provider failures are returned to the caller, which decides whether to
/// continue without enrichment. Failures are never cached.
pub async fn fetch_linkedin_profile(
    cache: &dyn ResponseCache,
    scraper: &ScrapingDogService,
    linkedin_url: &str,
) -> Result<Profile, AppError> {
    let key = profile_key(linkedin_url);

    if let Some(profile) = cached::<Profile>(cache, &key).await {
        tracing::debug!("LinkedIn cache HIT for {}", linkedin_url);
        return Ok(profile);
    }

    let profile = if scraper.is_configured() {
        tracing::info!("LinkedIn cache MISS - scraping {}", linkedin_url);
        scraper.fetch_profile(linkedin_url).await?
    } else {
        tracing::info!("Using demo LinkedIn data (no ScrapingDog API key)");
        demo_profile()
    };

    store(cache, key, &profile).await;
    Ok(profile)
}

/// Recent news for `company`, from cache or the news provider.
///
/// News is supplementary: any provider failure yields an empty list.
pub async fn fetch_company_news(
    cache: &dyn ResponseCache,
    news: &NewsApiService,
    company: &str,
) -> Vec<NewsItem> {
    let key = news_key(company);

    if let Some(items) = cached::<Vec<NewsItem>>(cache, &key).await {
        tracing::debug!("News cache HIT for '{}'", company);
        return items;
    }

    let items = if news.is_configured() {
        tracing::info!("News cache MISS - searching '{}'", company);
        match news.search(company).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Company news unavailable for '{}': {}", company, e);
                return Vec::new();
            }
        }
    } else {
        tracing::info!("Using demo news data (no News API key)");
        demo_news()
    };

    store(cache, key, &items).await;
    items
}
