/// Enrichment tests against mocked ScrapingDog and News API servers.
/// Covers cache-then-fetch, TTL expiry, normalization and failure policy.
mod common;

use common::{config_for, ManualClockCache};
use firstping_api::enrichment::{fetch_company_news, fetch_linkedin_profile};
use firstping_api::errors::AppError;
use firstping_api::services::{NewsApiService, ScrapingDogService};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROFILE_URL: &str = "https://www.linkedin.com/in/ada-lovelace";

fn scraped_profile() -> serde_json::Value {
    serde_json::json!({
        "name": "Ada Lovelace",
        "headline": "Head of Analytics at Engine Works",
        "company": "Engine Works",
        "about": "Numbers first.",
        "recent_posts": ["Shipped a new dashboard."]
    })
}

#[cfg(test)]
mod profile_tests {
    use super::*;

    #[tokio::test]
    async fn test_profile_fetched_once_within_ttl() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/linkedin"))
            .and(query_param("api_key", "test_scraping_key"))
            .and(query_param("url", PROFILE_URL))
            .respond_with(ResponseTemplate::new(200).set_body_json(scraped_profile()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let cache = ManualClockCache::new();
        let scraper = ScrapingDogService::new(&config_for(&mock_server.uri()));

        let first = fetch_linkedin_profile(&cache, &scraper, PROFILE_URL)
            .await
            .unwrap();
        cache.advance(Duration::from_secs(59 * 60));
        let second = fetch_linkedin_profile(&cache, &scraper, PROFILE_URL)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.name, "Ada Lovelace");
        assert_eq!(first.role_title(), "Head of Analytics");
    }

    #[tokio::test]
    async fn test_profile_refetched_after_ttl() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/linkedin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(scraped_profile()))
            .expect(2)
            .mount(&mock_server)
            .await;

        let cache = ManualClockCache::new();
        let scraper = ScrapingDogService::new(&config_for(&mock_server.uri()));

        fetch_linkedin_profile(&cache, &scraper, PROFILE_URL)
            .await
            .unwrap();
        cache.advance(Duration::from_secs(3600));
        fetch_linkedin_profile(&cache, &scraper, PROFILE_URL)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_profile_missing_fields_default_to_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/linkedin"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{ "name": "Solo Name" }])),
            )
            .mount(&mock_server)
            .await;

        let cache = ManualClockCache::new();
        let scraper = ScrapingDogService::new(&config_for(&mock_server.uri()));

        let profile = fetch_linkedin_profile(&cache, &scraper, PROFILE_URL)
            .await
            .unwrap();
        assert_eq!(profile.name, "Solo Name");
        assert_eq!(profile.headline, "");
        assert_eq!(profile.company, "");
        assert!(profile.recent_posts.is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_is_distinct_and_not_cached() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/linkedin"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
            .expect(2)
            .mount(&mock_server)
            .await;

        let cache = ManualClockCache::new();
        let scraper = ScrapingDogService::new(&config_for(&mock_server.uri()));

        for _ in 0..2 {
            let result = fetch_linkedin_profile(&cache, &scraper, PROFILE_URL).await;
            assert!(matches!(result, Err(AppError::ExternalApiError(_))));
        }
        assert_eq!(cache.len(), 0);
    }

    #[tokio::test]
    async fn test_provider_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/linkedin"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let cache = ManualClockCache::new();
        let scraper = ScrapingDogService::new(&config_for(&mock_server.uri()));

        let result = fetch_linkedin_profile(&cache, &scraper, PROFILE_URL).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}

#[cfg(test)]
mod news_tests {
    use super::*;

    fn articles(count: usize) -> serde_json::Value {
        let articles: Vec<_> = (0..count)
            .map(|i| {
                let description = if i == 0 {
                    serde_json::Value::Null
                } else {
                    serde_json::json!("Details")
                };
                serde_json::json!({
                    "source": { "name": "Wire" },
                    "title": format!("Headline {}", i),
                    "description": description,
                    "url": format!("https://news.example/{}", i),
                    "publishedAt": "2025-07-25T14:30:00Z"
                })
            })
            .collect();
        serde_json::json!({ "status": "ok", "totalResults": count, "articles": articles })
    }

    #[tokio::test]
    async fn test_news_query_parameters_and_cap() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .and(query_param("apiKey", "test_news_key"))
            .and(query_param("q", "Engine Works"))
            .and(query_param("language", "en"))
            .and(query_param("sortBy", "publishedAt"))
            .and(query_param("pageSize", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(articles(7)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let cache = ManualClockCache::new();
        let news = NewsApiService::new(&config_for(&mock_server.uri()));

        let items = fetch_company_news(&cache, &news, "Engine Works").await;
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].title, "Headline 0");
        assert_eq!(items[0].description, "");
        assert_eq!(items[1].published_at, "2025-07-25T14:30:00Z");

        // Served from cache
        let again = fetch_company_news(&cache, &news, "Engine Works").await;
        assert_eq!(items, again);
    }

    #[tokio::test]
    async fn test_news_failure_is_lenient() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .expect(2)
            .mount(&mock_server)
            .await;

        let cache = ManualClockCache::new();
        let news = NewsApiService::new(&config_for(&mock_server.uri()));

        assert!(fetch_company_news(&cache, &news, "Acme").await.is_empty());
        // Failures are not cached, so the next call goes out again
        assert!(fetch_company_news(&cache, &news, "Acme").await.is_empty());
        assert_eq!(cache.len(), 0);
    }

    #[tokio::test]
    async fn test_news_malformed_body_is_lenient() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let cache = ManualClockCache::new();
        let news = NewsApiService::new(&config_for(&mock_server.uri()));

        assert!(fetch_company_news(&cache, &news, "Acme").await.is_empty());
    }
}
