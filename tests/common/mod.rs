//! Shared test doubles.
#![allow(dead_code)]

use async_trait::async_trait;
use firstping_api::cache::{ResponseCache, CACHE_TTL};
use firstping_api::config::Config;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// TTL cache driven by a manually advanced clock.
pub struct ManualClockCache {
    ttl: Duration,
    now: Mutex<Duration>,
    entries: Mutex<HashMap<String, (Duration, Value)>>,
}

impl ManualClockCache {
    pub fn new() -> Self {
        Self::with_ttl(CACHE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            now: Mutex::new(Duration::ZERO),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl ResponseCache for ManualClockCache {
    async fn get(&self, key: &str) -> Option<Value> {
        let now = *self.now.lock().unwrap();
        let entries = self.entries.lock().unwrap();
        let (inserted, value) = entries.get(key)?;
        if now.saturating_sub(*inserted) >= self.ttl {
            return None;
        }
        Some(value.clone())
    }

    async fn set(&self, key: String, value: Value) {
        let now = *self.now.lock().unwrap();
        self.entries.lock().unwrap().insert(key, (now, value));
    }
}

/// Config with every provider pointed at `base_url` and all keys set.
pub fn config_for(base_url: &str) -> Config {
    Config {
        port: 0,
        gemini_api_key: Some("test_gemini_key".to_string()),
        gemini_model: "gemini-2.5-flash-lite".to_string(),
        gemini_base_url: base_url.to_string(),
        scraping_dog_api_key: Some("test_scraping_key".to_string()),
        scraping_dog_base_url: base_url.to_string(),
        news_api_key: Some("test_news_key".to_string()),
        news_api_base_url: base_url.to_string(),
    }
}

/// Config with no provider credentials at all.
pub fn demo_config(base_url: &str) -> Config {
    Config {
        gemini_api_key: None,
        scraping_dog_api_key: None,
        news_api_key: None,
        ..config_for(base_url)
    }
}
