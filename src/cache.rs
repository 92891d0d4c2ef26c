use async_trait::async_trait;
use moka::future::Cache;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::time::Duration;

/// Enrichment responses live for one hour.
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

/// Upper bound on live entries; expiry is the only eviction that matters in practice.
pub const CACHE_MAX_CAPACITY: u64 = 10_000;

/// Key for a cached LinkedIn profile.
pub fn profile_key(linkedin_url: &str) -> String {
    format!("linkedin_{}", linkedin_url)
}

/// Key for cached news about a company or business category.
pub fn news_key(company: &str) -> String {
    format!("news_{}", company)
}

/// Key-value store with a fixed time-to-live, shared by every in-flight request.
///
/// There is no invalidation: an unexpired entry is always preferred over a
/// fresh fetch.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<Value>;
    async fn set(&self, key: String, value: Value);
}

/// In-process cache backed by moka.
///
/// Values are stored as checksum-sealed JSON so that a corrupted entry is
/// dropped and refetched instead of being served.
#[derive(Clone)]
pub struct MokaCache {
    inner: Cache<String, String>,
}

impl MokaCache {
    pub fn new(ttl: Duration, max_capacity: u64) -> Self {
        Self {
            inner: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(max_capacity)
                .build(),
        }
    }

    /// Cache with the production TTL and capacity.
    pub fn with_defaults() -> Self {
        Self::new(CACHE_TTL, CACHE_MAX_CAPACITY)
    }
}

impl Default for MokaCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[async_trait]
impl ResponseCache for MokaCache {
    async fn get(&self, key: &str) -> Option<Value> {
        let sealed = self.inner.get(key).await?;
        match SealedEntry::open(&sealed) {
            Some(value) => Some(value),
            None => {
                tracing::warn!("Cache validation failed for '{}', discarding entry", key);
                self.inner.invalidate(key).await;
                None
            }
        }
    }

    async fn set(&self, key: String, value: Value) {
        match SealedEntry::seal(&value) {
            Some(sealed) => self.inner.insert(key, sealed).await,
            None => tracing::warn!("Refusing to cache unserializable value for '{}'", key),
        }
    }
}

/// Cached JSON together with its SHA-256 checksum (hex encoded).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct SealedEntry {
    data: String,
    checksum: String,
}

impl SealedEntry {
    fn checksum(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn seal(value: &Value) -> Option<String> {
        let data = serde_json::to_string(value).ok()?;
        let checksum = Self::checksum(&data);
        serde_json::to_string(&SealedEntry { data, checksum }).ok()
    }

    /// Returns the value only if the entry is well-formed and untampered.
    fn open(serialized: &str) -> Option<Value> {
        let entry: SealedEntry = serde_json::from_str(serialized).ok()?;
        if Self::checksum(&entry.data) != entry.checksum {
            return None;
        }
        serde_json::from_str(&entry.data).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seal_and_open() {
        let value = json!({"name": "Jane Smith", "recent_posts": ["a", "b"]});
        let sealed = SealedEntry::seal(&value).unwrap();
        assert_eq!(SealedEntry::open(&sealed), Some(value));
    }

    #[test]
    fn test_tampered_entry_rejected() {
        let sealed = SealedEntry::seal(&json!({"company": "Acme"})).unwrap();
        let tampered = sealed.replace("Acme", "Evil");
        assert_eq!(SealedEntry::open(&tampered), None);
    }

    #[test]
    fn test_truncated_entry_rejected() {
        let sealed = SealedEntry::seal(&json!(["one", "two"])).unwrap();
        assert_eq!(SealedEntry::open(&sealed[..sealed.len() / 2]), None);
    }

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(profile_key("https://x"), "linkedin_https://x");
        assert_eq!(news_key("Acme"), "news_Acme");
        assert_ne!(profile_key("Acme"), news_key("Acme"));
    }

    #[tokio::test]
    async fn test_moka_roundtrip_and_miss() {
        let cache = MokaCache::with_defaults();
        assert!(cache.get("news_Acme").await.is_none());

        cache.set("news_Acme".to_string(), json!([{"title": "t"}])).await;
        assert_eq!(cache.get("news_Acme").await, Some(json!([{"title": "t"}])));
    }

    #[tokio::test]
    async fn test_moka_discards_corrupted_entry() {
        let cache = MokaCache::with_defaults();
        cache
            .inner
            .insert("linkedin_x".to_string(), "not a sealed entry".to_string())
            .await;

        assert!(cache.get("linkedin_x").await.is_none());
        assert!(cache.inner.get("linkedin_x").await.is_none());
    }

    #[tokio::test]
    async fn test_moka_entry_expires() {
        let cache = MokaCache::new(Duration::from_millis(50), 10);
        cache.set("k".to_string(), json!(1)).await;
        assert!(cache.get("k").await.is_some());

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(cache.get("k").await.is_none());
    }
}
