use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 12001;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_SCRAPING_DOG_BASE_URL: &str = "https://api.scrapingdog.com";
pub const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org";

/// Placeholder value shipped in sample `.env` files; treated as "no key".
const DEMO_KEY: &str = "demo_key";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Generative model credential. `None` means fallback templates only.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// LinkedIn scraping credential. `None` means the demo profile is served.
    pub scraping_dog_api_key: Option<String>,
    pub scraping_dog_base_url: String,
    /// News credential. `None` means the demo news is served.
    pub news_api_key: Option<String>,
    pub news_api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            scraping_dog_api_key: None,
            scraping_dog_base_url: DEFAULT_SCRAPING_DOG_BASE_URL.to_string(),
            news_api_key: None,
            news_api_base_url: DEFAULT_NEWS_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|name| std::env::var(name).ok())?;

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!("Gemini Base URL: {}", config.gemini_base_url);
        tracing::debug!("Gemini Model: {}", config.gemini_model);
        tracing::debug!("ScrapingDog Base URL: {}", config.scraping_dog_base_url);
        tracing::debug!("News API Base URL: {}", config.news_api_base_url);

        Ok(config)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: lookup("PORT")
                .filter(|p| !p.trim().is_empty())
                .map(|p| {
                    p.trim().parse().map_err(|_| {
                        anyhow::anyhow!("PORT must be a valid number between 1-65535")
                    })
                })
                .transpose()?
                .unwrap_or(DEFAULT_PORT),
            gemini_api_key: normalize_key(lookup("GEMINI_API_KEY")),
            gemini_model: lookup("GEMINI_MODEL")
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: base_url(
                "GEMINI_BASE_URL",
                lookup("GEMINI_BASE_URL"),
                DEFAULT_GEMINI_BASE_URL,
            )?,
            scraping_dog_api_key: normalize_key(lookup("SCRAPING_DOG_API_KEY")),
            scraping_dog_base_url: base_url(
                "SCRAPING_DOG_BASE_URL",
                lookup("SCRAPING_DOG_BASE_URL"),
                DEFAULT_SCRAPING_DOG_BASE_URL,
            )?,
            news_api_key: normalize_key(lookup("NEWS_API_KEY")),
            news_api_base_url: base_url(
                "NEWS_API_BASE_URL",
                lookup("NEWS_API_BASE_URL"),
                DEFAULT_NEWS_API_BASE_URL,
            )?,
        })
    }

    /// Warns about every provider that will run in demo/fallback mode.
    pub fn log_missing_keys(&self) {
        if self.gemini_api_key.is_none() {
            tracing::warn!("No GEMINI_API_KEY found. Using template emails for generation.");
        }
        if self.scraping_dog_api_key.is_none() {
            tracing::warn!(
                "No SCRAPING_DOG_API_KEY found. Using demo data for LinkedIn profiles."
            );
        }
        if self.news_api_key.is_none() {
            tracing::warn!("No NEWS_API_KEY found. Using demo data for company news.");
        }
    }
}

fn normalize_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != DEMO_KEY)
}

fn base_url(name: &str, raw: Option<String>, default: &str) -> anyhow::Result<String> {
    let url = match raw.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
        Some(url) => url,
        None => return Ok(default.to_string()),
    };
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", name);
    }
    Ok(url.trim_end_matches('/').to_string())
}
