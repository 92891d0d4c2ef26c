use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============ Domain Models ============

/// Normalized LinkedIn profile used to personalize outreach.
///
/// Immutable once fetched; cached by source URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub about: String,
    /// Most recent posts, newest first as returned by the provider.
    #[serde(default, alias = "recentPosts")]
    pub recent_posts: Vec<String>,
}

impl Profile {
    /// Normalizes a scraper payload. Missing or non-string fields become empty.
    ///
    /// The scraper answers either with a profile object or with a
    /// one-element array wrapping it.
    pub fn from_provider(payload: &Value) -> Self {
        let record = match payload {
            Value::Array(items) => items.first().unwrap_or(&Value::Null),
            other => other,
        };

        let text = |field: &str| {
            record
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .trim()
                .to_string()
        };

        let recent_posts = record
            .get("recent_posts")
            .or_else(|| record.get("recentPosts"))
            .and_then(Value::as_array)
            .map(|posts| {
                posts
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: text("name"),
            headline: text("headline"),
            company: text("company"),
            about: text("about"),
            recent_posts,
        }
    }

    /// First whitespace-separated token of the name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// The part of the headline before " at ", e.g. "Marketing Director".
    pub fn role_title(&self) -> &str {
        self.headline
            .split(" at ")
            .next()
            .unwrap_or(&self.headline)
            .trim()
    }
}

/// A single news article used as prompt context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "publishedAt", default)]
    pub published_at: String,
}

/// One generated email draft. Drafts are always delivered three at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub subject: String,
    pub body: String,
}

impl Email {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

// ============ Request Models ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Business,
    Individual,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Business => "business",
            TargetType::Individual => "individual",
        }
    }
}

/// Wire form of the outreach form. Every field is optional here so that
/// validation, not deserialization, decides what is missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub target_type: Option<String>,
    pub business_type: Option<String>,
    pub linkedin_url: Option<String>,
    pub service: Option<String>,
    pub tone: Option<String>,
}

/// Who the outreach is addressed to, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Business { business_type: String },
    Individual { linkedin_url: String },
}

impl Target {
    pub fn target_type(&self) -> TargetType {
        match self {
            Target::Business { .. } => TargetType::Business,
            Target::Individual { .. } => TargetType::Individual,
        }
    }
}

/// A validated `/api/generate` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutreachRequest {
    pub target: Target,
    pub service: String,
    pub tone: String,
}

fn present(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl GenerateRequest {
    /// Checks required fields. Runs before any external call is made.
    pub fn validate(&self) -> Result<OutreachRequest, AppError> {
        let (service, tone) = match (present(&self.service), present(&self.tone)) {
            (Some(service), Some(tone)) => (service, tone),
            _ => {
                return Err(AppError::BadRequest(
                    "Missing required fields: service and tone are required".to_string(),
                ))
            }
        };

        let target_type = match present(&self.target_type).as_deref() {
            None | Some("business") => TargetType::Business,
            Some("individual") => TargetType::Individual,
            Some(other) => {
                return Err(AppError::BadRequest(format!(
                    "Invalid targetType '{}': expected 'business' or 'individual'",
                    other
                )))
            }
        };

        let target = match target_type {
            TargetType::Business => Target::Business {
                business_type: present(&self.business_type).ok_or_else(|| {
                    AppError::BadRequest(
                        "Business type is required when targeting a business".to_string(),
                    )
                })?,
            },
            TargetType::Individual => Target::Individual {
                linkedin_url: present(&self.linkedin_url).ok_or_else(|| {
                    AppError::BadRequest(
                        "LinkedIn URL is required when targeting an individual".to_string(),
                    )
                })?,
            },
        };

        Ok(OutreachRequest {
            target,
            service,
            tone,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub linkedin_url: Option<String>,
}

// ============ Generation Context ============

/// Recipient data available to the prompt builder and fallback templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    Business { business_type: String },
    Individual(Profile),
}

/// Everything needed to produce a set of drafts for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutreachContext {
    pub recipient: Recipient,
    pub service: String,
    pub tone: String,
    pub news: Vec<NewsItem>,
}

impl OutreachContext {
    pub fn target_type(&self) -> TargetType {
        match self.recipient {
            Recipient::Business { .. } => TargetType::Business,
            Recipient::Individual(_) => TargetType::Individual,
        }
    }

    /// Short label for logs: the business type or the person's name.
    pub fn label(&self) -> &str {
        match &self.recipient {
            Recipient::Business { business_type } => business_type.as_str(),
            Recipient::Individual(profile) if !profile.name.is_empty() => profile.name.as_str(),
            Recipient::Individual(_) => "Unknown",
        }
    }
}

// ============ Response Models ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub emails: Vec<Email>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsResponse {
    pub news: Vec<NewsItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

// ============ Provider Models ============

/// NewsAPI `/v2/everything` payload. Only the fields we keep are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<String>,
}

impl From<NewsApiArticle> for NewsItem {
    fn from(article: NewsApiArticle) -> Self {
        Self {
            title: article.title.unwrap_or_default(),
            description: article.description.unwrap_or_default(),
            url: article.url.unwrap_or_default(),
            published_at: article.published_at.unwrap_or_default(),
        }
    }
}
