use crate::fallback::fallback_emails;
use crate::gemini_client::TextModel;
use crate::models::{Email, OutreachContext};
use crate::prompts::build_prompt;
use regex::Regex;
use serde::Deserialize;
use std::sync::{Arc, OnceLock};

/// Drafts returned per request.
pub const EMAIL_COUNT: usize = 3;

/// Outcome of reading emails out of free-form model text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEmails {
    Parsed(Vec<Email>),
    Unparseable,
}

#[derive(Debug, Deserialize)]
struct RawEmail {
    subject: String,
    body: String,
}

/// Outermost bracketed span: from the first `[` to the last `]`.
fn outer_array() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[\s\S]*\]").expect("static regex is valid"))
}

fn accept(raw: Vec<RawEmail>) -> Option<Vec<Email>> {
    let emails: Vec<Email> = raw
        .into_iter()
        .take(EMAIL_COUNT)
        .map(|e| Email::new(e.subject.trim(), e.body.trim()))
        .collect();

    let complete = emails.len() == EMAIL_COUNT
        && emails
            .iter()
            .all(|e| !e.subject.is_empty() && !e.body.is_empty());
    complete.then_some(emails)
}

/// Extracts exactly three `{subject, body}` records from model output.
///
/// Tries the outermost bracketed span first. If that does not parse (e.g. the
/// model added bracketed prose after the array), tries each `[` in turn and
/// reads the first complete JSON array starting there. Fewer than three
/// usable records is `Unparseable`; extra records are dropped.
pub fn parse_model_output(text: &str) -> ParsedEmails {
    if let Some(span) = outer_array().find(text) {
        if let Ok(raw) = serde_json::from_str::<Vec<RawEmail>>(span.as_str()) {
            if let Some(emails) = accept(raw) {
                return ParsedEmails::Parsed(emails);
            }
        }
    }

    for (start, _) in text.match_indices('[') {
        let mut stream =
            serde_json::Deserializer::from_str(&text[start..]).into_iter::<Vec<RawEmail>>();
        if let Some(Ok(raw)) = stream.next() {
            if let Some(emails) = accept(raw) {
                return ParsedEmails::Parsed(emails);
            }
        }
    }

    ParsedEmails::Unparseable
}

/// Produces drafts with the model when possible, templates otherwise.
#[derive(Clone, Default)]
pub struct EmailGenerator {
    model: Option<Arc<dyn TextModel>>,
}

impl EmailGenerator {
    pub fn new(model: Option<Arc<dyn TextModel>>) -> Self {
        Self { model }
    }

    pub fn is_ai_enabled(&self) -> bool {
        self.model.is_some()
    }

    /// Always returns exactly three emails.
    pub async fn generate(&self, ctx: &OutreachContext) -> Vec<Email> {
        tracing::info!(
            "Generating emails for {} - {}, {}, {}",
            ctx.target_type().as_str(),
            ctx.label(),
            ctx.service,
            ctx.tone
        );

        let model = match &self.model {
            Some(model) => model,
            None => {
                tracing::debug!("No model configured, using template emails");
                return fallback_emails(ctx);
            }
        };

        let prompt = build_prompt(ctx);
        let text = match model.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Error generating emails with AI: {}", e);
                return fallback_emails(ctx);
            }
        };

        match parse_model_output(&text) {
            ParsedEmails::Parsed(emails) => {
                tracing::info!("Emails generation succeeded");
                emails
            }
            ParsedEmails::Unparseable => {
                tracing::warn!("Failed to parse AI response as JSON, using template emails");
                fallback_emails(ctx)
            }
        }
    }
}
