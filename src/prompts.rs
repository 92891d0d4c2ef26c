//! Prompt construction for the generative model.
//!
//! The wording below is tuned for the model's output; keep it stable.

use crate::models::{NewsItem, OutreachContext, Profile, Recipient};

/// Shared output-shape instructions with a worked example.
const OUTPUT_FORMAT: &str = r#"Format the response as a JSON array with objects containing 'subject' and 'body' fields.

Example format:
[
  {
    "subject": "Subject line here",
    "body": "Email body here..."
  }
]"#;

/// Builds the instruction string for the given context. Pure.
pub fn build_prompt(ctx: &OutreachContext) -> String {
    match &ctx.recipient {
        Recipient::Business { business_type } => {
            business_prompt(business_type, &ctx.service, &ctx.tone, &ctx.news)
        }
        Recipient::Individual(profile) => {
            individual_prompt(profile, &ctx.service, &ctx.tone, &ctx.news)
        }
    }
}

fn news_lines(news: &[NewsItem]) -> String {
    news.iter()
        .map(|item| format!("- {}: {}", item.title, item.description))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn business_prompt(business_type: &str, service: &str, tone: &str, news: &[NewsItem]) -> String {
    let news_context = if news.is_empty() {
        String::new()
    } else {
        format!(
            "\nIncorporate these recent news items about this type of business:\n{}",
            news_lines(news)
        )
    };

    format!(
        "Generate 3 different cold email variations for a freelancer offering {service} to a {business_type}.

Requirements:
- Tone: {tone}
- Each email should have a compelling subject line
- Body should be 100-120 words
- Focus on value proposition and results
- Include a clear call-to-action
- Make them feel personalized and not generic
- Avoid being too salesy{news_context}

{OUTPUT_FORMAT}"
    )
}

pub fn individual_prompt(profile: &Profile, service: &str, tone: &str, news: &[NewsItem]) -> String {
    let news_context = if news.is_empty() {
        String::new()
    } else {
        format!("\nRecent company news:\n{}", news_lines(news))
    };

    format!(
        "Generate 3 different highly personalized cold email variations for a freelancer offering {service} to an individual person.

Person's Information:
- Name: {name}
- Job Title: {headline}
- Company: {company}
- About: {about}
- Recent LinkedIn Activity: {posts}{news_context}

Requirements:
- Tone: {tone}
- Each email should have a compelling subject line
- Body should be 100-120 words
- Reference specific details from their profile or company news to show you've done your research
- Focus on value proposition and results relevant to their role and company
- Include a clear call-to-action
- Make them feel genuinely personalized, not generic
- Avoid being too salesy

{OUTPUT_FORMAT}",
        name = profile.name,
        headline = profile.headline,
        company = profile.company,
        about = profile.about,
        posts = profile.recent_posts.join(" | "),
    )
}
