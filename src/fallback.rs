//! Deterministic template emails, served whenever the model is not
//! configured, unreachable, or returns unusable text.

use crate::models::{Email, OutreachContext, Profile, Recipient};

/// Fallback drafts for the given context. Always exactly three.
pub fn fallback_emails(ctx: &OutreachContext) -> Vec<Email> {
    match &ctx.recipient {
        Recipient::Business { business_type } => {
            business_emails(business_type, &ctx.service, &ctx.tone)
        }
        Recipient::Individual(profile) => individual_emails(profile, &ctx.service, &ctx.tone),
    }
}

/// Templates addressed to a category of business.
///
/// Tone is accepted for symmetry with the prompt but the copy is fixed.
pub fn business_emails(business_type: &str, service: &str, _tone: &str) -> Vec<Email> {
    let business_lower = business_type.to_lowercase();
    let service_lower = service.to_lowercase();

    vec![
        Email::new(
            format!("Boost Your {business_type} Revenue with Expert {service}"),
            format!(
                "Hi there,\n\nI noticed your {business_lower} and was impressed by your approach. I specialize in {service_lower} and have helped similar businesses increase their revenue by 30-50%.\n\nI'd love to share a quick case study of how I helped a client in your industry. Would you be open to a brief 15-minute call this week?\n\nBest regards,\n[Your Name]"
            ),
        ),
        Email::new(
            format!("Quick Question About Your {business_type} Growth"),
            format!(
                "Hello,\n\nI've been following your {business_lower} and love what you're doing. I'm curious - are you currently satisfied with your {service_lower} results?\n\nI've been helping businesses like yours achieve better outcomes, and I have some ideas that might interest you. Would you be open to a quick chat?\n\nLooking forward to hearing from you,\n[Your Name]"
            ),
        ),
        Email::new(
            format!("Free {service} Audit for Your {business_type}"),
            format!(
                "Hi,\n\nI hope this email finds you well. I'm reaching out because I believe your {business_lower} has great potential for growth.\n\nI'm offering a complimentary {service_lower} audit to a select few businesses this month. This usually costs $500, but I'd like to offer it free to see if we'd be a good fit to work together.\n\nInterested?\n\nBest,\n[Your Name]"
            ),
        ),
    ]
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Templates addressed to a named person.
///
/// Blank profile fields (e.g. after a failed scrape) are replaced with
/// neutral wording so no draft contains an empty slot.
pub fn individual_emails(profile: &Profile, service: &str, _tone: &str) -> Vec<Email> {
    let first_name = or_placeholder(profile.first_name(), "there");
    let company = or_placeholder(&profile.company, "your company");
    let opening_subject = if profile.first_name().is_empty() {
        format!("Could {service} help {company} with its growth?")
    } else {
        format!("{first_name}, could {service} help {company} with its growth?")
    };
    let headline = or_placeholder(&profile.headline, "a leader in your field");
    let role_title = or_placeholder(profile.role_title(), "professional");
    let service_lower = service.to_lowercase();

    vec![
        Email::new(
            opening_subject,
            format!(
                "Hi {first_name},\n\nI noticed your role as {headline} and was impressed by your background. Given your position at {company}, I thought you might be interested in how my {service_lower} services have helped similar professionals achieve their goals.\n\nI recently worked with another {role_title} who saw a 30% improvement in their key metrics after implementing our solutions.\n\nWould you be open to a quick 15-minute call this week to discuss how we might be able to help {company}?\n\nBest regards,\n[Your Name]"
            ),
        ),
        Email::new(
            format!("A thought about {company}'s approach to {service}"),
            format!(
                "Hello {first_name},\n\nAs {headline}, I imagine you're focused on optimizing {company}'s performance. I've been following your company's progress and believe my expertise in {service_lower} could be valuable.\n\nI've helped professionals in similar positions implement strategies that resulted in significant improvements to their bottom line.\n\nI have a few specific ideas for {company} that I'd love to share. Would you be available for a brief conversation next week?\n\nLooking forward to connecting,\n[Your Name]"
            ),
        ),
        Email::new(
            format!("{service} opportunity for {company}"),
            format!(
                "Hi {first_name},\n\nCongratulations on your role as {headline}. Your experience is impressive.\n\nI'm reaching out because I specialize in providing {service_lower} for companies like {company}, helping them overcome common industry challenges and achieve better results.\n\nI'd love to share a case study of how I helped a similar organization improve their metrics by 40% in just three months.\n\nDo you have 15 minutes for a quick call this Thursday or Friday?\n\nBest,\n[Your Name]"
            ),
        ),
    ]
}
