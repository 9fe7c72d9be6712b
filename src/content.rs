use log::{info, warn};
use serde::Deserialize;
use web_sys::window;

use crate::config::{self, RevealSettings};
use crate::models::{DomainOffer, FaqEntry, PlanVariant, PricingPlan};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Invalid pricing content JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Reveal threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),

    #[error("Reveal offset {0:?} is not a CSS length")]
    InvalidOffset(String),

    #[error("Pricing content has no plans")]
    NoPlans,
}

/// Everything the pricing section renders.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageContent {
    pub eyebrow: String,
    pub tagline: String,
    pub plans: Vec<PricingPlan>,
    pub domain: DomainOffer,
    pub faq_heading: String,
    pub faq: Vec<FaqEntry>,
    pub closing: String,
    pub reveal: RevealSettings,
}

impl PageContent {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: PageContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if !self.reveal.threshold_in_range() {
            return Err(ContentError::InvalidThreshold(self.reveal.threshold));
        }
        if !self.reveal.offset_is_length() {
            return Err(ContentError::InvalidOffset(self.reveal.offset.clone()));
        }
        if self.plans.is_empty() {
            return Err(ContentError::NoPlans);
        }
        Ok(())
    }

    /// Reads the injected content block from the host document, if any.
    pub fn load() -> Self {
        let raw = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(config::CONTENT_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => match PageContent::from_json(&raw) {
                Ok(content) => {
                    info!("Loaded pricing content with {} plans", content.plans.len());
                    content
                }
                Err(e) => {
                    warn!("{}; using built-in content", e);
                    PageContent::default()
                }
            },
            None => PageContent::default(),
        }
    }
}

fn plan(
    title: &str,
    subtitle: &str,
    price: &str,
    time: &str,
    color: PlanVariant,
    badge: Option<&str>,
    features: &[&str],
) -> PricingPlan {
    PricingPlan {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        price: price.to_string(),
        time: time.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        color,
        badge: badge.map(str::to_string),
    }
}

fn faq(question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

impl Default for DomainOffer {
    fn default() -> Self {
        Self {
            title: "Domain & Hosting".to_string(),
            description: "Required yearly to keep your website live and accessible.".to_string(),
            price: "₹2,500".to_string(),
            period: "/ year".to_string(),
        }
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            eyebrow: "Pricing & Packages".to_string(),
            tagline: "Simple pricing. Premium presentation. Built to convert Instagram visitors into paying clients.".to_string(),
            plans: vec![
                plan(
                    "Starter Presence",
                    "For New & Freelance Artists",
                    "₹6,000",
                    "7 days",
                    PlanVariant::Light,
                    None,
                    &[
                        "One-page luxury website",
                        "Portfolio gallery",
                        "About & services section",
                        "WhatsApp booking button",
                        "Mobile-first design",
                        "Basic SEO setup (Google ready)",
                    ],
                ),
                plan(
                    "Professional Brand",
                    "Most Chosen by Bridal Artists",
                    "₹12,000",
                    "10 days",
                    PlanVariant::Gold,
                    Some("MOST POPULAR"),
                    &[
                        "Everything in Starter",
                        "Dedicated services & packages section",
                        "Client reviews & testimonials",
                        "Instagram + WhatsApp integration",
                        "Premium layout & branding",
                        "Advanced SEO for local search",
                    ],
                ),
                plan(
                    "Premium Studio",
                    "For High-End Brands & Studios",
                    "₹15,000",
                    "10–14 days",
                    PlanVariant::Dark,
                    None,
                    &[
                        "Everything in Professional",
                        "Advanced portfolio showcase",
                        "Booking enquiry form",
                        "Google Business setup",
                        "Priority support",
                        "Strong SEO & keyword targeting",
                    ],
                ),
            ],
            domain: DomainOffer::default(),
            faq_heading: "Frequently Asked Questions".to_string(),
            faq: vec![
                faq(
                    "Is this a one-time payment?",
                    "Yes. Website design is a one-time cost. Domain & hosting are yearly.",
                ),
                faq(
                    "Can I upgrade my package later?",
                    "Absolutely. You can upgrade anytime as your business grows.",
                ),
                faq(
                    "Will my website appear on Google?",
                    "Yes. All packages include SEO setup so your site is Google-ready.",
                ),
                faq(
                    "Do you handle content and images?",
                    "Yes, we help structure content and guide you on best images.",
                ),
            ],
            closing: "Instagram attracts attention. Your website converts it into bookings.".to_string(),
            reveal: RevealSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_content_has_three_plans_and_four_questions() {
        let content = PageContent::default();
        assert_eq!(content.plans.len(), 3);
        assert_eq!(content.faq.len(), 4);

        let colors: Vec<_> = content.plans.iter().map(|p| p.color).collect();
        assert_eq!(colors, vec![PlanVariant::Light, PlanVariant::Gold, PlanVariant::Dark]);
        assert_eq!(content.plans[1].badge.as_deref(), Some("MOST POPULAR"));
        assert!(content.plans.iter().all(|p| p.features.len() == 6));
    }

    #[test]
    fn empty_object_yields_built_in_content() {
        let content = PageContent::from_json("{}").unwrap();
        assert_eq!(content, PageContent::default());
    }

    #[test]
    fn injected_plans_replace_defaults() {
        let content = PageContent::from_json(
            r#"{
                "plans": [{
                    "title": "Solo",
                    "subtitle": "Just one",
                    "price": "$99",
                    "time": "3 days",
                    "features": ["A", "B"],
                    "color": "gold",
                    "badge": "NEW"
                }],
                "faq": [{"question": "Q1", "answer": "A1"}]
            }"#,
        )
        .unwrap();

        assert_eq!(content.plans.len(), 1);
        assert_eq!(content.plans[0].badge.as_deref(), Some("NEW"));
        assert_eq!(content.faq.len(), 1);
        assert_eq!(content.eyebrow, "Pricing & Packages");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PageContent::from_json("{ plans: ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = PageContent::from_json(r#"{"reveal": {"threshold": -0.1}}"#).unwrap_err();
        assert!(matches!(err, ContentError::InvalidThreshold(t) if t == -0.1));
    }

    #[test]
    fn offset_that_escapes_the_rule_is_rejected() {
        let err = PageContent::from_json(r#"{"reveal": {"offset": "2rem); } body { display: none"}}"#)
            .unwrap_err();
        assert!(matches!(err, ContentError::InvalidOffset(ref o) if o.contains('}')));
    }

    #[test]
    fn custom_offset_is_kept() {
        let content = PageContent::from_json(r#"{"reveal": {"offset": "40px"}}"#).unwrap();
        assert_eq!(content.reveal.offset, "40px");
    }

    #[test]
    fn empty_plan_list_is_rejected() {
        let err = PageContent::from_json(r#"{"plans": []}"#).unwrap_err();
        assert!(matches!(err, ContentError::NoPlans));
    }
}
