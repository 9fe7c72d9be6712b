use log::warn;
use serde::{Deserialize, Deserializer};

/// Visual style of a plan card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlanVariant {
    #[default]
    Light,
    Gold,
    Dark,
}

impl PlanVariant {
    /// Unknown tags render as `Light`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "light" => PlanVariant::Light,
            "gold" => PlanVariant::Gold,
            "dark" => PlanVariant::Dark,
            other => {
                warn!("Unknown plan color '{}', falling back to light", other);
                PlanVariant::Light
            }
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            PlanVariant::Light => "plan-card light",
            PlanVariant::Gold => "plan-card gold",
            PlanVariant::Dark => "plan-card dark",
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            PlanVariant::Dark => "plan-button inverted",
            PlanVariant::Light | PlanVariant::Gold => "plan-button outlined",
        }
    }
}

impl<'de> Deserialize<'de> for PlanVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(PlanVariant::from_tag(&tag))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingPlan {
    pub title: String,
    pub subtitle: String,
    pub price: String,
    /// Delivery time, shown as "Delivery: {time}".
    pub time: String,
    pub features: Vec<String>,
    #[serde(default, alias = "variant")]
    pub color: PlanVariant,
    #[serde(default)]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    #[serde(alias = "q")]
    pub question: String,
    #[serde(alias = "a")]
    pub answer: String,
}

/// Yearly domain and hosting callout below the plan grid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomainOffer {
    pub title: String,
    pub description: String,
    pub price: String,
    pub period: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_map_to_variants() {
        assert_eq!(PlanVariant::from_tag("light"), PlanVariant::Light);
        assert_eq!(PlanVariant::from_tag("gold"), PlanVariant::Gold);
        assert_eq!(PlanVariant::from_tag(" Dark "), PlanVariant::Dark);
    }

    #[test]
    fn unknown_tag_falls_back_to_light() {
        assert_eq!(PlanVariant::from_tag("platinum"), PlanVariant::Light);
        assert_eq!(PlanVariant::from_tag(""), PlanVariant::Light);
    }

    #[test]
    fn only_dark_card_inverts_button() {
        assert_eq!(PlanVariant::Dark.button_class(), "plan-button inverted");
        assert_eq!(PlanVariant::Gold.button_class(), "plan-button outlined");
        assert_eq!(PlanVariant::Light.button_class(), "plan-button outlined");
    }

    #[test]
    fn plan_deserializes_with_optional_fields() {
        let plan: PricingPlan = serde_json::from_str(
            r#"{
                "title": "Starter",
                "subtitle": "For new artists",
                "price": "₹6,000",
                "time": "7 days",
                "features": ["One page"],
                "color": "neon"
            }"#,
        )
        .unwrap();

        assert_eq!(plan.color, PlanVariant::Light);
        assert_eq!(plan.badge, None);
        assert_eq!(plan.features, vec!["One page".to_string()]);
    }

    #[test]
    fn faq_entry_accepts_short_keys() {
        let entry: FaqEntry = serde_json::from_str(r#"{"q": "Why?", "a": "Because."}"#).unwrap();
        assert_eq!(entry.question, "Why?");
        assert_eq!(entry.answer, "Because.");
    }
}
