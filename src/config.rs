use log::Level;
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` block that overrides the built-in content.
pub const CONTENT_ELEMENT_ID: &str = "pricing-content";

/// Attribute carrying a section's reveal target id, read back from observer entries.
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

pub const DEFAULT_THRESHOLD: f64 = 0.2;
pub const DEFAULT_TRANSITION_MS: u32 = 700;
pub const DEFAULT_OFFSET: &str = "2.5rem";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tuning for the scroll reveal animation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Fraction of a section that must be in the viewport before it is revealed.
    pub threshold: f64,
    pub transition_ms: u32,
    /// CSS length the hidden section is pushed down by.
    pub offset: String,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            transition_ms: DEFAULT_TRANSITION_MS,
            offset: DEFAULT_OFFSET.to_string(),
        }
    }
}

impl RevealSettings {
    pub fn threshold_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.threshold)
    }

    /// The offset is spliced into a stylesheet, so only a bare CSS length is accepted.
    pub fn offset_is_length(&self) -> bool {
        let offset = self.offset.trim();
        !offset.is_empty()
            && offset.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.')
            && offset
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '%'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_animation() {
        let settings = RevealSettings::default();
        assert_eq!(settings.threshold, 0.2);
        assert_eq!(settings.transition_ms, 700);
        assert_eq!(settings.offset, "2.5rem");
        assert!(settings.threshold_in_range());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let settings: RevealSettings = serde_json::from_str(r#"{"threshold": 0.5}"#).unwrap();
        assert_eq!(settings.threshold, 0.5);
        assert_eq!(settings.transition_ms, DEFAULT_TRANSITION_MS);
        assert_eq!(settings.offset, DEFAULT_OFFSET);
    }

    #[test]
    fn threshold_outside_unit_interval_is_rejected() {
        let settings = RevealSettings {
            threshold: 1.5,
            ..RevealSettings::default()
        };
        assert!(!settings.threshold_in_range());
    }

    #[test]
    fn offset_accepts_css_lengths() {
        for offset in ["2.5rem", "40px", "-1em", "10%", ".5rem", "0"] {
            let settings = RevealSettings {
                offset: offset.to_string(),
                ..RevealSettings::default()
            };
            assert!(settings.offset_is_length(), "{} should be accepted", offset);
        }
    }

    #[test]
    fn offset_rejects_stylesheet_breakers() {
        for offset in ["", "   ", "2rem;}", "} body { display: none", "calc(1px)", "2rem !important", "rem"] {
            let settings = RevealSettings {
                offset: offset.to_string(),
                ..RevealSettings::default()
            };
            assert!(!settings.offset_is_length(), "{:?} should be rejected", offset);
        }
    }
}
