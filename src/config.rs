use log::{warn, Level};
use serde::Deserialize;

use crate::dom;
use crate::error::SiteError;
use crate::scroll::reactor::{GapPolicy, ReactorConfig};

/// Id of the optional `<script type="application/json">` block that
/// overrides the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tunables for every timed or threshold-driven effect on the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub scrolled_threshold: f64,
    pub parallax_step: f64,
    pub reveal_margin: f64,
    pub active_probe: f64,
    pub gap_policy: GapPolicy,
    pub scroll_debounce_ms: u32,
    pub resize_debounce_ms: u32,
    pub card_stagger_ms: u32,
    pub scroll_duration_ms: f64,
    pub header_gap: f64,
    pub mobile_breakpoint: f64,
    pub submit_delay_ms: u32,
    pub success_dismiss_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            parallax_step: 0.3,
            reveal_margin: 100.0,
            active_probe: 100.0,
            gap_policy: GapPolicy::Retain,
            scroll_debounce_ms: 16, // ~60 Hz
            resize_debounce_ms: 250,
            card_stagger_ms: 100,
            scroll_duration_ms: 1200.0,
            header_gap: 20.0,
            mobile_breakpoint: 768.0,
            submit_delay_ms: 2000,
            success_dismiss_ms: 8000,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads overrides from the page, falling back to defaults when the
    /// block is absent or malformed.
    pub fn load() -> Self {
        let raw = match dom::element_text(CONFIG_ELEMENT_ID) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                warn!("Could not read #{}: {}", CONFIG_ELEMENT_ID, e);
                return Self::default();
            }
        };
        Self::from_json(&raw).unwrap_or_else(|e| {
            warn!("Ignoring site config: {}", e);
            Self::default()
        })
    }

    pub fn reactor(&self) -> ReactorConfig {
        ReactorConfig {
            scrolled_threshold: self.scrolled_threshold,
            parallax_step: self.parallax_step,
            reveal_margin: self.reveal_margin,
            active_probe: self.active_probe,
            gap_policy: self.gap_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.scrolled_threshold, 50.0);
        assert_eq!(config.scroll_debounce_ms, 16);
        assert_eq!(config.scroll_duration_ms, 1200.0);
        assert_eq!(config.gap_policy, GapPolicy::Retain);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config = SiteConfig::from_json(r#"{"scroll_duration_ms": 600, "gap_policy": "clear"}"#)
            .unwrap();
        assert_eq!(config.scroll_duration_ms, 600.0);
        assert_eq!(config.gap_policy, GapPolicy::Clear);
        assert_eq!(config.card_stagger_ms, 100);
        assert_eq!(config.header_gap, 20.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(SiteError::Config(_))
        ));
    }

    #[test]
    fn reactor_config_carries_thresholds() {
        let config = SiteConfig {
            scrolled_threshold: 80.0,
            ..Default::default()
        };
        assert_eq!(config.reactor().scrolled_threshold, 80.0);
        assert_eq!(config.reactor().active_probe, 100.0);
    }
}
