//! Header configuration.
//!
//! All tunable constants of the interaction core live here: the scroll
//! threshold, the overlay geometry, animation durations, and the search
//! validation minimum. Values can be built in code or loaded from a
//! TOML file.

use std::fs;
use std::path::Path;

use masthead_motion::Easing;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tunable parameters of the header core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Scroll offset (units) separating the `Top` and `Scrolled` zones.
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,

    /// How far left the search trigger icon travels when the overlay
    /// opens.
    #[serde(default = "default_icon_travel")]
    pub icon_travel: f32,

    /// Minimum number of characters for a valid search keyword.
    #[serde(default = "default_min_keyword_len")]
    pub min_keyword_len: usize,

    /// Duration of the backdrop color fade in milliseconds.
    #[serde(default = "default_backdrop_ms")]
    pub backdrop_ms: f64,

    /// Duration of the overlay's input-scale and icon-shift animations
    /// in milliseconds.
    #[serde(default = "default_overlay_ms")]
    pub overlay_ms: f64,

    /// Easing curve shared by the overlay pair.
    #[serde(default)]
    pub overlay_easing: Easing,

    /// Duration of one full brand-mark opacity oscillation in
    /// milliseconds.
    #[serde(default = "default_pulse_period_ms")]
    pub pulse_period_ms: f64,
}

fn default_scroll_threshold() -> f64 {
    80.0
}

fn default_icon_travel() -> f32 {
    205.0
}

fn default_min_keyword_len() -> usize {
    2
}

fn default_backdrop_ms() -> f64 {
    300.0
}

fn default_overlay_ms() -> f64 {
    300.0
}

fn default_pulse_period_ms() -> f64 {
    1600.0
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: default_scroll_threshold(),
            icon_travel: default_icon_travel(),
            min_keyword_len: default_min_keyword_len(),
            backdrop_ms: default_backdrop_ms(),
            overlay_ms: default_overlay_ms(),
            overlay_easing: Easing::default(),
            pulse_period_ms: default_pulse_period_ms(),
        }
    }
}

impl HeaderConfig {
    /// Load configuration from a TOML file and validate it.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    ///
    /// Thresholds, distances and durations must be positive and finite;
    /// the keyword minimum must be at least 1.
    pub fn validate(&self) -> Result<()> {
        if !(self.scroll_threshold.is_finite() && self.scroll_threshold > 0.0) {
            return Err(Error::Config(format!(
                "scroll_threshold must be positive, got {}",
                self.scroll_threshold
            )));
        }
        if !(self.icon_travel.is_finite() && self.icon_travel > 0.0) {
            return Err(Error::Config(format!(
                "icon_travel must be positive, got {}",
                self.icon_travel
            )));
        }
        if self.min_keyword_len == 0 {
            return Err(Error::Config(
                "min_keyword_len must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("backdrop_ms", self.backdrop_ms),
            ("overlay_ms", self.overlay_ms),
            ("pulse_period_ms", self.pulse_period_ms),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Set the scroll threshold.
    pub fn with_scroll_threshold(mut self, threshold: f64) -> Self {
        self.scroll_threshold = threshold;
        self
    }

    /// Set the icon travel distance.
    pub fn with_icon_travel(mut self, travel: f32) -> Self {
        self.icon_travel = travel;
        self
    }

    /// Set the minimum keyword length.
    pub fn with_min_keyword_len(mut self, len: usize) -> Self {
        self.min_keyword_len = len;
        self
    }

    /// Set the backdrop fade duration.
    pub fn with_backdrop_ms(mut self, ms: f64) -> Self {
        self.backdrop_ms = ms;
        self
    }

    /// Set the overlay animation duration.
    pub fn with_overlay_ms(mut self, ms: f64) -> Self {
        self.overlay_ms = ms;
        self
    }

    /// Set the overlay easing curve.
    pub fn with_overlay_easing(mut self, easing: Easing) -> Self {
        self.overlay_easing = easing;
        self
    }

    /// Set the brand-mark pulse period.
    pub fn with_pulse_period_ms(mut self, ms: f64) -> Self {
        self.pulse_period_ms = ms;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = HeaderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scroll_threshold, 80.0);
        assert_eq!(config.icon_travel, 205.0);
        assert_eq!(config.min_keyword_len, 2);
        assert_eq!(config.overlay_easing, Easing::Linear);
    }

    #[test]
    fn test_builders() {
        let config = HeaderConfig::default()
            .with_scroll_threshold(120.0)
            .with_min_keyword_len(3)
            .with_overlay_easing(Easing::EaseOut);
        assert_eq!(config.scroll_threshold, 120.0);
        assert_eq!(config.min_keyword_len, 3);
        assert_eq!(config.overlay_easing, Easing::EaseOut);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: HeaderConfig = toml::from_str("scroll_threshold = 64.0").unwrap();
        assert_eq!(config.scroll_threshold, 64.0);
        assert_eq!(config.icon_travel, 205.0);
        assert_eq!(config.pulse_period_ms, 1600.0);
    }

    #[test]
    fn test_easing_round_trips_through_toml() {
        let config: HeaderConfig = toml::from_str("overlay_easing = \"ease_in_out\"").unwrap();
        assert_eq!(config.overlay_easing, Easing::EaseInOut);
    }

    #[test]
    fn test_validate_rejects_nonpositive_values() {
        assert!(HeaderConfig::default()
            .with_scroll_threshold(0.0)
            .validate()
            .is_err());
        assert!(HeaderConfig::default()
            .with_icon_travel(-5.0)
            .validate()
            .is_err());
        assert!(HeaderConfig::default()
            .with_min_keyword_len(0)
            .validate()
            .is_err());
        assert!(HeaderConfig::default()
            .with_overlay_ms(0.0)
            .validate()
            .is_err());
    }
}
