//! Interaction layer configuration.

use std::time::Duration;

use pagedom::{Selector, SelectorError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::is_valid_pattern;

/// Tunables for every installed behavior.
///
/// Defaults reproduce the stock page script. Build with the fluent setters
/// or deserialize from JSON; call [`InteractionConfig::validate`] (done by
/// `install`) before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Minimum vertical travel (px) for a touch to count as a swipe.
    pub swipe_threshold: f32,

    /// Visible fraction an element needs before it is revealed.
    pub reveal_threshold: f32,

    /// Adjustment to the bottom edge of the viewport when computing
    /// visibility. Negative values shrink it.
    pub reveal_root_margin_bottom: f32,

    /// Elements observed for scroll reveal.
    pub reveal_selector: String,

    /// Elements that get a ripple on click.
    pub ripple_selector: String,

    /// Load durations above this are logged as slow.
    pub slow_load_threshold_ms: u64,

    pub toast_duration_ms: u64,
    pub toast_exit_ms: u64,
    pub error_toast_duration_ms: u64,

    pub min_password_length: usize,

    /// Cancel submission of forms that fail validation.
    pub block_invalid_submit: bool,

    /// strftime pattern for the time in "Today"/"Yesterday" dates.
    pub time_format: String,

    /// strftime pattern for dates a week or more old.
    pub date_format: String,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            reveal_threshold: 0.1,
            reveal_root_margin_bottom: -50.0,
            reveal_selector: ".glass-card, .document-card".to_string(),
            ripple_selector: ".btn".to_string(),
            slow_load_threshold_ms: 3000,
            toast_duration_ms: 3000,
            toast_exit_ms: 300,
            error_toast_duration_ms: 5000,
            min_password_length: 6,
            block_invalid_submit: true,
            time_format: "%H:%M".to_string(),
            date_format: "%m/%d/%Y".to_string(),
        }
    }
}

impl InteractionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn swipe_threshold(mut self, px: f32) -> Self {
        self.swipe_threshold = px;
        self
    }

    pub fn reveal_threshold(mut self, ratio: f32) -> Self {
        self.reveal_threshold = ratio;
        self
    }

    pub fn reveal_root_margin_bottom(mut self, px: f32) -> Self {
        self.reveal_root_margin_bottom = px;
        self
    }

    pub fn reveal_selector(mut self, selector: impl Into<String>) -> Self {
        self.reveal_selector = selector.into();
        self
    }

    pub fn ripple_selector(mut self, selector: impl Into<String>) -> Self {
        self.ripple_selector = selector.into();
        self
    }

    pub fn slow_load_threshold(mut self, threshold: Duration) -> Self {
        self.slow_load_threshold_ms = threshold.as_millis() as u64;
        self
    }

    pub fn toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration_ms = duration.as_millis() as u64;
        self
    }

    pub fn error_toast_duration(mut self, duration: Duration) -> Self {
        self.error_toast_duration_ms = duration.as_millis() as u64;
        self
    }

    pub fn min_password_length(mut self, len: usize) -> Self {
        self.min_password_length = len;
        self
    }

    /// Let invalid forms submit anyway (validation still renders errors).
    pub fn allow_invalid_submit(mut self) -> Self {
        self.block_invalid_submit = false;
        self
    }

    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn toast_timeout(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }

    pub fn error_toast_timeout(&self) -> Duration {
        Duration::from_millis(self.error_toast_duration_ms)
    }

    pub fn slow_load_limit(&self) -> Duration {
        Duration::from_millis(self.slow_load_threshold_ms)
    }

    /// Check ranges, selectors and date patterns.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "swipe_threshold",
                value: self.swipe_threshold.to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::OutOfRange {
                field: "reveal_threshold",
                value: self.reveal_threshold.to_string(),
            });
        }
        if !self.reveal_root_margin_bottom.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "reveal_root_margin_bottom",
                value: self.reveal_root_margin_bottom.to_string(),
            });
        }
        if self.min_password_length == 0 {
            return Err(ConfigError::OutOfRange {
                field: "min_password_length",
                value: "0".to_string(),
            });
        }

        for (field, selector) in [
            ("reveal_selector", &self.reveal_selector),
            ("ripple_selector", &self.ripple_selector),
        ] {
            Selector::parse(selector)
                .map_err(|source| ConfigError::InvalidSelector { field, source })?;
        }

        for (field, format) in [
            ("time_format", &self.time_format),
            ("date_format", &self.date_format),
        ] {
            if !is_valid_pattern(format) {
                return Err(ConfigError::InvalidFormat {
                    field,
                    format: format.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Errors from [`InteractionConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("'{field}' is out of range: {value}")]
    OutOfRange { field: &'static str, value: String },

    #[error("'{field}' is not a valid selector")]
    InvalidSelector {
        field: &'static str,
        #[source]
        source: SelectorError,
    },

    #[error("'{field}' is not a valid date format: {format:?}")]
    InvalidFormat { field: &'static str, format: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(InteractionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let err = InteractionConfig::new()
            .reveal_threshold(1.5)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "reveal_threshold",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_combinator_selector() {
        let err = InteractionConfig::new()
            .reveal_selector(".cards .card")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSelector {
                field: "reveal_selector",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_broken_strftime() {
        let err = InteractionConfig::new().time_format("%").validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat { field: "time_format", .. }));
    }
}
