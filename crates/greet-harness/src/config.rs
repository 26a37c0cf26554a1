//! Harness configuration, validation, and error types.
//!
//! [`HarnessConfig`] controls how a measured call is reported.
//! [`validate()`](HarnessConfig::validate) runs when a
//! [`TimingHarness`](crate::TimingHarness) is built, so a harness in hand
//! always formats successfully.

use std::error::Error;
use std::fmt;

/// Largest number of fractional digits a report may carry.
pub const MAX_PRECISION: usize = 9;

// ── HarnessConfig ──────────────────────────────────────────────────

/// Report formatting for [`TimingHarness`](crate::TimingHarness).
///
/// The reported value is `elapsed_ms * scale`, printed with `precision`
/// fractional digits and followed by `unit`.
#[derive(Clone, Debug, PartialEq)]
pub struct HarnessConfig {
    /// Text before the colon. Default: `"Time"`.
    pub label: String,
    /// Multiplier applied to the elapsed milliseconds. Default: 1000.0.
    pub scale: f64,
    /// Fractional digits in the report. Default: 3.
    pub precision: usize,
    /// Unit suffix appended directly after the value. Default: `"µs"`.
    pub unit: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            label: "Time".to_string(),
            scale: 1000.0,
            precision: 3,
            unit: "µs".to_string(),
        }
    }
}

impl HarnessConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.label.is_empty() {
            return Err(ConfigError::EmptyLabel);
        }
        for (field, text) in [("label", &self.label), ("unit", &self.unit)] {
            if text.contains(['\n', '\r']) {
                return Err(ConfigError::LineBreakInReport { field });
            }
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::InvalidScale { value: self.scale });
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge {
                configured: self.precision,
            });
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`HarnessConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The report label is empty.
    EmptyLabel,
    /// Scale is NaN, infinite, zero, or negative.
    InvalidScale {
        /// The invalid value.
        value: f64,
    },
    /// Label or unit contains a line break, so the report would span
    /// more than one line.
    LineBreakInReport {
        /// Name of the offending field (`"label"` or `"unit"`).
        field: &'static str,
    },
    /// Precision exceeds [`MAX_PRECISION`].
    PrecisionTooLarge {
        /// The configured precision.
        configured: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "report label must not be empty"),
            Self::InvalidScale { value } => {
                write!(f, "scale must be finite and positive, got {value}")
            }
            Self::LineBreakInReport { field } => {
                write!(f, "report {field} must not contain line breaks")
            }
            Self::PrecisionTooLarge { configured } => {
                write!(f, "precision {configured} exceeds maximum of {MAX_PRECISION}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = HarnessConfig::default();
        assert_eq!(cfg.label, "Time");
        assert_eq!(cfg.scale, 1000.0);
        assert_eq!(cfg.precision, 3);
        assert_eq!(cfg.unit, "µs");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_label_rejected() {
        let cfg = HarnessConfig {
            label: String::new(),
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyLabel));
    }

    #[test]
    fn bad_scales_rejected() {
        for value in [0.0, -1.0, f64::INFINITY, f64::NEG_INFINITY] {
            let cfg = HarnessConfig {
                scale: value,
                ..Default::default()
            };
            assert_eq!(cfg.validate(), Err(ConfigError::InvalidScale { value }));
        }
        let nan = HarnessConfig {
            scale: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::InvalidScale { .. })
        ));
    }

    #[test]
    fn precision_bounds() {
        let at_max = HarnessConfig {
            precision: MAX_PRECISION,
            ..Default::default()
        };
        assert!(at_max.validate().is_ok());
        let over = HarnessConfig {
            precision: MAX_PRECISION + 1,
            ..Default::default()
        };
        assert_eq!(
            over.validate(),
            Err(ConfigError::PrecisionTooLarge { configured: 10 })
        );
    }

    #[test]
    fn line_breaks_in_label_rejected() {
        for label in ["Time\nInjected", "Time\r", "\r\n"] {
            let cfg = HarnessConfig {
                label: label.to_string(),
                ..Default::default()
            };
            assert_eq!(
                cfg.validate(),
                Err(ConfigError::LineBreakInReport { field: "label" })
            );
        }
    }

    #[test]
    fn line_breaks_in_unit_rejected() {
        for unit in ["µs\n", "\rµs"] {
            let cfg = HarnessConfig {
                unit: unit.to_string(),
                ..Default::default()
            };
            assert_eq!(
                cfg.validate(),
                Err(ConfigError::LineBreakInReport { field: "unit" })
            );
        }
        assert_eq!(
            ConfigError::LineBreakInReport { field: "unit" }.to_string(),
            "report unit must not contain line breaks"
        );
    }

    #[test]
    fn empty_unit_is_allowed() {
        let cfg = HarnessConfig {
            unit: String::new(),
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::InvalidScale { value: -2.0 }.to_string(),
            "scale must be finite and positive, got -2"
        );
        assert_eq!(
            ConfigError::PrecisionTooLarge { configured: 12 }.to_string(),
            "precision 12 exceeds maximum of 9"
        );
    }
}
