//! Optimizer configuration.
//!
//! Collects every policy knob of a run: the scoring policy and the slot
//! grid step. Loadable from TOML; missing keys fall back to the defaults.
//!
//! ```toml
//! slot_step_minutes = 30
//!
//! [scoring]
//! priority_weight = 0.5
//! urgency_weight = 0.3
//! brevity_weight = 0.2
//! ```

use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scoring::ScoringPolicy;

/// Configuration for [`crate::optimizer::MeetingOptimizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Scoring weights and normalization constants.
    pub scoring: ScoringPolicy,
    /// Candidate start grid step inside each window (minutes).
    pub slot_step_minutes: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringPolicy::default(),
            slot_step_minutes: 15,
        }
    }
}

impl OptimizerConfig {
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_slot_step_minutes(mut self, minutes: u32) -> Self {
        self.slot_step_minutes = minutes;
        self
    }

    /// Slot grid step as a `Duration`.
    #[inline]
    pub fn slot_step(&self) -> Duration {
        Duration::minutes(i64::from(self.slot_step_minutes))
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.scoring.validate().map_err(Error::InvalidConfig)?;
        if self.slot_step_minutes == 0 {
            return Err(Error::InvalidConfig(
                "slot_step_minutes must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OptimizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.slot_step(), Duration::minutes(15));
        assert_eq!(config.scoring, ScoringPolicy::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = OptimizerConfig::from_toml_str("slot_step_minutes = 30\n").unwrap();
        assert_eq!(config.slot_step_minutes, 30);
        assert_eq!(config.scoring, ScoringPolicy::default());
    }

    #[test]
    fn test_toml_scoring_section() {
        let text = r#"
            [scoring]
            priority_weight = 0.5
            urgency_weight = 0.3
            brevity_weight = 0.2
            brevity_cap_minutes = 120
        "#;
        let config = OptimizerConfig::from_toml_str(text).unwrap();
        assert!((config.scoring.priority_weight - 0.5).abs() < 1e-10);
        assert_eq!(config.scoring.brevity_cap_minutes, 120);
        assert_eq!(config.scoring.urgency_horizon_minutes, 30 * 24 * 60);
        assert_eq!(config.slot_step_minutes, 15);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = OptimizerConfig::from_toml_str("slot_step_minutes = 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let text = "[scoring]\npriority_weight = 0.9\n";
        let err = OptimizerConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = OptimizerConfig::from_toml_str("slot_step_minutes = \"soon\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = OptimizerConfig::from_toml_file("/nonexistent/u-meeting.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
