//! Scoring policy knobs.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Weights and normalization constants for desirability scoring.
///
/// The defaults weight priority and urgency equally (0.4 each) and give
/// brevity the remaining 0.2, with a 30-day urgency horizon and a 4-hour
/// brevity cap.
///
/// # Examples
///
/// ```
/// use u_meeting::scoring::ScoringPolicy;
///
/// let policy = ScoringPolicy::default()
///     .with_weights(0.5, 0.3, 0.2)
///     .with_urgency_horizon_minutes(7 * 24 * 60);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    /// Weight of normalized priority.
    pub priority_weight: f64,
    /// Weight of normalized deadline urgency.
    pub urgency_weight: f64,
    /// Weight of normalized brevity.
    pub brevity_weight: f64,
    /// Priority value that normalizes to 1.0.
    pub priority_scale: u8,
    /// Deadline distance at which urgency reaches 0 (minutes).
    pub urgency_horizon_minutes: u32,
    /// Duration at which brevity reaches 0 (minutes).
    pub brevity_cap_minutes: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            priority_weight: 0.4,
            urgency_weight: 0.4,
            brevity_weight: 0.2,
            priority_scale: 10,
            urgency_horizon_minutes: 30 * 24 * 60,
            brevity_cap_minutes: 240,
        }
    }
}

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

impl ScoringPolicy {
    /// Sets all three weights.
    pub fn with_weights(mut self, priority: f64, urgency: f64, brevity: f64) -> Self {
        self.priority_weight = priority;
        self.urgency_weight = urgency;
        self.brevity_weight = brevity;
        self
    }

    pub fn with_priority_scale(mut self, scale: u8) -> Self {
        self.priority_scale = scale;
        self
    }

    pub fn with_urgency_horizon_minutes(mut self, minutes: u32) -> Self {
        self.urgency_horizon_minutes = minutes;
        self
    }

    pub fn with_brevity_cap_minutes(mut self, minutes: u32) -> Self {
        self.brevity_cap_minutes = minutes;
        self
    }

    /// Urgency horizon as a `Duration`.
    #[inline]
    pub fn urgency_horizon(&self) -> Duration {
        Duration::minutes(i64::from(self.urgency_horizon_minutes))
    }

    /// Validates the policy.
    ///
    /// Weights must be finite, non-negative, and sum to 1 so scores stay
    /// in [0, 1]. Scales must be positive.
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("priority_weight", self.priority_weight),
            ("urgency_weight", self.urgency_weight),
            ("brevity_weight", self.brevity_weight),
        ];
        for (name, w) in weights {
            if !w.is_finite() || w < 0.0 {
                return Err(format!("{name} must be a non-negative finite number, got {w}"));
            }
        }
        let sum = self.priority_weight + self.urgency_weight + self.brevity_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!("weights must sum to 1.0, got {sum}"));
        }
        if self.priority_scale == 0 {
            return Err("priority_scale must be positive".into());
        }
        if self.urgency_horizon_minutes == 0 {
            return Err("urgency_horizon_minutes must be positive".into());
        }
        if self.brevity_cap_minutes == 0 {
            return Err("brevity_cap_minutes must be positive".into());
        }
        Ok(())
    }
}
