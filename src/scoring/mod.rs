//! Desirability scoring.
//!
//! Combines three normalized factors into one score in [0, 1]:
//!
//! ```text
//! score = w_p * priority + w_u * urgency + w_b * brevity
//! ```
//!
//! | Factor | Definition | Range |
//! |--------|-----------|-------|
//! | Priority | `priority / priority_scale` | (0, 1] |
//! | Urgency | `clamp(1 - (deadline - reference) / horizon, 0, 1)` | [0, 1] |
//! | Brevity | `1 - min(duration / brevity_cap, 1)` | [0, 1] |
//!
//! Urgency is a clamped linear decay: a deadline at or before the reference
//! saturates at 1.0, a deadline a full horizon away or more scores 0.0.
//!
//! # Modes
//!
//! The same formula serves two purposes in the optimizer:
//! - **Ranking**: reference = the run's "now", one score per meeting.
//! - **Placement**: reference = a candidate start time, one score per slot.
//!   Later candidates sit closer to the deadline and score higher urgency.

mod policy;

pub use policy::ScoringPolicy;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Meeting;

/// Per-factor view of a score.
///
/// Factor values are normalized (before weighting); `total` is the
/// weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Normalized priority.
    pub priority: f64,
    /// Normalized deadline urgency.
    pub urgency: f64,
    /// Normalized brevity.
    pub brevity: f64,
    /// Weighted total.
    pub total: f64,
}

/// Computes desirability scores under a [`ScoringPolicy`].
///
/// Pure and deterministic.
///
/// # Example
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use u_meeting::models::Meeting;
/// use u_meeting::scoring::Scorer;
///
/// let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
/// let meeting = Meeting::new("M1", 10, 0, now + Duration::days(15));
///
/// let b = Scorer::default().breakdown(&meeting, now);
/// assert!((b.urgency - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    policy: ScoringPolicy,
}

impl Scorer {
    /// Creates a scorer with the given policy.
    ///
    /// Fails with [`Error::InvalidConfig`] if the policy does not validate;
    /// a zero scale or horizon would otherwise yield non-finite scores.
    pub fn new(policy: ScoringPolicy) -> Result<Self> {
        policy.validate().map_err(Error::InvalidConfig)?;
        Ok(Self { policy })
    }

    /// The active policy.
    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Desirability of `meeting` relative to `reference`.
    #[inline]
    pub fn score(&self, meeting: &Meeting, reference: DateTime<Utc>) -> f64 {
        self.breakdown(meeting, reference).total
    }

    /// Desirability with per-factor values.
    pub fn breakdown(&self, meeting: &Meeting, reference: DateTime<Utc>) -> ScoreBreakdown {
        let p = &self.policy;
        let priority = self.normalized_priority(meeting);
        let urgency = self.normalized_urgency(meeting, reference);
        let brevity = self.normalized_brevity(meeting);

        ScoreBreakdown {
            priority,
            urgency,
            brevity,
            total: p.priority_weight * priority
                + p.urgency_weight * urgency
                + p.brevity_weight * brevity,
        }
    }

    fn normalized_priority(&self, meeting: &Meeting) -> f64 {
        f64::from(meeting.priority) / f64::from(self.policy.priority_scale)
    }

    fn normalized_urgency(&self, meeting: &Meeting, reference: DateTime<Utc>) -> f64 {
        let remaining_ms = (meeting.deadline - reference).num_milliseconds() as f64;
        let horizon_ms = self.policy.urgency_horizon().num_milliseconds() as f64;
        (1.0 - remaining_ms / horizon_ms).clamp(0.0, 1.0)
    }

    fn normalized_brevity(&self, meeting: &Meeting) -> f64 {
        let ratio = f64::from(meeting.duration_minutes) / f64::from(self.policy.brevity_cap_minutes);
        1.0 - ratio.min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
    }

    fn meeting(priority: u8, duration: u32, deadline_in: Duration) -> Meeting {
        Meeting::new("M", priority, duration, now() + deadline_in)
    }

    #[test]
    fn test_priority_normalization() {
        let s = Scorer::default();
        let b = s.breakdown(&meeting(1, 60, Duration::days(40)), now());
        assert!((b.priority - 0.1).abs() < 1e-10);
        let b = s.breakdown(&meeting(10, 60, Duration::days(40)), now());
        assert!((b.priority - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_urgency_linear_decay() {
        let s = Scorer::default();
        let b = s.breakdown(&meeting(5, 60, Duration::days(15)), now());
        assert!((b.urgency - 0.5).abs() < 1e-10);
        let b = s.breakdown(&meeting(5, 60, Duration::days(6)), now());
        assert!((b.urgency - 0.8).abs() < 1e-10);
    }

    #[test]
    fn test_urgency_saturates_past_deadline() {
        let s = Scorer::default();
        let b = s.breakdown(&meeting(5, 60, Duration::zero()), now());
        assert!((b.urgency - 1.0).abs() < 1e-10);
        let b = s.breakdown(&meeting(5, 60, Duration::days(-3)), now());
        assert!((b.urgency - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_urgency_zero_beyond_horizon() {
        let s = Scorer::default();
        let b = s.breakdown(&meeting(5, 60, Duration::days(30)), now());
        assert!((b.urgency - 0.0).abs() < 1e-10);
        let b = s.breakdown(&meeting(5, 60, Duration::days(90)), now());
        assert!((b.urgency - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_brevity() {
        let s = Scorer::default();
        let b = s.breakdown(&meeting(5, 60, Duration::days(40)), now());
        assert!((b.brevity - 0.75).abs() < 1e-10);
        let b = s.breakdown(&meeting(5, 240, Duration::days(40)), now());
        assert!((b.brevity - 0.0).abs() < 1e-10);
        let b = s.breakdown(&meeting(5, 480, Duration::days(40)), now());
        assert!((b.brevity - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_weighted_total() {
        // priority 0.5, urgency 0.5, brevity 0.75
        // 0.4*0.5 + 0.4*0.5 + 0.2*0.75 = 0.55
        let s = Scorer::default();
        let m = meeting(5, 60, Duration::days(15));
        assert!((s.score(&m, now()) - 0.55).abs() < 1e-10);
    }

    #[test]
    fn test_extremes_stay_in_unit_range() {
        let s = Scorer::default();
        let best = meeting(10, 0, Duration::days(-1));
        let worst = meeting(1, 1000, Duration::days(365));
        assert!((s.score(&best, now()) - 1.0).abs() < 1e-10);
        assert!((s.score(&worst, now()) - 0.04).abs() < 1e-10);
    }

    #[test]
    fn test_later_reference_scores_higher() {
        let s = Scorer::default();
        let m = meeting(5, 30, Duration::days(10));
        let early = s.score(&m, now());
        let late = s.score(&m, now() + Duration::days(5));
        assert!(late > early);
    }

    #[test]
    fn test_custom_policy() {
        let policy = ScoringPolicy::default().with_weights(1.0, 0.0, 0.0);
        let s = Scorer::new(policy.clone()).unwrap();
        assert_eq!(s.policy(), &policy);
        let m = meeting(7, 60, Duration::days(1));
        assert!((s.score(&m, now()) - 0.7).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let zero_scale = ScoringPolicy::default().with_priority_scale(0);
        assert!(matches!(Scorer::new(zero_scale), Err(Error::InvalidConfig(_))));

        let zero_horizon = ScoringPolicy::default().with_urgency_horizon_minutes(0);
        assert!(matches!(Scorer::new(zero_horizon), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_default_scorer_uses_default_policy() {
        assert_eq!(Scorer::default().policy(), &ScoringPolicy::default());
    }
}
