//! Schedule quality metrics.
//!
//! Aggregates a finished run into the figures the surrounding system
//! reports back: how many meetings were placed, how good the placements
//! are, and how much of the free time they consume.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement rate | placed / requested |
//! | Total / mean score | Sum / mean of placement scores |
//! | Booked minutes | Sum of placed durations |
//! | Available minutes | Union of all windows |
//! | Utilization | booked / available |
//! | Mean / min slack | deadline - scheduled end, over placements |

use crate::models::{covered_minutes, AvailabilityWindow, Meeting, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleSummary {
    /// Meetings placed.
    pub scheduled_count: usize,
    /// Requested meetings without a placement.
    pub unscheduled_count: usize,
    /// Fraction of requested meetings placed (0.0..1.0).
    pub placement_rate: f64,
    /// Sum of placement scores.
    pub total_score: f64,
    /// Mean placement score (0.0 if nothing placed).
    pub mean_score: f64,
    /// Minutes claimed by placements.
    pub booked_minutes: i64,
    /// Minutes covered by the union of all windows.
    pub available_minutes: i64,
    /// booked / available (0.0 if no availability).
    pub utilization: f64,
    /// Mean slack before deadlines (minutes).
    pub mean_slack_minutes: f64,
    /// Smallest slack before a deadline (minutes). `None` if nothing placed.
    pub min_slack_minutes: Option<i64>,
}

impl ScheduleSummary {
    /// Computes the summary of a run.
    ///
    /// # Arguments
    /// * `schedule` - The run result.
    /// * `meetings` - The meetings that were requested.
    /// * `windows` - The availability windows the run used.
    pub fn calculate(
        schedule: &Schedule,
        meetings: &[Meeting],
        windows: &[AvailabilityWindow],
    ) -> Self {
        let scheduled_count = schedule.len();
        let booked_minutes: i64 = schedule
            .placements
            .iter()
            .map(|p| p.interval().duration().num_minutes())
            .sum();
        let available_minutes = covered_minutes(windows);

        let slacks: Vec<i64> = schedule
            .placements
            .iter()
            .map(|p| p.slack().num_minutes())
            .collect();

        let placement_rate = if meetings.is_empty() {
            1.0
        } else {
            scheduled_count as f64 / meetings.len() as f64
        };

        let utilization = if available_minutes == 0 {
            0.0
        } else {
            booked_minutes as f64 / available_minutes as f64
        };

        let mean_slack_minutes = if slacks.is_empty() {
            0.0
        } else {
            slacks.iter().sum::<i64>() as f64 / slacks.len() as f64
        };

        Self {
            scheduled_count,
            unscheduled_count: meetings.len().saturating_sub(scheduled_count),
            placement_rate,
            total_score: schedule.total_score(),
            mean_score: schedule.mean_score(),
            booked_minutes,
            available_minutes,
            utilization,
            mean_slack_minutes,
            min_slack_minutes: slacks.iter().copied().min(),
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_placement_rate: f64, min_mean_score: f64) -> bool {
        self.placement_rate >= min_placement_rate && self.mean_score >= min_mean_score
    }
}
