//! Schedule (optimization result) model.
//!
//! A schedule is the outcome of one optimization run: the placements in
//! the order they were made, plus the meetings that could not be placed.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{Meeting, TimeInterval};

/// A meeting placed into a concrete time slot.
///
/// `scheduled_end - scheduled_start` always equals the meeting's duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledMeeting {
    /// The originating meeting.
    pub meeting: Meeting,
    /// Slot start (inclusive).
    pub scheduled_start: DateTime<Utc>,
    /// Slot end (exclusive).
    pub scheduled_end: DateTime<Utc>,
    /// Desirability of this exact placement, in [0, 1].
    pub score: f64,
}

impl ScheduledMeeting {
    /// Creates a placement starting at `start`; the end is derived from
    /// the meeting duration.
    pub fn new(meeting: Meeting, start: DateTime<Utc>, score: f64) -> Self {
        let end = start + meeting.duration();
        Self {
            meeting,
            scheduled_start: start,
            scheduled_end: end,
            score,
        }
    }

    /// Id of the placed meeting.
    #[inline]
    pub fn meeting_id(&self) -> &str {
        &self.meeting.id
    }

    /// The placement as a half-open interval.
    #[inline]
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.scheduled_start, self.scheduled_end)
    }

    /// Time left between the scheduled end and the deadline.
    pub fn slack(&self) -> Duration {
        self.meeting.deadline - self.scheduled_end
    }
}

/// Result of one optimization run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    /// Placements in placement (rank) order.
    pub placements: Vec<ScheduledMeeting>,
    /// Ids of meetings left unplaced, in rank order.
    pub unscheduled: Vec<String>,
    /// The "now" used to rank meetings.
    pub reference_time: DateTime<Utc>,
}

impl Schedule {
    /// Creates an empty schedule for a run ranked at `reference_time`.
    pub fn new(reference_time: DateTime<Utc>) -> Self {
        Self {
            placements: Vec::new(),
            unscheduled: Vec::new(),
            reference_time,
        }
    }

    /// Number of placed meetings.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Sum of placement scores.
    pub fn total_score(&self) -> f64 {
        self.placements.iter().map(|p| p.score).sum()
    }

    /// Mean placement score (0.0 when nothing was placed).
    pub fn mean_score(&self) -> f64 {
        if self.placements.is_empty() {
            0.0
        } else {
            self.total_score() / self.placements.len() as f64
        }
    }

    /// Finds the placement for a meeting.
    pub fn placement_for(&self, meeting_id: &str) -> Option<&ScheduledMeeting> {
        self.placements.iter().find(|p| p.meeting.id == meeting_id)
    }

    /// Whether a meeting was placed.
    pub fn is_scheduled(&self, meeting_id: &str) -> bool {
        self.placement_for(meeting_id).is_some()
    }

    /// Consumes the schedule, returning the placements.
    pub fn into_placements(self) -> Vec<ScheduledMeeting> {
        self.placements
    }
}
