//! Greedy desirability-ordered meeting placement.
//!
//! # Algorithm
//!
//! 1. Rank meetings by desirability at the reference time ("now"),
//!    descending. The sort is stable: equal scores keep input order.
//! 2. For each meeting in rank order, scan every eligible window on the
//!    slot grid and keep the conflict-free candidate with the highest
//!    placement score (desirability at the candidate start).
//! 3. Claim the chosen slot immediately so lower-ranked meetings see it.
//!
//! A window is eligible only if its own end is at or before the meeting's
//! deadline. Windows ending later are skipped whole, even when an early
//! sub-slot would finish in time.
//!
//! No backtracking: a placement is never revisited, so the result can be
//! globally suboptimal.
//!
//! # Complexity
//! O(n log n + n * g * log n) where n = meetings, g = grid points across
//! all windows.

use chrono::{DateTime, Utc};
use tracing::{debug, info, trace};

use super::OccupiedIntervals;
use crate::config::OptimizerConfig;
use crate::error::Result;
use crate::models::{AvailabilityWindow, Meeting, Schedule, ScheduledMeeting, TimeInterval};
use crate::scoring::Scorer;

/// Single-calendar meeting optimizer.
///
/// Holds only configuration; every call owns its own occupied set, so one
/// optimizer can serve concurrent, independent runs.
///
/// # Example
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use u_meeting::models::{AvailabilityWindow, Meeting};
/// use u_meeting::optimizer::MeetingOptimizer;
///
/// let now = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();
/// let meetings = vec![Meeting::new("standup", 5, 30, now + Duration::hours(10))];
/// let windows = vec![AvailabilityWindow::new(
///     now + Duration::hours(1),
///     now + Duration::hours(2),
/// )];
///
/// let schedule = MeetingOptimizer::new().optimize_at(&meetings, &windows, now);
/// assert_eq!(schedule.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeetingOptimizer {
    config: OptimizerConfig,
    scorer: Scorer,
}

impl MeetingOptimizer {
    /// Creates an optimizer with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer from a configuration.
    ///
    /// Fails with [`crate::Error::InvalidConfig`] if the configuration does
    /// not validate.
    pub fn with_config(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        let scorer = Scorer::new(config.scoring.clone())?;
        Ok(Self { config, scorer })
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// The scorer used for ranking and placement.
    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Places meetings into the windows, ranking them at the current time.
    pub fn optimize(&self, meetings: &[Meeting], windows: &[AvailabilityWindow]) -> Schedule {
        self.optimize_at(meetings, windows, Utc::now())
    }

    /// Places meetings into the windows, ranking them at `now`.
    ///
    /// Deterministic for identical inputs. Meetings without a feasible
    /// slot are listed in `Schedule::unscheduled`; this is never an error.
    pub fn optimize_at(
        &self,
        meetings: &[Meeting],
        windows: &[AvailabilityWindow],
        now: DateTime<Utc>,
    ) -> Schedule {
        info!(
            meetings = meetings.len(),
            windows = windows.len(),
            %now,
            "meeting optimization started"
        );

        let mut schedule = Schedule::new(now);
        let mut occupied = OccupiedIntervals::new();

        for (rank, &idx) in self.rank(meetings, now).iter().enumerate() {
            let meeting = &meetings[idx];

            if meeting.duration_minutes == 0 {
                debug!(rank, id = %meeting.id, "zero-length meeting left unscheduled");
                schedule.unscheduled.push(meeting.id.clone());
                continue;
            }

            match self.best_slot(meeting, windows, &occupied) {
                Some(placement) => {
                    debug!(
                        rank,
                        id = %meeting.id,
                        start = %placement.scheduled_start,
                        end = %placement.scheduled_end,
                        score = placement.score,
                        "meeting placed"
                    );
                    occupied.claim(placement.interval());
                    schedule.placements.push(placement);
                }
                None => {
                    debug!(rank, id = %meeting.id, "no feasible slot");
                    schedule.unscheduled.push(meeting.id.clone());
                }
            }
        }

        info!(
            scheduled = schedule.len(),
            unscheduled = schedule.unscheduled.len(),
            mean_score = schedule.mean_score(),
            "meeting optimization finished"
        );
        schedule
    }

    /// Returns meeting indices in placement order.
    ///
    /// Descending ranking score at `now`; ties keep input order.
    pub fn rank(&self, meetings: &[Meeting], now: DateTime<Utc>) -> Vec<usize> {
        let scores: Vec<f64> = meetings.iter().map(|m| self.scorer.score(m, now)).collect();
        let mut indices: Vec<usize> = (0..meetings.len()).collect();
        indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
        indices
    }

    /// Finds the best conflict-free slot for one meeting.
    ///
    /// Scans windows in input order and each window's grid in time order;
    /// a later candidate replaces the current best only on a strictly
    /// higher score, so ties go to the first one found.
    pub fn best_slot(
        &self,
        meeting: &Meeting,
        windows: &[AvailabilityWindow],
        occupied: &OccupiedIntervals,
    ) -> Option<ScheduledMeeting> {
        let duration = meeting.duration();
        let step = self.config.slot_step();
        let mut best: Option<(DateTime<Utc>, f64)> = None;

        for (w, window) in windows.iter().enumerate() {
            if window.end_time > meeting.deadline {
                trace!(id = %meeting.id, window = w, "window ends after deadline, skipped");
                continue;
            }

            let mut start = window.start_time;
            while start + duration <= window.end_time {
                let candidate = TimeInterval::new(start, start + duration);
                if occupied.conflicts(&candidate) {
                    trace!(id = %meeting.id, window = w, %start, "candidate conflicts");
                } else {
                    let b = self.scorer.breakdown(meeting, start);
                    let score = b.total;
                    trace!(
                        id = %meeting.id,
                        window = w,
                        %start,
                        priority = b.priority,
                        urgency = b.urgency,
                        brevity = b.brevity,
                        total = b.total,
                        "candidate evaluated"
                    );
                    if best.map_or(true, |(_, best_score)| score > best_score) {
                        best = Some((start, score));
                    }
                }
                start += step;
            }
        }

        best.map(|(start, score)| ScheduledMeeting::new(meeting.clone(), start, score))
    }
}
