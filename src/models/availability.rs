//! Availability windows and time intervals.
//!
//! Defines the free-time blocks of the target calendar and the half-open
//! interval type used for placements and conflict checks.
//!
//! # Time Model
//! All time points are absolute UTC instants (`DateTime<Utc>`).
//! Lengths are whole minutes.
//!
//! # Window Sets
//! Windows may overlap, touch, or be given in any order. Nothing here
//! merges or sorts them; consumers that need a union (e.g. utilization)
//! compute it explicitly.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::ScheduledMeeting;

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    /// Interval start (inclusive).
    pub start: DateTime<Utc>,
    /// Interval end (exclusive).
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    /// Creates a new interval.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Creates an interval of `minutes` length starting at `start`.
    pub fn starting_at(start: DateTime<Utc>, minutes: u32) -> Self {
        Self {
            start,
            end: start + Duration::minutes(i64::from(minutes)),
        }
    }

    /// Length of this interval.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether the interval is empty or inverted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether a time point falls within this interval.
    #[inline]
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether `other` lies entirely within this interval.
    pub fn contains_interval(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Whether two intervals overlap.
    ///
    /// Touching intervals (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A contiguous block of free time on the target calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailabilityWindow {
    /// Window start (inclusive).
    pub start_time: DateTime<Utc>,
    /// Window end (exclusive).
    pub end_time: DateTime<Utc>,
}

impl AvailabilityWindow {
    /// Creates a new availability window.
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// The window as a half-open interval.
    #[inline]
    pub fn as_interval(&self) -> TimeInterval {
        TimeInterval::new(self.start_time, self.end_time)
    }

    /// Length of this window in whole minutes (0 if inverted).
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes().max(0)
    }

    /// Whether `interval` lies entirely within this window.
    pub fn contains_interval(&self, interval: &TimeInterval) -> bool {
        self.as_interval().contains_interval(interval)
    }
}

/// Subtracts placed meetings from each availability window.
///
/// Returns the free fragments left in each window, in window order and then
/// time order. Empty fragments are dropped; fully consumed windows vanish.
///
/// Running the optimizer on the result with the already-placed meetings
/// cannot place them again over consumed time.
pub fn remaining_availability(
    windows: &[AvailabilityWindow],
    placements: &[ScheduledMeeting],
) -> Vec<AvailabilityWindow> {
    let mut busy: Vec<TimeInterval> = placements.iter().map(|p| p.interval()).collect();
    busy.sort_by_key(|iv| iv.start);

    let mut remaining = Vec::new();
    for window in windows {
        let mut cursor = window.start_time;
        for iv in busy.iter().filter(|iv| iv.overlaps(&window.as_interval())) {
            if iv.start > cursor {
                remaining.push(AvailabilityWindow::new(cursor, iv.start));
            }
            cursor = cursor.max(iv.end);
        }
        if cursor < window.end_time {
            remaining.push(AvailabilityWindow::new(cursor, window.end_time));
        }
    }
    remaining
}

/// Total minutes covered by the union of the given windows.
///
/// Overlapping windows are counted once.
pub fn covered_minutes(windows: &[AvailabilityWindow]) -> i64 {
    let mut intervals: Vec<TimeInterval> = windows
        .iter()
        .map(AvailabilityWindow::as_interval)
        .filter(|iv| !iv.is_empty())
        .collect();
    intervals.sort_by_key(|iv| iv.start);

    let mut total = Duration::zero();
    let mut current: Option<TimeInterval> = None;
    for iv in intervals {
        match current.as_mut() {
            Some(cur) if iv.start <= cur.end => cur.end = cur.end.max(iv.end),
            Some(cur) => {
                total += cur.duration();
                *cur = iv;
            }
            None => current = Some(iv),
        }
    }
    if let Some(cur) = current {
        total += cur.duration();
    }
    total.num_minutes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Meeting;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
    }

    fn placed(start: DateTime<Utc>, minutes: u32) -> ScheduledMeeting {
        let meeting = Meeting::new("m", 5, minutes, at(23, 0));
        ScheduledMeeting::new(meeting, start, 0.5)
    }

    #[test]
    fn test_time_interval() {
        let iv = TimeInterval::new(at(9, 0), at(10, 0));
        assert_eq!(iv.duration(), Duration::minutes(60));
        assert!(iv.contains(at(9, 0)));
        assert!(iv.contains(at(9, 59)));
        assert!(!iv.contains(at(10, 0))); // exclusive end
        assert!(!iv.contains(at(8, 0)));
    }

    #[test]
    fn test_time_interval_overlap() {
        let a = TimeInterval::new(at(9, 0), at(10, 0));
        let b = TimeInterval::new(at(9, 30), at(10, 30));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeInterval::new(at(10, 0), at(11, 0)); // touching
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_starting_at() {
        let iv = TimeInterval::starting_at(at(9, 15), 45);
        assert_eq!(iv.end, at(10, 0));
    }

    #[test]
    fn test_window_contains_interval() {
        let w = AvailabilityWindow::new(at(9, 0), at(10, 0));
        assert!(w.contains_interval(&TimeInterval::new(at(9, 0), at(10, 0))));
        assert!(w.contains_interval(&TimeInterval::new(at(9, 15), at(9, 45))));
        assert!(!w.contains_interval(&TimeInterval::new(at(9, 45), at(10, 15))));
        assert_eq!(w.duration_minutes(), 60);
    }

    #[test]
    fn test_inverted_window_has_no_length() {
        let w = AvailabilityWindow::new(at(10, 0), at(9, 0));
        assert_eq!(w.duration_minutes(), 0);
        assert!(w.as_interval().is_empty());
    }

    #[test]
    fn test_remaining_availability_splits_window() {
        let windows = vec![AvailabilityWindow::new(at(9, 0), at(12, 0))];
        let placements = vec![placed(at(10, 0), 30)];

        let free = remaining_availability(&windows, &placements);
        assert_eq!(
            free,
            vec![
                AvailabilityWindow::new(at(9, 0), at(10, 0)),
                AvailabilityWindow::new(at(10, 30), at(12, 0)),
            ]
        );
    }

    #[test]
    fn test_remaining_availability_fully_consumed() {
        let windows = vec![AvailabilityWindow::new(at(9, 0), at(10, 0))];
        let placements = vec![placed(at(9, 0), 30), placed(at(9, 30), 30)];

        assert!(remaining_availability(&windows, &placements).is_empty());
    }

    #[test]
    fn test_remaining_availability_untouched_window() {
        let windows = vec![
            AvailabilityWindow::new(at(9, 0), at(10, 0)),
            AvailabilityWindow::new(at(14, 0), at(15, 0)),
        ];
        let placements = vec![placed(at(9, 0), 60)];

        let free = remaining_availability(&windows, &placements);
        assert_eq!(free, vec![AvailabilityWindow::new(at(14, 0), at(15, 0))]);
    }

    #[test]
    fn test_covered_minutes_merges_overlap() {
        let windows = vec![
            AvailabilityWindow::new(at(9, 0), at(10, 0)),
            AvailabilityWindow::new(at(9, 30), at(11, 0)), // overlaps first
            AvailabilityWindow::new(at(13, 0), at(14, 0)),
        ];
        assert_eq!(covered_minutes(&windows), 120 + 60);
    }

    #[test]
    fn test_covered_minutes_empty() {
        assert_eq!(covered_minutes(&[]), 0);
    }
}
