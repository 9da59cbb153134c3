//! Run-local occupied interval set.
//!
//! Tracks the slots already claimed during one optimization run. The set
//! only grows; it is created empty at the start of a run and dropped at
//! the end, so concurrent runs never share it.
//!
//! # Structure
//! Claimed intervals are pairwise disjoint, so keyed by start they are
//! also sorted by end. A conflict check only has to look at the last
//! interval starting before the candidate ends: O(log n) instead of a
//! linear scan, with identical results.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::TimeInterval;

/// Set of disjoint, non-empty intervals claimed within one run.
#[derive(Debug, Clone, Default)]
pub struct OccupiedIntervals {
    /// start → end
    by_start: BTreeMap<DateTime<Utc>, DateTime<Utc>>,
}

impl OccupiedIntervals {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `candidate` overlaps any claimed interval.
    ///
    /// Half-open semantics: a candidate ending exactly where a claimed
    /// interval starts (or starting where one ends) does not conflict.
    pub fn conflicts(&self, candidate: &TimeInterval) -> bool {
        self.by_start
            .range(..candidate.end)
            .next_back()
            .is_some_and(|(_, &end)| end > candidate.start)
    }

    /// Claims an interval.
    ///
    /// Returns `false` (and leaves the set unchanged) if the interval is
    /// empty or overlaps an existing claim.
    pub fn claim(&mut self, interval: TimeInterval) -> bool {
        if interval.is_empty() || self.conflicts(&interval) {
            return false;
        }
        self.by_start.insert(interval.start, interval.end);
        true
    }

    /// Number of claimed intervals.
    pub fn len(&self) -> usize {
        self.by_start.len()
    }

    /// Whether nothing has been claimed.
    pub fn is_empty(&self) -> bool {
        self.by_start.is_empty()
    }

    /// Claimed intervals in start order.
    pub fn iter(&self) -> impl Iterator<Item = TimeInterval> + '_ {
        self.by_start
            .iter()
            .map(|(&start, &end)| TimeInterval::new(start, end))
    }
}
