//! Greedy meeting optimizer and schedule metrics.
//!
//! # Algorithm
//!
//! `MeetingOptimizer` ranks meetings by desirability, then gives each, in
//! rank order, the best conflict-free grid slot inside an eligible
//! availability window. It is a heuristic: fast and deterministic, not
//! globally optimal.
//!
//! # Metrics
//!
//! `ScheduleSummary` reports placement rate, score aggregates,
//! utilization of the free time, and deadline slack.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1: Interval Scheduling
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod greedy;
mod occupancy;
mod summary;

pub use greedy::MeetingOptimizer;
pub use occupancy::OccupiedIntervals;
pub use summary::ScheduleSummary;
