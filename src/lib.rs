//! Meeting scheduling optimizer for a single calendar.
//!
//! Given pending meetings (priority, duration, deadline) and the free-time
//! windows of one calendar, assigns each meeting at most one
//! non-overlapping slot, maximizing a weighted desirability score subject
//! to the meeting's deadline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Meeting`, `AvailabilityWindow`,
//!   `TimeInterval`, `ScheduledMeeting`, `Schedule`
//! - **`scoring`**: Weighted priority/urgency/brevity desirability score
//! - **`optimizer`**: Greedy slot placement and schedule metrics
//! - **`config`**: Policy knobs, loadable from TOML
//! - **`validation`**: Caller-side input checks
//! - **`generator`**: Seeded random workloads
//!
//! # Architecture
//!
//! The optimizer is a pure, synchronous computation over in-memory
//! inputs. It has no knowledge of storage, transport, or users; loading
//! meetings and persisting placements belong to the embedding service.
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use u_meeting::models::{AvailabilityWindow, Meeting};
//! use u_meeting::optimizer::{MeetingOptimizer, ScheduleSummary};
//!
//! let now = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();
//! let meetings = vec![
//!     Meeting::new("review", 9, 30, now + Duration::hours(10)),
//!     Meeting::new("sync", 2, 30, now + Duration::hours(10)),
//! ];
//! let windows = vec![AvailabilityWindow::new(
//!     now + Duration::hours(1),
//!     now + Duration::minutes(90),
//! )];
//!
//! let schedule = MeetingOptimizer::new().optimize_at(&meetings, &windows, now);
//! assert_eq!(schedule.placements[0].meeting.id, "review");
//! assert_eq!(schedule.unscheduled, vec!["sync".to_string()]);
//!
//! let summary = ScheduleSummary::calculate(&schedule, &meetings, &windows);
//! assert_eq!(summary.scheduled_count, 1);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4: Greedy Algorithms
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod optimizer;
pub mod scoring;
pub mod validation;

pub use config::OptimizerConfig;
pub use error::{Error, Result};
pub use optimizer::MeetingOptimizer;
