//! Meeting scheduling domain models.
//!
//! Provides the data types for one calendar's scheduling problem and its
//! solution. All values are plain, owned, and serde-serializable so the
//! surrounding system can load and persist them however it likes.
//!
//! # Types
//!
//! | Type | Role |
//! |------|------|
//! | `Meeting` | Pending request: priority, duration, deadline |
//! | `AvailabilityWindow` | Block of free calendar time |
//! | `TimeInterval` | Half-open `[start, end)` range |
//! | `ScheduledMeeting` | Meeting placed into a slot, with its score |
//! | `Schedule` | All placements of one run, plus unplaced ids |

mod availability;
mod meeting;
mod schedule;

pub use availability::{
    covered_minutes, remaining_availability, AvailabilityWindow, TimeInterval,
};
pub use meeting::Meeting;
pub use schedule::{Schedule, ScheduledMeeting};
