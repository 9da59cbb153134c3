//! Meeting model.
//!
//! A meeting is a pending request for one contiguous block of calendar
//! time, carrying the caller's importance rating and a hard deadline.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A meeting waiting to be placed on the calendar.
///
/// # Invariants (caller-enforced)
/// - `1 <= priority <= 10`
/// - `duration_minutes > 0`
///
/// The optimizer does not check these; see [`crate::validation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meeting {
    /// Unique meeting identifier.
    pub id: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Caller-supplied importance (1 = lowest, 10 = highest).
    pub priority: u8,
    /// Required contiguous length (minutes).
    pub duration_minutes: u32,
    /// Latest allowed scheduled end.
    pub deadline: DateTime<Utc>,
}

impl Meeting {
    /// Creates a new meeting.
    pub fn new(
        id: impl Into<String>,
        priority: u8,
        duration_minutes: u32,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            priority,
            duration_minutes,
            deadline,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the duration (minutes).
    pub fn with_duration(mut self, duration_minutes: u32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Meeting length as a `Duration`.
    #[inline]
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Display label: the title if set, otherwise the id.
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_meeting_builder() {
        let deadline = Utc.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap();
        let m = Meeting::new("M1", 5, 30, deadline)
            .with_title("Budget review")
            .with_priority(8)
            .with_duration(45);

        assert_eq!(m.id, "M1");
        assert_eq!(m.title, "Budget review");
        assert_eq!(m.priority, 8);
        assert_eq!(m.duration_minutes, 45);
        assert_eq!(m.duration(), Duration::minutes(45));
        assert_eq!(m.deadline, deadline);
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let deadline = Utc.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap();
        let m = Meeting::new("M1", 5, 30, deadline);
        assert_eq!(m.label(), "M1");
        assert_eq!(m.with_title("Standup").label(), "Standup");
    }

    #[test]
    fn test_deserialize_without_title() {
        let json = r#"{
            "id": "M7",
            "priority": 3,
            "duration_minutes": 60,
            "deadline": "2025-03-10T18:00:00Z"
        }"#;
        let m: Meeting = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, "M7");
        assert!(m.title.is_empty());
        assert_eq!(m.duration_minutes, 60);
    }
}
