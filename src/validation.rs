//! Input validation for meeting optimization.
//!
//! The optimizer assumes well-formed input and never checks it. Callers
//! run these checks first. Detects:
//! - Duplicate meeting IDs
//! - Priority outside 1..=10
//! - Zero duration
//! - Empty or inverted availability windows
//! - Meetings longer than every window

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{AvailabilityWindow, Meeting};

/// Lowest accepted priority.
pub const MIN_PRIORITY: u8 = 1;
/// Highest accepted priority.
pub const MAX_PRIORITY: u8 = 10;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two meetings share the same ID.
    DuplicateId,
    /// Priority outside the accepted range.
    PriorityOutOfRange,
    /// Meeting has zero duration.
    EmptyDuration,
    /// Window start is not before its end.
    InvalidWindow,
    /// Meeting cannot fit in any window.
    ExceedsAllWindows,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates meetings and availability windows.
///
/// Checks:
/// 1. No duplicate meeting IDs
/// 2. Every priority in `MIN_PRIORITY..=MAX_PRIORITY`
/// 3. Every duration positive
/// 4. Every window has `start_time < end_time`
/// 5. Every meeting fits in at least one valid window (skipped when there
///    are no valid windows, since then nothing fits)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(meetings: &[Meeting], windows: &[AvailabilityWindow]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for m in meetings {
        if !ids.insert(m.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate meeting ID: {}", m.id),
            ));
        }

        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&m.priority) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityOutOfRange,
                format!(
                    "Meeting '{}' has priority {} (expected {MIN_PRIORITY}-{MAX_PRIORITY})",
                    m.id, m.priority
                ),
            ));
        }

        if m.duration_minutes == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyDuration,
                format!("Meeting '{}' has zero duration", m.id),
            ));
        }
    }

    for (i, w) in windows.iter().enumerate() {
        if w.start_time >= w.end_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!(
                    "Availability window #{i} starts at {} but ends at {}",
                    w.start_time, w.end_time
                ),
            ));
        }
    }

    let longest_window = windows.iter().map(|w| w.duration_minutes()).max().unwrap_or(0);
    if longest_window > 0 {
        for m in meetings {
            if i64::from(m.duration_minutes) > longest_window {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ExceedsAllWindows,
                    format!(
                        "Meeting '{}' needs {} min but the longest window is {} min",
                        m.id, m.duration_minutes, longest_window
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
