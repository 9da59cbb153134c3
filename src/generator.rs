//! Workload generator.
//!
//! Produces random but plausible meeting sets and office-hours
//! availability for benchmarks and property tests. Generation is fully
//! determined by the seed.

use chrono::{DateTime, Duration, Utc};
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::{Error, Result};
use crate::models::{AvailabilityWindow, Meeting};

/// Meeting lengths drawn by the generator (minutes).
const DURATION_CHOICES: [u32; 7] = [15, 30, 45, 60, 90, 120, 180];

/// Configuration for generating workloads.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Number of meetings.
    pub num_meetings: usize,
    /// Number of calendar days with availability.
    pub num_days: u32,
    /// Office hours start (minutes after the day start).
    pub day_start_minute: u32,
    /// Office hours end (minutes after the day start).
    pub day_end_minute: u32,
    /// Free window length range in 15-minute quarters (min, max).
    pub window_quarters_range: (u32, u32),
    /// Busy gap between windows in 15-minute quarters (min, max).
    pub gap_quarters_range: (u32, u32),
    /// Deadline range in days after the reference time (min, max).
    pub deadline_days_range: (u32, u32),
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            num_meetings: 20,
            num_days: 5,
            day_start_minute: 9 * 60,
            day_end_minute: 17 * 60,
            window_quarters_range: (2, 8), // 30min to 2hr
            gap_quarters_range: (1, 6),
            deadline_days_range: (1, 10),
        }
    }
}

impl WorkloadConfig {
    /// Few meetings, generous free time.
    pub fn light() -> Self {
        Self {
            num_meetings: 8,
            window_quarters_range: (4, 12),
            gap_quarters_range: (0, 2),
            ..Self::default()
        }
    }

    /// Moderate contention.
    pub fn busy() -> Self {
        Self::default()
    }

    /// More demand than free time; many meetings stay unplaced.
    pub fn overbooked() -> Self {
        Self {
            num_meetings: 60,
            num_days: 3,
            window_quarters_range: (1, 4),
            gap_quarters_range: (2, 8),
            deadline_days_range: (1, 4),
            ..Self::default()
        }
    }

    pub fn with_meetings(mut self, n: usize) -> Self {
        self.num_meetings = n;
        self
    }

    pub fn with_days(mut self, n: u32) -> Self {
        self.num_days = n;
        self
    }

    /// Validates the configuration.
    ///
    /// Every range must have `min <= max`, windows must be at least one
    /// quarter long, and office hours must be a non-empty span within a day.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let ranges = [
            ("window_quarters_range", self.window_quarters_range),
            ("gap_quarters_range", self.gap_quarters_range),
            ("deadline_days_range", self.deadline_days_range),
        ];
        for (name, (min, max)) in ranges {
            if min > max {
                return Err(format!("{name} min {min} exceeds max {max}"));
            }
        }
        if self.window_quarters_range.0 == 0 {
            return Err("window_quarters_range min must be at least 1".into());
        }
        if self.day_start_minute >= self.day_end_minute {
            return Err(format!(
                "day_start_minute {} must be before day_end_minute {}",
                self.day_start_minute, self.day_end_minute
            ));
        }
        if self.day_end_minute > 24 * 60 {
            return Err(format!(
                "day_end_minute must be at most 1440, got {}",
                self.day_end_minute
            ));
        }
        Ok(())
    }
}

/// A generated problem instance.
#[derive(Debug, Clone)]
pub struct Workload {
    /// Meetings to place.
    pub meetings: Vec<Meeting>,
    /// Free time.
    pub windows: Vec<AvailabilityWindow>,
    /// The "now" the instance was generated for.
    pub reference_time: DateTime<Utc>,
}

/// Seeded workload generator.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    config: WorkloadConfig,
}

impl WorkloadGenerator {
    /// Creates a generator.
    ///
    /// Fails with [`Error::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn new(config: WorkloadConfig) -> Result<Self> {
        config.validate().map_err(Error::InvalidConfig)?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Generates a workload. Day 0 starts at `reference_time`.
    pub fn generate(&self, seed: u64, reference_time: DateTime<Utc>) -> Workload {
        let mut rng = StdRng::seed_from_u64(seed);
        let windows = self.generate_windows(&mut rng, reference_time);
        let meetings = self.generate_meetings(&mut rng, reference_time);
        Workload {
            meetings,
            windows,
            reference_time,
        }
    }

    fn generate_windows<R: Rng>(
        &self,
        rng: &mut R,
        reference_time: DateTime<Utc>,
    ) -> Vec<AvailabilityWindow> {
        let c = &self.config;
        let mut windows = Vec::new();

        for day in 0..c.num_days {
            let day_origin = reference_time + Duration::days(i64::from(day));
            let office_end = day_origin + Duration::minutes(i64::from(c.day_end_minute));
            let mut cursor = day_origin + Duration::minutes(i64::from(c.day_start_minute));

            while cursor < office_end {
                let gap = rng.random_range(c.gap_quarters_range.0..=c.gap_quarters_range.1);
                let len = rng.random_range(c.window_quarters_range.0..=c.window_quarters_range.1);
                let start = cursor + Duration::minutes(15 * i64::from(gap));
                let end = (start + Duration::minutes(15 * i64::from(len))).min(office_end);
                if start < end {
                    windows.push(AvailabilityWindow::new(start, end));
                }
                cursor = end.max(start);
            }
        }
        windows
    }

    fn generate_meetings<R: Rng>(&self, rng: &mut R, reference_time: DateTime<Utc>) -> Vec<Meeting> {
        let c = &self.config;
        (0..c.num_meetings)
            .map(|i| {
                let priority = rng.random_range(1..=10u8);
                let duration = *DURATION_CHOICES.choose(rng).unwrap_or(&30);
                let days = rng.random_range(c.deadline_days_range.0..=c.deadline_days_range.1);
                let deadline = reference_time
                    + Duration::days(i64::from(days))
                    + Duration::minutes(i64::from(c.day_end_minute));
                Meeting::new(format!("M{i:03}"), priority, duration, deadline)
                    .with_title(format!("Generated meeting {i}"))
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            config: WorkloadConfig::default(),
        }
    }
}
