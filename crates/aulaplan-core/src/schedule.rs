//! Schedule input and result types for the module scheduling engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pattern::WeekdayPattern;
use crate::window::TimeWindow;

/// Session counts for a module.
///
/// Only `synchronous` sessions are placed on the weekly calendar;
/// `asynchronous` sessions count toward the persisted total only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionCounts {
    pub synchronous: u32,
    pub asynchronous: u32,
}

impl SessionCounts {
    pub fn new(synchronous: u32, asynchronous: u32) -> Self {
        Self {
            synchronous,
            asynchronous,
        }
    }

    /// Total persisted session count.
    ///
    /// Saturating, so a pathological pair of counts cannot wrap.
    pub fn total(&self) -> u32 {
        self.synchronous.saturating_add(self.asynchronous)
    }
}

/// Complete input for one scheduling computation.
///
/// Constructed fresh per request from raw form values; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// First candidate calendar day, inclusive.
    pub start_date: Option<NaiveDate>,
    pub pattern: WeekdayPattern,
    pub counts: SessionCounts,
    /// Window shown for asynchronous work; passed through untouched.
    pub async_window: Option<TimeWindow>,
}

/// Computed (or previously persisted) schedule for a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSchedule {
    pub start_date: Option<NaiveDate>,
    /// Total instructional hours, rounded to 2 decimal places.
    pub total_duration_hours: f64,
    pub weekday_duration_hours: f64,
    pub saturday_duration_hours: f64,
    /// Concrete session dates; populated only on the regenerate path.
    #[serde(default)]
    pub generated_dates: Vec<NaiveDate>,
    pub counts: SessionCounts,
    pub async_window: Option<TimeWindow>,
}

impl ModuleSchedule {
    /// Zero-duration schedule signalling "insufficient input yet".
    ///
    /// Expected during interactive form-filling; not an error.
    pub fn insufficient(input: &ScheduleInput) -> Self {
        Self {
            start_date: input.start_date,
            total_duration_hours: 0.0,
            weekday_duration_hours: 0.0,
            saturday_duration_hours: 0.0,
            generated_dates: Vec::new(),
            counts: input.counts,
            async_window: input.async_window,
        }
    }
}
