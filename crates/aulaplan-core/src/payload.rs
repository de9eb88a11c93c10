//! Normalization of a resolved schedule into the flat persistence fields.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::pattern::{day_name, WeekdayPattern, WeekdaySet};
use crate::schedule::ModuleSchedule;
use crate::window::{TimeWindow, TIME_NOT_SET};

/// Flat field set expected by the persistence boundary.
///
/// All time fields are `HH:MM:SS` strings; `"00:00:00"` always means
/// "not applicable", never a real midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPayload {
    pub start_date: Option<NaiveDate>,
    /// Comma-joined numeric weekday codes, ascending (1=Monday .. 7=Sunday).
    pub weekday_list: String,
    pub weekday_start: String,
    pub weekday_end: String,
    pub saturday_start: String,
    pub saturday_end: String,
    pub async_start: String,
    pub async_end: String,
    pub total_duration_hours: f64,
    pub session_count_synchronous: u32,
    pub session_count_asynchronous: u32,
    /// Always recomputed as synchronous + asynchronous.
    pub session_count_total: u32,
}

/// Builds the normalized payload from a resolved schedule.
pub struct SchedulePayloadBuilder;

impl SchedulePayloadBuilder {
    /// Normalize `schedule` under `pattern` for persistence.
    ///
    /// The session total is recomputed from the two counts; there is no
    /// way for a caller to supply a disagreeing total.
    pub fn build(schedule: &ModuleSchedule, pattern: &WeekdayPattern) -> NormalizedPayload {
        let (weekday_start, weekday_end) = window_fields(pattern.weekday_window);
        let (saturday_start, saturday_end) = window_fields(pattern.effective_saturday_window());

        // The async window only means something when asynchronous sessions
        // exist at all.
        let async_window = if schedule.counts.asynchronous > 0 {
            schedule.async_window
        } else {
            None
        };
        let (async_start, async_end) = window_fields(async_window);

        NormalizedPayload {
            start_date: schedule.start_date,
            weekday_list: join_codes(pattern.days),
            weekday_start,
            weekday_end,
            saturday_start,
            saturday_end,
            async_start,
            async_end,
            total_duration_hours: schedule.total_duration_hours,
            session_count_synchronous: schedule.counts.synchronous,
            session_count_asynchronous: schedule.counts.asynchronous,
            session_count_total: schedule.counts.total(),
        }
    }
}

fn window_fields(window: Option<TimeWindow>) -> (String, String) {
    match window {
        Some(w) => (w.start_hms(), w.end_hms()),
        None => (TIME_NOT_SET.to_string(), TIME_NOT_SET.to_string()),
    }
}

fn join_codes(days: WeekdaySet) -> String {
    days.codes()
        .iter()
        .map(|code| code.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Human-readable weekday listing for display surfaces.
///
/// A set exactly equal to Monday..Friday collapses to
/// "Monday through Friday"; anything else lists the days in ascending
/// order. Display-only; never part of the persisted payload.
pub fn weekday_label(days: WeekdaySet) -> String {
    const WORK_WEEK: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];
    if days == WeekdaySet::from_days(&WORK_WEEK) {
        return "Monday through Friday".to_string();
    }
    days.iter().map(day_name).collect::<Vec<_>>().join(", ")
}
