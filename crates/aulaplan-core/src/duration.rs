//! Total-duration computation for a module's weekly pattern.
//!
//! Chooses between a closed-form multiplication (every session the same
//! length) and a calendar simulation (Saturday runs a different window,
//! so Saturday occurrences have to be counted before they can be priced).

use crate::schedule::{ModuleSchedule, ScheduleInput};
use crate::simulator::CalendarSimulator;

/// Saturday and weekday durations within this many hours count as equal.
pub const DURATION_EPSILON_HOURS: f64 = 0.01;

/// Computes per-session and total instructional hours.
#[derive(Debug, Clone)]
pub struct DurationCalculator {
    epsilon_hours: f64,
    simulator: CalendarSimulator,
}

impl DurationCalculator {
    pub fn new() -> Self {
        Self {
            epsilon_hours: DURATION_EPSILON_HOURS,
            simulator: CalendarSimulator::new(),
        }
    }

    /// Override the duration-equality epsilon.
    pub fn with_epsilon(mut self, epsilon_hours: f64) -> Self {
        self.epsilon_hours = epsilon_hours;
        self
    }

    /// Compute duration fields for `input`; `generated_dates` stays empty.
    ///
    /// A missing weekday window or a zero synchronous count yields a
    /// zero-duration schedule, not an error: the caller may still be
    /// filling in the form.
    pub fn compute(&self, input: &ScheduleInput) -> ModuleSchedule {
        let weekday_window = match input.pattern.weekday_window {
            Some(window) if input.counts.synchronous > 0 => window,
            _ => return ModuleSchedule::insufficient(input),
        };

        let weekday_hours = weekday_window.duration_hours();
        let saturday_window = input.pattern.effective_saturday_window();
        let saturday_hours = saturday_window.map(|w| w.duration_hours()).unwrap_or(0.0);
        let sessions = input.counts.synchronous;

        let total = match (saturday_window, input.start_date) {
            // Saturday runs a genuinely different window: count how many
            // sessions land on one before pricing them.
            (Some(_), Some(start))
                if (saturday_hours - weekday_hours).abs() > self.epsilon_hours =>
            {
                let placement = self
                    .simulator
                    .simulate(start, input.pattern.days, sessions);
                let hits = placement.saturday_hits as f64;
                (sessions as f64 - hits) * weekday_hours + hits * saturday_hours
            }
            // No Saturday, a same-length Saturday, or no anchor date to
            // simulate from: every session is weekday-priced.
            _ => weekday_hours * sessions as f64,
        };

        ModuleSchedule {
            start_date: input.start_date,
            total_duration_hours: round2(total),
            weekday_duration_hours: weekday_hours,
            saturday_duration_hours: saturday_hours,
            generated_dates: Vec::new(),
            counts: input.counts,
            async_window: input.async_window,
        }
    }
}

impl Default for DurationCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to 2 decimal places for reporting.
fn round2(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}
