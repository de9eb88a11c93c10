//! Calendar simulation: concrete session dates for a weekly pattern.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::pattern::WeekdaySet;

/// Hard cap on simulated day-steps.
///
/// An empty weekday set, or any pattern that cannot supply the requested
/// session count, terminates here instead of walking the calendar forever.
pub const MAX_DAY_STEPS: u32 = 1000;

/// Outcome of a calendar walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    /// Dates on which sessions were placed, in walk order.
    pub placed_dates: Vec<NaiveDate>,
    /// How many placed sessions fell on a Saturday.
    pub saturday_hits: u32,
}

impl Placement {
    /// Whether the walk placed every requested session.
    ///
    /// A short placement means the day-step cap was hit first; the caller
    /// decides whether to treat that as a validation failure.
    pub fn reached(&self, target: u32) -> bool {
        self.placed_dates.len() as u32 == target
    }
}

/// Walks the calendar one day at a time, placing sessions on pattern days.
///
/// Pure function of its inputs: no wall clock, no randomness. The duration
/// calculator uses it for the Saturday count only; the regenerate path
/// keeps the placed dates as the emitted session calendar.
#[derive(Debug, Clone)]
pub struct CalendarSimulator {
    max_day_steps: u32,
}

impl CalendarSimulator {
    pub fn new() -> Self {
        Self {
            max_day_steps: MAX_DAY_STEPS,
        }
    }

    /// Override the day-step cap.
    pub fn with_max_steps(mut self, max_day_steps: u32) -> Self {
        self.max_day_steps = max_day_steps;
        self
    }

    /// Place up to `target` sessions starting at `start` (inclusive).
    pub fn simulate(&self, start: NaiveDate, days: WeekdaySet, target: u32) -> Placement {
        let mut placement = Placement::default();
        let mut day = start;

        for _ in 0..self.max_day_steps {
            if placement.reached(target) {
                break;
            }
            if days.contains(day.weekday()) {
                placement.placed_dates.push(day);
                if day.weekday() == Weekday::Sat {
                    placement.saturday_hits += 1;
                }
            }
            day = match day.succ_opt() {
                Some(next) => next,
                None => break, // end of representable time
            };
        }

        placement
    }
}

impl Default for CalendarSimulator {
    fn default() -> Self {
        Self::new()
    }
}
