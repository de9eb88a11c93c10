//! Mode resolution: recompute a schedule or pass the stored one through.
//!
//! The form layer historically expressed "keep the existing calendar" vs
//! "rebuild it" as an implicit radio-button state; here it is an explicit,
//! exhaustively matched mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::duration::DurationCalculator;
use crate::error::{Result, ScheduleError};
use crate::schedule::{ModuleSchedule, ScheduleInput};
use crate::simulator::CalendarSimulator;

/// How a schedule computation request should be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleMode {
    /// First-time computation from fresh input.
    Create,
    /// Recompute, and emit the concrete session calendar.
    Regenerate,
    /// Return the previously stored schedule untouched.
    Preserve,
}

impl fmt::Display for ScheduleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleMode::Create => write!(f, "create"),
            ScheduleMode::Regenerate => write!(f, "regenerate"),
            ScheduleMode::Preserve => write!(f, "preserve"),
        }
    }
}

impl FromStr for ScheduleMode {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(ScheduleMode::Create),
            "regenerate" => Ok(ScheduleMode::Regenerate),
            "preserve" => Ok(ScheduleMode::Preserve),
            other => Err(ScheduleError::UnknownMode(other.to_string())),
        }
    }
}

/// Dispatches between recomputation and stored pass-through.
#[derive(Debug, Clone, Default)]
pub struct ScheduleModeResolver {
    calculator: DurationCalculator,
    simulator: CalendarSimulator,
}

impl ScheduleModeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `mode` into a concrete schedule.
    ///
    /// Preserve returns `stored` verbatim, every field untouched. Create
    /// and Regenerate run the duration calculator against `input`;
    /// Regenerate additionally walks the calendar to emit the session
    /// dates. A missing `stored` or `input` for the respective modes is a
    /// caller contract violation, not a normal zero-result path.
    pub fn resolve(
        &self,
        mode: ScheduleMode,
        input: Option<&ScheduleInput>,
        stored: Option<&ModuleSchedule>,
    ) -> Result<ModuleSchedule> {
        match mode {
            ScheduleMode::Preserve => stored
                .cloned()
                .ok_or(ScheduleError::MissingStoredSchedule),
            ScheduleMode::Create | ScheduleMode::Regenerate => {
                let input = input.ok_or(ScheduleError::MissingInput { mode })?;
                let mut schedule = self.calculator.compute(input);
                if mode == ScheduleMode::Regenerate {
                    // No anchor date means nothing to walk; the dates stay
                    // empty and duration already fell back accordingly.
                    if let Some(start) = input.start_date {
                        let placement = self.simulator.simulate(
                            start,
                            input.pattern.days,
                            input.counts.synchronous,
                        );
                        schedule.generated_dates = placement.placed_dates;
                    }
                }
                Ok(schedule)
            }
        }
    }
}
