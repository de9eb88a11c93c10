//! # Aulaplan Core Library
//!
//! Scheduling engine for Aulaplan training modules. Given a weekly
//! recurring class pattern (days of week, time windows, an optional
//! distinct Saturday window), a target session count and a start date,
//! it computes total instructional hours and, when a schedule is being
//! regenerated, the concrete calendar of session dates.
//!
//! The engine is a pure pipeline over immutable inputs:
//!
//! - [`DurationCalculator`]: per-session and total instructional hours
//! - [`CalendarSimulator`]: concrete session dates for a weekly pattern
//! - [`ScheduleModeResolver`]: recompute vs. stored pass-through dispatch
//! - [`SchedulePayloadBuilder`]: flat field set for the persistence boundary
//!
//! Form/UI collection of the raw values and storage of the results are
//! external collaborators. Nothing here performs I/O, and identical
//! inputs always produce identical output, so callers may re-trigger the
//! whole pipeline on every field change.

pub mod duration;
pub mod error;
pub mod pattern;
pub mod payload;
pub mod resolver;
pub mod schedule;
pub mod simulator;
pub mod window;

pub use duration::{DurationCalculator, DURATION_EPSILON_HOURS};
pub use error::{Result, ScheduleError};
pub use pattern::{day_name, WeekdayPattern, WeekdaySet};
pub use payload::{weekday_label, NormalizedPayload, SchedulePayloadBuilder};
pub use resolver::{ScheduleMode, ScheduleModeResolver};
pub use schedule::{ModuleSchedule, ScheduleInput, SessionCounts};
pub use simulator::{CalendarSimulator, Placement, MAX_DAY_STEPS};
pub use window::{TimeWindow, TIME_NOT_SET};
