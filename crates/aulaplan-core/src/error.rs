//! Error types for the scheduling engine.
//!
//! Only caller contract violations and construction-time validation
//! failures are errors. An incomplete form (missing window, zero session
//! count) and an unreachable session target are expected states: they
//! surface as a zero-duration schedule and a short placement respectively,
//! never as an `Err`.

use chrono::NaiveTime;
use thiserror::Error;

use crate::resolver::ScheduleMode;

/// Engine error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Preserve mode was requested without the previously stored schedule.
    #[error("preserve mode requires a previously stored schedule")]
    MissingStoredSchedule,

    /// Create or regenerate mode was requested without schedule input.
    #[error("{mode} mode requires schedule input")]
    MissingInput { mode: ScheduleMode },

    /// A time window with `end <= start`.
    #[error("invalid time window: end ({end}) must be after start ({start})")]
    InvalidTimeWindow { start: NaiveTime, end: NaiveTime },

    /// A weekday code outside 1..=7.
    #[error("invalid weekday code {0}, expected 1 (Monday) through 7 (Sunday)")]
    InvalidWeekdayCode(u8),

    /// An unparseable time window spec.
    #[error("invalid time window '{0}', expected HH:MM-HH:MM")]
    InvalidWindowSpec(String),

    /// An unrecognized schedule mode name.
    #[error("unknown schedule mode '{0}', expected create, regenerate or preserve")]
    UnknownMode(String),
}

/// Result type alias for engine operations.
pub type Result<T, E = ScheduleError> = std::result::Result<T, E>;
