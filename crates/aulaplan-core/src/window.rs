//! Time-of-day windows for class sessions.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Formatting sentinel for "window not applicable".
///
/// The persistence boundary treats `00:00:00` as "not set", never as a
/// real midnight value.
pub const TIME_NOT_SET: &str = "00:00:00";

/// A time-of-day window bounded by a start and an end on the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    /// Create a window, rejecting `end <= start`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, ScheduleError> {
        if end <= start {
            return Err(ScheduleError::InvalidTimeWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window length in fractional hours, clamped to >= 0.
    pub fn duration_hours(&self) -> f64 {
        let secs = (self.end - self.start).num_seconds();
        secs.max(0) as f64 / 3600.0
    }

    /// Start bound as `HH:MM:SS`.
    pub fn start_hms(&self) -> String {
        self.start.format("%H:%M:%S").to_string()
    }

    /// End bound as `HH:MM:SS`.
    pub fn end_hms(&self) -> String {
        self.end.format("%H:%M:%S").to_string()
    }
}

impl std::str::FromStr for TimeWindow {
    type Err = ScheduleError;

    /// Parse `"HH:MM-HH:MM"` (seconds optional on either bound).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ScheduleError::InvalidWindowSpec(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(bad)?;
        let start = parse_time(start.trim()).ok_or_else(bad)?;
        let end = parse_time(end.trim()).ok_or_else(bad)?;
        Self::new(start, end)
    }
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn duration_in_fractional_hours() {
        let window = TimeWindow::new(t(18, 0), t(20, 30)).unwrap();
        assert_eq!(window.duration_hours(), 2.5);
    }

    #[test]
    fn rejects_inverted_window() {
        let result = TimeWindow::new(t(20, 0), t(18, 0));
        assert!(matches!(
            result,
            Err(ScheduleError::InvalidTimeWindow { .. })
        ));
    }

    #[test]
    fn rejects_zero_length_window() {
        assert!(TimeWindow::new(t(9, 0), t(9, 0)).is_err());
    }

    #[test]
    fn parses_window_spec() {
        let window: TimeWindow = "18:00-20:00".parse().unwrap();
        assert_eq!(window.start, t(18, 0));
        assert_eq!(window.end, t(20, 0));

        let with_seconds: TimeWindow = "09:00:00-12:30:00".parse().unwrap();
        assert_eq!(with_seconds.duration_hours(), 3.5);
    }

    #[test]
    fn rejects_malformed_spec() {
        assert!("18:00".parse::<TimeWindow>().is_err());
        assert!("18:00-".parse::<TimeWindow>().is_err());
        assert!("banana-20:00".parse::<TimeWindow>().is_err());
    }

    #[test]
    fn formats_bounds_as_hms() {
        let window = TimeWindow::new(t(9, 0), t(12, 0)).unwrap();
        assert_eq!(window.start_hms(), "09:00:00");
        assert_eq!(window.end_hms(), "12:00:00");
    }
}
