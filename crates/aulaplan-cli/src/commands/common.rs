//! Shared flag parsing for schedule input.

use aulaplan_core::{ScheduleInput, SessionCounts, TimeWindow, WeekdayPattern, WeekdaySet};
use chrono::NaiveDate;
use clap::Args;

use crate::config::Config;

type CliError = Box<dyn std::error::Error>;

/// Flags shared by every command that builds a `ScheduleInput`.
#[derive(Args)]
pub struct InputArgs {
    /// First candidate session date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Weekdays, as names or codes: "mon,wed,fri" or "1,3,5"
    #[arg(long)]
    pub days: Option<String>,

    /// Weekday time window, e.g. "18:00-20:00"
    #[arg(long)]
    pub window: Option<String>,

    /// Distinct Saturday window, e.g. "09:00-12:00"
    #[arg(long)]
    pub saturday_window: Option<String>,

    /// Number of synchronous sessions
    #[arg(long = "sync", default_value_t = 0)]
    pub synchronous: u32,

    /// Number of asynchronous sessions
    #[arg(long = "async", default_value_t = 0)]
    pub asynchronous: u32,

    /// Window for asynchronous work, e.g. "08:00-10:00"
    #[arg(long)]
    pub async_window: Option<String>,
}

impl InputArgs {
    /// Map flags onto a `ScheduleInput`, filling gaps from config defaults.
    pub fn to_input(&self, defaults: &Config) -> Result<ScheduleInput, CliError> {
        let days = match self.days.as_deref().or(defaults.default_days.as_deref()) {
            Some(spec) => parse_days(spec)?,
            None => WeekdaySet::new(),
        };
        let weekday_window = self
            .window
            .as_deref()
            .or(defaults.default_window.as_deref())
            .map(parse_window)
            .transpose()?;
        let saturday_window = self
            .saturday_window
            .as_deref()
            .or(defaults.default_saturday_window.as_deref())
            .map(parse_window)
            .transpose()?;
        let async_window = self.async_window.as_deref().map(parse_window).transpose()?;

        Ok(ScheduleInput {
            start_date: self.start_date,
            pattern: WeekdayPattern {
                days,
                weekday_window,
                saturday_window,
            },
            counts: SessionCounts::new(self.synchronous, self.asynchronous),
            async_window,
        })
    }
}

/// Parse a comma-separated weekday list of names or numeric codes.
pub fn parse_days(spec: &str) -> Result<WeekdaySet, CliError> {
    let mut codes = Vec::new();
    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        codes.push(day_code(part)?);
    }
    Ok(WeekdaySet::from_codes(&codes)?)
}

fn day_code(name: &str) -> Result<u8, CliError> {
    if let Ok(code) = name.parse::<u8>() {
        return Ok(code);
    }
    let code = match name.to_ascii_lowercase().as_str() {
        "mon" | "monday" => 1,
        "tue" | "tuesday" => 2,
        "wed" | "wednesday" => 3,
        "thu" | "thursday" => 4,
        "fri" | "friday" => 5,
        "sat" | "saturday" => 6,
        "sun" | "sunday" => 7,
        _ => return Err(format!("unknown weekday '{name}'").into()),
    };
    Ok(code)
}

pub fn parse_window(spec: &str) -> Result<TimeWindow, CliError> {
    Ok(spec.parse::<TimeWindow>()?)
}
