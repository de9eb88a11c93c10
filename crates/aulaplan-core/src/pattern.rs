//! Weekly recurrence patterns: which weekdays a module meets, and when.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::window::TimeWindow;

/// Ascending Monday..Sunday listing, the stable iteration order for sets.
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Set of weekdays, serialized as numeric codes (1=Monday .. 7=Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    pub fn new() -> Self {
        Self(0)
    }

    pub fn from_days(days: &[Weekday]) -> Self {
        let mut set = Self::new();
        for &day in days {
            set.insert(day);
        }
        set
    }

    /// Build from numeric codes (1=Monday .. 7=Sunday).
    pub fn from_codes(codes: &[u8]) -> Result<Self, ScheduleError> {
        let mut set = Self::new();
        for &code in codes {
            if !(1..=7).contains(&code) {
                return Err(ScheduleError::InvalidWeekdayCode(code));
            }
            set.0 |= 1 << (code - 1);
        }
        Ok(set)
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << (day.number_from_monday() - 1);
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << (day.number_from_monday() - 1)) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate members in ascending Monday..Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> {
        let set = *self;
        WEEK.iter().copied().filter(move |&day| set.contains(day))
    }

    /// Numeric codes in stable ascending order (1=Monday .. 7=Sunday).
    pub fn codes(&self) -> Vec<u8> {
        self.iter().map(|day| day.number_from_monday() as u8).collect()
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(set: WeekdaySet) -> Self {
        set.codes()
    }
}

impl TryFrom<Vec<u8>> for WeekdaySet {
    type Error = ScheduleError;

    fn try_from(codes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_codes(&codes)
    }
}

/// Weekly recurrence pattern for a module's synchronous sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekdayPattern {
    /// Days of week on which sessions recur.
    pub days: WeekdaySet,
    /// Time window applied to every selected day except Saturday.
    pub weekday_window: Option<TimeWindow>,
    /// Distinct Saturday window, honored only when Saturday is selected.
    pub saturday_window: Option<TimeWindow>,
}

impl WeekdayPattern {
    /// The Saturday window this pattern actually honors, if any.
    pub fn effective_saturday_window(&self) -> Option<TimeWindow> {
        if self.days.contains(Weekday::Sat) {
            self.saturday_window
        } else {
            None
        }
    }
}
