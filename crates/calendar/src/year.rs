//! Clock-validated calendar year.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::date::{date_from_ymd, is_leap_year, year_length};
use crate::error::CalendarError;

/// How many years before and after the current year are accepted.
pub const YEAR_WINDOW: i32 = 10;

/// Source of "today" for year-range validation.
pub trait Clock {
    /// Returns the current date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time, read in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock that always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Creates a fixed clock from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the triple is not a real date.
    pub fn ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        date_from_ymd(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A calendar year within [`YEAR_WINDOW`] years of the clock's current year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    /// Creates a new `Year`, checking it against the clock.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `value` is more than
    /// [`YEAR_WINDOW`] years away from the clock's current year.
    pub fn new(value: i32, clock: &impl Clock) -> Result<Self, CalendarError> {
        let current = clock.today().year();
        let min = current - YEAR_WINDOW;
        let max = current + YEAR_WINDOW;
        if !(min..=max).contains(&value) {
            return Err(CalendarError::InvalidYear {
                year: value,
                min,
                max,
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw year value.
    pub fn get(self) -> i32 {
        self.0
    }

    /// Returns `true` for leap years.
    pub fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }

    /// Number of days in this year.
    pub fn day_count(self) -> usize {
        year_length(self.0)
    }

    /// Returns January 1 of this year.
    pub fn first_day(self) -> NaiveDate {
        // January 1 exists for every year chrono can represent.
        NaiveDate::from_yo_opt(self.0, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Returns December 31 of this year.
    pub fn last_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0, 12, 31).unwrap_or(NaiveDate::MAX)
    }

    /// Returns `true` if `date` falls inside this year.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.0
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
