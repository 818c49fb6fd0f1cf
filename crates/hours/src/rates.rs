//! Working-hours table.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::HoursError;
use crate::round::round2;

/// Hours credited per scheduled day, by weekday bucket.
///
/// Every rate lies in `0..=24` and is stored rounded to 2 decimals.
/// Deserialization runs the same checks as [`WorkingHours::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWorkingHours")]
pub struct WorkingHours {
    weekday: f64,
    saturday: f64,
    sunday: f64,
    holiday: f64,
}

#[derive(Deserialize)]
struct RawWorkingHours {
    weekday: f64,
    saturday: f64,
    sunday: f64,
    holiday: f64,
}

impl TryFrom<RawWorkingHours> for WorkingHours {
    type Error = HoursError;

    fn try_from(raw: RawWorkingHours) -> Result<Self, Self::Error> {
        Self::new(raw.weekday, raw.saturday, raw.sunday, raw.holiday)
    }
}

fn check_rate(field: &'static str, value: f64) -> Result<f64, HoursError> {
    if !value.is_finite() || !(0.0..=24.0).contains(&value) {
        return Err(HoursError::InvalidRate { field, value });
    }
    Ok(round2(value))
}

impl WorkingHours {
    /// Creates a table from the four rates.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError::InvalidRate`] for the first rate outside `0..=24`.
    pub fn new(weekday: f64, saturday: f64, sunday: f64, holiday: f64) -> Result<Self, HoursError> {
        Ok(Self {
            weekday: check_rate("weekday", weekday)?,
            saturday: check_rate("saturday", saturday)?,
            sunday: check_rate("sunday", sunday)?,
            holiday: check_rate("holiday", holiday)?,
        })
    }

    /// Same rate for every bucket.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError::InvalidRate`] if `hours` is outside `0..=24`.
    pub fn uniform(hours: f64) -> Result<Self, HoursError> {
        Self::new(hours, hours, hours, hours)
    }

    /// Monday–Friday rate.
    pub fn weekday(&self) -> f64 {
        self.weekday
    }

    /// Saturday rate.
    pub fn saturday(&self) -> f64 {
        self.saturday
    }

    /// Sunday rate.
    pub fn sunday(&self) -> f64 {
        self.sunday
    }

    /// Worked-holiday rate.
    pub fn holiday(&self) -> f64 {
        self.holiday
    }

    /// Rate for a scheduled work day falling on `weekday`.
    pub fn rate_for(&self, weekday: Weekday) -> f64 {
        match weekday {
            Weekday::Sun => self.sunday,
            Weekday::Sat => self.saturday,
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => {
                self.weekday
            }
        }
    }
}

impl Default for WorkingHours {
    /// 8 hours for every bucket.
    fn default() -> Self {
        Self {
            weekday: 8.0,
            saturday: 8.0,
            sunday: 8.0,
            holiday: 8.0,
        }
    }
}
