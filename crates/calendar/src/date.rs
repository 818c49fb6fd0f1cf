//! Date helpers over `chrono`.
//!
//! Days are plain [`NaiveDate`] values (no timezone), so there is no DST or
//! offset skew when iterating a year day by day.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;

/// Weekday names in the fixed Monday-first order used by work masks and
/// by the weekly distribution.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "lunes",
    "martes",
    "miercoles",
    "jueves",
    "viernes",
    "sabado",
    "domingo",
];

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `year`: 366 for leap years, 365 otherwise.
pub fn year_length(year: i32) -> usize {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(CalendarError::InvalidMonth { month }),
    }
}

/// Builds a date, mapping chrono's `None` to [`CalendarError::InvalidDate`].
pub fn date_from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidDate {
        year,
        month,
        day,
    })
}

/// ISO-8601 week number (weeks start on Monday, week 1 holds the first Thursday).
pub fn iso_week(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Translates a weekday into the Monday-first index used by weekly masks.
///
/// The native numbering is Sunday-first (0 = Sunday). Masks are
/// Monday-first, so Sunday maps to 6 and every other day shifts down by one.
/// Every Sunday-first/Monday-first conversion in the workspace goes through
/// this function.
pub fn monday_first_index(weekday: Weekday) -> usize {
    let sunday_first = weekday.num_days_from_sunday() as usize;
    if sunday_first == 0 { 6 } else { sunday_first - 1 }
}

/// Inverse of [`monday_first_index`]. Indices wrap modulo 7.
pub fn weekday_from_monday_index(index: usize) -> Weekday {
    match index % 7 {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

/// Lower-case Spanish name of a weekday (`"lunes"` .. `"domingo"`).
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[monday_first_index(weekday)]
}
