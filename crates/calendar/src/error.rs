//! Error types for the jornada-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the jornada-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year lies outside the window accepted around today.
    #[error("invalid year: {year} (must be {min}..={max})")]
    InvalidYear {
        /// The rejected year.
        year: i32,
        /// Smallest accepted year.
        min: i32,
        /// Largest accepted year.
        max: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a year/month/day triple does not name a real date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// Returned when "started this year" is selected without a contract start date.
    #[error("employment started this year but no contract start date was given")]
    MissingContractStart,

    /// Returned when the contract start date falls outside the calendar year.
    #[error("contract start date {date} is outside year {year}")]
    ContractStartOutsideYear {
        /// The contract start date.
        date: NaiveDate,
        /// The calendar year being generated.
        year: i32,
    },

    /// Internal post-condition failure: the skeleton has the wrong length.
    #[error("internal error: generated {got} days for {year}, expected {expected}")]
    DayCountMismatch {
        /// The calendar year.
        year: i32,
        /// Expected day count (365 or 366).
        expected: usize,
        /// Day count actually generated.
        got: usize,
    },
}
