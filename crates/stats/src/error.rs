//! Error types for the jornada-stats crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the jornada-stats crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// Returned when the calendar has no days.
    #[error("calendar is empty")]
    EmptyCalendar,

    /// Returned when per-state counts do not add up to the day count.
    #[error("inconsistent counts: {counted} days counted by state, calendar has {total}")]
    InconsistentCounts {
        /// Days counted across states (including unassigned).
        counted: usize,
        /// Length of the calendar.
        total: usize,
    },

    /// Returned when the annual contract target is not finite and positive.
    #[error("invalid annual contract hours: {value} (must be finite and > 0)")]
    InvalidContractHours {
        /// The rejected value.
        value: f64,
    },

    /// Returned when hours per day is not finite and positive.
    #[error("invalid hours per day: {value} (must be finite and > 0)")]
    InvalidHoursPerDay {
        /// The rejected value.
        value: f64,
    },

    /// Returned when an extra shift has non-positive or non-finite hours.
    #[error("invalid extra shift hours on {date}: {hours} (must be finite and > 0)")]
    InvalidExtraShiftHours {
        /// Shift date.
        date: NaiveDate,
        /// The rejected hours.
        hours: f64,
    },
}
