//! Error types for the jornada-hours crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the jornada-hours crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HoursError {
    /// Returned when an hour rate is outside 0..=24 or not finite.
    #[error("invalid {field} rate: {value} (must be within 0..=24)")]
    InvalidRate {
        /// Which rate was rejected.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when a day reaches hour assignment without a state.
    #[error("day {date} has no state; hours can only be assigned to resolved days")]
    UnassignedDay {
        /// The unassigned date.
        date: NaiveDate,
    },
}
