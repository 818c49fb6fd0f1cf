//! Error types for the jornada-overlay crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the jornada-overlay crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OverlayError {
    /// Returned when a vacation period ends before it starts.
    #[error("invalid vacation period: end {end} is before start {start}")]
    InvalidPeriod {
        /// Period start.
        start: NaiveDate,
        /// Period end.
        end: NaiveDate,
    },

    /// Returned when a guardia has non-positive or non-finite hours.
    #[error("invalid guardia hours on {date}: {hours} (must be finite and > 0)")]
    InvalidGuardiaHours {
        /// Guardia date.
        date: NaiveDate,
        /// The rejected hours.
        hours: f64,
    },

    /// Returned when the holiday overlay finds a day with no state.
    #[error("day {date} has no state; the cycle stage must run before overlays")]
    UnassignedDay {
        /// The unassigned date.
        date: NaiveDate,
    },
}

impl OverlayError {
    /// The date the error refers to.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::InvalidPeriod { start, .. } => *start,
            Self::InvalidGuardiaHours { date, .. } | Self::UnassignedDay { date } => *date,
        }
    }
}
