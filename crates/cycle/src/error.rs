//! Error types for the jornada-cycle crate.

use crate::cycle::CycleMode;

/// Error type for all fallible operations in the jornada-cycle crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CycleError {
    /// Returned when a weekly mask has no work day.
    #[error("weekly mask has no work day")]
    EmptyWeeklyMask,

    /// Returned when a parts cycle has no parts.
    #[error("parts cycle has no parts")]
    EmptyParts,

    /// Returned when a cycle part has a work or rest count outside `1..=MAX_PART_DAYS`.
    #[error(
        "invalid cycle part: work_days={work_days}, rest_days={rest_days} (each must be in 1..={max})",
        max = crate::cycle::MAX_PART_DAYS
    )]
    InvalidPart {
        /// Work days of the rejected part.
        work_days: u32,
        /// Rest days of the rejected part.
        rest_days: u32,
    },

    /// Returned when an offset has a zero part number or day.
    #[error(
        "invalid cycle offset: part_number={part_number}, day_within_part={day_within_part} (both must be >= 1)"
    )]
    InvalidOffset {
        /// Part number of the rejected offset.
        part_number: u32,
        /// Day within part of the rejected offset.
        day_within_part: u32,
    },

    /// Returned when a cycle of one mode is handed to the applier of the other.
    #[error("cycle mode mismatch: expected {expected}, got {got}")]
    ModeMismatch {
        /// Mode the applier handles.
        expected: CycleMode,
        /// Mode of the cycle it was given.
        got: CycleMode,
    },
}
