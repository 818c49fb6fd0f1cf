//! Cycle definitions and offsets.

use jornada_calendar::DayType;
use serde::Serialize;

use crate::error::CycleError;

/// The two ways a work pattern can be described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleMode {
    /// Seven-day Monday-first mask.
    Weekly,
    /// Repeating sequence of work/rest blocks.
    Parts,
}

impl std::fmt::Display for CycleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekly => f.write_str("weekly"),
            Self::Parts => f.write_str("parts"),
        }
    }
}

/// Monday-first work/rest mask with at least one work day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeeklyMask([bool; 7]);

impl WeeklyMask {
    /// Creates a mask, rejecting an all-rest week.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::EmptyWeeklyMask`] if no entry is `true`.
    pub fn new(mask: [bool; 7]) -> Result<Self, CycleError> {
        if !mask.iter().any(|&w| w) {
            return Err(CycleError::EmptyWeeklyMask);
        }
        Ok(Self(mask))
    }

    /// Returns whether Monday-first index `idx` is a work day.
    pub fn is_work(&self, idx: usize) -> bool {
        self.0[idx % 7]
    }

    /// Returns the raw mask.
    pub fn as_array(&self) -> &[bool; 7] {
        &self.0
    }
}

/// Upper bound on the work or rest count of a single part.
pub const MAX_PART_DAYS: u32 = 366;

/// One `{work_days, rest_days}` block of a multi-part cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CyclePart {
    work_days: u32,
    rest_days: u32,
}

impl CyclePart {
    /// Creates a part with work and rest counts in `1..=MAX_PART_DAYS`.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidPart`] if either count is zero or above
    /// [`MAX_PART_DAYS`].
    pub fn new(work_days: u32, rest_days: u32) -> Result<Self, CycleError> {
        let valid = 1..=MAX_PART_DAYS;
        if !valid.contains(&work_days) || !valid.contains(&rest_days) {
            return Err(CycleError::InvalidPart {
                work_days,
                rest_days,
            });
        }
        Ok(Self {
            work_days,
            rest_days,
        })
    }

    /// Returns the number of work days.
    pub fn work_days(&self) -> u32 {
        self.work_days
    }

    /// Returns the number of rest days.
    pub fn rest_days(&self) -> u32 {
        self.rest_days
    }

    /// Returns `work_days + rest_days`.
    pub fn total_days(&self) -> u32 {
        self.work_days + self.rest_days
    }
}

/// Non-empty ordered list of cycle parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PartsCycle(Vec<CyclePart>);

impl PartsCycle {
    /// Creates a parts cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::EmptyParts`] if `parts` is empty.
    pub fn new(parts: Vec<CyclePart>) -> Result<Self, CycleError> {
        if parts.is_empty() {
            return Err(CycleError::EmptyParts);
        }
        Ok(Self(parts))
    }

    /// Returns the parts in order.
    pub fn parts(&self) -> &[CyclePart] {
        &self.0
    }

    /// Total length of one repetition.
    pub fn cycle_length(&self) -> usize {
        self.0.iter().map(|p| p.total_days() as usize).sum()
    }
}

/// A validated work cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "pattern", rename_all = "snake_case")]
pub enum WorkCycle {
    /// Weekly mask mode.
    Weekly(WeeklyMask),
    /// Multi-part mode.
    Parts(PartsCycle),
}

impl WorkCycle {
    /// Builds a weekly cycle from a Monday-first mask.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::EmptyWeeklyMask`] if no day is a work day.
    pub fn weekly(mask: [bool; 7]) -> Result<Self, CycleError> {
        WeeklyMask::new(mask).map(Self::Weekly)
    }

    /// Builds a parts cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::EmptyParts`] if `parts` is empty.
    pub fn parts(parts: Vec<CyclePart>) -> Result<Self, CycleError> {
        PartsCycle::new(parts).map(Self::Parts)
    }

    /// Returns the mode of this cycle.
    pub fn mode(&self) -> CycleMode {
        match self {
            Self::Weekly(_) => CycleMode::Weekly,
            Self::Parts(_) => CycleMode::Parts,
        }
    }

    /// Returns the weekly mask if this is a weekly cycle.
    pub fn as_weekly(&self) -> Option<&WeeklyMask> {
        match self {
            Self::Weekly(m) => Some(m),
            Self::Parts(_) => None,
        }
    }

    /// Returns the parts if this is a parts cycle.
    pub fn as_parts(&self) -> Option<&PartsCycle> {
        match self {
            Self::Weekly(_) => None,
            Self::Parts(p) => Some(p),
        }
    }
}

/// Position in a parts cycle occupied on the year's first eligible day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleOffset {
    part_number: u32,
    day_within_part: u32,
    day_type: DayType,
}

impl CycleOffset {
    /// Creates an offset with 1-based part number and day.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidOffset`] if either number is zero.
    pub fn new(part_number: u32, day_within_part: u32, day_type: DayType) -> Result<Self, CycleError> {
        if part_number == 0 || day_within_part == 0 {
            return Err(CycleError::InvalidOffset {
                part_number,
                day_within_part,
            });
        }
        Ok(Self {
            part_number,
            day_within_part,
            day_type,
        })
    }

    /// Returns the 1-based part number.
    pub fn part_number(&self) -> u32 {
        self.part_number
    }

    /// Returns the 1-based day within the part's work or rest run.
    pub fn day_within_part(&self) -> u32 {
        self.day_within_part
    }

    /// Returns whether the offset points at a work or rest slot.
    pub fn day_type(&self) -> DayType {
        self.day_type
    }
}
