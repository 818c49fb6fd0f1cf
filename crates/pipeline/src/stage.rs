//! Names of the pipeline stages, in execution order.

use std::fmt;

use serde::Serialize;

/// One step of [`build_calendar`](crate::build_calendar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Skeleton,
    Cycle,
    Vacations,
    Holidays,
    Guardias,
    Hours,
    Statistics,
}

impl Stage {
    /// Every stage in execution order.
    pub const ALL: [Stage; 7] = [
        Stage::Skeleton,
        Stage::Cycle,
        Stage::Vacations,
        Stage::Holidays,
        Stage::Guardias,
        Stage::Hours,
        Stage::Statistics,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Skeleton => "skeleton",
            Self::Cycle => "cycle",
            Self::Vacations => "vacations",
            Self::Holidays => "holidays",
            Self::Guardias => "guardias",
            Self::Hours => "hours",
            Self::Statistics => "statistics",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
