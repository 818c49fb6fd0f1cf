//! Error types for the jornada-pipeline crate.

use chrono::NaiveDate;
use jornada_calendar::CalendarError;
use jornada_cycle::CycleError;
use jornada_hours::HoursError;
use jornada_overlay::OverlayError;
use jornada_stats::StatsError;

use crate::stage::Stage;

/// The underlying error a stage returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StageFailure {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Cycle(#[from] CycleError),
    #[error(transparent)]
    Overlay(#[from] OverlayError),
    #[error(transparent)]
    Hours(#[from] HoursError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

impl StageFailure {
    /// The day the failure refers to, when the underlying error names one.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Calendar(CalendarError::ContractStartOutsideYear { date, .. }) => Some(*date),
            Self::Overlay(e) => Some(e.date()),
            Self::Hours(HoursError::UnassignedDay { date }) => Some(*date),
            Self::Stats(StatsError::InvalidExtraShiftHours { date, .. }) => Some(*date),
            _ => None,
        }
    }
}

fn at(date: &Option<NaiveDate>) -> String {
    date.map(|d| format!(" at {d}")).unwrap_or_default()
}

/// Error type for all fallible operations in the jornada-pipeline crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    /// Returned when a stage fails. Its partial output is discarded.
    #[error("{stage} stage failed{}: {source}", at(.date))]
    Stage {
        /// The failing stage.
        stage: Stage,
        /// The offending day, when known.
        date: Option<NaiveDate>,
        /// The stage's own error.
        #[source]
        source: StageFailure,
    },
}

impl PipelineError {
    pub(crate) fn stage(stage: Stage, source: impl Into<StageFailure>) -> Self {
        let source = source.into();
        Self::Stage {
            stage,
            date: source.date(),
            source,
        }
    }

    /// The failing stage.
    pub fn failed_stage(&self) -> Stage {
        match self {
            Self::Stage { stage, .. } => *stage,
        }
    }
}
