//! Result of a full pipeline run.

use jornada_calendar::{CalendarDay, Year};
use jornada_hours::HoursSummary;
use jornada_overlay::{GuardiaOutcome, VacationOutcome};
use jornada_stats::DayStatistics;
use jornada_validate::ValidationReport;
use serde::Serialize;

/// A finished annual calendar with its derived outputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calendar {
    year: Year,
    days: Vec<CalendarDay>,
    hours: HoursSummary,
    vacations: VacationOutcome,
    guardias: GuardiaOutcome,
    statistics: DayStatistics,
    validation: ValidationReport,
}

impl Calendar {
    pub(crate) fn new(
        year: Year,
        days: Vec<CalendarDay>,
        vacations: VacationOutcome,
        guardias: GuardiaOutcome,
        statistics: DayStatistics,
        validation: ValidationReport,
    ) -> Self {
        Self {
            year,
            days,
            hours: statistics.hours,
            vacations,
            guardias,
            statistics,
            validation,
        }
    }

    // --- Accessors ---

    /// Returns the calendar year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// One entry per date, January 1 first.
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Consumes self and returns the owned day vector.
    pub fn into_days(self) -> Vec<CalendarDay> {
        self.days
    }

    /// Hours totals over the final days.
    pub fn hours(&self) -> &HoursSummary {
        &self.hours
    }

    /// Day-applications made by the vacation overlay.
    pub fn vacations(&self) -> &VacationOutcome {
        &self.vacations
    }

    /// Guardias applied and refused.
    pub fn guardias(&self) -> &GuardiaOutcome {
        &self.guardias
    }

    /// Counts, distributions and the optional balance.
    pub fn statistics(&self) -> &DayStatistics {
        &self.statistics
    }

    /// Consistency checks over the final days.
    pub fn validation(&self) -> &ValidationReport {
        &self.validation
    }
}
