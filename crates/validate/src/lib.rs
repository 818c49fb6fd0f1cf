//! Consistency checks over a finished annual calendar.
//!
//! [`validate_calendar`] never fails. It collects every problem it finds into
//! a [`ValidationReport`], split into blocking errors (the calendar cannot be
//! used for hour accounting) and warnings (informational only).
//!
//! | Check | Severity |
//! |-------|----------|
//! | Day count equals the year length | error |
//! | Every day has a state | error |
//! | Jan 1 to Dec 31 without gaps | error (first gap only) |
//! | Non-working states carry zero hours | error |
//! | Scheduled work with zero hours | warning |
//! | NoContratado exactly before the contract start | error |
//! | Explicitly worked holidays are FestivoTrabajado | error |
//! | Vacation days are Vacaciones | error |
//! | Vacaciones days belong to a period | warning |

mod checks;
mod input;
mod report;

pub use input::ValidationInput;
pub use report::{Check, Severity, ValidationIssue, ValidationReport};

use jornada_calendar::{CalendarDay, Year};
use tracing::{debug, warn};

/// Runs every check against `days` for `year`.
#[tracing::instrument(skip_all, fields(year = year.get(), n_days = days.len()))]
pub fn validate_calendar(
    days: &[CalendarDay],
    year: Year,
    input: &ValidationInput<'_>,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    checks::day_count(days, year, &mut report);
    checks::unassigned(days, &mut report);
    checks::continuity(days, year, &mut report);
    checks::hours(days, &mut report);
    checks::not_contracted(days, input.contract_start(), &mut report);
    checks::worked_holidays(days, input, &mut report);
    checks::vacations(days, input.vacations(), &mut report);

    if report.is_valid() {
        debug!(warnings = report.warnings.len(), "calendar valid");
    } else {
        warn!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "calendar has blocking errors"
        );
    }
    report
}
