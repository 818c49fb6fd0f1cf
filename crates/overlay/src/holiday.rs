//! Holiday overlay.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use jornada_calendar::{CalendarDay, DayState};
use jornada_hours::WorkingHours;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::OverlayError;
use crate::index_of;

/// A public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    date: NaiveDate,
    name: Option<String>,
}

impl Holiday {
    /// Creates a holiday.
    pub fn new(date: NaiveDate, name: Option<String>) -> Self {
        Self { date, name }
    }

    /// Holiday date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Holiday name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Decides whether a holiday is worked.
///
/// The decision lives here rather than on [`Holiday`] so one holiday list
/// can be run under either rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HolidayPolicy {
    /// Worked if and only if the date is listed in `worked`.
    ExplicitFlag {
        /// Dates of holidays the person works.
        worked: BTreeSet<NaiveDate>,
    },
    /// Worked when the cycle had scheduled work that day, unless
    /// `respect_holidays` forces every holiday off.
    AutoDetect {
        /// Treat every holiday as non-worked.
        respect_holidays: bool,
    },
}

impl Default for HolidayPolicy {
    fn default() -> Self {
        Self::AutoDetect {
            respect_holidays: false,
        }
    }
}

impl HolidayPolicy {
    /// Returns whether a holiday on `date` whose current state is `prior` is worked.
    pub fn is_worked(&self, date: NaiveDate, prior: DayState) -> bool {
        match self {
            Self::ExplicitFlag { worked } => worked.contains(&date),
            Self::AutoDetect { respect_holidays } => {
                !respect_holidays
                    && matches!(prior, DayState::Trabajo | DayState::FestivoTrabajado)
            }
        }
    }

    /// Dates configured as worked, for explicit-flag policies.
    pub fn explicit_worked(&self) -> Option<&BTreeSet<NaiveDate>> {
        match self {
            Self::ExplicitFlag { worked } => Some(worked),
            Self::AutoDetect { .. } => None,
        }
    }
}

/// Overlays holidays onto the calendar.
///
/// For each holiday inside the calendar: days whose state outranks a
/// holiday (NoContratado, Vacaciones, Guardia) are skipped. Otherwise the
/// policy decides. Worked holidays become FestivoTrabajado at the holiday
/// rate whatever the weekday; non-worked holidays become Festivo at zero
/// hours. The holiday name, if any, becomes the description.
///
/// # Errors
///
/// Returns [`OverlayError::UnassignedDay`] if a holiday falls on a day the
/// cycle stage never assigned.
#[tracing::instrument(skip_all, fields(n_holidays = holidays.len()))]
pub fn apply_holidays(
    mut days: Vec<CalendarDay>,
    holidays: &[Holiday],
    policy: &HolidayPolicy,
    rates: &WorkingHours,
) -> Result<Vec<CalendarDay>, OverlayError> {
    let mut n_worked = 0usize;
    let mut n_off = 0usize;
    for holiday in holidays {
        let Some(idx) = index_of(&days, holiday.date()) else {
            debug!(date = %holiday.date(), "holiday outside calendar, skipped");
            continue;
        };
        let day = &mut days[idx];
        let prior = day.state().ok_or(OverlayError::UnassignedDay {
            date: holiday.date(),
        })?;
        if prior.priority() > DayState::Festivo.priority() {
            continue;
        }
        if policy.is_worked(holiday.date(), prior) {
            day.set_state(DayState::FestivoTrabajado);
            day.set_hours(rates.holiday());
            n_worked += 1;
        } else {
            day.set_state(DayState::Festivo);
            day.set_hours(0.0);
            n_off += 1;
        }
        day.set_description(holiday.name());
    }
    debug!(n_worked, n_off, "holidays applied");
    Ok(days)
}
