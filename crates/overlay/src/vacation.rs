//! Vacation overlay.

use chrono::NaiveDate;
use jornada_calendar::{CalendarDay, DayState};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::OverlayError;
use crate::index_of;

/// An inclusive vacation date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVacationPeriod")]
pub struct VacationPeriod {
    start: NaiveDate,
    end: NaiveDate,
    description: Option<String>,
}

#[derive(Deserialize)]
struct RawVacationPeriod {
    start: NaiveDate,
    end: NaiveDate,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RawVacationPeriod> for VacationPeriod {
    type Error = OverlayError;

    fn try_from(raw: RawVacationPeriod) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end, raw.description)
    }
}

impl VacationPeriod {
    /// Creates a period covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::InvalidPeriod`] if `end < start`.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        description: Option<String>,
    ) -> Result<Self, OverlayError> {
        if end < start {
            return Err(OverlayError::InvalidPeriod { start, end });
        }
        Ok(Self {
            start,
            end,
            description,
        })
    }

    /// First day of the period.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the period (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns `true` if `date` is inside the period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// Iterates every date of the period.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

/// Bookkeeping from [`apply_vacations`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VacationOutcome {
    /// Day applications made. Overlapping periods count once per period.
    pub applications: usize,
    /// Period days skipped because the day is NoContratado.
    pub skipped_not_contracted: usize,
    /// Period days outside the calendar.
    pub outside_calendar: usize,
}

/// Marks every contracted day inside each period as Vacaciones with zero hours.
///
/// Periods are applied in order; overlapping periods simply reapply and are
/// counted again in [`VacationOutcome::applications`]. The period's
/// description, if any, replaces the day's description.
#[tracing::instrument(skip_all, fields(n_periods = periods.len()))]
pub fn apply_vacations(
    mut days: Vec<CalendarDay>,
    periods: &[VacationPeriod],
) -> (Vec<CalendarDay>, VacationOutcome) {
    let mut outcome = VacationOutcome::default();
    for period in periods {
        for date in period.dates() {
            let Some(idx) = index_of(&days, date) else {
                outcome.outside_calendar += 1;
                continue;
            };
            let day = &mut days[idx];
            if day.is(DayState::NoContratado) {
                outcome.skipped_not_contracted += 1;
                continue;
            }
            day.set_state(DayState::Vacaciones);
            day.set_hours(0.0);
            day.set_description(period.description());
            outcome.applications += 1;
        }
    }
    debug!(
        applications = outcome.applications,
        skipped_not_contracted = outcome.skipped_not_contracted,
        outside_calendar = outcome.outside_calendar,
        "vacations applied"
    );
    (days, outcome)
}
