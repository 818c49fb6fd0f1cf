//! Raw day array generation for one calendar year.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date::{date_from_ymd, days_in_month};
use crate::day::CalendarDay;
use crate::error::CalendarError;
use crate::state::DayState;
use crate::year::Year;

/// When the employment relationship began relative to the selected year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Employment predates the year; every day is eligible.
    #[default]
    PriorYear,
    /// Employment started during the year; days before the contract start are not contracted.
    StartedThisYear,
}

/// Employment status plus the contract start date it may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Employment {
    status: EmploymentStatus,
    contract_start: Option<NaiveDate>,
}

impl Employment {
    /// Creates an employment description as supplied by configuration.
    ///
    /// No check is made here; [`generate_skeleton`] rejects a
    /// `StartedThisYear` status without a contract start date.
    pub fn new(status: EmploymentStatus, contract_start: Option<NaiveDate>) -> Self {
        Self {
            status,
            contract_start,
        }
    }

    /// Employment that predates the selected year.
    pub fn prior_year() -> Self {
        Self::new(EmploymentStatus::PriorYear, None)
    }

    /// Employment that starts on `contract_start`.
    pub fn started_this_year(contract_start: NaiveDate) -> Self {
        Self::new(EmploymentStatus::StartedThisYear, Some(contract_start))
    }

    /// Returns the employment status.
    pub fn status(&self) -> EmploymentStatus {
        self.status
    }

    /// Returns the contract start date that applies to the year, if any.
    ///
    /// Only `StartedThisYear` employment has an effective start date; a date
    /// given alongside `PriorYear` is ignored.
    pub fn contract_start(&self) -> Option<NaiveDate> {
        match self.status {
            EmploymentStatus::PriorYear => None,
            EmploymentStatus::StartedThisYear => self.contract_start,
        }
    }

    fn resolve_start(&self, year: Year) -> Result<Option<NaiveDate>, CalendarError> {
        match self.status {
            EmploymentStatus::PriorYear => Ok(None),
            EmploymentStatus::StartedThisYear => {
                let start = self
                    .contract_start
                    .ok_or(CalendarError::MissingContractStart)?;
                if !year.contains(start) {
                    return Err(CalendarError::ContractStartOutsideYear {
                        date: start,
                        year: year.get(),
                    });
                }
                Ok(Some(start))
            }
        }
    }
}

/// Builds the raw day array for `year`.
///
/// Every day starts unassigned with zero hours. When employment started
/// this year, every day strictly before the contract start date is marked
/// [`DayState::NoContratado`]. The start date itself stays unassigned as
/// the first eligible day.
///
/// # Errors
///
/// - [`CalendarError::MissingContractStart`] if the status is
///   `StartedThisYear` without a date.
/// - [`CalendarError::ContractStartOutsideYear`] if the date is in another year.
/// - [`CalendarError::DayCountMismatch`] if the generated length is not
///   365/366 (internal fault).
#[tracing::instrument(skip_all, fields(year = year.get()))]
pub fn generate_skeleton(
    year: Year,
    employment: &Employment,
) -> Result<Vec<CalendarDay>, CalendarError> {
    let contract_start = employment.resolve_start(year)?;

    let mut days = Vec::with_capacity(year.day_count());
    for month in 1..=12 {
        for dom in 1..=days_in_month(year.get(), month)? {
            let date = date_from_ymd(year.get(), month, dom)?;
            let mut day = CalendarDay::new(date);
            if contract_start.is_some_and(|start| date < start) {
                day.set_state(DayState::NoContratado);
                day.set_hours(0.0);
            }
            days.push(day);
        }
    }

    if days.len() != year.day_count() {
        return Err(CalendarError::DayCountMismatch {
            year: year.get(),
            expected: year.day_count(),
            got: days.len(),
        });
    }

    let not_contracted = days.iter().filter(|d| d.is(DayState::NoContratado)).count();
    debug!(n_days = days.len(), not_contracted, "skeleton generated");
    Ok(days)
}
