//! Guardia (on-call shift) overlay.

use chrono::NaiveDate;
use jornada_calendar::{CalendarDay, DayState};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::OverlayError;
use crate::index_of;

/// An on-call assignment with a fixed number of hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGuardia")]
pub struct Guardia {
    date: NaiveDate,
    hours: f64,
    description: Option<String>,
}

#[derive(Deserialize)]
struct RawGuardia {
    date: NaiveDate,
    hours: f64,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RawGuardia> for Guardia {
    type Error = OverlayError;

    fn try_from(raw: RawGuardia) -> Result<Self, Self::Error> {
        Self::new(raw.date, raw.hours, raw.description)
    }
}

impl Guardia {
    /// Creates a guardia.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::InvalidGuardiaHours`] unless `hours` is finite and positive.
    pub fn new(date: NaiveDate, hours: f64, description: Option<String>) -> Result<Self, OverlayError> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(OverlayError::InvalidGuardiaHours { date, hours });
        }
        Ok(Self {
            date,
            hours,
            description,
        })
    }

    /// Guardia date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Hours credited for the guardia.
    pub fn hours(&self) -> f64 {
        self.hours
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Why a guardia was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The date is not in the calendar.
    OutsideYear,
    /// The day is before the contract start.
    NoContratado,
    /// The day is a vacation day.
    Vacaciones,
    /// The day is a scheduled work day.
    Trabajo,
    /// The day has no state yet.
    Unassigned,
    /// Another guardia already occupies the day.
    AlreadyGuardia,
}

/// A guardia the overlay refused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuardiaRejection {
    /// The guardia's date.
    pub date: NaiveDate,
    /// Why it was refused.
    pub reason: RejectionReason,
}

/// Bookkeeping from [`apply_guardias`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GuardiaOutcome {
    /// Number of guardias applied.
    pub applied: usize,
    /// Guardias refused, in input order.
    pub rejected: Vec<GuardiaRejection>,
}

fn admits_guardia(state: Option<DayState>) -> Result<(), RejectionReason> {
    match state {
        Some(DayState::Descanso | DayState::Festivo | DayState::FestivoTrabajado) => Ok(()),
        Some(DayState::NoContratado) => Err(RejectionReason::NoContratado),
        Some(DayState::Vacaciones) => Err(RejectionReason::Vacaciones),
        Some(DayState::Trabajo) => Err(RejectionReason::Trabajo),
        Some(DayState::Guardia) => Err(RejectionReason::AlreadyGuardia),
        None => Err(RejectionReason::Unassigned),
    }
}

/// Places guardias on rest and holiday days.
///
/// A guardia is applied only when the day is currently Descanso, Festivo or
/// FestivoTrabajado. The day becomes Guardia with the guardia's own hours;
/// the working-hours table is not consulted. Refused guardias are returned
/// in [`GuardiaOutcome::rejected`] and logged at `warn`.
#[tracing::instrument(skip_all, fields(n_guardias = guardias.len()))]
pub fn apply_guardias(
    mut days: Vec<CalendarDay>,
    guardias: &[Guardia],
) -> (Vec<CalendarDay>, GuardiaOutcome) {
    let mut outcome = GuardiaOutcome::default();
    for guardia in guardias {
        let result = index_of(&days, guardia.date())
            .ok_or(RejectionReason::OutsideYear)
            .and_then(|idx| admits_guardia(days[idx].state()).map(|()| idx));
        match result {
            Ok(idx) => {
                let day = &mut days[idx];
                day.set_state(DayState::Guardia);
                day.set_hours(guardia.hours());
                day.set_description(guardia.description());
                outcome.applied += 1;
            }
            Err(reason) => {
                warn!(date = %guardia.date(), ?reason, "guardia rejected");
                outcome.rejected.push(GuardiaRejection {
                    date: guardia.date(),
                    reason,
                });
            }
        }
    }
    debug!(
        applied = outcome.applied,
        rejected = outcome.rejected.len(),
        "guardias applied"
    );
    (days, outcome)
}
