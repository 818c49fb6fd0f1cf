//! State overlays applied on top of the cycle-resolved calendar.
//!
//! # Pipeline Order
//!
//! 1. **Vacations**: every contracted day in a period becomes Vacaciones
//! 2. **Holidays**: Festivo or FestivoTrabajado, decided by a [`HolidayPolicy`]
//! 3. **Guardias**: on-call hours on rest or holiday days only
//!
//! Each overlay reads the day's current state first and never replaces a
//! state of higher priority (see [`jornada_calendar::DayState::priority`]).
//! NoContratado days are never touched.

mod error;
mod guardia;
mod holiday;
mod vacation;

pub use error::OverlayError;
pub use guardia::{Guardia, GuardiaOutcome, GuardiaRejection, RejectionReason, apply_guardias};
pub use holiday::{Holiday, HolidayPolicy, apply_holidays};
pub use vacation::{VacationOutcome, VacationPeriod, apply_vacations};

use chrono::NaiveDate;
use jornada_calendar::CalendarDay;

/// Index of `date` in a day array that starts on `days[0].date()`.
///
/// Returns `None` for dates outside the array.
pub(crate) fn index_of(days: &[CalendarDay], date: NaiveDate) -> Option<usize> {
    let first = days.first()?.date();
    let offset = date.signed_duration_since(first).num_days();
    let idx = usize::try_from(offset).ok()?;
    (idx < days.len() && days[idx].date() == date).then_some(idx)
}
