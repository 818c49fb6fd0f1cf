//! Per-day hour assignment and totals.

use jornada_calendar::{CalendarDay, DayState};
use serde::Serialize;
use tracing::debug;

use crate::error::HoursError;
use crate::rates::WorkingHours;
use crate::round::round2;

/// Hours for one day given its final state.
///
/// `None` means "keep the hours already on the day" (guardias).
fn hours_for(day: &CalendarDay, state: DayState, rates: &WorkingHours) -> Option<f64> {
    match state {
        DayState::NoContratado | DayState::Descanso | DayState::Vacaciones | DayState::Festivo => {
            Some(0.0)
        }
        DayState::Trabajo => Some(rates.rate_for(day.weekday())),
        DayState::FestivoTrabajado => Some(rates.holiday()),
        DayState::Guardia => None,
    }
}

/// Assigns `hours_worked` to every day from its final state.
///
/// Applying it twice gives the same result as applying it once.
///
/// # Errors
///
/// Returns [`HoursError::UnassignedDay`] for the first day without a state.
#[tracing::instrument(skip_all, fields(n_days = days.len()))]
pub fn assign_hours(
    mut days: Vec<CalendarDay>,
    rates: &WorkingHours,
) -> Result<Vec<CalendarDay>, HoursError> {
    for day in &mut days {
        let state = day
            .state()
            .ok_or(HoursError::UnassignedDay { date: day.date() })?;
        if let Some(hours) = hours_for(day, state, rates) {
            day.set_hours(hours);
        }
    }
    debug!("hours assigned");
    Ok(days)
}

/// Hour totals over a finished calendar. All values are rounded to 2 decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HoursSummary {
    /// Sum of `hours_worked` over every day.
    pub total_hours: f64,
    /// Hours on Trabajo and FestivoTrabajado days.
    pub regular_hours: f64,
    /// Hours on Guardia days.
    pub guardia_hours: f64,
    /// Trabajo plus FestivoTrabajado days.
    pub work_days_count: usize,
    /// Guardia days.
    pub guardia_days_count: usize,
    /// `total_hours / (work_days_count + guardia_days_count)`, or 0 without any such day.
    pub average_hours_per_work_day: f64,
}

/// Sums the hours of a calendar. Days without a state count as zero.
pub fn summarize_hours(days: &[CalendarDay]) -> HoursSummary {
    let mut total = 0.0;
    let mut regular = 0.0;
    let mut guardia = 0.0;
    let mut work_days = 0usize;
    let mut guardia_days = 0usize;

    for day in days {
        total += day.hours_worked();
        match day.state() {
            Some(s) if s.is_scheduled_work() => {
                regular += day.hours_worked();
                work_days += 1;
            }
            Some(DayState::Guardia) => {
                guardia += day.hours_worked();
                guardia_days += 1;
            }
            _ => {}
        }
    }

    let counted = work_days + guardia_days;
    let average = if counted == 0 {
        0.0
    } else {
        total / counted as f64
    };

    HoursSummary {
        total_hours: round2(total),
        regular_hours: round2(regular),
        guardia_hours: round2(guardia),
        work_days_count: work_days,
        guardia_days_count: guardia_days,
        average_hours_per_work_day: round2(average),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(m: u32, d: u32, state: DayState) -> CalendarDay {
        let mut day = CalendarDay::new(NaiveDate::from_ymd_opt(2025, m, d).unwrap());
        day.set_state(state);
        day
    }

    #[test]
    fn per_state_dispatch() {
        let rates = WorkingHours::new(7.5, 5.0, 4.0, 9.0).unwrap();
        let mut guardia = day(1, 5, DayState::Guardia);
        guardia.set_hours(12.0);
        let mut vac = day(1, 7, DayState::Vacaciones);
        vac.set_hours(3.0);
        let days = vec![
            day(1, 1, DayState::Trabajo),          // Wednesday
            day(1, 4, DayState::Trabajo),          // Saturday
            guardia,                               // Sunday
            day(1, 6, DayState::FestivoTrabajado), // Monday
            vac,
            day(1, 8, DayState::Festivo),
            day(1, 9, DayState::Descanso),
        ];
        let days = assign_hours(days, &rates).unwrap();
        let hours: Vec<f64> = days.iter().map(|d| d.hours_worked()).collect();
        assert_eq!(hours, vec![7.5, 5.0, 12.0, 9.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn unassigned_day_fails() {
        let days = vec![CalendarDay::new(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())];
        assert!(matches!(
            assign_hours(days, &WorkingHours::default()).unwrap_err(),
            HoursError::UnassignedDay { .. }
        ));
    }

    #[test]
    fn summary_without_work_days() {
        let days = vec![day(1, 1, DayState::Descanso)];
        let s = summarize_hours(&days);
        assert_eq!(s.total_hours, 0.0);
        assert_eq!(s.average_hours_per_work_day, 0.0);
        assert_eq!(s.work_days_count, 0);
    }

    #[test]
    fn summary_splits_guardia() {
        let mut g = day(1, 5, DayState::Guardia);
        g.set_hours(12.0);
        let mut w = day(1, 6, DayState::Trabajo);
        w.set_hours(8.0);
        let s = summarize_hours(&[g, w]);
        assert_eq!(s.total_hours, 20.0);
        assert_eq!(s.regular_hours, 8.0);
        assert_eq!(s.guardia_hours, 12.0);
        assert_eq!(s.work_days_count, 1);
        assert_eq!(s.guardia_days_count, 1);
        assert_eq!(s.average_hours_per_work_day, 10.0);
    }
}
