//! Individual checks. Each appends to the report and never stops the others.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use jornada_calendar::{CalendarDay, DayState, Year};
use jornada_overlay::VacationPeriod;

use crate::input::ValidationInput;
use crate::report::{Check, Severity, ValidationReport};

fn by_date(days: &[CalendarDay]) -> BTreeMap<NaiveDate, &CalendarDay> {
    days.iter().map(|d| (d.date(), d)).collect()
}

pub(crate) fn day_count(days: &[CalendarDay], year: Year, report: &mut ValidationReport) {
    if days.len() != year.day_count() {
        report.push(
            Severity::Error,
            Check::DayCount,
            None,
            format!(
                "el calendario tiene {} días, {} tiene {}",
                days.len(),
                year,
                year.day_count()
            ),
        );
    }
}

pub(crate) fn unassigned(days: &[CalendarDay], report: &mut ValidationReport) {
    for day in days.iter().filter(|d| d.state().is_none()) {
        report.push(
            Severity::Error,
            Check::Unassigned,
            Some(day.date()),
            "día sin estado asignado".to_string(),
        );
    }
}

/// Stops at the first gap; later deltas are meaningless once one is off.
pub(crate) fn continuity(days: &[CalendarDay], year: Year, report: &mut ValidationReport) {
    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        report.push(
            Severity::Error,
            Check::Continuity,
            None,
            "el calendario está vacío".to_string(),
        );
        return;
    };

    if first.date() != year.first_day() {
        report.push(
            Severity::Error,
            Check::Continuity,
            Some(first.date()),
            format!("el calendario no empieza el {}", year.first_day()),
        );
    }

    for pair in days.windows(2) {
        let delta = pair[1].date().signed_duration_since(pair[0].date()).num_days();
        if delta != 1 {
            report.push(
                Severity::Error,
                Check::Continuity,
                Some(pair[1].date()),
                format!("salto de {delta} días desde {}", pair[0].date()),
            );
            return;
        }
    }

    if last.date() != year.last_day() {
        report.push(
            Severity::Error,
            Check::Continuity,
            Some(last.date()),
            format!("el calendario no termina el {}", year.last_day()),
        );
    }
}

pub(crate) fn hours(days: &[CalendarDay], report: &mut ValidationReport) {
    for day in days {
        let Some(state) = day.state() else { continue };
        let hours = day.hours_worked();
        if hours < 0.0 {
            report.push(
                Severity::Error,
                Check::Hours,
                Some(day.date()),
                format!("horas negativas: {hours}"),
            );
        } else if !state.carries_hours() && hours != 0.0 {
            report.push(
                Severity::Error,
                Check::Hours,
                Some(day.date()),
                format!("día en estado {state} con {hours} horas"),
            );
        } else if state.is_scheduled_work() && hours == 0.0 {
            report.push(
                Severity::Warning,
                Check::Hours,
                Some(day.date()),
                format!("día en estado {state} con 0 horas"),
            );
        }
    }
}

/// Without a contract start, no day may be NoContratado.
pub(crate) fn not_contracted(
    days: &[CalendarDay],
    contract_start: Option<NaiveDate>,
    report: &mut ValidationReport,
) {
    for day in days {
        let marked = day.is(DayState::NoContratado);
        let before = contract_start.is_some_and(|start| day.date() < start);
        if before && !marked {
            report.push(
                Severity::Error,
                Check::NotContracted,
                Some(day.date()),
                format!("día anterior al contrato en estado {}", state_label(day)),
            );
        } else if !before && marked {
            report.push(
                Severity::Error,
                Check::NotContracted,
                Some(day.date()),
                "día contratado marcado como no_contratado".to_string(),
            );
        }
    }
}

/// Only explicit-flag policies name which holidays are worked. Days taken
/// over by NoContratado, Vacaciones or Guardia are not reported.
pub(crate) fn worked_holidays(
    days: &[CalendarDay],
    input: &ValidationInput<'_>,
    report: &mut ValidationReport,
) {
    let Some(worked) = input.holiday_policy().and_then(|p| p.explicit_worked()) else {
        return;
    };
    let index = by_date(days);

    for holiday in input.holidays() {
        if !worked.contains(&holiday.date()) {
            continue;
        }
        let Some(day) = index.get(&holiday.date()) else {
            continue;
        };
        let outranked = day
            .state()
            .is_some_and(|s| s.priority() > DayState::FestivoTrabajado.priority());
        if !outranked && !day.is(DayState::FestivoTrabajado) {
            let name = holiday.name().unwrap_or("sin nombre");
            report.push(
                Severity::Error,
                Check::WorkedHoliday,
                Some(holiday.date()),
                format!(
                    "festivo trabajado '{name}' aparece como {}",
                    state_label(day)
                ),
            );
        }
    }
}

/// NoContratado days inside a period are left alone by the overlay and
/// are not reported.
pub(crate) fn vacations(
    days: &[CalendarDay],
    periods: &[VacationPeriod],
    report: &mut ValidationReport,
) {
    let index = by_date(days);

    for period in periods {
        for date in period.dates() {
            let Some(day) = index.get(&date) else { continue };
            if !day.is(DayState::Vacaciones) && !day.is(DayState::NoContratado) {
                report.push(
                    Severity::Error,
                    Check::Vacation,
                    Some(date),
                    format!("día de vacaciones en estado {}", state_label(day)),
                );
            }
        }
    }

    for day in days.iter().filter(|d| d.is(DayState::Vacaciones)) {
        if !periods.iter().any(|p| p.contains(day.date())) {
            report.push(
                Severity::Warning,
                Check::Vacation,
                Some(day.date()),
                "día de vacaciones fuera de cualquier periodo".to_string(),
            );
        }
    }
}

fn state_label(day: &CalendarDay) -> &'static str {
    day.state().map_or("sin_estado", DayState::label)
}
