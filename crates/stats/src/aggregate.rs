//! Full statistics over a finalized calendar.

use chrono::Datelike;
use jornada_calendar::{CalendarDay, DayState};
use jornada_hours::{HoursSummary, round2, summarize_hours};
use serde::Serialize;
use tracing::debug;

use crate::balance::{HoursBalance, compute_balance};
use crate::config::StatsConfig;
use crate::counts::DayCounts;
use crate::error::StatsError;
use crate::weekly::{WeeklyDistribution, WeeklyTally};

/// Share of effective days in the three main states, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatePercentages {
    /// Trabajo share.
    pub trabajo: f64,
    /// Descanso share.
    pub descanso: f64,
    /// Vacaciones share.
    pub vacaciones: f64,
}

/// Per-month totals, January first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlyBreakdown {
    /// Sum of `hours_worked` for the month.
    pub hours: [f64; 12],
    /// Trabajo, FestivoTrabajado and Guardia days.
    pub worked_days: [usize; 12],
    /// Extra-shift hours dated in the month.
    pub extra_hours: [f64; 12],
}

/// Everything computed by [`compute_statistics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStatistics {
    /// Days per state.
    pub counts: DayCounts,
    /// Length of the calendar.
    pub total_days: usize,
    /// Days that are not NoContratado.
    pub effective_days: usize,
    /// Trabajo, Guardia and FestivoTrabajado days.
    pub laborables: usize,
    /// Descanso, Vacaciones and Festivo days.
    pub no_laborables: usize,
    /// State shares over effective days.
    pub percentages: StatePercentages,
    /// Work days per weekday.
    pub weekly: WeeklyDistribution,
    /// Hours totals.
    pub hours: HoursSummary,
    /// Per-month totals.
    pub monthly: MonthlyBreakdown,
    /// Hours from extra shifts that fall inside the calendar.
    pub extra_shift_hours: f64,
    /// Extra shifts counted in `extra_shift_hours`.
    pub extra_shift_count: usize,
    /// Present only when a contract target is configured.
    pub balance: Option<HoursBalance>,
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round2(part as f64 / whole as f64 * 100.0)
    }
}

/// Checks the tally against the days: per-state counts plus an independent
/// count of unassigned days must cover the calendar exactly.
fn check_counts(counts: &DayCounts, days: &[CalendarDay]) -> Result<(), StatsError> {
    let unassigned = days.iter().filter(|d| d.state().is_none()).count();
    let counted = counts.assigned() + unassigned;
    if counted != days.len() {
        return Err(StatsError::InconsistentCounts {
            counted,
            total: days.len(),
        });
    }
    Ok(())
}

/// Computes counts, percentages, weekly distribution, monthly totals and
/// the optional hours balance in one pass over the days.
///
/// # Errors
///
/// - [`StatsError::InvalidHoursPerDay`] if the configuration is invalid.
/// - [`StatsError::EmptyCalendar`] if `days` is empty.
/// - [`StatsError::InconsistentCounts`] if state counts do not sum to the
///   number of days.
#[tracing::instrument(skip_all, fields(n_days = days.len()))]
pub fn compute_statistics(
    days: &[CalendarDay],
    config: &StatsConfig,
) -> Result<DayStatistics, StatsError> {
    config.validate()?;

    let (first, last) = match (days.first(), days.last()) {
        (Some(f), Some(l)) => (f.date(), l.date()),
        _ => return Err(StatsError::EmptyCalendar),
    };

    let mut counts = DayCounts::default();
    let mut weekly = WeeklyTally::default();
    let mut monthly = MonthlyBreakdown::default();

    for day in days {
        counts.record(day.state());
        weekly.record(day);

        let m = day.month() as usize - 1;
        monthly.hours[m] += day.hours_worked();
        let worked = day
            .state()
            .is_some_and(|s| s.is_scheduled_work() || s == DayState::Guardia);
        if worked {
            monthly.worked_days[m] += 1;
        }
    }

    check_counts(&counts, days)?;

    let mut extra_shift_hours = 0.0;
    let mut extra_shift_count = 0;
    for shift in config.extra_shifts() {
        let date = shift.date();
        if date < first || date > last {
            debug!(%date, "extra shift outside calendar, ignored");
            continue;
        }
        extra_shift_hours += shift.hours();
        extra_shift_count += 1;
        monthly.extra_hours[date.month0() as usize] += shift.hours();
    }

    for h in monthly.hours.iter_mut().chain(monthly.extra_hours.iter_mut()) {
        *h = round2(*h);
    }

    let total_days = days.len();
    let effective_days = total_days - counts.no_contratado;
    let percentages = StatePercentages {
        trabajo: percent(counts.trabajo, effective_days),
        descanso: percent(counts.descanso, effective_days),
        vacaciones: percent(counts.vacaciones, effective_days),
    };

    let hours = summarize_hours(days);
    let extra_shift_hours = round2(extra_shift_hours);

    let balance = config.contract_hours().map(|contract| {
        compute_balance(
            hours.total_hours + extra_shift_hours,
            contract,
            effective_days,
            total_days,
            config.hours_per_day(),
        )
    });

    debug!(
        effective_days,
        total_hours = hours.total_hours,
        extra_shift_count,
        "statistics computed"
    );

    Ok(DayStatistics {
        laborables: counts.laborables(),
        no_laborables: counts.no_laborables(),
        counts,
        total_days,
        effective_days,
        percentages,
        weekly: weekly.finish(),
        hours,
        monthly,
        extra_shift_hours,
        extra_shift_count,
        balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(date: NaiveDate, state: DayState, hours: f64) -> CalendarDay {
        let mut d = CalendarDay::new(date);
        d.set_state(state);
        d.set_hours(hours);
        d
    }

    #[test]
    fn tally_must_cover_every_day() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let days = vec![
            day(start, DayState::Trabajo, 8.0),
            CalendarDay::new(start.succ_opt().unwrap()),
        ];

        let full = DayCounts::from_days(&days);
        assert_eq!(check_counts(&full, &days), Ok(()));

        assert_eq!(
            check_counts(&DayCounts::default(), &days),
            Err(StatsError::InconsistentCounts {
                counted: 1,
                total: 2,
            })
        );

        let mut extra = full;
        extra.record(Some(DayState::Descanso));
        assert_eq!(
            check_counts(&extra, &days),
            Err(StatsError::InconsistentCounts {
                counted: 3,
                total: 2,
            })
        );
    }

    #[test]
    fn empty_calendar_rejected() {
        let err = compute_statistics(&[], &StatsConfig::new()).unwrap_err();
        assert_eq!(err, StatsError::EmptyCalendar);
    }

    #[test]
    fn invalid_config_rejected_first() {
        let config = StatsConfig::new().with_hours_per_day(0.0);
        let err = compute_statistics(&[], &config).unwrap_err();
        assert!(matches!(err, StatsError::InvalidHoursPerDay { .. }));
    }

    #[test]
    fn all_no_contratado_gives_zero_percentages() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let days = vec![day(d, DayState::NoContratado, 0.0)];
        let stats = compute_statistics(&days, &StatsConfig::new()).unwrap();
        assert_eq!(stats.effective_days, 0);
        assert_eq!(stats.percentages, StatePercentages::default());
        assert!(stats.balance.is_none());
    }

    #[test]
    fn guardia_counts_as_monthly_worked_day() {
        let d1 = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let days = vec![day(d1, DayState::Guardia, 12.0), day(d2, DayState::Descanso, 0.0)];
        let stats = compute_statistics(&days, &StatsConfig::new()).unwrap();
        assert_eq!(stats.monthly.worked_days[2], 1);
        assert_eq!(stats.monthly.hours[2], 12.0);
        assert_eq!(stats.weekly.total_worked, 0);
    }
}
