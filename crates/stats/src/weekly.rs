//! Worked-day distribution across weekdays.

use jornada_calendar::{CalendarDay, WEEKDAY_NAMES, monday_first_index};
use jornada_hours::round2;
use serde::Serialize;

/// Worked days on one weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayShare {
    /// Weekday name (`"lunes"` .. `"domingo"`).
    pub name: &'static str,
    /// Trabajo + FestivoTrabajado days on this weekday.
    pub count: usize,
    /// Share of all worked days, in percent (2 decimals).
    pub percentage: f64,
}

/// How scheduled work spreads over the week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyDistribution {
    /// One entry per weekday, Monday first.
    pub days: Vec<WeekdayShare>,
    /// Total worked days across the week.
    pub total_worked: usize,
    /// Weekday with the highest count; ties go to the earliest in Monday-first order.
    pub most_worked: &'static str,
    /// Weekday with the lowest count; ties go to the earliest in Monday-first order.
    pub least_worked: &'static str,
}

/// Running per-weekday count of scheduled work days.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct WeeklyTally {
    counts: [usize; 7],
}

impl WeeklyTally {
    /// Counts the day if it is Trabajo or FestivoTrabajado.
    pub(crate) fn record(&mut self, day: &CalendarDay) {
        if day.state().is_some_and(|s| s.is_scheduled_work()) {
            self.counts[monday_first_index(day.weekday())] += 1;
        }
    }

    pub(crate) fn finish(self) -> WeeklyDistribution {
        let counts = self.counts;
        let total: usize = counts.iter().sum();

        // Strict comparisons keep the first index on ties.
        let mut most = 0;
        let mut least = 0;
        for (i, &count) in counts.iter().enumerate().skip(1) {
            if count > counts[most] {
                most = i;
            }
            if count < counts[least] {
                least = i;
            }
        }

        let shares = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| WeekdayShare {
                name: WEEKDAY_NAMES[i],
                count,
                percentage: if total == 0 {
                    0.0
                } else {
                    round2(count as f64 / total as f64 * 100.0)
                },
            })
            .collect();

        WeeklyDistribution {
            days: shares,
            total_worked: total,
            most_worked: WEEKDAY_NAMES[most],
            least_worked: WEEKDAY_NAMES[least],
        }
    }
}

/// Counts Trabajo and FestivoTrabajado days per weekday.
///
/// Guardia days are not counted here.
pub fn weekly_distribution(days: &[CalendarDay]) -> WeeklyDistribution {
    let mut tally = WeeklyTally::default();
    for day in days {
        tally.record(day);
    }
    tally.finish()
}
