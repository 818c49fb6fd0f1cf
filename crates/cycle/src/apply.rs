//! Writes cycle states onto the day array.

use jornada_calendar::{CalendarDay, CycleMeta, DayState, monday_first_index};
use tracing::{debug, warn};

use crate::cycle::{CycleMode, CycleOffset, WorkCycle};
use crate::error::CycleError;
use crate::sequence::{expand_parts, find_offset_index};

fn is_eligible(day: &CalendarDay) -> bool {
    !day.is(DayState::NoContratado)
}

/// Applies a weekly mask: Trabajo where the mask is set, Descanso elsewhere.
///
/// NoContratado days are left untouched. No offset is involved; the
/// position in the week comes from the weekday itself.
///
/// # Errors
///
/// Returns [`CycleError::ModeMismatch`] if `cycle` is a parts cycle.
#[tracing::instrument(skip_all, fields(n_days = days.len()))]
pub fn apply_weekly(
    mut days: Vec<CalendarDay>,
    cycle: &WorkCycle,
) -> Result<Vec<CalendarDay>, CycleError> {
    let mask = cycle.as_weekly().ok_or(CycleError::ModeMismatch {
        expected: CycleMode::Weekly,
        got: cycle.mode(),
    })?;

    let mut n_work = 0usize;
    for day in days.iter_mut().filter(|d| is_eligible(d)) {
        if mask.is_work(monday_first_index(day.weekday())) {
            day.set_state(DayState::Trabajo);
            n_work += 1;
        } else {
            day.set_state(DayState::Descanso);
        }
    }
    debug!(n_work, "weekly cycle applied");
    Ok(days)
}

/// Applies a parts cycle, optionally starting from `offset`.
///
/// The cycle is expanded once into a flat sequence. A counter starting at
/// the offset's index (0 without an offset) advances once per eligible day;
/// each eligible day takes `sequence[counter % cycle_length]`. If the offset
/// names a position the cycle does not have, the counter starts at 0 and a
/// warning is logged.
///
/// NoContratado days are skipped and do not advance the counter.
///
/// # Errors
///
/// Returns [`CycleError::ModeMismatch`] if `cycle` is a weekly cycle.
#[tracing::instrument(skip_all, fields(n_days = days.len(), has_offset = offset.is_some()))]
pub fn apply_parts(
    mut days: Vec<CalendarDay>,
    cycle: &WorkCycle,
    offset: Option<&CycleOffset>,
) -> Result<Vec<CalendarDay>, CycleError> {
    let parts = cycle.as_parts().ok_or(CycleError::ModeMismatch {
        expected: CycleMode::Parts,
        got: cycle.mode(),
    })?;

    let seq = expand_parts(parts);
    let cycle_length = seq.len();

    let start = match offset {
        None => 0,
        Some(off) => find_offset_index(&seq, off).unwrap_or_else(|| {
            warn!(
                part_number = off.part_number(),
                day_within_part = off.day_within_part(),
                day_type = ?off.day_type(),
                "cycle offset not found in current cycle, starting at index 0"
            );
            0
        }),
    };

    let mut counter = start;
    for day in days.iter_mut().filter(|d| is_eligible(d)) {
        let entry = seq[counter % cycle_length];
        day.set_state(if entry.is_work() {
            DayState::Trabajo
        } else {
            DayState::Descanso
        });
        day.set_cycle(CycleMeta {
            part_number: entry.part_number,
            day_within_part: entry.day_within_part,
            day_type: entry.day_type,
        });
        counter += 1;
    }
    debug!(start, cycle_length, n_assigned = counter - start, "parts cycle applied");
    Ok(days)
}

/// Dispatches to [`apply_weekly`] or [`apply_parts`] by the cycle's mode.
///
/// `offset` only affects parts cycles.
///
/// # Errors
///
/// Never fails for a well-formed cycle; errors from the appliers are
/// propagated unchanged.
pub fn apply_cycle(
    days: Vec<CalendarDay>,
    cycle: &WorkCycle,
    offset: Option<&CycleOffset>,
) -> Result<Vec<CalendarDay>, CycleError> {
    match cycle.mode() {
        CycleMode::Weekly => apply_weekly(days, cycle),
        CycleMode::Parts => apply_parts(days, cycle, offset),
    }
}
