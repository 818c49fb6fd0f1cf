//! Builds a complete annual calendar from validated inputs.
//!
//! # Pipeline Order
//!
//! 1. **Skeleton**: one unassigned day per date, NoContratado before the contract start
//! 2. **Cycle**: Trabajo/Descanso from the weekly mask or the parts sequence
//! 3. **Vacations**: contracted days in each period become Vacaciones
//! 4. **Holidays**: Festivo or FestivoTrabajado under the [`HolidayPolicy`]
//! 5. **Guardias**: on-call hours on rest and holiday days
//! 6. **Hours**: per-day hours from the final state
//! 7. **Statistics** and **validation** over the finished days
//!
//! Each stage takes the day vector by value and hands it back on success.
//! When a stage fails the vector it was working on is dropped with it, so a
//! caller only ever sees a complete calendar or a [`PipelineError`] naming
//! the stage.
//!
//! [`HolidayPolicy`]: jornada_overlay::HolidayPolicy

mod calendar;
mod error;
mod input;
mod stage;

pub use calendar::Calendar;
pub use error::{PipelineError, StageFailure};
pub use input::PipelineInput;
pub use stage::Stage;

use jornada_calendar::generate_skeleton;
use jornada_cycle::apply_cycle;
use jornada_hours::assign_hours;
use jornada_overlay::{apply_guardias, apply_holidays, apply_vacations};
use jornada_stats::compute_statistics;
use jornada_validate::{ValidationInput, validate_calendar};
use tracing::{debug, warn};

/// Runs every stage in order and returns the finished calendar.
///
/// Guardias that cannot be placed are not an error: they are listed in
/// [`Calendar::guardias`]. Validation problems are not an error either;
/// they are in [`Calendar::validation`].
///
/// # Errors
///
/// Returns [`PipelineError::Stage`] for the first stage that fails.
#[tracing::instrument(skip_all, fields(year = input.year().get()))]
pub fn build_calendar(input: &PipelineInput) -> Result<Calendar, PipelineError> {
    let year = input.year();

    let days = generate_skeleton(year, input.employment())
        .map_err(|e| PipelineError::stage(Stage::Skeleton, e))?;
    debug!(stage = %Stage::Skeleton, n_days = days.len(), "done");

    let days = apply_cycle(days, input.cycle(), input.offset())
        .map_err(|e| PipelineError::stage(Stage::Cycle, e))?;
    debug!(stage = %Stage::Cycle, mode = %input.cycle().mode(), "done");

    let (days, vacations) = apply_vacations(days, input.vacations());

    let days = apply_holidays(days, input.holidays(), input.holiday_policy(), input.hours())
        .map_err(|e| PipelineError::stage(Stage::Holidays, e))?;

    let (days, guardias) = apply_guardias(days, input.guardias());
    if !guardias.rejected.is_empty() {
        warn!(
            rejected = guardias.rejected.len(),
            applied = guardias.applied,
            "some guardias were not applied"
        );
    }

    let days = assign_hours(days, input.hours())
        .map_err(|e| PipelineError::stage(Stage::Hours, e))?;

    let statistics = compute_statistics(&days, input.stats())
        .map_err(|e| PipelineError::stage(Stage::Statistics, e))?;

    let mut context = ValidationInput::new()
        .with_vacations(input.vacations())
        .with_holidays(input.holidays(), input.holiday_policy());
    if let Some(start) = input.employment().contract_start() {
        context = context.with_contract_start(start);
    }
    let validation = validate_calendar(&days, year, &context);

    debug!(
        total_hours = statistics.hours.total_hours,
        valid = validation.valid,
        "calendar built"
    );
    Ok(Calendar::new(
        year, days, vacations, guardias, statistics, validation,
    ))
}
