//! Pure conversion functions: TOML config structs -> crate API types.

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};
use tracing::warn;

use crate::config::*;

use jornada_calendar::{Clock, DayType, Employment, EmploymentStatus, Year};
use jornada_cycle::{CycleOffset, CyclePart, WorkCycle};
use jornada_hours::WorkingHours;
use jornada_overlay::{Guardia, Holiday, HolidayPolicy, VacationPeriod};
use jornada_pipeline::PipelineInput;
use jornada_stats::{AnnualContractHours, ExtraShift, StatsConfig};

/// Parses an employment status name into the corresponding enum variant.
pub fn parse_employment_status(s: &str) -> Result<EmploymentStatus> {
    match s.to_lowercase().as_str() {
        "prior_year" => Ok(EmploymentStatus::PriorYear),
        "started_this_year" => Ok(EmploymentStatus::StartedThisYear),
        other => bail!("unknown employment status: {other:?}"),
    }
}

/// Parses a cycle slot name (`work` or `rest`).
pub fn parse_day_type(s: &str) -> Result<DayType> {
    match s.to_lowercase().as_str() {
        "work" => Ok(DayType::Work),
        "rest" => Ok(DayType::Rest),
        other => bail!("unknown day type: {other:?}"),
    }
}

pub fn build_employment(employment: &EmploymentToml) -> Result<Employment> {
    let status = parse_employment_status(&employment.status)?;
    if status == EmploymentStatus::PriorYear && employment.contract_start.is_some() {
        warn!("[employment].contract_start is ignored for prior_year employment");
    }
    Ok(Employment::new(status, employment.contract_start))
}

pub fn build_offset(offset: &OffsetToml) -> Result<CycleOffset> {
    let day_type = parse_day_type(&offset.day_type)?;
    CycleOffset::new(offset.part_number, offset.day_within_part, day_type)
        .context("invalid [employment.offset]")
}

/// Builds a [`WorkCycle`] from the `[cycle]` table.
///
/// Weekly mode requires `mask`, parts mode requires `parts`.
pub fn build_cycle(cycle: &CycleToml) -> Result<WorkCycle> {
    match cycle.mode.to_lowercase().as_str() {
        "weekly" => {
            let Some(mask) = cycle.mask else {
                bail!("weekly cycle requires [cycle].mask");
            };
            WorkCycle::weekly(mask).context("invalid weekly cycle")
        }
        "parts" => {
            let Some(ref parts) = cycle.parts else {
                bail!("parts cycle requires [cycle].parts");
            };
            let parts = parts
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    CyclePart::new(p.work_days, p.rest_days)
                        .with_context(|| format!("invalid cycle part {}", i + 1))
                })
                .collect::<Result<Vec<_>>>()?;
            WorkCycle::parts(parts).context("invalid parts cycle")
        }
        other => bail!("unknown cycle mode: {other:?}"),
    }
}

pub fn build_working_hours(hours: &HoursToml) -> Result<WorkingHours> {
    WorkingHours::new(hours.weekday, hours.saturday, hours.sunday, hours.holiday)
        .context("invalid [hours]")
}

/// Builds the holiday policy. Under `explicit_flag` the worked set comes
/// from each holiday's `worked` flag.
pub fn build_holiday_policy(
    policy: &HolidayPolicyToml,
    holidays: &[HolidayToml],
) -> Result<HolidayPolicy> {
    match policy.mode.to_lowercase().as_str() {
        "auto_detect" => {
            if holidays.iter().any(|h| h.worked) {
                warn!("holiday `worked` flags are ignored under auto_detect");
            }
            Ok(HolidayPolicy::AutoDetect {
                respect_holidays: policy.respect_holidays,
            })
        }
        "explicit_flag" => {
            let worked: BTreeSet<_> = holidays.iter().filter(|h| h.worked).map(|h| h.date).collect();
            Ok(HolidayPolicy::ExplicitFlag { worked })
        }
        other => bail!("unknown holiday policy mode: {other:?}"),
    }
}

pub fn build_holidays(holidays: &[HolidayToml]) -> Vec<Holiday> {
    holidays
        .iter()
        .map(|h| Holiday::new(h.date, h.name.clone()))
        .collect()
}

pub fn build_vacations(vacations: &[VacationToml]) -> Result<Vec<VacationPeriod>> {
    vacations
        .iter()
        .map(|v| VacationPeriod::new(v.start, v.end, v.description.clone()).context("invalid vacation"))
        .collect()
}

pub fn build_guardias(guardias: &[ShiftToml]) -> Result<Vec<Guardia>> {
    guardias
        .iter()
        .map(|g| Guardia::new(g.date, g.hours, g.description.clone()).context("invalid guardia"))
        .collect()
}

/// Builds a [`StatsConfig`] from the contract and extra-shift settings.
pub fn build_stats_config(config: &JornadaConfig) -> Result<StatsConfig> {
    let extra_shifts = config
        .extra_shifts
        .iter()
        .map(|s| {
            ExtraShift::new(s.date, s.hours, s.description.clone()).context("invalid extra shift")
        })
        .collect::<Result<Vec<_>>>()?;

    let mut stats = StatsConfig::new()
        .with_hours_per_day(config.hours_per_day)
        .with_extra_shifts(extra_shifts);
    if let Some(hours) = config.annual_contract_hours {
        let contract = AnnualContractHours::new(hours).context("invalid annual_contract_hours")?;
        stats = stats.with_contract_hours(contract);
    }
    stats.validate().context("invalid hours_per_day")?;
    Ok(stats)
}

/// Builds the full [`PipelineInput`], checking the year against `clock`.
///
/// `year_override` replaces the configured year when set.
pub fn build_pipeline_input(
    config: &JornadaConfig,
    year_override: Option<i32>,
    clock: &impl Clock,
) -> Result<PipelineInput> {
    let year = Year::new(year_override.unwrap_or(config.year), clock).context("invalid year")?;

    let mut input = PipelineInput::new(
        year,
        build_cycle(&config.cycle)?,
        build_working_hours(&config.hours)?,
    )
    .with_employment(build_employment(&config.employment)?)
    .with_vacations(build_vacations(&config.vacations)?)
    .with_holidays(build_holidays(&config.holidays))
    .with_holiday_policy(build_holiday_policy(&config.holiday_policy, &config.holidays)?)
    .with_guardias(build_guardias(&config.guardias)?)
    .with_stats_config(build_stats_config(config)?);

    if let Some(ref offset) = config.employment.offset {
        input = input.with_offset(build_offset(offset)?);
    }
    Ok(input)
}
