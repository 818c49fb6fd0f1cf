//! Generate command: build the calendar and export it as JSON.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span, warn};

use jornada_calendar::{CalendarDay, SystemClock, Year};
use jornada_hours::HoursSummary;
use jornada_overlay::GuardiaRejection;
use jornada_pipeline::{Calendar, build_calendar};
use jornada_stats::DayStatistics;
use jornada_validate::ValidationReport;

use crate::cli::GenerateArgs;
use crate::config;
use crate::convert;

/// JSON document written by `jornada generate`.
#[derive(Serialize)]
struct GenerateOutput<'a> {
    year: Year,
    days: &'a [CalendarDay],
    hours: &'a HoursSummary,
    statistics: &'a DayStatistics,
    validation: &'a ValidationReport,
    rejected_guardias: &'a [GuardiaRejection],
    vacation_applications: usize,
}

impl<'a> GenerateOutput<'a> {
    fn new(calendar: &'a Calendar) -> Self {
        Self {
            year: calendar.year(),
            days: calendar.days(),
            hours: calendar.hours(),
            statistics: calendar.statistics(),
            validation: calendar.validation(),
            rejected_guardias: &calendar.guardias().rejected,
            vacation_applications: calendar.vacations().applications,
        }
    }
}

/// Loads `path` and runs the full pipeline against today's date.
pub fn build_from_file(path: &Path, year_override: Option<i32>) -> Result<Calendar> {
    let config = config::load(path)?;
    let input = convert::build_pipeline_input(&config, year_override, &SystemClock)?;
    info!(year = input.year().get(), mode = %input.cycle().mode(), "configuration loaded");
    build_calendar(&input).context("failed to build calendar")
}

/// Run the generate command.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    let calendar = build_from_file(&args.config, args.year)?;
    let stats = calendar.statistics();
    info!(
        total_hours = calendar.hours().total_hours,
        effective_days = stats.effective_days,
        "calendar built"
    );
    if let Some(balance) = &stats.balance {
        info!(saldo = balance.saldo, "{}", balance.message);
    }
    for rejection in &calendar.guardias().rejected {
        warn!(date = %rejection.date, reason = ?rejection.reason, "guardia not applied");
    }
    if !calendar.validation().valid {
        warn!(
            errors = calendar.validation().errors.len(),
            "calendar has validation errors; run `jornada validate` for details"
        );
    }

    let output = GenerateOutput::new(&calendar);
    let json = if args.compact {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    }
    .context("failed to serialize calendar")?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "calendar written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write to stdout")?;
        }
    }

    Ok(())
}
