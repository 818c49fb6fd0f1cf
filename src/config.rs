use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level jornada configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JornadaConfig {
    /// Calendar year to build.
    pub year: i32,

    /// Annual contract target; no balance is computed without it.
    #[serde(default)]
    pub annual_contract_hours: Option<f64>,

    /// Divisor used to express the balance in days.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,

    #[serde(default)]
    pub employment: EmploymentToml,

    pub cycle: CycleToml,

    #[serde(default)]
    pub hours: HoursToml,

    #[serde(default)]
    pub holiday_policy: HolidayPolicyToml,

    #[serde(default)]
    pub holidays: Vec<HolidayToml>,

    #[serde(default)]
    pub vacations: Vec<VacationToml>,

    #[serde(default)]
    pub guardias: Vec<ShiftToml>,

    #[serde(default)]
    pub extra_shifts: Vec<ShiftToml>,
}

fn default_hours_per_day() -> f64 {
    8.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmploymentToml {
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub contract_start: Option<NaiveDate>,
    #[serde(default)]
    pub offset: Option<OffsetToml>,
}

impl Default for EmploymentToml {
    fn default() -> Self {
        Self {
            status: default_status(),
            contract_start: None,
            offset: None,
        }
    }
}

fn default_status() -> String {
    "prior_year".to_string()
}

/// Position in a parts cycle on the year's first eligible day.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OffsetToml {
    pub part_number: u32,
    pub day_within_part: u32,
    pub day_type: String,
}

/// Cycle definition: `mask` for weekly mode, `parts` for parts mode.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CycleToml {
    pub mode: String,
    #[serde(default)]
    pub mask: Option<[bool; 7]>,
    #[serde(default)]
    pub parts: Option<Vec<PartToml>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartToml {
    pub work_days: u32,
    pub rest_days: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoursToml {
    #[serde(default = "default_rate")]
    pub weekday: f64,
    #[serde(default = "default_rate")]
    pub saturday: f64,
    #[serde(default = "default_rate")]
    pub sunday: f64,
    #[serde(default = "default_rate")]
    pub holiday: f64,
}

impl Default for HoursToml {
    fn default() -> Self {
        Self {
            weekday: default_rate(),
            saturday: default_rate(),
            sunday: default_rate(),
            holiday: default_rate(),
        }
    }
}

fn default_rate() -> f64 {
    8.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidayPolicyToml {
    #[serde(default = "default_policy_mode")]
    pub mode: String,
    #[serde(default)]
    pub respect_holidays: bool,
}

impl Default for HolidayPolicyToml {
    fn default() -> Self {
        Self {
            mode: default_policy_mode(),
            respect_holidays: false,
        }
    }
}

fn default_policy_mode() -> String {
    "auto_detect".to_string()
}

/// A holiday. `worked` is only read under the explicit-flag policy.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidayToml {
    pub date: NaiveDate,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub worked: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VacationToml {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

/// A dated block of hours: a guardia or an extra shift.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShiftToml {
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Reads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<JornadaConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: JornadaConfig = toml::from_str(
            r#"
            year = 2025
            [cycle]
            mode = "weekly"
            mask = [true, true, true, true, true, false, false]
            "#,
        )
        .unwrap();

        assert_eq!(config.year, 2025);
        assert_eq!(config.hours_per_day, 8.0);
        assert_eq!(config.employment.status, "prior_year");
        assert_eq!(config.holiday_policy.mode, "auto_detect");
        assert!(!config.holiday_policy.respect_holidays);
        assert_eq!(config.hours.holiday, 8.0);
        assert!(config.annual_contract_hours.is_none());
        assert!(config.holidays.is_empty());
    }

    #[test]
    fn full_config_parses() {
        let config: JornadaConfig = toml::from_str(
            r#"
            year = 2025
            annual_contract_hours = 1752.0
            hours_per_day = 7.5

            [employment]
            status = "started_this_year"
            contract_start = "2025-03-01"

            [cycle]
            mode = "parts"
            parts = [{ work_days = 6, rest_days = 3 }, { work_days = 4, rest_days = 2 }]

            [hours]
            weekday = 7.5
            saturday = 0.0

            [holiday_policy]
            mode = "explicit_flag"

            [[holidays]]
            date = "2025-01-01"
            name = "Año Nuevo"
            worked = true

            [[vacations]]
            start = "2025-08-04"
            end = "2025-08-22"

            [[guardias]]
            date = "2025-03-08"
            hours = 12.0

            [[extra_shifts]]
            date = "2025-04-02"
            hours = 3.0
            description = "inventario"
            "#,
        )
        .unwrap();

        assert_eq!(config.annual_contract_hours, Some(1752.0));
        assert_eq!(
            config.employment.contract_start,
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        assert_eq!(config.cycle.parts.as_ref().unwrap().len(), 2);
        assert_eq!(config.hours.saturday, 0.0);
        assert_eq!(config.hours.sunday, 8.0);
        assert!(config.holidays[0].worked);
        assert_eq!(config.vacations[0].description, None);
        assert_eq!(config.extra_shifts[0].description.as_deref(), Some("inventario"));
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<JornadaConfig, _> = toml::from_str(
            r#"
            year = 2025
            colour = "blue"
            [cycle]
            mode = "weekly"
            "#,
        );
        assert!(result.is_err());
    }
}
