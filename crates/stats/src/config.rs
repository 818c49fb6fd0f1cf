//! Inputs for statistics beyond the day array.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Hours per day used to express a balance in days when none is configured.
pub const DEFAULT_HOURS_PER_DAY: f64 = 8.0;

/// Annual contract target in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnnualContractHours(f64);

impl AnnualContractHours {
    /// Creates a target.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidContractHours`] unless `hours` is finite and positive.
    pub fn new(hours: f64) -> Result<Self, StatsError> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(StatsError::InvalidContractHours { value: hours });
        }
        Ok(Self(hours))
    }

    /// Returns the target in hours.
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Hours worked outside the cycle, tracked apart from day states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExtraShift")]
pub struct ExtraShift {
    date: NaiveDate,
    hours: f64,
    description: Option<String>,
}

#[derive(Deserialize)]
struct RawExtraShift {
    date: NaiveDate,
    hours: f64,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RawExtraShift> for ExtraShift {
    type Error = StatsError;

    fn try_from(raw: RawExtraShift) -> Result<Self, Self::Error> {
        Self::new(raw.date, raw.hours, raw.description)
    }
}

impl ExtraShift {
    /// Creates an extra shift.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidExtraShiftHours`] unless `hours` is finite and positive.
    pub fn new(date: NaiveDate, hours: f64, description: Option<String>) -> Result<Self, StatsError> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(StatsError::InvalidExtraShiftHours { date, hours });
        }
        Ok(Self {
            date,
            hours,
            description,
        })
    }

    /// Shift date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Extra hours.
    pub fn hours(&self) -> f64 {
        self.hours
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Configuration for [`compute_statistics`](crate::compute_statistics).
///
/// # Example
///
/// ```
/// use jornada_stats::{AnnualContractHours, StatsConfig};
///
/// let config = StatsConfig::new()
///     .with_contract_hours(AnnualContractHours::new(1752.0).unwrap())
///     .with_hours_per_day(7.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct StatsConfig {
    contract_hours: Option<AnnualContractHours>,
    hours_per_day: f64,
    extra_shifts: Vec<ExtraShift>,
}

impl StatsConfig {
    /// Creates a configuration with no contract target, 8 hours per day and
    /// no extra shifts.
    pub fn new() -> Self {
        Self {
            contract_hours: None,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            extra_shifts: Vec::new(),
        }
    }

    /// Sets the annual contract target.
    pub fn with_contract_hours(mut self, hours: AnnualContractHours) -> Self {
        self.contract_hours = Some(hours);
        self
    }

    /// Sets the hours-per-day divisor used for equivalent days.
    pub fn with_hours_per_day(mut self, hours: f64) -> Self {
        self.hours_per_day = hours;
        self
    }

    /// Sets the extra shifts.
    pub fn with_extra_shifts(mut self, shifts: Vec<ExtraShift>) -> Self {
        self.extra_shifts = shifts;
        self
    }

    // --- Accessors ---

    /// Returns the annual contract target, if any.
    pub fn contract_hours(&self) -> Option<AnnualContractHours> {
        self.contract_hours
    }

    /// Returns the hours-per-day divisor.
    pub fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    /// Returns the extra shifts.
    pub fn extra_shifts(&self) -> &[ExtraShift] {
        &self.extra_shifts
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), StatsError> {
        if !self.hours_per_day.is_finite() || self.hours_per_day <= 0.0 {
            return Err(StatsError::InvalidHoursPerDay {
                value: self.hours_per_day,
            });
        }
        Ok(())
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self::new()
    }
}
