//! Everything the pipeline needs to build one calendar.

use jornada_calendar::{Employment, Year};
use jornada_cycle::{CycleOffset, WorkCycle};
use jornada_hours::WorkingHours;
use jornada_overlay::{Guardia, Holiday, HolidayPolicy, VacationPeriod};
use jornada_stats::StatsConfig;

/// Already-validated inputs for [`build_calendar`](crate::build_calendar).
///
/// Only the year, cycle and hour rates are required. Everything else
/// defaults to empty (no vacations, holidays or guardias), prior-year
/// employment, no offset, the default holiday policy and a statistics
/// configuration without a contract target.
///
/// # Example
///
/// ```
/// use jornada_calendar::{FixedClock, Year};
/// use jornada_cycle::WorkCycle;
/// use jornada_hours::WorkingHours;
/// use jornada_pipeline::PipelineInput;
///
/// let year = Year::new(2025, &FixedClock::ymd(2025, 1, 1).unwrap()).unwrap();
/// let cycle = WorkCycle::weekly([true, true, true, true, true, false, false]).unwrap();
/// let input = PipelineInput::new(year, cycle, WorkingHours::default());
/// assert!(input.vacations().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct PipelineInput {
    year: Year,
    employment: Employment,
    cycle: WorkCycle,
    offset: Option<CycleOffset>,
    hours: WorkingHours,
    vacations: Vec<VacationPeriod>,
    holidays: Vec<Holiday>,
    holiday_policy: HolidayPolicy,
    guardias: Vec<Guardia>,
    stats: StatsConfig,
}

impl PipelineInput {
    pub fn new(year: Year, cycle: WorkCycle, hours: WorkingHours) -> Self {
        Self {
            year,
            employment: Employment::prior_year(),
            cycle,
            offset: None,
            hours,
            vacations: Vec::new(),
            holidays: Vec::new(),
            holiday_policy: HolidayPolicy::default(),
            guardias: Vec::new(),
            stats: StatsConfig::new(),
        }
    }

    pub fn with_employment(mut self, employment: Employment) -> Self {
        self.employment = employment;
        self
    }

    /// Sets where in a parts cycle the year's first eligible day falls.
    pub fn with_offset(mut self, offset: CycleOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_vacations(mut self, vacations: Vec<VacationPeriod>) -> Self {
        self.vacations = vacations;
        self
    }

    pub fn with_holidays(mut self, holidays: Vec<Holiday>) -> Self {
        self.holidays = holidays;
        self
    }

    pub fn with_holiday_policy(mut self, policy: HolidayPolicy) -> Self {
        self.holiday_policy = policy;
        self
    }

    pub fn with_guardias(mut self, guardias: Vec<Guardia>) -> Self {
        self.guardias = guardias;
        self
    }

    /// Sets contract hours, hours per day and extra shifts.
    pub fn with_stats_config(mut self, stats: StatsConfig) -> Self {
        self.stats = stats;
        self
    }

    // --- Accessors ---

    /// Returns the calendar year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Returns the employment situation.
    pub fn employment(&self) -> &Employment {
        &self.employment
    }

    /// Returns the work cycle.
    pub fn cycle(&self) -> &WorkCycle {
        &self.cycle
    }

    /// Returns the parts-cycle offset, if set.
    pub fn offset(&self) -> Option<&CycleOffset> {
        self.offset.as_ref()
    }

    /// Returns the hourly rates.
    pub fn hours(&self) -> &WorkingHours {
        &self.hours
    }

    /// Returns the vacation periods.
    pub fn vacations(&self) -> &[VacationPeriod] {
        &self.vacations
    }

    /// Returns the holidays.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the holiday policy.
    pub fn holiday_policy(&self) -> &HolidayPolicy {
        &self.holiday_policy
    }

    /// Returns the requested guardias.
    pub fn guardias(&self) -> &[Guardia] {
        &self.guardias
    }

    /// Returns the statistics configuration.
    pub fn stats(&self) -> &StatsConfig {
        &self.stats
    }
}
