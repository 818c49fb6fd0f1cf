//! Optional context the checks compare the calendar against.

use chrono::NaiveDate;
use jornada_overlay::{Holiday, HolidayPolicy, VacationPeriod};

/// Configuration the calendar was built from.
///
/// Everything is optional. A check whose context is missing only verifies
/// what it can from the days alone; with no contract start, for example,
/// any NoContratado day is an error.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use jornada_validate::ValidationInput;
///
/// let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let input = ValidationInput::new().with_contract_start(start);
/// assert_eq!(input.contract_start(), Some(start));
/// assert!(input.vacations().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationInput<'a> {
    contract_start: Option<NaiveDate>,
    vacations: &'a [VacationPeriod],
    holidays: &'a [Holiday],
    holiday_policy: Option<&'a HolidayPolicy>,
}

impl<'a> ValidationInput<'a> {
    /// Creates an input with no context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the contract start date.
    pub fn with_contract_start(mut self, date: NaiveDate) -> Self {
        self.contract_start = Some(date);
        self
    }

    /// Sets the vacation periods.
    pub fn with_vacations(mut self, vacations: &'a [VacationPeriod]) -> Self {
        self.vacations = vacations;
        self
    }

    /// Sets the holidays and the policy they were applied under.
    pub fn with_holidays(mut self, holidays: &'a [Holiday], policy: &'a HolidayPolicy) -> Self {
        self.holidays = holidays;
        self.holiday_policy = Some(policy);
        self
    }

    // --- Accessors ---

    /// Returns the contract start, if the employee started this year.
    pub fn contract_start(&self) -> Option<NaiveDate> {
        self.contract_start
    }

    /// Returns the vacation periods.
    pub fn vacations(&self) -> &'a [VacationPeriod] {
        self.vacations
    }

    /// Returns the holidays.
    pub fn holidays(&self) -> &'a [Holiday] {
        self.holidays
    }

    /// Returns the holiday policy, if holidays were set.
    pub fn holiday_policy(&self) -> Option<&'a HolidayPolicy> {
        self.holiday_policy
    }
}
