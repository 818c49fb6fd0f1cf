//! Validation report types.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Which check raised an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// 365 or 366 days.
    DayCount,
    /// Every day has a state.
    Unassigned,
    /// Consecutive dates from January 1 to December 31.
    Continuity,
    /// Hours agree with the state.
    Hours,
    /// NoContratado exactly before the contract start.
    NotContracted,
    /// Explicitly worked holidays ended up worked.
    WorkedHoliday,
    /// Vacation periods ended up as Vacaciones.
    Vacation,
}

/// Whether an issue blocks use of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Makes the report invalid.
    Error,
    /// Reported only.
    Warning,
}

/// One problem found in the calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Check that raised the issue.
    pub check: Check,
    /// Day the issue refers to, when it is about a single day.
    pub date: Option<NaiveDate>,
    /// Human-readable description, in Spanish.
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{date}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Result of [`validate_calendar`](crate::validate_calendar).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// `true` when `errors` is empty.
    pub valid: bool,
    /// Blocking issues.
    pub errors: Vec<ValidationIssue>,
    /// Non-blocking issues.
    pub warnings: Vec<ValidationIssue>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl ValidationReport {
    /// Returns `true` when no blocking error was found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Issues raised by `check`, errors first.
    pub fn issues_for(&self, check: Check) -> impl Iterator<Item = (Severity, &ValidationIssue)> {
        let errors = self.errors.iter().map(|i| (Severity::Error, i));
        let warnings = self.warnings.iter().map(|i| (Severity::Warning, i));
        errors.chain(warnings).filter(move |(_, i)| i.check == check)
    }

    pub(crate) fn push(
        &mut self,
        severity: Severity,
        check: Check,
        date: Option<NaiveDate>,
        message: String,
    ) {
        let issue = ValidationIssue {
            check,
            date,
            message,
        };
        match severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
        self.valid = self.errors.is_empty();
    }
}
