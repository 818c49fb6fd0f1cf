//! The per-date calendar record.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::date::iso_week;
use crate::state::DayState;

/// Whether a cycle position is a work or a rest slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Work slot of a cycle part.
    Work,
    /// Rest slot of a cycle part.
    Rest,
}

/// Position of a day inside a multi-part cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleMeta {
    /// 1-based part number.
    pub part_number: u32,
    /// 1-based day within the work or rest run of that part.
    pub day_within_part: u32,
    /// Work or rest slot.
    pub day_type: DayType,
}

/// One calendar date and everything the pipeline resolved for it.
///
/// The date fields are fixed at construction. The mutable fields are owned
/// by pipeline stages in turn: the skeleton and cycle stages write `state`
/// and `cycle`, the overlays write `state`, `hours_worked` and
/// `description`, and the hours stage writes `hours_worked`. Only one stage
/// holds the day vector at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    date: NaiveDate,
    weekday: Weekday,
    iso_week: u32,
    month: u32,
    day_of_month: u32,
    state: Option<DayState>,
    hours_worked: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cycle: Option<CycleMeta>,
}

impl CalendarDay {
    /// Creates an unassigned day (no state, zero hours).
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weekday: date.weekday(),
            iso_week: iso_week(date),
            month: date.month(),
            day_of_month: date.day(),
            state: None,
            hours_worked: 0.0,
            description: None,
            cycle: None,
        }
    }

    /// Returns the date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the weekday.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the ISO-8601 week number.
    pub fn iso_week(&self) -> u32 {
        self.iso_week
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day_of_month(&self) -> u32 {
        self.day_of_month
    }

    /// Returns the state, or `None` if no stage has assigned one yet.
    pub fn state(&self) -> Option<DayState> {
        self.state
    }

    /// Returns `true` if the state is exactly `state`.
    pub fn is(&self, state: DayState) -> bool {
        self.state == Some(state)
    }

    /// Returns the worked hours.
    pub fn hours_worked(&self) -> f64 {
        self.hours_worked
    }

    /// Returns the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the cycle position, if the day was assigned by a parts cycle.
    pub fn cycle(&self) -> Option<&CycleMeta> {
        self.cycle.as_ref()
    }

    /// Sets the state.
    pub fn set_state(&mut self, state: DayState) {
        self.state = Some(state);
    }

    /// Sets the worked hours.
    pub fn set_hours(&mut self, hours: f64) {
        self.hours_worked = hours;
    }

    /// Replaces the description when `description` is `Some`; keeps the old one otherwise.
    pub fn set_description(&mut self, description: Option<&str>) {
        if let Some(d) = description {
            self.description = Some(d.to_string());
        }
    }

    /// Sets the cycle position.
    pub fn set_cycle(&mut self, meta: CycleMeta) {
        self.cycle = Some(meta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn new_is_unassigned() {
        let d = day(2025, 1, 1);
        assert_eq!(d.state(), None);
        assert_eq!(d.hours_worked(), 0.0);
        assert!(d.description().is_none());
        assert!(d.cycle().is_none());
    }

    #[test]
    fn derived_fields() {
        let d = day(2025, 3, 15);
        assert_eq!(d.weekday(), Weekday::Sat);
        assert_eq!(d.month(), 3);
        assert_eq!(d.day_of_month(), 15);
        assert_eq!(d.iso_week(), 11);
    }

    #[test]
    fn set_description_keeps_previous_on_none() {
        let mut d = day(2025, 1, 6);
        d.set_description(Some("Reyes"));
        d.set_description(None);
        assert_eq!(d.description(), Some("Reyes"));
    }

    #[test]
    fn is_state() {
        let mut d = day(2025, 1, 6);
        assert!(!d.is(DayState::Trabajo));
        d.set_state(DayState::Trabajo);
        assert!(d.is(DayState::Trabajo));
    }
}
