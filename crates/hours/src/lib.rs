//! Hour assignment for the annual work calendar.
//!
//! Runs after every overlay has settled the day states. Scheduled work is
//! paid from the [`WorkingHours`] table by weekday bucket, worked holidays
//! at the holiday rate, and guardias keep the hours their overlay set.

mod assign;
mod error;
mod rates;
mod round;

pub use assign::{HoursSummary, assign_hours, summarize_hours};
pub use error::HoursError;
pub use rates::WorkingHours;
pub use round::round2;
