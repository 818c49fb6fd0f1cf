//! # jornada-calendar
//!
//! Day model and year skeleton for the annual work calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Year (clock-checked)"] -->|"generate_skeleton()"| B["Vec of CalendarDay"]
//!     C["Employment"] -->|"pre-contract days"| B
//!     B -->|"cycle / overlays / hours"| D["finished calendar"]
//!     E["chrono::Weekday"] -->|"monday_first_index()"| F["mask index 0..=6"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use jornada_calendar::{Employment, FixedClock, Year, generate_skeleton};
//!
//! let clock = FixedClock::ymd(2025, 6, 1).unwrap();
//! let year = Year::new(2025, &clock).unwrap();
//! let days = generate_skeleton(year, &Employment::prior_year()).unwrap();
//! assert_eq!(days.len(), 365);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Leap years, month lengths, ISO weeks, weekday translation |
//! | `day` | `CalendarDay` record and cycle metadata |
//! | `state` | `DayState` sum type and overlay priority |
//! | `year` | Clock-validated `Year` newtype |
//! | `skeleton` | Raw day array generation with contract start handling |
//! | `error` | Error types |

mod date;
mod day;
mod error;
mod skeleton;
mod state;
mod year;

pub use date::{
    WEEKDAY_NAMES, date_from_ymd, days_in_month, is_leap_year, iso_week, monday_first_index,
    weekday_from_monday_index, weekday_name, year_length,
};
pub use day::{CalendarDay, CycleMeta, DayType};
pub use error::CalendarError;
pub use skeleton::{Employment, EmploymentStatus, generate_skeleton};
pub use state::DayState;
pub use year::{Clock, FixedClock, SystemClock, YEAR_WINDOW, Year};
