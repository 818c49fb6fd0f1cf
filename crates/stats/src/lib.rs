//! Statistics over a finished annual calendar.
//!
//! Everything here is a pure function of the finalized day array plus the
//! optional contract target and extra shifts; results are recomputed from
//! scratch on every call.
//!
//! # Quick start
//!
//! ```ignore
//! use jornada_stats::{AnnualContractHours, StatsConfig, compute_statistics};
//!
//! let config = StatsConfig::new()
//!     .with_contract_hours(AnnualContractHours::new(1752.0).unwrap());
//! let stats = compute_statistics(&days, &config).unwrap();
//! println!("{}", stats.balance.unwrap().message);
//! ```

mod aggregate;
mod balance;
mod config;
mod counts;
mod error;
mod weekly;

pub use aggregate::{DayStatistics, MonthlyBreakdown, StatePercentages, compute_statistics};
pub use balance::{BalanceType, HoursBalance, Severity, compute_balance};
pub use config::{AnnualContractHours, DEFAULT_HOURS_PER_DAY, ExtraShift, StatsConfig};
pub use counts::DayCounts;
pub use error::StatsError;
pub use weekly::{WeekdayShare, WeeklyDistribution, weekly_distribution};
