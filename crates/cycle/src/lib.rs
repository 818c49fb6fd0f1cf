//! Work cycle expansion for the annual work calendar.
//!
//! A cycle is either a Monday-first weekly work/rest mask or an ordered
//! list of `{work_days, rest_days}` parts that repeats end to end.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  WorkCycle    │────▶│  expand_parts  │────▶│   apply_parts    │
//!  │  (validated)  │     │  (flat seq.)   │     │  (offset, mod n) │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//!         │
//!         └──────────────▶ apply_weekly (mask lookup by weekday)
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use jornada_cycle::{CyclePart, WorkCycle, expand_parts};
//!
//! let cycle = WorkCycle::parts(vec![CyclePart::new(6, 3).unwrap()]).unwrap();
//! let seq = expand_parts(cycle.as_parts().unwrap());
//! assert_eq!(seq.len(), 9);
//! ```

mod apply;
mod cycle;
mod error;
mod sequence;

pub use apply::{apply_cycle, apply_parts, apply_weekly};
pub use cycle::{
    CycleMode, CycleOffset, CyclePart, MAX_PART_DAYS, PartsCycle, WeeklyMask, WorkCycle,
};
pub use error::CycleError;
pub use sequence::{SequenceEntry, expand_parts, find_offset_index};
