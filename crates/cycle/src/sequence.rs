//! Flat expansion of a parts cycle.

use jornada_calendar::DayType;

use crate::cycle::{CycleOffset, PartsCycle};

/// One slot of an expanded parts cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceEntry {
    /// Work or rest slot.
    pub day_type: DayType,
    /// 1-based part number.
    pub part_number: u32,
    /// 1-based position within the part's work run or rest run.
    pub day_within_part: u32,
}

impl SequenceEntry {
    /// Returns `true` for a work slot.
    pub fn is_work(&self) -> bool {
        self.day_type == DayType::Work
    }
}

/// Expands the parts into one repetition of the cycle.
///
/// Each part contributes `work_days` work entries followed by `rest_days`
/// rest entries, concatenated in part order. The result has length
/// [`PartsCycle::cycle_length`].
pub fn expand_parts(cycle: &PartsCycle) -> Vec<SequenceEntry> {
    let mut seq = Vec::with_capacity(cycle.cycle_length());
    for (i, part) in cycle.parts().iter().enumerate() {
        let part_number = (i + 1) as u32;
        for d in 1..=part.work_days() {
            seq.push(SequenceEntry {
                day_type: DayType::Work,
                part_number,
                day_within_part: d,
            });
        }
        for d in 1..=part.rest_days() {
            seq.push(SequenceEntry {
                day_type: DayType::Rest,
                part_number,
                day_within_part: d,
            });
        }
    }
    seq
}

/// Linear scan for the first entry matching `offset`.
///
/// Returns `None` when the offset names a position the cycle does not have,
/// which happens when the cycle definition changed after the offset was saved.
pub fn find_offset_index(seq: &[SequenceEntry], offset: &CycleOffset) -> Option<usize> {
    seq.iter().position(|e| {
        e.part_number == offset.part_number()
            && e.day_within_part == offset.day_within_part()
            && e.day_type == offset.day_type()
    })
}
