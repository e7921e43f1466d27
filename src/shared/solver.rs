// Brute-force search for the noun/verb pairs that make a tape produce a
// given output.

use crate::shared::error::TapeError;
use crate::shared::intcode::{execute, Inputs, Program};
use log::{debug, info};
use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::ops::RangeInclusive;

/// The largest value tried for a noun or verb.
pub const MAX_SLOT_VALUE: i64 = 99;

/// Inclusive range of candidate values for one slot.
#[derive(Clone,Debug,Eq,PartialEq)]
pub struct SlotRange {
    first: i64,
    last: i64,
}

impl SlotRange {
    pub fn new(first: i64, last: i64) -> Self {
        SlotRange { first, last }
    }

    pub fn full() -> Self {
        Self::new(0, MAX_SLOT_VALUE)
    }

    pub fn fixed(value: i64) -> Self {
        Self::new(value, value)
    }

    pub fn len(&self) -> usize {
        let count = self.last as i128 - self.first as i128 + 1;
        usize::try_from(count.max(0)).unwrap_or(usize::MAX)
    }

    pub fn values(&self) -> RangeInclusive<i64> {
        self.first..=self.last
    }
}

impl Default for SlotRange {
    fn default() -> Self {
        Self::full()
    }
}

// A fixed value narrows the axis, otherwise every value is tried.
impl From<Option<i64>> for SlotRange {
    fn from(value: Option<i64>) -> Self {
        value.map_or_else(Self::full, Self::fixed)
    }
}

/// Find every pair of inputs that leaves `target` at position 0.
///
/// Each candidate runs on its own copy of `program`. All matches are
/// collected; the search fails with `NoSolutionFound` only once both
/// ranges are exhausted without one. A fault in any run aborts the search.
pub fn find_inputs(program: &Program, nouns: &SlotRange, verbs: &SlotRange,
                   target: i64) -> Result<BTreeSet<Inputs>, TapeError> {
    info!("Searching {} nouns x {} verbs for output {}",
          nouns.len(), verbs.len(), target);
    let mut matches = BTreeSet::new();
    for noun in nouns.values() {
        for verb in verbs.values() {
            let inputs = Inputs::new(noun, verb);
            if execute(program, Some(inputs))? == target {
                debug!("Noun {} and verb {} produce {}", noun, verb, target);
                matches.insert(inputs);
            }
        }
    }
    if matches.is_empty() {
        return Err(TapeError::NoSolutionFound { target });
    }
    info!("Found {} matching input pair(s)", matches.len());
    Ok(matches)
}
