/// oligo/arms.rs — Homology arm extraction
///
/// Genomic coordinates are 1-based; the genome string is 0-based. The
/// windows below reconcile the two so that:
///   - the last character of the left arm is the base at `left_pos`
///   - the first character of the right arm is the base at `right_pos`
///
///   left  arm: genome[left_pos - arm_len .. left_pos]
///   right arm: genome[right_pos - 1 .. right_pos - 1 + arm_len]
///
/// Every window is checked against the genome string before slicing.
/// This module is pure: no I/O, no logging.
use serde::{Deserialize, Serialize};

use crate::error::{OrbitError, Result};

/// 0-based, half-open slice bounds of one arm within the genome string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmSpan {
    pub start: i64,
    pub end: i64,
}

impl ArmSpan {
    pub fn left(left_pos: i64, arm_len: usize) -> Self {
        Self {
            start: left_pos.saturating_sub(arm_offset(arm_len)),
            end: left_pos,
        }
    }

    pub fn right(right_pos: i64, arm_len: usize) -> Self {
        let start = right_pos.saturating_sub(1);
        Self {
            start,
            end: start.saturating_add(arm_offset(arm_len)),
        }
    }

    pub fn len(&self) -> usize {
        usize::try_from(self.end.saturating_sub(self.start)).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the arm's bases, or `OutOfBoundsArm` if the window leaves the genome.
    pub fn slice<'g>(&self, genome: &'g str, arm: &'static str) -> Result<&'g str> {
        let out_of_bounds = || OrbitError::OutOfBoundsArm {
            arm,
            start: self.start,
            end: self.end,
            genome_len: genome.len(),
        };

        if self.start < 0 || self.end < self.start || self.end as usize > genome.len() {
            return Err(out_of_bounds());
        }
        genome
            .get(self.start as usize..self.end as usize)
            .ok_or_else(out_of_bounds)
    }
}

/// Arm length as a signed offset. Saturates, and a saturated window can
/// never fit inside a genome string, so `slice` reports it as out of bounds.
fn arm_offset(arm_len: usize) -> i64 {
    i64::try_from(arm_len).unwrap_or(i64::MAX)
}

/// Half of the total homology. Odd totals are rejected.
pub fn arm_length(homology: usize) -> Result<usize> {
    if homology % 2 != 0 {
        return Err(OrbitError::InvalidHomology(homology));
    }
    Ok(homology / 2)
}
