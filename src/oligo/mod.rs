/// oligo/mod.rs — Targeting oligo assembly
///
/// Ties together replichore classification, arm extraction and attB
/// orientation into one pure call:
///
///   validate homology → validate coordinates → classify left_pos
///     → extract arms → assemble
///
/// Replichore 1 flips both arms and reverses their order; replichore 2
/// uses the forward-strand arms as they are. The attB orientation then
/// depends on the requested direction:
///
///   rep 1, '+'  →  rc(right) + attB_rev + rc(left)
///   rep 1, '-'  →  rc(right) + attB_fwd + rc(left)
///   rep 2, '+'  →  left + attB_fwd + right
///   rep 2, '-'  →  left + attB_rev + right
///
/// The resulting oligo anneals to the lagging strand at the target site.
pub mod arms;
pub mod direction;
pub mod replichore;
pub mod reverse;

use serde::{Deserialize, Serialize};

use crate::error::Result;
pub use arms::{arm_length, ArmSpan};
pub use direction::Direction;
pub use replichore::{classify_replichore, OrganismConfig, Replichore};
pub use reverse::reverse_complement;

/// attB site shipped with the ORBIT integrating plasmids.
pub const DEFAULT_ATTB: &str = "ggcttgtcgacgacggcggtctccgtcgtcaggatcat";

/// Total homology split evenly across both arms.
pub const DEFAULT_HOMOLOGY: usize = 90;

/// Inputs for a single oligo design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OligoRequest {
    /// Last genomic base (1-based) kept unmodified before attB.
    pub left_pos: i64,
    /// First genomic base (1-based) kept unmodified after attB.
    pub right_pos: i64,
    pub homology: usize,
    pub direction: Direction,
    pub attb_fwd: String,
}

impl OligoRequest {
    pub fn new(left_pos: i64, right_pos: i64) -> Self {
        Self {
            left_pos,
            right_pos,
            homology: DEFAULT_HOMOLOGY,
            direction: Direction::Forward,
            attb_fwd: DEFAULT_ATTB.to_string(),
        }
    }

    pub fn homology(mut self, homology: usize) -> Self {
        self.homology = homology;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn attb(mut self, attb_fwd: impl Into<String>) -> Self {
        self.attb_fwd = attb_fwd.into();
        self
    }
}

/// A designed oligo plus the positional metadata reports need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OligoDesign {
    pub oligo: String,
    pub left_pos: i64,
    pub right_pos: i64,
    pub replichore: Replichore,
    pub direction: Direction,
    pub homology: usize,
    pub left_arm: ArmSpan,
    pub right_arm: ArmSpan,
    pub attb_len: usize,
}

impl OligoDesign {
    pub fn len(&self) -> usize {
        self.oligo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.oligo.is_empty()
    }

    pub fn arm_len(&self) -> usize {
        self.homology / 2
    }

    /// 5'→3' layout of the oligo for this replichore and direction.
    pub fn structure(&self) -> &'static str {
        structure_diagram(self.replichore, self.direction)
    }
}

/// Fixed structural diagram for each replichore × direction case.
pub fn structure_diagram(replichore: Replichore, direction: Direction) -> &'static str {
    match (replichore, direction) {
        (Replichore::One, Direction::Forward) => {
            "5' |-- Right_arm (Downstream) --|-- attB_rev --|-- Left_arm (Upstream) --| 3'"
        }
        (Replichore::One, Direction::Reverse) => {
            "5' |-- Right_arm (Upstream) --|-- attB_fwd --|-- Left_arm (Downstream) --| 3'"
        }
        (Replichore::Two, Direction::Forward) => {
            "5' |-- Left_arm (Upstream) --|-- attB_fwd --|-- Right_arm (Downstream) --| 3'"
        }
        (Replichore::Two, Direction::Reverse) => {
            "5' |-- Left_arm (Downstream) --|-- attB_rev --|-- Right_arm (Upstream) --| 3'"
        }
    }
}

/// Design the ORBIT targeting oligo for `request` against `genome`.
///
/// `genome` is the full chromosome, forward strand, 5'→3'. Case is kept
/// as given. Fails without a partial result on odd homology, coordinates
/// outside the organism, a position on a replichore boundary, or arm
/// windows that leave the genome string.
pub fn design_targeting_oligo(
    request: &OligoRequest,
    genome: &str,
    organism: &OrganismConfig,
) -> Result<OligoDesign> {
    let arm_len = arm_length(request.homology)?;

    organism.validate()?;
    organism.check_coordinate(request.left_pos)?;
    organism.check_coordinate(request.right_pos)?;

    if request.left_pos >= request.right_pos {
        log::warn!(
            "left position {} is not before right position {}; designing as requested",
            request.left_pos,
            request.right_pos
        );
    }

    let replichore = classify_replichore(request.left_pos, organism)?;

    // ── Arms ──────────────────────────────────────────────────────────
    let left_span = ArmSpan::left(request.left_pos, arm_len);
    let right_span = ArmSpan::right(request.right_pos, arm_len);
    let left_arm = left_span.slice(genome, "left")?;
    let right_arm = right_span.slice(genome, "right")?;

    // ── attB orientations ─────────────────────────────────────────────
    let attb_fwd = request.attb_fwd.as_str();
    let attb_rev = reverse_complement(attb_fwd);

    // ── Assemble ──────────────────────────────────────────────────────
    let mut oligo = String::with_capacity(request.homology.saturating_add(attb_fwd.len()));
    match replichore {
        Replichore::One => {
            let attb = match request.direction {
                Direction::Forward => attb_rev.as_str(),
                Direction::Reverse => attb_fwd,
            };
            oligo.push_str(&reverse_complement(right_arm));
            oligo.push_str(attb);
            oligo.push_str(&reverse_complement(left_arm));
        }
        Replichore::Two => {
            let attb = match request.direction {
                Direction::Forward => attb_fwd,
                Direction::Reverse => attb_rev.as_str(),
            };
            oligo.push_str(left_arm);
            oligo.push_str(attb);
            oligo.push_str(right_arm);
        }
    }

    log::debug!("left_arm_coord = {} : {}", left_span.start, left_span.end);
    log::debug!("right_arm_coord = {} : {}", right_span.start, right_span.end);
    log::debug!("replichore = {}", replichore);

    Ok(OligoDesign {
        oligo,
        left_pos: request.left_pos,
        right_pos: request.right_pos,
        replichore,
        direction: request.direction,
        homology: request.homology,
        left_arm: left_span,
        right_arm: right_span,
        attb_len: attb_fwd.len(),
    })
}
