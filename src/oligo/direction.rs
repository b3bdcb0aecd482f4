/// oligo/direction.rs — attB insertion direction
///
/// The direction is relative to the forward genomic strand and is usually
/// chosen to match the gene of interest, so the integrated payload faces
/// downstream. Only `+` and `-` exist; text input is parsed here so the
/// rest of the crate works with an exhaustive two-valued enum.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `+` — attB reads along the forward strand
    #[serde(rename = "+")]
    Forward,
    /// `-` — attB reads along the reverse strand
    #[serde(rename = "-")]
    Reverse,
}

impl Direction {
    pub fn symbol(self) -> char {
        match self {
            Direction::Forward => '+',
            Direction::Reverse => '-',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Direction {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Direction::Forward),
            "-" => Ok(Direction::Reverse),
            other => Err(OrbitError::InvalidDirection(other.to_string())),
        }
    }
}
