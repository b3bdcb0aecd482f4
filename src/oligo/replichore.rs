/// oligo/replichore.rs — Replichore classification
///
/// A circular chromosome is split into two arcs by the origin and the
/// terminus of replication. Replichore 1 is the arc that wraps through
/// position 0 (`pos > origin || pos < terminus`); replichore 2 is the arc
/// strictly between terminus and origin. A position exactly on a boundary
/// satisfies neither and is reported as `AmbiguousReplichore`.
///
/// Organism constants are always passed in explicitly. The reference
/// E. coli MG1655 values live in `OrganismConfig::ecoli_mg1655` and are only
/// applied by callers.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{OrbitError, Result};

/// Origin, terminus and length of the target chromosome.
///
/// Origin and terminus are floats because they may fall between bases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrganismConfig {
    pub origin: f64,
    pub terminus: f64,
    pub genome_length: i64,
}

impl OrganismConfig {
    pub const ECOLI_ORIGIN: f64 = 3_923_882.5;
    pub const ECOLI_TERMINUS: f64 = 1_590_250.5;
    pub const ECOLI_GENOME_LENGTH: i64 = 4_641_652;

    pub fn new(origin: f64, terminus: f64, genome_length: i64) -> Self {
        Self { origin, terminus, genome_length }
    }

    /// E. coli K-12 MG1655.
    pub fn ecoli_mg1655() -> Self {
        Self::new(
            Self::ECOLI_ORIGIN,
            Self::ECOLI_TERMINUS,
            Self::ECOLI_GENOME_LENGTH,
        )
    }

    /// Reject configurations the classifier cannot reason about.
    pub fn validate(&self) -> Result<()> {
        if self.genome_length <= 0 {
            return Err(OrbitError::InvalidOrganism(format!(
                "genome length must be positive, got {}",
                self.genome_length
            )));
        }
        let len = self.genome_length as f64;
        for (name, value) in [("origin", self.origin), ("terminus", self.terminus)] {
            if !value.is_finite() || value < 0.0 || value > len {
                return Err(OrbitError::InvalidOrganism(format!(
                    "{name} {value} must lie within 0..={}",
                    self.genome_length
                )));
            }
        }
        Ok(())
    }

    /// `0 <= pos <= genome_length`, otherwise `InvalidCoordinate`.
    pub fn check_coordinate(&self, pos: i64) -> Result<()> {
        if pos < 0 || pos > self.genome_length {
            return Err(OrbitError::InvalidCoordinate {
                pos,
                genome_length: self.genome_length,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Replichore {
    One,
    Two,
}

impl Replichore {
    pub fn number(self) -> u8 {
        match self {
            Replichore::One => 1,
            Replichore::Two => 2,
        }
    }
}

impl fmt::Display for Replichore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl From<Replichore> for u8 {
    fn from(r: Replichore) -> u8 {
        r.number()
    }
}

impl TryFrom<u8> for Replichore {
    type Error = String;

    fn try_from(n: u8) -> std::result::Result<Self, Self::Error> {
        match n {
            1 => Ok(Replichore::One),
            2 => Ok(Replichore::Two),
            other => Err(format!("replichore must be 1 or 2, got {other}")),
        }
    }
}

/// Determine which replichore `pos` belongs to.
pub fn classify_replichore(pos: i64, organism: &OrganismConfig) -> Result<Replichore> {
    organism.validate()?;
    organism.check_coordinate(pos)?;

    let p = pos as f64;
    if p > organism.origin || p < organism.terminus {
        Ok(Replichore::One)
    } else if p < organism.origin && p > organism.terminus {
        Ok(Replichore::Two)
    } else {
        Err(OrbitError::AmbiguousReplichore { pos })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn mg1655() -> OrganismConfig {
        OrganismConfig::ecoli_mg1655()
    }

    #[test]
    fn test_below_terminus_is_replichore_1() {
        assert_eq!(classify_replichore(500_000, &mg1655()).unwrap(), Replichore::One);
    }

    #[test]
    fn test_between_terminus_and_origin_is_replichore_2() {
        assert_eq!(classify_replichore(2_000_000, &mg1655()).unwrap(), Replichore::Two);
    }

    #[test]
    fn test_past_origin_is_replichore_1() {
        assert_eq!(classify_replichore(4_000_000, &mg1655()).unwrap(), Replichore::One);
    }

    #[test]
    fn test_genome_ends_are_valid() {
        let org = mg1655();
        assert_eq!(classify_replichore(0, &org).unwrap(), Replichore::One);
        assert_eq!(
            classify_replichore(org.genome_length, &org).unwrap(),
            Replichore::One
        );
    }

    #[test]
    fn test_bases_either_side_of_boundaries() {
        let org = mg1655();
        assert_eq!(classify_replichore(1_590_250, &org).unwrap(), Replichore::One);
        assert_eq!(classify_replichore(1_590_251, &org).unwrap(), Replichore::Two);
        assert_eq!(classify_replichore(3_923_882, &org).unwrap(), Replichore::Two);
        assert_eq!(classify_replichore(3_923_883, &org).unwrap(), Replichore::One);
    }

    #[test]
    fn test_negative_position_rejected() {
        match classify_replichore(-1, &mg1655()) {
            Err(OrbitError::InvalidCoordinate { pos, genome_length }) => {
                assert_eq!(pos, -1);
                assert_eq!(genome_length, 4_641_652);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_past_genome_end_rejected() {
        let err = classify_replichore(4_641_653, &mg1655()).unwrap_err();
        assert!(matches!(err, OrbitError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_position_on_boundary_is_ambiguous() {
        let org = OrganismConfig::new(800.0, 300.0, 1000);
        assert!(matches!(
            classify_replichore(800, &org),
            Err(OrbitError::AmbiguousReplichore { pos: 800 })
        ));
        assert!(matches!(
            classify_replichore(300, &org),
            Err(OrbitError::AmbiguousReplichore { pos: 300 })
        ));
        assert_eq!(classify_replichore(299, &org).unwrap(), Replichore::One);
        assert_eq!(classify_replichore(301, &org).unwrap(), Replichore::Two);
    }

    #[test]
    fn test_invalid_organism_rejected() {
        let bad = [
            OrganismConfig::new(10.0, 5.0, 0),
            OrganismConfig::new(f64::NAN, 5.0, 100),
            OrganismConfig::new(10.0, 101.0, 100),
            OrganismConfig::new(-1.0, 5.0, 100),
        ];
        for org in bad {
            assert!(matches!(
                classify_replichore(1, &org),
                Err(OrbitError::InvalidOrganism(_))
            ));
        }
    }

    #[test]
    fn test_every_valid_position_gets_exactly_one_replichore() {
        // Half-base boundaries can never coincide with an integer position.
        let org = mg1655();
        let mut rng = rand::thread_rng();
        for _ in 0..5_000 {
            let pos = rng.gen_range(0..=org.genome_length);
            let first = classify_replichore(pos, &org).unwrap();
            let second = classify_replichore(pos, &org).unwrap();
            assert_eq!(first, second);

            let p = pos as f64;
            let in_one = p > org.origin || p < org.terminus;
            let in_two = p < org.origin && p > org.terminus;
            assert!(in_one ^ in_two);
            assert_eq!(first == Replichore::One, in_one);
        }
    }

    #[test]
    fn test_replichore_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Replichore::Two).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Replichore>("1").unwrap(), Replichore::One);
        assert!(serde_json::from_str::<Replichore>("3").is_err());
    }
}
