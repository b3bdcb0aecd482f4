//! orbitdesign — ORBIT targeting oligo design
//!
//! Computes the single-stranded oligo that directs an attB insertion at a
//! chosen genomic site. The oligo targets the lagging strand, so its
//! orientation depends on the replichore of the insertion site and on the
//! direction the attB payload should face.
//!
//! ```
//! use orbitdesign::{design_targeting_oligo, OligoRequest, OrganismConfig};
//!
//! let genome = "AACTCCGTTA";
//! let organism = OrganismConfig::new(9.5, 1.5, 10);
//! let request = OligoRequest::new(4, 7).homology(4).attb("aaag");
//!
//! let design = design_targeting_oligo(&request, genome, &organism).unwrap();
//! assert_eq!(design.oligo, "CTaaagGT");
//! ```

pub mod error;
pub mod genome;
pub mod oligo;
pub mod report;

pub use error::{OrbitError, Result};
pub use oligo::{
    classify_replichore, design_targeting_oligo, reverse_complement, structure_diagram, ArmSpan,
    Direction, OligoDesign, OligoRequest, OrganismConfig, Replichore, DEFAULT_ATTB,
    DEFAULT_HOMOLOGY,
};
