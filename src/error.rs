use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrbitError {
    // ── core errors ───────────────────────────────────────────────────

    /// A genomic coordinate fell outside `[0, genome_length]`.
    #[error("Invalid coordinate {pos}: position must be within genome (0..={genome_length})")]
    InvalidCoordinate { pos: i64, genome_length: i64 },

    /// The position sits exactly on the origin or terminus, so neither
    /// replichore condition holds.
    #[error("Position {pos} lies on a replichore boundary (origin or terminus)")]
    AmbiguousReplichore { pos: i64 },

    #[error("Invalid homology {0}: total homology must be even so the arms are symmetric")]
    InvalidHomology(usize),

    #[error("Invalid attB direction '{0}': expected '+' or '-'")]
    InvalidDirection(String),

    /// The arm window does not fit inside the genome string.
    #[error("{arm} homology arm {start}..{end} falls outside the genome (length {genome_len})")]
    OutOfBoundsArm {
        arm: &'static str,
        start: i64,
        end: i64,
        genome_len: usize,
    },

    #[error("Invalid organism configuration: {0}")]
    InvalidOrganism(String),

    // ── collaborator errors ───────────────────────────────────────────

    #[error("No sequence found in genome file {}", .0.display())]
    GenomeEmpty(PathBuf),

    #[error("Invalid gene table: {0}")]
    InvalidGeneTable(String),

    #[error("Gene table parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OrbitError>;
