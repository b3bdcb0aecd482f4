/// cli.rs — orbitdesign command-line interface
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use orbitdesign::{Direction, OrganismConfig, DEFAULT_ATTB, DEFAULT_HOMOLOGY};

/// orbitdesign — ORBIT targeting oligo design
#[derive(Parser, Debug)]
#[command(
    name = "orbitdesign",
    author,
    version,
    about = "Design ORBIT targeting oligos for attB insertion",
    long_about = None
)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Origin, terminus and length of the target chromosome.
/// Defaults are E. coli K-12 MG1655.
#[derive(Args, Debug, Clone)]
pub struct OrganismArgs {
    /// Origin of replication (may fall between bases)
    #[arg(long, value_name = "POS", default_value_t = OrganismConfig::ECOLI_ORIGIN)]
    pub origin: f64,

    /// Replication terminus (may fall between bases)
    #[arg(long, value_name = "POS", default_value_t = OrganismConfig::ECOLI_TERMINUS)]
    pub terminus: f64,

    /// Total chromosome length in nt
    #[arg(long, value_name = "NT", default_value_t = OrganismConfig::ECOLI_GENOME_LENGTH)]
    pub genome_length: i64,
}

impl OrganismArgs {
    pub fn config(&self) -> OrganismConfig {
        OrganismConfig::new(self.origin, self.terminus, self.genome_length)
    }
}

/// Inputs shared by `design` and `details`.
#[derive(Args, Debug, Clone)]
pub struct DesignArgs {
    /// Reference genome FASTA (.gz accepted). First record is used.
    #[arg(short, long, value_name = "PATH")]
    pub genome: PathBuf,

    /// Last genomic base (1-based) kept before attB
    #[arg(short, long, value_name = "POS", allow_negative_numbers = true)]
    pub left: i64,

    /// First genomic base (1-based) kept after attB
    #[arg(short, long, value_name = "POS", allow_negative_numbers = true)]
    pub right: i64,

    /// Total homology; split evenly into two arms, so must be even
    #[arg(long, value_name = "NT", default_value_t = DEFAULT_HOMOLOGY)]
    pub homology: usize,

    /// attB direction relative to the genome: + or -
    #[arg(short, long, value_name = "DIR", default_value = "+", allow_hyphen_values = true)]
    pub direction: Direction,

    /// attB sequence in forward orientation
    #[arg(long, value_name = "SEQ", default_value = DEFAULT_ATTB)]
    pub attb: String,

    #[command(flatten)]
    pub organism: OrganismArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report the replichore of one or more genomic positions
    ///
    /// Examples:
    ///   orbitdesign replichore 500000 2000000
    Replichore {
        /// 1-based genomic positions
        #[arg(required = true, allow_negative_numbers = true)]
        positions: Vec<i64>,

        #[command(flatten)]
        organism: OrganismArgs,
    },

    /// Design a targeting oligo and print it
    ///
    /// Examples:
    ///   orbitdesign design -g MG1655.fasta -l 2000000 -r 2000100
    ///   orbitdesign design -g MG1655.fasta.gz -l 500000 -r 500001 -d - --json
    Design {
        #[command(flatten)]
        args: DesignArgs,

        /// Print the full design (oligo, replichore, arm spans) as JSON
        #[arg(long)]
        json: bool,
    },

    /// Design a targeting oligo and print a markdown summary with it
    ///
    /// Examples:
    ///   orbitdesign details -g MG1655.fasta -l 2000000 -r 2000100
    Details {
        #[command(flatten)]
        args: DesignArgs,
    },

    /// List annotated genes around an insertion site
    ///
    /// Examples:
    ///   orbitdesign nearby --genes MG1655_genes.tsv -l 2000000 -r 2000100
    ///   orbitdesign nearby --genes MG1655_genes.tsv -l 2000000 -r 2000100 --json
    Nearby {
        /// Gene table (TSV: left_pos, right_pos, direction, center_pos, gene_label)
        #[arg(long, value_name = "PATH")]
        genes: PathBuf,

        /// Last genomic base (1-based) kept before attB
        #[arg(short, long, value_name = "POS")]
        left: i64,

        /// First genomic base (1-based) kept after attB
        #[arg(short, long, value_name = "POS")]
        right: i64,

        /// Total homology, used to draw the arm segments
        #[arg(long, value_name = "NT", default_value_t = DEFAULT_HOMOLOGY)]
        homology: usize,

        /// Padding either side of the insertion, in nt
        #[arg(long, value_name = "NT", default_value_t = orbitdesign::report::DEFAULT_FLANK)]
        flank: i64,

        /// Print the nearby genes as JSON instead of a markdown table
        #[arg(long)]
        json: bool,
    },
}
