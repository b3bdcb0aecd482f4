//! build_genes — offline tool to generate the gene annotation table
//!
//! Reads a GFF3 annotation (plain or .gz), keeps every `gene` feature and
//! writes the tab-separated table `orbitdesign nearby --genes` expects.
//!
//! USAGE
//! ────────────────────────────────────────────────────────────────────
//!  build_genes <annotation.gff3[.gz]> <genes.tsv>
//!
//! OUTPUT FORMAT (genes.tsv)
//! ────────────────────────────────────────────────────────────────────
//!  left_pos  right_pos  direction  center_pos  gene_label
//!  190       255        +          222.5       thrL
//! ────────────────────────────────────────────────────────────────────
//!
//! Coordinates are GFF3's 1-based inclusive start/end, unchanged.
//! center_pos is the midpoint of start and end.
//! gene_label is the first of Name, gene, locus_tag, ID that is present.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

// ── Constants ────────────────────────────────────────────────────────

const FEATURE_TYPE: &str = "gene";
const LABEL_KEYS: &[&str] = &["Name", "gene", "locus_tag", "ID"];
const HEADER: &str = "left_pos\tright_pos\tdirection\tcenter_pos\tgene_label";

// ── Gene type ────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
struct Gene {
    start: i64,
    end: i64,
    strand: char,
    label: String,
}

impl Gene {
    fn center(&self) -> f64 {
        (self.start + self.end) as f64 / 2.0
    }
}

// ── GFF3 parsing ─────────────────────────────────────────────────────

/// Pull the display label out of the GFF3 attribute column.
fn gene_label(attributes: &str) -> Option<String> {
    let pairs: Vec<(&str, &str)> = attributes
        .split(';')
        .filter_map(|kv| kv.trim().split_once('='))
        .collect();

    LABEL_KEYS.iter().find_map(|key| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.to_string())
    })
}

/// Parse one GFF3 line. Returns Ok(None) for comments, blank lines,
/// non-gene features and genes on an unknown strand.
fn parse_line(line: &str) -> Result<Option<Gene>, String> {
    let line = line.trim_end();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() < 9 {
        return Err(format!(
            "expected 9 tab-separated columns, got {}: {:?}",
            cols.len(),
            line
        ));
    }
    if cols[2] != FEATURE_TYPE {
        return Ok(None);
    }

    let start: i64 = cols[3]
        .parse()
        .map_err(|_| format!("invalid start '{}' in line: {}", cols[3], line))?;
    let end: i64 = cols[4]
        .parse()
        .map_err(|_| format!("invalid end '{}' in line: {}", cols[4], line))?;

    let strand = match cols[6] {
        "+" => '+',
        "-" => '-',
        _ => return Ok(None),
    };

    let label = gene_label(cols[8]).unwrap_or_else(|| format!("gene_{start}"));

    Ok(Some(Gene { start, end, strand, label }))
}

/// Read every gene from a GFF3 stream. Stops at the `##FASTA` section.
fn read_genes<R: Read>(reader: R) -> Result<Vec<Gene>, String> {
    let mut genes = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|e| format!("read error: {e}"))?;
        if line.starts_with("##FASTA") {
            break;
        }
        match parse_line(&line) {
            Ok(Some(gene)) => genes.push(gene),
            Ok(None) => {}
            Err(e) => return Err(format!("line {}: {}", i + 1, e)),
        }
    }
    Ok(genes)
}

// ── Serialiser ───────────────────────────────────────────────────────

fn write_table<W: Write>(genes: &[Gene], out: W) -> std::io::Result<()> {
    let mut w = BufWriter::new(out);
    writeln!(w, "{HEADER}")?;
    for g in genes {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            g.start,
            g.end,
            g.strand,
            g.center(),
            g.label
        )?;
    }
    w.flush()
}

// ── Main ─────────────────────────────────────────────────────────────

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: build_genes <annotation.gff3[.gz]> <genes.tsv>");
        std::process::exit(2);
    }
    let (input_path, output_path) = (&args[1], &args[2]);

    eprintln!("Reading {}...", input_path);

    let file = match File::open(input_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("  ERROR opening {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let parsed = if input_path.ends_with(".gz") {
        read_genes(GzDecoder::new(file))
    } else {
        read_genes(file)
    };

    let mut genes = match parsed {
        Ok(g) => g,
        Err(e) => {
            eprintln!("  ERROR parsing {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    genes.sort_by_key(|g| (g.start, g.end));
    eprintln!("  {} genes found", genes.len());

    let written = File::create(output_path).and_then(|f| write_table(&genes, f));
    match written {
        Ok(()) => eprintln!("Written to {}", output_path),
        Err(e) => {
            eprintln!("ERROR writing table: {}", e);
            std::process::exit(1);
        }
    }
}
