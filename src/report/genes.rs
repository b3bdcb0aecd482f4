/// report/genes.rs — Gene annotation table and nearby-gene selection
///
/// The annotation table is a tab-separated file with a header line:
///
///   left_pos  right_pos  direction  center_pos  gene_label
///   190       255        +          222.5       thrL
///   337       2799       +          1568        thrA
///
/// `tools/build_genes` produces this file from a GFF3 annotation. The
/// table is only used to show which genes surround a designed oligo; the
/// oligo itself never depends on it.
use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OrbitError, Result};
use crate::oligo::Direction;

/// Window padding either side of the insertion, in nt.
pub const DEFAULT_FLANK: i64 = 1_000;

/// One annotated gene, genomic 1-based inclusive coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneRecord {
    pub left_pos: i64,
    pub right_pos: i64,
    #[serde(alias = "Direction")]
    pub direction: Direction,
    pub center_pos: f64,
    pub gene_label: String,
}

impl GeneRecord {
    pub fn overlaps(&self, start: i64, end: i64) -> bool {
        self.right_pos >= start && self.left_pos <= end
    }
}

/// Read a gene table from `path`.
pub fn read_gene_table(path: &Path) -> Result<Vec<GeneRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut genes = Vec::new();
    for (i, row) in reader.deserialize::<GeneRecord>().enumerate() {
        let gene = row?;
        if gene.left_pos > gene.right_pos {
            return Err(OrbitError::InvalidGeneTable(format!(
                "row {}: gene '{}' has left_pos {} after right_pos {}",
                i + 1,
                gene.gene_label,
                gene.left_pos,
                gene.right_pos
            )));
        }
        genes.push(gene);
    }

    log::info!("Loaded {} genes from {}", genes.len(), path.display());
    Ok(genes)
}

/// Genes overlapping `[left_pos - flank, right_pos + flank]`, in table order.
pub fn nearby_genes(
    genes: &[GeneRecord],
    left_pos: i64,
    right_pos: i64,
    flank: i64,
) -> Vec<&GeneRecord> {
    let start = left_pos.saturating_sub(flank);
    let end = right_pos.saturating_add(flank);
    genes.iter().filter(|g| g.overlaps(start, end)).collect()
}

/// Markdown table of the genes near an insertion plus the two arm segments.
pub fn render_nearby_markdown(
    genes: &[GeneRecord],
    left_pos: i64,
    right_pos: i64,
    homology: usize,
    flank: i64,
) -> String {
    let arm_len = i64::try_from(homology / 2).unwrap_or(i64::MAX);
    let near = nearby_genes(genes, left_pos, right_pos, flank);

    let mut md = String::new();
    let _ = writeln!(
        md,
        "**Window:** `{} - {}` ({} gene(s))\n",
        left_pos.saturating_sub(flank),
        right_pos.saturating_add(flank),
        near.len()
    );
    md.push_str("| gene | left | right | strand | center |\n");
    md.push_str("|---|---:|---:|:---:|---:|\n");
    for g in &near {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} | {} |",
            g.gene_label, g.left_pos, g.right_pos, g.direction, g.center_pos
        );
    }
    let _ = write!(
        md,
        "\n**Left arm:** `{} - {}`\n\n**Right arm:** `{} - {}`\n",
        left_pos.saturating_sub(arm_len),
        left_pos,
        right_pos,
        right_pos.saturating_add(arm_len)
    );
    md
}

/// The genes near an insertion as a JSON array of gene records.
pub fn render_nearby_json(
    genes: &[GeneRecord],
    left_pos: i64,
    right_pos: i64,
    flank: i64,
) -> Result<String> {
    let near = nearby_genes(genes, left_pos, right_pos, flank);
    Ok(serde_json::to_string_pretty(&near)?)
}
