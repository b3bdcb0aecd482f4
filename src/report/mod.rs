/// report/mod.rs — Human-readable output around a designed oligo
///
/// Nothing in here feeds back into the design; both submodules only
/// format what the oligo core and the annotation table already hold.
pub mod details;
pub mod genes;

pub use details::pos_details_markdown;
pub use genes::{
    nearby_genes, read_gene_table, render_nearby_json, render_nearby_markdown, GeneRecord,
    DEFAULT_FLANK,
};
