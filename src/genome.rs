/// genome.rs — Reference genome loading
///
/// Reads the first record of a FASTA file into memory. Paths ending in
/// `.gz` are decompressed on the fly. Sequence case is kept exactly as
/// stored, since the oligo preserves it.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bio::io::fasta;
use flate2::read::GzDecoder;

use crate::error::{OrbitError, Result};

/// A single chromosome held as one forward-strand string.
#[derive(Debug, Clone)]
pub struct Genome {
    pub id: String,
    pub sequence: String,
}

impl Genome {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.sequence
    }
}

/// Load the first FASTA record from `path`.
pub fn load_genome(path: &Path) -> Result<Genome> {
    let file = File::open(path)?;
    let is_gz = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);

    let genome = if is_gz {
        read_first_record(GzDecoder::new(BufReader::new(file)))?
    } else {
        read_first_record(file)?
    };

    match genome {
        Some(g) if !g.is_empty() => {
            log::info!("Loaded genome {} ({} nt) from {}", g.id, g.len(), path.display());
            Ok(g)
        }
        _ => Err(OrbitError::GenomeEmpty(path.to_path_buf())),
    }
}

fn read_first_record<R: Read>(reader: R) -> Result<Option<Genome>> {
    let mut records = fasta::Reader::new(reader).records();
    let Some(record) = records.next() else {
        return Ok(None);
    };
    let record = record?;

    if records.next().is_some() {
        log::warn!(
            "FASTA contains more than one record; using only '{}'",
            record.id()
        );
    }

    let sequence = String::from_utf8_lossy(record.seq()).into_owned();
    Ok(Some(Genome {
        id: record.id().to_string(),
        sequence,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_plain_fasta() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("genome.fasta");
        std::fs::write(&path, ">NC_000913.3 E. coli\nACGTacgt\nTTGG\n").unwrap();

        let genome = load_genome(&path).unwrap();
        assert_eq!(genome.id, "NC_000913.3");
        assert_eq!(genome.as_str(), "ACGTacgtTTGG");
        assert_eq!(genome.len(), 12);
    }

    #[test]
    fn test_load_gzipped_fasta() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("genome.fa.gz");
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(b">chr\nAACCGGTT\n").unwrap();
        std::fs::write(&path, enc.finish().unwrap()).unwrap();

        let genome = load_genome(&path).unwrap();
        assert_eq!(genome.id, "chr");
        assert_eq!(genome.as_str(), "AACCGGTT");
    }

    #[test]
    fn test_first_record_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("multi.fa");
        std::fs::write(&path, ">chr\nAAAA\n>plasmid\nCCCC\n").unwrap();
        assert_eq!(load_genome(&path).unwrap().as_str(), "AAAA");
    }

    #[test]
    fn test_empty_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.fa");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(load_genome(&path), Err(OrbitError::GenomeEmpty(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.fa");
        assert!(matches!(load_genome(&path), Err(OrbitError::Io(_))));
    }
}
