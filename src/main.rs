/// main.rs — orbitdesign entry point

mod cli;

use clap::Parser;
use cli::{Cli, Command, DesignArgs};
use orbitdesign::genome::load_genome;
use orbitdesign::report::{
    pos_details_markdown, read_gene_table, render_nearby_json, render_nearby_markdown,
};
use orbitdesign::{classify_replichore, design_targeting_oligo, OligoDesign, OligoRequest};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        log::debug!("{e:?}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// 0 = warnings, 1 = info, 2+ = debug (arm coordinates and replichore).
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(command: Command) -> orbitdesign::Result<()> {
    print!("{}", render(command)?);
    Ok(())
}

/// Everything a subcommand writes to stdout.
fn render(command: Command) -> orbitdesign::Result<String> {
    let out = match command {
        Command::Replichore { positions, organism } => {
            let organism = organism.config();
            let mut out = String::new();
            for pos in positions {
                let replichore = classify_replichore(pos, &organism)?;
                out.push_str(&format!("{pos}\t{replichore}\n"));
            }
            out
        }

        Command::Design { args, json } => {
            let design = design_from_args(&args)?;
            if json {
                format!("{}\n", serde_json::to_string_pretty(&design)?)
            } else {
                format!("{}\n", design.oligo)
            }
        }

        Command::Details { args } => {
            let design = design_from_args(&args)?;
            format!(
                "{}\n\n**Oligo:** `{}`\n",
                pos_details_markdown(&design).trim_start(),
                design.oligo
            )
        }

        Command::Nearby { genes, left, right, homology, flank, json } => {
            let table = read_gene_table(&genes)?;
            if json {
                format!("{}\n", render_nearby_json(&table, left, right, flank)?)
            } else {
                render_nearby_markdown(&table, left, right, homology, flank)
            }
        }
    };

    Ok(out)
}

fn design_from_args(args: &DesignArgs) -> orbitdesign::Result<OligoDesign> {
    let genome = load_genome(&args.genome)?;
    let organism = args.organism.config();

    if genome.len() as i64 != organism.genome_length {
        log::warn!(
            "genome file holds {} nt but the organism length is {} nt",
            genome.len(),
            organism.genome_length
        );
    }

    let request = OligoRequest::new(args.left, args.right)
        .homology(args.homology)
        .direction(args.direction)
        .attb(args.attb.clone());

    let design = design_targeting_oligo(&request, genome.as_str(), &organism)?;
    log::info!(
        "Designed {} nt oligo on replichore {} (attB {})",
        design.len(),
        design.replichore,
        design.direction
    );
    Ok(design)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli::OrganismArgs;
    use orbitdesign::{Direction, OrbitError, Replichore, DEFAULT_ATTB};
    use std::path::Path;
    use tempfile::tempdir;

    // Replichore 1 below 30.5 and above 70.5, replichore 2 in between.
    fn toy_organism() -> OrganismArgs {
        OrganismArgs {
            origin: 70.5,
            terminus: 30.5,
            genome_length: 100,
        }
    }

    fn write_genome(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("toy.fa");
        let sequence = "ACGTTGCAAGGCTTAC".repeat(7)[..100].to_string();
        std::fs::write(&path, format!(">toy\n{}\n{}\n", &sequence[..60], &sequence[60..]))
            .unwrap();
        path
    }

    fn design_args(genome: std::path::PathBuf, left: i64, right: i64) -> DesignArgs {
        DesignArgs {
            genome,
            left,
            right,
            homology: 8,
            direction: Direction::Forward,
            attb: "GGGAAATTT".to_string(),
            organism: toy_organism(),
        }
    }

    #[test]
    fn test_design_from_fasta_file() {
        let dir = tempdir().unwrap();
        let args = design_args(write_genome(dir.path()), 40, 50);

        let design = design_from_args(&args).unwrap();
        assert_eq!(design.replichore, Replichore::Two);
        assert_eq!(design.oligo, "TGCAGGGAAATTTCGTT");
        assert_eq!(design.len(), 8 + 9);
    }

    #[test]
    fn test_design_errors_surface() {
        let dir = tempdir().unwrap();
        let mut args = design_args(write_genome(dir.path()), 40, 50);
        args.homology = 7;
        assert!(matches!(
            design_from_args(&args),
            Err(OrbitError::InvalidHomology(7))
        ));

        args.genome = dir.path().join("missing.fa");
        assert!(matches!(design_from_args(&args), Err(OrbitError::Io(_))));
    }

    #[test]
    fn test_design_json_output() {
        let dir = tempdir().unwrap();
        let args = design_args(write_genome(dir.path()), 10, 20);

        let out = render(Command::Design { args, json: true }).unwrap();
        let design: OligoDesign = serde_json::from_str(&out).unwrap();
        assert_eq!(design.replichore, Replichore::One);
        assert_eq!(design.direction, Direction::Forward);
        assert_eq!(design.oligo, "GCAAAAATTTCCCCTTG");
        assert!(out.contains("\"replichore\": 1"));
    }

    #[test]
    fn test_design_plain_output_is_oligo_line() {
        let dir = tempdir().unwrap();
        let args = design_args(write_genome(dir.path()), 40, 50);
        let out = render(Command::Design { args, json: false }).unwrap();
        assert_eq!(out, "GCTTGGGAAATTTTTAC\n");
    }

    #[test]
    fn test_details_output() {
        let dir = tempdir().unwrap();
        let mut args = design_args(write_genome(dir.path()), 40, 50);
        args.attb = DEFAULT_ATTB.to_string();

        let out = render(Command::Details { args }).unwrap();
        assert!(out.starts_with("**Left arm:** `(36 - 40) nt`"));
        assert!(out.contains("**Right arm:** `(50 - 54) nt`"));
        assert!(out.contains("**Replichore:** `2`"));
        assert!(out.contains("**Oligo length:** `46 nt`"));
        assert!(out.ends_with(&format!("**Oligo:** `TGCA{DEFAULT_ATTB}CGTT`\n")));
    }

    #[test]
    fn test_replichore_output() {
        let out = render(Command::Replichore {
            positions: vec![500_000, 2_000_000],
            organism: OrganismArgs {
                origin: 3_923_882.5,
                terminus: 1_590_250.5,
                genome_length: 4_641_652,
            },
        })
        .unwrap();
        assert_eq!(out, "500000\t1\n2000000\t2\n");
    }

    #[test]
    fn test_nearby_outputs() {
        let dir = tempdir().unwrap();
        let genes = dir.path().join("genes.tsv");
        std::fs::write(
            &genes,
            "left_pos\tright_pos\tdirection\tcenter_pos\tgene_label\n\
             100\t200\t+\t150\tnear\n\
             9000\t9100\t-\t9050\tfar\n",
        )
        .unwrap();

        let md = render(Command::Nearby {
            genes: genes.clone(),
            left: 500,
            right: 600,
            homology: 90,
            flank: 1_000,
            json: false,
        })
        .unwrap();
        assert!(md.contains("| near | 100 | 200 | + | 150 |"));
        assert!(!md.contains("far"));

        let json = render(Command::Nearby {
            genes,
            left: 500,
            right: 600,
            homology: 90,
            flank: 1_000,
            json: true,
        })
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["gene_label"], "near");
    }
}
