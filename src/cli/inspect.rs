//! Inspect command - statistics for a single alignment printed to stdout.
//!
//! Unlike `compute`, failures here are reported as errors instead of sentinel rows.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::batch::identifier::infer_ogs_id_from_path;
use crate::cli::{ConsensusArgs, OutputFormat};
use crate::consensus::ConsensusBuilder;
use crate::core::row::{format_count, format_float, StatsRow};
use crate::output::tsv::write_rows;
use crate::parsing::fasta::parse_alignment_file;
use crate::stats::StatsCalculator;

#[derive(Args)]
pub struct InspectArgs {
    /// Alignment FASTA file (optionally gzip compressed)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Also print the consensus sequence (text format only)
    #[arg(long)]
    pub show_consensus: bool,

    #[command(flatten)]
    pub consensus: ConsensusArgs,
}

/// Execute the inspect command
///
/// # Errors
///
/// Returns an error if the file cannot be parsed or its statistics cannot be computed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: InspectArgs, verbose: bool) -> anyhow::Result<()> {
    let calculator = StatsCalculator::new(args.consensus.to_consensus()?);

    let alignment = parse_alignment_file(&args.input)
        .with_context(|| format!("Failed to parse alignment: {}", args.input.display()))?;

    if verbose {
        eprintln!(
            "Parsed {} sequences x {} columns from {}",
            alignment.num_sequences(),
            alignment.alignment_length(),
            args.input.display(),
        );
    }

    let stats = calculator.compute(&alignment)?;
    let row = StatsRow::from_stats(infer_ogs_id_from_path(&args.input), &stats);

    match args.format {
        OutputFormat::Text => {
            print_text_result(&row);
            if args.show_consensus && !alignment.is_degenerate() {
                let builder = calculator.consensus();
                let consensus = builder.build(&alignment)?;
                println!(
                    "   Consensus:  {} (threshold {})",
                    String::from_utf8_lossy(&consensus),
                    builder.threshold()
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&row)?);
        }
        OutputFormat::Tsv => {
            write_rows(std::io::stdout().lock(), std::slice::from_ref(&row))?;
        }
    }

    Ok(())
}

fn print_text_result(row: &StatsRow) {
    println!("\n{}", row.ogs);
    println!("   Sequences:  {}", format_count(row.no_seq));
    println!("   Columns:    {}", format_count(row.align_len));
    println!("   Avg gaps:   {} per sequence", format_float(row.avg_record));
    println!("   Sub rate:   {}", format_float(row.sub_rate));
    println!("   GC:         {}%", format_float(row.mean_gc));
}
