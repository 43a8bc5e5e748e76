//! Compute command - the batch run over a directory of alignments.

use std::path::PathBuf;

use clap::Args;

use crate::batch::{run_batch, BatchConfig};
use crate::cli::ConsensusArgs;
use crate::stats::StatsCalculator;

#[derive(Args)]
pub struct ComputeArgs {
    /// Directory containing alignment FASTA files
    #[arg(long, required = true)]
    pub input_dir: PathBuf,

    /// Optional text file listing alignment file names (one per line) inside --input-dir
    #[arg(long)]
    pub list_file: Option<PathBuf>,

    /// Output TSV path
    #[arg(short, long, required = true)]
    pub output: PathBuf,

    #[command(flatten)]
    pub consensus: ConsensusArgs,
}

/// Execute the compute command
///
/// # Errors
///
/// Returns an error if the input directory is missing, the list file or the
/// directory cannot be read, or the output cannot be written.
pub fn run(args: ComputeArgs) -> anyhow::Result<()> {
    let calculator = StatsCalculator::new(args.consensus.to_consensus()?);

    let config = BatchConfig {
        input_dir: args.input_dir,
        list_file: args.list_file,
        output: args.output,
    };

    run_batch(&config, &calculator)?;
    Ok(())
}
