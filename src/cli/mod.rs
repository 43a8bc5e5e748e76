//! Command-line interface for msa-stats.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **compute**: Compute one statistics row per alignment in a directory and write a TSV
//! - **inspect**: Print the statistics for a single alignment file
//!
//! ## Usage
//!
//! ```text
//! # All *.fa, *.fas and *.fasta files in a directory
//! msa-stats compute --input-dir alignments/ --output alignment_stats.tsv
//!
//! # Only the files named in a list, in list order
//! msa-stats compute --input-dir alignments/ --list-file selected.txt --output stats.tsv
//!
//! # One file, as JSON
//! msa-stats inspect alignments/OG0000001.fasta --format json
//! ```

use clap::{Parser, Subcommand};

use crate::consensus::{ConsensusError, MajorityConsensus};

pub mod compute;
pub mod inspect;

#[derive(Parser)]
#[command(name = "msa-stats")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Compute per-alignment statistics used as ML features")]
#[command(
    long_about = "msa-stats summarises multiple sequence alignments in FASTA format.\n\nFor every alignment it reports:\n- sub_rate: fraction of ambiguous positions in the majority consensus\n- Avg_record: mean number of gap characters per sequence\n- align_len and No_seq: alignment dimensions\n- meanGC: GC percentage over unambiguous bases"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute statistics for a directory of alignments and write a TSV table
    Compute(compute::ComputeArgs),

    /// Print statistics for a single alignment
    Inspect(inspect::InspectArgs),
}

/// Majority consensus options shared by all commands
#[derive(clap::Args, Clone, Debug)]
pub struct ConsensusArgs {
    /// Fraction of non-gap residues the majority symbol must reach (0-1]
    #[arg(long, default_value = "0.7")]
    pub threshold: f64,

    /// Symbol written for consensus columns without a clear majority
    #[arg(long, default_value = "X")]
    pub ambiguous: char,
}

impl ConsensusArgs {
    /// Build the consensus builder described by these options
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold or marker is invalid.
    pub fn to_consensus(&self) -> Result<MajorityConsensus, ConsensusError> {
        MajorityConsensus::new(self.threshold, self.ambiguous)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
