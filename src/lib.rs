//! # msa-stats
//!
//! Descriptive statistics for multiple sequence alignments, computed per file
//! and collected into a flat table for use as machine-learning features.
//!
//! For every alignment `msa-stats` reports:
//!
//! - **`sub_rate`**: fraction of consensus columns without a clear majority
//! - **`Avg_record`**: mean number of gap characters per sequence
//! - **`align_len`** / **`No_seq`**: alignment dimensions
//! - **`meanGC`**: GC percentage over unambiguous bases
//!
//! Batch runs are tolerant: missing files are skipped, and empty or unreadable
//! files produce sentinel rows instead of aborting the run.
//!
//! ## Example
//!
//! ```rust,no_run
//! use msa_stats::parsing::fasta::parse_alignment_file;
//! use msa_stats::{StatsCalculator, StatsRow};
//! use std::path::Path;
//!
//! let path = Path::new("OG0000001_cat.fasta");
//! let alignment = parse_alignment_file(path).unwrap();
//! let stats = StatsCalculator::default().compute(&alignment).unwrap();
//! let row = StatsRow::from_stats(msa_stats::infer_ogs_id("OG0000001_cat.fasta"), &stats);
//!
//! println!("{}: {:.3} sub_rate, {:.1}% GC", row.ogs, row.sub_rate, row.mean_gc);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alignment and output row types
//! - [`parsing`]: FASTA alignment and manifest readers
//! - [`consensus`]: Consensus construction behind the [`ConsensusBuilder`] trait
//! - [`stats`]: GC content, gap and substitution statistics
//! - [`batch`]: File enumeration and the fault-tolerant batch runner
//! - [`output`]: TSV table writer
//! - [`cli`]: Command-line interface implementation

pub mod batch;
pub mod cli;
pub mod consensus;
pub mod core;
pub mod output;
pub mod parsing;
pub mod stats;
pub mod utils;

// Re-export commonly used types for convenience
pub use batch::{infer_ogs_id, run_batch, BatchConfig, FileOutcome};
pub use consensus::{ConsensusBuilder, MajorityConsensus};
pub use core::alignment::{AlignedSequence, Alignment};
pub use core::row::StatsRow;
pub use stats::{AlignmentStats, StatsCalculator};
