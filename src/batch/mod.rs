//! Batch processing of alignment directories.
//!
//! - [`identifier`]: orthogroup identifiers from file names
//! - [`enumerate`]: which files to visit (manifest or directory listing)
//! - [`runner`]: per-file outcomes and the batch loop
//!
//! Failures on individual files never abort a batch. Each file ends in one
//! [`FileOutcome`]: missing files are skipped, empty files and unreadable files
//! become sentinel rows, everything else becomes a computed row.
//!
//! ## Example
//!
//! ```rust,no_run
//! use msa_stats::batch::{run_batch, BatchConfig};
//! use msa_stats::stats::StatsCalculator;
//!
//! let config = BatchConfig {
//!     input_dir: "alignments".into(),
//!     list_file: None,
//!     output: "alignment_stats.tsv".into(),
//! };
//! let summary = run_batch(&config, &StatsCalculator::default()).unwrap();
//! println!("{} rows", summary.rows());
//! ```

pub mod enumerate;
pub mod identifier;
pub mod runner;

pub use enumerate::resolve_input_files;
pub use identifier::infer_ogs_id;
pub use runner::{collect_rows, process_file, run_batch, BatchConfig, BatchSummary, FileOutcome};
