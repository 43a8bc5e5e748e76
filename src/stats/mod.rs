//! Per-alignment descriptive statistics.
//!
//! | Statistic    | Definition |
//! |--------------|------------|
//! | `sub_rate`   | ambiguous consensus positions / consensus length |
//! | `Avg_record` | total `-` characters / number of sequences |
//! | `align_len`  | number of alignment columns |
//! | `No_seq`     | number of sequences |
//! | `meanGC`     | 100 x (G + C) / (A + C + G + T), case-insensitive |
//!
//! Undefined values are `NaN`, never zero.
//!
//! ## Example
//!
//! ```rust
//! use msa_stats::core::{AlignedSequence, Alignment};
//! use msa_stats::stats::StatsCalculator;
//!
//! let aln = Alignment::new(vec![
//!     AlignedSequence::new("a", "ACGT"),
//!     AlignedSequence::new("b", "AC-T"),
//! ])
//! .unwrap();
//! let stats = StatsCalculator::default().compute(&aln).unwrap();
//! assert_eq!(stats.align_len, 4);
//! assert_eq!(stats.avg_record, 0.5);
//! ```

use thiserror::Error;

use crate::consensus::ConsensusError;
use crate::parsing::ParseError;

pub mod calculator;
pub mod gc;

pub use calculator::{AlignmentStats, StatsCalculator};
pub use gc::gc_percent;

/// Anything that prevents a statistics row from being computed for a file
#[derive(Error, Debug)]
pub enum StatsError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("consensus failed: {0}")]
    Consensus(#[from] ConsensusError),

    #[error("consensus length {found} does not match alignment length {expected}")]
    ConsensusLength { expected: usize, found: usize },
}
