//! Core data types for alignment statistics.
//!
//! - [`Alignment`] / [`AlignedSequence`]: an in-memory multiple sequence alignment
//! - [`StatsRow`]: one output record per input file, including the two sentinel forms
//!
//! ## Sentinel rows
//!
//! | Situation            | `align_len` | `No_seq` | other fields |
//! |----------------------|-------------|----------|--------------|
//! | degenerate alignment | actual (0)  | actual   | NaN          |
//! | zero-byte file       | 0           | 0        | NaN          |
//! | unreadable file      | NaN         | NaN      | NaN          |

pub mod alignment;
pub mod row;

pub use alignment::{AlignedSequence, Alignment, RaggedAlignment, GAP};
pub use row::StatsRow;
