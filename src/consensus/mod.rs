//! Consensus sequence construction.
//!
//! The statistics only depend on a narrow contract: a consensus has exactly one
//! symbol per alignment column and marks columns without a clear winner with a
//! known ambiguity symbol. [`ConsensusBuilder`] captures that contract so the
//! substitution rate can be computed against any implementation.
//!
//! [`MajorityConsensus`] is the default: a thresholded majority vote that
//! ignores gap symbols.

use thiserror::Error;

use crate::core::alignment::Alignment;

pub mod majority;

pub use majority::MajorityConsensus;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsensusError {
    #[error("invalid consensus threshold {0}: must be within (0, 1]")]
    InvalidThreshold(f64),

    #[error("invalid ambiguity marker {0:?}: must be a printable ASCII character")]
    InvalidMarker(char),
}

/// Builds a single representative sequence for an alignment.
pub trait ConsensusBuilder {
    /// Symbol emitted for columns without a clear majority
    fn ambiguous_marker(&self) -> u8;

    /// Build the consensus; the result has one symbol per alignment column.
    ///
    /// # Errors
    ///
    /// Implementations may reject alignments they cannot summarise.
    fn build(&self, alignment: &Alignment) -> Result<Vec<u8>, ConsensusError>;
}
