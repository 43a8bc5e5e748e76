//! Readers for the external file formats consumed by the batch runner.
//!
//! - **FASTA alignments**: gapped multi-record FASTA, optionally gzip/bgzip
//!   compressed, read with noodles
//! - **Manifests**: plain text lists of file names, one per line
//!
//! ## Example
//!
//! ```rust,no_run
//! use msa_stats::parsing::fasta::parse_alignment_file;
//! use std::path::Path;
//!
//! let alignment = parse_alignment_file(Path::new("OG0000001.fasta")).unwrap();
//! println!("{} sequences x {} columns", alignment.num_sequences(), alignment.alignment_length());
//! ```

use thiserror::Error;

use crate::core::alignment::RaggedAlignment;

pub mod fasta;
pub mod manifest;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA alignment: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Ragged alignment: {0}")]
    Ragged(#[from] RaggedAlignment),

    #[error("Too many sequences: {0} exceeds maximum allowed ({max})", max = crate::utils::validation::MAX_SEQUENCES)]
    TooManySequences(usize),
}
