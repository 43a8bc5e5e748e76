//! Parser for gapped FASTA alignments using noodles.
//!
//! Every record becomes one [`AlignedSequence`]; residues are kept verbatim so
//! that gap symbols and soft-masked (lowercase) bases survive for the statistics.
//! Supports both uncompressed and gzip/bgzip compressed files.

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles_fasta as fasta;

use crate::core::alignment::{AlignedSequence, Alignment};
use crate::parsing::ParseError;
use crate::utils::validation::{exceeds_sequence_limit, is_gzipped};

/// Parse a FASTA alignment file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::InvalidFormat`
/// if the content is not FASTA or holds no records, `ParseError::Noodles` if a
/// record is malformed, `ParseError::Ragged` if the rows differ in length, or
/// `ParseError::TooManySequences` if the limit is exceeded.
pub fn parse_alignment_file(path: &Path) -> Result<Alignment, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        parse_alignment_reader(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        parse_alignment_reader(BufReader::new(file))
    }
}

/// Parse a FASTA alignment from any buffered reader.
///
/// # Errors
///
/// See [`parse_alignment_file`].
pub fn parse_alignment_reader<R: BufRead>(mut reader: R) -> Result<Alignment, ParseError> {
    expect_definition_prefix(&mut reader)?;

    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut sequences = Vec::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        // Check sequence limit for DOS protection
        if exceeds_sequence_limit(sequences.len()) {
            return Err(ParseError::TooManySequences(sequences.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let residues = record.sequence().as_ref().to_vec();

        sequences.push(AlignedSequence::new(name, residues));
    }

    if sequences.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(Alignment::new(sequences)?)
}

/// Skip leading whitespace and require the first record to start with `>`.
///
/// Text that is not FASTA at all is rejected here rather than being handed to
/// the record reader.
fn expect_definition_prefix<R: BufRead>(reader: &mut R) -> Result<(), ParseError> {
    loop {
        let (skip, first) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                return Err(ParseError::InvalidFormat(
                    "No sequences found in FASTA file".to_string(),
                ));
            }
            match buf.iter().position(|b| !b.is_ascii_whitespace()) {
                Some(i) => (i, Some(buf[i])),
                None => (buf.len(), None),
            }
        };
        reader.consume(skip);

        if let Some(first) = first {
            if first == b'>' {
                return Ok(());
            }
            return Err(ParseError::InvalidFormat(format!(
                "expected '>' at start of first record, found {:?}",
                char::from(first)
            )));
        }
    }
}
