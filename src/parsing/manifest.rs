//! Parser for manifest files: one alignment file name per line.
//!
//! Lines are trimmed and blank lines dropped. There is no comment or quoting
//! syntax; every other line is taken as a name. Order and duplicates are kept.

use std::path::{Path, PathBuf};

use crate::parsing::ParseError;

/// Read a manifest and resolve every entry against `input_dir`.
///
/// Entries are not checked for existence here.
///
/// # Errors
///
/// Returns `ParseError::Io` if the manifest cannot be read.
pub fn read_manifest(path: &Path, input_dir: &Path) -> Result<Vec<PathBuf>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_manifest_text(&content)
        .into_iter()
        .map(|name| input_dir.join(name))
        .collect())
}

/// Split manifest text into its non-blank, trimmed entries
#[must_use]
pub fn parse_manifest_text(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
