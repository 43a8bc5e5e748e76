//! Centralized validation and helper functions.

use std::path::Path;

/// Maximum number of sequences accepted in a single alignment (DOS protection)
pub const MAX_SEQUENCES: usize = 1_000_000;

/// Alignment file extensions recognised when inferring identifiers, longest first
pub const ALIGNMENT_EXTENSIONS: [&str; 3] = [".fasta", ".fas", ".fa"];

/// Suffixes that mark a gzip or bgzip compressed alignment
const COMPRESSED_SUFFIXES: [&str; 2] = [".gz", ".bgz"];

/// Helper function to convert usize count to f64 with explicit precision loss allowance
#[inline]
#[must_use]
pub fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Whether adding another sequence to `count` existing ones would exceed [`MAX_SEQUENCES`].
///
/// Call this with the current count BEFORE adding a new sequence.
#[must_use]
pub fn exceeds_sequence_limit(count: usize) -> bool {
    count >= MAX_SEQUENCES
}

/// Strip a trailing `.fasta`, `.fas` or `.fa` (any case) from a file name.
///
/// Returns the input unchanged when no known extension is present.
#[must_use]
pub fn strip_alignment_extension(name: &str) -> &str {
    // ASCII lowercasing keeps byte offsets identical to `name`
    let lower = name.to_ascii_lowercase();
    ALIGNMENT_EXTENSIONS
        .iter()
        .find(|ext| lower.ends_with(*ext))
        .map_or(name, |ext| &name[..name.len() - ext.len()])
}

/// Check if the path is a gzipped file
#[must_use]
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    COMPRESSED_SUFFIXES.iter().any(|s| path_str.ends_with(s))
}
