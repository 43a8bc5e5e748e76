/// Gap symbol used by aligners to pad sequences to a common length
pub const GAP: u8 = b'-';

/// A single row of a multiple sequence alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedSequence {
    /// Record name (first word of the FASTA definition line)
    pub name: String,

    /// Aligned residues, kept exactly as read (case and gaps preserved)
    pub residues: Vec<u8>,
}

impl AlignedSequence {
    pub fn new(name: impl Into<String>, residues: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            residues: residues.into(),
        }
    }

    /// Number of alignment columns covered by this row
    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Number of `-` characters in this row
    #[must_use]
    pub fn gap_count(&self) -> usize {
        self.residues.iter().filter(|&&b| b == GAP).count()
    }
}

/// An ordered collection of equal-length aligned sequences.
///
/// Construction through [`Alignment::new`] enforces the equal-length invariant;
/// rows that disagree on length are rejected with the offending index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    sequences: Vec<AlignedSequence>,
}

/// Returned when alignment rows do not share a single length
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sequence {index} ('{name}') has length {found}, expected {expected}")]
pub struct RaggedAlignment {
    pub index: usize,
    pub name: String,
    pub expected: usize,
    pub found: usize,
}

impl Alignment {
    /// Build an alignment, checking that all rows share the first row's length.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedAlignment`] describing the first row whose length differs.
    pub fn new(sequences: Vec<AlignedSequence>) -> Result<Self, RaggedAlignment> {
        if let Some(first) = sequences.first() {
            let expected = first.len();
            if let Some((index, seq)) = sequences
                .iter()
                .enumerate()
                .find(|(_, s)| s.len() != expected)
            {
                return Err(RaggedAlignment {
                    index,
                    name: seq.name.clone(),
                    expected,
                    found: seq.len(),
                });
            }
        }
        Ok(Self { sequences })
    }

    /// Number of sequences (rows)
    #[must_use]
    pub fn num_sequences(&self) -> usize {
        self.sequences.len()
    }

    /// Alignment length (columns); zero when there are no rows
    #[must_use]
    pub fn alignment_length(&self) -> usize {
        self.sequences.first().map_or(0, AlignedSequence::len)
    }

    /// True for alignments with no rows or no columns
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.num_sequences() == 0 || self.alignment_length() == 0
    }

    pub fn sequences(&self) -> &[AlignedSequence] {
        &self.sequences
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlignedSequence> {
        self.sequences.iter()
    }

    /// Residues of every row at column `col`, in row order
    pub fn column(&self, col: usize) -> impl Iterator<Item = u8> + '_ {
        self.sequences.iter().map(move |s| s.residues[col])
    }

    /// Total `-` count summed over all rows
    #[must_use]
    pub fn total_gaps(&self) -> usize {
        self.sequences.iter().map(AlignedSequence::gap_count).sum()
    }
}
