use crate::consensus::{ConsensusBuilder, ConsensusError};
use crate::core::alignment::{Alignment, GAP};
use crate::utils::validation::count_to_f64;

/// Default fraction of non-gap residues the winning symbol must reach
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Default symbol for columns without a clear majority
pub const DEFAULT_AMBIGUOUS: u8 = b'X';

/// Alternative gap symbol used by some aligners
const DOT_GAP: u8 = b'.';

/// Thresholded majority-vote consensus.
///
/// For each column, residues other than `-` and `.` are counted as they appear
/// (case-sensitive). The column takes the most frequent residue when it is the
/// unique maximum and its share of the counted residues is at least
/// `threshold`; otherwise, including all-gap columns, it takes `ambiguous`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MajorityConsensus {
    threshold: f64,
    ambiguous: u8,
}

impl Default for MajorityConsensus {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            ambiguous: DEFAULT_AMBIGUOUS,
        }
    }
}

impl MajorityConsensus {
    /// # Errors
    ///
    /// Returns `ConsensusError::InvalidThreshold` if `threshold` is not within
    /// (0, 1], or `ConsensusError::InvalidMarker` if `ambiguous` is not a
    /// printable ASCII character.
    pub fn new(threshold: f64, ambiguous: char) -> Result<Self, ConsensusError> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConsensusError::InvalidThreshold(threshold));
        }
        let ambiguous = u8::try_from(ambiguous)
            .ok()
            .filter(u8::is_ascii_graphic)
            .ok_or(ConsensusError::InvalidMarker(ambiguous))?;
        Ok(Self {
            threshold,
            ambiguous,
        })
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn column_symbol(&self, column: impl Iterator<Item = u8>) -> u8 {
        let mut counts = [0usize; 256];
        let mut counted = 0usize;
        for residue in column {
            if residue == GAP || residue == DOT_GAP {
                continue;
            }
            counts[usize::from(residue)] += 1;
            counted += 1;
        }

        let mut best: Option<u8> = None;
        let mut best_count = 0usize;
        let mut tied = false;
        for (symbol, &count) in (0..=u8::MAX).zip(counts.iter()) {
            if count == 0 {
                continue;
            }
            if count > best_count {
                best = Some(symbol);
                best_count = count;
                tied = false;
            } else if count == best_count {
                tied = true;
            }
        }

        match best {
            Some(symbol)
                if !tied && count_to_f64(best_count) / count_to_f64(counted) >= self.threshold =>
            {
                symbol
            }
            _ => self.ambiguous,
        }
    }
}

impl ConsensusBuilder for MajorityConsensus {
    fn ambiguous_marker(&self) -> u8 {
        self.ambiguous
    }

    fn build(&self, alignment: &Alignment) -> Result<Vec<u8>, ConsensusError> {
        Ok((0..alignment.alignment_length())
            .map(|col| self.column_symbol(alignment.column(col)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alignment::AlignedSequence;

    fn alignment(rows: &[&str]) -> Alignment {
        Alignment::new(
            rows.iter()
                .enumerate()
                .map(|(i, r)| AlignedSequence::new(format!("s{i}"), r.as_bytes()))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_identical_rows_reproduce_input() {
        let aln = alignment(&["ACGTACGTAC", "ACGTACGTAC"]);
        let cons = MajorityConsensus::default().build(&aln).unwrap();
        assert_eq!(cons, b"ACGTACGTAC");
    }

    #[test]
    fn test_tie_is_ambiguous() {
        let aln = alignment(&["AC", "GC"]);
        let cons = MajorityConsensus::default().build(&aln).unwrap();
        assert_eq!(cons, b"XC");
    }

    #[test]
    fn test_below_threshold_is_ambiguous() {
        // 2 of 3 = 0.67 < 0.7, 3 of 4 = 0.75 >= 0.7
        let aln3 = alignment(&["A", "A", "G"]);
        assert_eq!(MajorityConsensus::default().build(&aln3).unwrap(), b"X");

        let aln4 = alignment(&["A", "A", "A", "G"]);
        assert_eq!(MajorityConsensus::default().build(&aln4).unwrap(), b"A");
    }

    #[test]
    fn test_gaps_are_not_counted() {
        let aln = alignment(&["A-", "A.", "--"]);
        let cons = MajorityConsensus::default().build(&aln).unwrap();
        // Column 0: only the two A's count; column 1: all gaps
        assert_eq!(cons, b"AX");
    }

    #[test]
    fn test_case_is_significant_when_counting() {
        let aln = alignment(&["a", "A"]);
        let cons = MajorityConsensus::default().build(&aln).unwrap();
        assert_eq!(cons, b"X");
    }

    #[test]
    fn test_custom_threshold_and_marker() {
        let builder = MajorityConsensus::new(0.5, 'N').unwrap();
        let aln = alignment(&["AT", "AG", "CC"]);
        let cons = builder.build(&aln).unwrap();
        assert_eq!(builder.threshold(), 0.5);
        assert_eq!(builder.ambiguous_marker(), b'N');
        // Column 0: A 2/3 >= 0.5; column 1: T/G/C tie
        assert_eq!(cons, b"AN");
    }

    #[test]
    fn test_consensus_length_matches_alignment() {
        let aln = alignment(&["AC-GT-", "ACTGTA", "TCTG-A"]);
        let cons = MajorityConsensus::default().build(&aln).unwrap();
        assert_eq!(cons.len(), aln.alignment_length());
    }

    #[test]
    fn test_invalid_parameters() {
        assert_eq!(
            MajorityConsensus::new(0.0, 'X'),
            Err(ConsensusError::InvalidThreshold(0.0))
        );
        assert!(MajorityConsensus::new(1.5, 'X').is_err());
        assert!(MajorityConsensus::new(f64::NAN, 'X').is_err());
        assert!(MajorityConsensus::new(1.0, 'X').is_ok());
        assert_eq!(MajorityConsensus::default().threshold(), DEFAULT_THRESHOLD);
        assert_eq!(
            MajorityConsensus::new(0.7, ' '),
            Err(ConsensusError::InvalidMarker(' '))
        );
        assert!(MajorityConsensus::new(0.7, 'é').is_err());
    }
}
