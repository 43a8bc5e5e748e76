use std::path::Path;

use crate::consensus::{ConsensusBuilder, MajorityConsensus};
use crate::core::alignment::Alignment;
use crate::parsing::fasta::parse_alignment_file;
use crate::stats::gc::gc_percent;
use crate::stats::StatsError;
use crate::utils::validation::count_to_f64;

/// Statistics derived from one alignment's content
#[derive(Debug, Clone, Copy)]
pub struct AlignmentStats {
    pub sub_rate: f64,
    pub avg_record: f64,
    pub align_len: usize,
    pub no_seq: usize,
    pub mean_gc: f64,
}

impl AlignmentStats {
    /// Stats for an alignment without rows or columns: counts as observed, the rest undefined
    #[must_use]
    pub fn degenerate(align_len: usize, no_seq: usize) -> Self {
        Self {
            sub_rate: f64::NAN,
            avg_record: f64::NAN,
            align_len,
            no_seq,
            mean_gc: f64::NAN,
        }
    }
}

/// Computes [`AlignmentStats`] using a pluggable consensus builder
#[derive(Debug, Clone)]
pub struct StatsCalculator<C = MajorityConsensus> {
    consensus: C,
}

impl Default for StatsCalculator<MajorityConsensus> {
    fn default() -> Self {
        Self::new(MajorityConsensus::default())
    }
}

impl<C: ConsensusBuilder> StatsCalculator<C> {
    pub fn new(consensus: C) -> Self {
        Self { consensus }
    }

    /// The consensus builder used by [`StatsCalculator::compute`]
    pub fn consensus(&self) -> &C {
        &self.consensus
    }

    /// Compute statistics for an in-memory alignment.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Consensus` if the consensus builder fails, or
    /// `StatsError::ConsensusLength` if it returns a sequence of the wrong length.
    pub fn compute(&self, alignment: &Alignment) -> Result<AlignmentStats, StatsError> {
        let align_len = alignment.alignment_length();
        let no_seq = alignment.num_sequences();

        if alignment.is_degenerate() {
            return Ok(AlignmentStats::degenerate(align_len, no_seq));
        }

        let avg_record = count_to_f64(alignment.total_gaps()) / count_to_f64(no_seq);

        let consensus = self.consensus.build(alignment)?;
        if consensus.len() != align_len {
            return Err(StatsError::ConsensusLength {
                expected: align_len,
                found: consensus.len(),
            });
        }

        Ok(AlignmentStats {
            sub_rate: ambiguous_fraction(&consensus, self.consensus.ambiguous_marker()),
            avg_record,
            align_len,
            no_seq,
            mean_gc: gc_percent(alignment),
        })
    }

    /// Parse a FASTA alignment and compute its statistics.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Parse` if the file cannot be read as an alignment,
    /// or any error from [`StatsCalculator::compute`].
    pub fn compute_file(&self, path: &Path) -> Result<AlignmentStats, StatsError> {
        let alignment = parse_alignment_file(path)?;
        self.compute(&alignment)
    }
}

/// Fraction of `consensus` positions holding `marker` (case-insensitive); NaN when empty
#[must_use]
pub fn ambiguous_fraction(consensus: &[u8], marker: u8) -> f64 {
    if consensus.is_empty() {
        return f64::NAN;
    }
    let ambiguous = consensus
        .iter()
        .filter(|b| b.eq_ignore_ascii_case(&marker))
        .count();
    count_to_f64(ambiguous) / count_to_f64(consensus.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::ConsensusError;
    use crate::core::alignment::AlignedSequence;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn alignment(rows: &[&str]) -> Alignment {
        Alignment::new(
            rows.iter()
                .enumerate()
                .map(|(i, r)| AlignedSequence::new(format!("s{i}"), r.as_bytes()))
                .collect(),
        )
        .unwrap()
    }

    /// Returns a fixed consensus regardless of input
    struct FixedConsensus(&'static [u8]);

    impl ConsensusBuilder for FixedConsensus {
        fn ambiguous_marker(&self) -> u8 {
            b'X'
        }

        fn build(&self, _alignment: &Alignment) -> Result<Vec<u8>, ConsensusError> {
            Ok(self.0.to_vec())
        }
    }

    struct FailingConsensus;

    impl ConsensusBuilder for FailingConsensus {
        fn ambiguous_marker(&self) -> u8 {
            b'X'
        }

        fn build(&self, _alignment: &Alignment) -> Result<Vec<u8>, ConsensusError> {
            Err(ConsensusError::InvalidThreshold(2.0))
        }
    }

    #[test]
    fn test_identical_sequences() {
        let aln = alignment(&["ACGTACGTAC", "ACGTACGTAC"]);
        let stats = StatsCalculator::default().compute(&aln).unwrap();
        assert_eq!(stats.align_len, 10);
        assert_eq!(stats.no_seq, 2);
        assert_eq!(stats.sub_rate, 0.0);
        assert_eq!(stats.avg_record, 0.0);
        // 3 A, 3 C, 2 G, 2 T per row
        assert!((stats.mean_gc - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_avg_record_is_exact() {
        let aln = alignment(&["A--T", "-CGT", "ACGT"]);
        let stats = StatsCalculator::default().compute(&aln).unwrap();
        assert_eq!(stats.avg_record, 3.0 / 3.0);

        let aln = alignment(&["A---", "----"]);
        let stats = StatsCalculator::default().compute(&aln).unwrap();
        assert_eq!(stats.avg_record, 3.5);
    }

    #[test]
    fn test_sub_rate_counts_ambiguous_columns() {
        // Column 0 ties (A/G), column 3 is all gaps
        let aln = alignment(&["ACT-", "GCT-"]);
        let stats = StatsCalculator::default().compute(&aln).unwrap();
        assert_eq!(stats.sub_rate, 0.5);
        assert!((0.0..=1.0).contains(&stats.sub_rate));
    }

    #[test]
    fn test_calculator_exposes_its_builder() {
        let builder = MajorityConsensus::new(0.6, 'N').unwrap();
        let calc = StatsCalculator::new(builder);
        assert_eq!(calc.consensus(), &builder);
        assert_eq!(StatsCalculator::default().consensus().threshold(), 0.7);
    }

    #[test]
    fn test_sub_rate_marker_is_case_insensitive() {
        let calc = StatsCalculator::new(FixedConsensus(b"xXAC"));
        let stats = calc.compute(&alignment(&["ACGT"])).unwrap();
        assert_eq!(stats.sub_rate, 0.5);
    }

    #[test]
    fn test_degenerate_alignments() {
        let calc = StatsCalculator::default();

        let stats = calc.compute(&Alignment::default()).unwrap();
        assert_eq!(stats.align_len, 0);
        assert_eq!(stats.no_seq, 0);
        assert!(stats.sub_rate.is_nan());
        assert!(stats.avg_record.is_nan());
        assert!(stats.mean_gc.is_nan());

        let stats = calc.compute(&alignment(&["", ""])).unwrap();
        assert_eq!(stats.align_len, 0);
        assert_eq!(stats.no_seq, 2);
        assert!(stats.sub_rate.is_nan());
    }

    #[test]
    fn test_no_unambiguous_bases() {
        let stats = StatsCalculator::default()
            .compute(&alignment(&["NN-", "NN-"]))
            .unwrap();
        assert!(stats.mean_gc.is_nan());
        assert!(!stats.sub_rate.is_nan());
    }

    #[test]
    fn test_consensus_errors_propagate() {
        let calc = StatsCalculator::new(FailingConsensus);
        let result = calc.compute(&alignment(&["ACGT"]));
        assert!(matches!(result, Err(StatsError::Consensus(_))));

        let calc = StatsCalculator::new(FixedConsensus(b"AC"));
        let result = calc.compute(&alignment(&["ACGT"]));
        assert!(matches!(
            result,
            Err(StatsError::ConsensusLength {
                expected: 4,
                found: 2
            })
        ));
    }

    #[test]
    fn test_ambiguous_fraction() {
        assert!(ambiguous_fraction(b"", b'X').is_nan());
        assert_eq!(ambiguous_fraction(b"XXXX", b'X'), 1.0);
        assert_eq!(ambiguous_fraction(b"ACGT", b'X'), 0.0);
        assert_eq!(ambiguous_fraction(b"nAnA", b'N'), 0.5);
    }

    #[test]
    fn test_compute_file() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">a\nGGCC--\n>b\nGGCCAA\n").unwrap();
        temp.flush().unwrap();

        let stats = StatsCalculator::default().compute_file(temp.path()).unwrap();
        assert_eq!(stats.align_len, 6);
        assert_eq!(stats.no_seq, 2);
        assert_eq!(stats.avg_record, 1.0);
        assert!((stats.mean_gc - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_file_rejects_garbage() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b"not a fasta file\n").unwrap();
        temp.flush().unwrap();

        let result = StatsCalculator::default().compute_file(temp.path());
        assert!(matches!(result, Err(StatsError::Parse(_))));
    }
}
