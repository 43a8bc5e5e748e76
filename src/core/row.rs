use serde::Serialize;

use crate::stats::AlignmentStats;

/// Column order of the output table
pub const COLUMNS: [&str; 6] = ["OGS", "sub_rate", "Avg_record", "align_len", "No_seq", "meanGC"];

/// Text written for an undefined value in any numeric column.
///
/// pandas-style writers leave such fields empty and switch the count columns to
/// floats (`10.0`) once any fully-unknown row is present. This table always
/// writes `NaN` and keeps counts as integers; `pandas.read_csv` parses both
/// forms to the same frame.
pub const NAN_REPR: &str = "NaN";

/// One output record per processed alignment file.
///
/// Float fields use `NaN` for "undefined". The count fields are `None` only in
/// the fully-unknown sentinel produced when a file could not be analyzed;
/// a file known to be empty carries `Some(0)`.
#[derive(Debug, Clone, Serialize)]
pub struct StatsRow {
    /// Orthogroup identifier inferred from the file name
    #[serde(rename = "OGS")]
    pub ogs: String,

    /// Fraction of ambiguous positions in the majority consensus
    pub sub_rate: f64,

    /// Mean number of gap characters per sequence
    #[serde(rename = "Avg_record")]
    pub avg_record: f64,

    pub align_len: Option<usize>,

    #[serde(rename = "No_seq")]
    pub no_seq: Option<usize>,

    /// GC percentage over unambiguous bases
    #[serde(rename = "meanGC")]
    pub mean_gc: f64,
}

impl StatsRow {
    #[must_use]
    pub fn from_stats(ogs: impl Into<String>, stats: &AlignmentStats) -> Self {
        Self {
            ogs: ogs.into(),
            sub_rate: stats.sub_rate,
            avg_record: stats.avg_record,
            align_len: Some(stats.align_len),
            no_seq: Some(stats.no_seq),
            mean_gc: stats.mean_gc,
        }
    }

    /// Sentinel for a zero-byte input: counts are known to be zero.
    #[must_use]
    pub fn empty(ogs: impl Into<String>) -> Self {
        Self {
            ogs: ogs.into(),
            sub_rate: f64::NAN,
            avg_record: f64::NAN,
            align_len: Some(0),
            no_seq: Some(0),
            mean_gc: f64::NAN,
        }
    }

    /// Sentinel for an input that could not be parsed or analyzed.
    #[must_use]
    pub fn unknown(ogs: impl Into<String>) -> Self {
        Self {
            ogs: ogs.into(),
            sub_rate: f64::NAN,
            avg_record: f64::NAN,
            align_len: None,
            no_seq: None,
            mean_gc: f64::NAN,
        }
    }

    /// Render the row as table fields in [`COLUMNS`] order
    #[must_use]
    pub fn to_record(&self) -> [String; 6] {
        [
            self.ogs.clone(),
            format_float(self.sub_rate),
            format_float(self.avg_record),
            format_count(self.align_len),
            format_count(self.no_seq),
            format_float(self.mean_gc),
        ]
    }
}

/// Shortest round-trip representation that always keeps a decimal point
/// (`0.0`, `0.25`, `52.5`); NaN becomes [`NAN_REPR`].
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        NAN_REPR.to_string()
    } else {
        format!("{value:?}")
    }
}

#[must_use]
pub fn format_count(value: Option<usize>) -> String {
    value.map_or_else(|| NAN_REPR.to_string(), |v| v.to_string())
}
