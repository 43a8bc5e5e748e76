use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use tracing::{debug, info, warn};

use crate::batch::enumerate::resolve_input_files;
use crate::batch::identifier::infer_ogs_id_from_path;
use crate::consensus::ConsensusBuilder;
use crate::core::row::StatsRow;
use crate::output::tsv::write_table;
use crate::stats::{AlignmentStats, StatsCalculator, StatsError};

/// Paths for one batch run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory holding the alignments (and the base for manifest entries)
    pub input_dir: PathBuf,

    /// Optional manifest replacing the directory listing
    pub list_file: Option<PathBuf>,

    /// Destination TSV, overwritten if present
    pub output: PathBuf,
}

/// What happened to a single input file
#[derive(Debug)]
pub enum FileOutcome {
    /// Path does not exist; no row is emitted
    Missing,
    /// Zero-byte file; counts are known to be zero
    Empty { ogs: String },
    /// Parsed and analyzed; stats are taken from the alignment
    Computed { ogs: String, stats: AlignmentStats },
    /// Parsing or analysis failed; every numeric field is unknown
    Failed { ogs: String, error: StatsError },
}

impl FileOutcome {
    /// The output row for this outcome, if any
    #[must_use]
    pub fn into_row(self) -> Option<StatsRow> {
        match self {
            FileOutcome::Missing => None,
            FileOutcome::Empty { ogs } => Some(StatsRow::empty(ogs)),
            FileOutcome::Computed { ogs, stats } => Some(StatsRow::from_stats(ogs, &stats)),
            FileOutcome::Failed { ogs, .. } => Some(StatsRow::unknown(ogs)),
        }
    }
}

/// Per-outcome counters for a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub computed: usize,
    pub empty: usize,
    pub failed: usize,
    pub missing: usize,
}

impl BatchSummary {
    /// Number of rows emitted
    #[must_use]
    pub fn rows(&self) -> usize {
        self.computed + self.empty + self.failed
    }

    fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Missing => self.missing += 1,
            FileOutcome::Empty { .. } => self.empty += 1,
            FileOutcome::Computed { .. } => self.computed += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Classify and, where possible, analyze one file. Never fails.
pub fn process_file<C: ConsensusBuilder>(path: &Path, calculator: &StatsCalculator<C>) -> FileOutcome {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            debug!("Skipping {}: {e}", path.display());
            return FileOutcome::Missing;
        }
    };

    let ogs = infer_ogs_id_from_path(path);

    if metadata.is_file() && metadata.len() == 0 {
        debug!("{} is empty", path.display());
        return FileOutcome::Empty { ogs };
    }

    match calculator.compute_file(path) {
        Ok(stats) => FileOutcome::Computed { ogs, stats },
        Err(error) => {
            warn!("Failed to compute statistics for {}: {error}", path.display());
            FileOutcome::Failed { ogs, error }
        }
    }
}

/// Process `files` in order, collecting one row per existing file.
pub fn collect_rows<C: ConsensusBuilder>(
    files: &[PathBuf],
    calculator: &StatsCalculator<C>,
) -> (Vec<StatsRow>, BatchSummary) {
    let mut rows = Vec::with_capacity(files.len());
    let mut summary = BatchSummary::default();

    for path in files {
        let outcome = process_file(path, calculator);
        summary.record(&outcome);
        if let Some(row) = outcome.into_row() {
            rows.push(row);
        }
    }

    (rows, summary)
}

/// Run a full batch: resolve inputs, compute rows, write the table.
///
/// # Errors
///
/// Returns an error if the input directory does not exist, the manifest
/// cannot be read, or the output table cannot be written. An input directory
/// that exists but cannot be listed produces a header-only table. Failures on
/// individual alignment files are never returned.
pub fn run_batch<C: ConsensusBuilder>(
    config: &BatchConfig,
    calculator: &StatsCalculator<C>,
) -> anyhow::Result<BatchSummary> {
    if !config.input_dir.exists() {
        bail!("Input dir not found: {}", config.input_dir.display());
    }

    let files = resolve_input_files(&config.input_dir, config.list_file.as_deref())
        .with_context(|| {
            let list = config.list_file.as_deref().unwrap_or(config.input_dir.as_path());
            format!("Failed to read list file: {}", list.display())
        })?;
    debug!("Resolved {} input files", files.len());

    let (rows, summary) = collect_rows(&files, calculator);

    write_table(&config.output, &rows)
        .with_context(|| format!("Failed to write output: {}", config.output.display()))?;

    info!(
        "Wrote {} rows to {} ({} computed, {} empty, {} failed, {} missing)",
        summary.rows(),
        config.output.display(),
        summary.computed,
        summary.empty,
        summary.failed,
        summary.missing,
    );

    Ok(summary)
}
