//! Tab-separated output of [`StatsRow`]s.
//!
//! The table always starts with the header line
//! `OGS  sub_rate  Avg_record  align_len  No_seq  meanGC` (tab-separated),
//! followed by one line per row in the order given. No index column is written.

use std::io::Write;
use std::path::Path;

use crate::core::row::{StatsRow, COLUMNS};

/// Write the header and `rows` to any writer.
///
/// # Errors
///
/// Returns a `csv::Error` if writing fails.
pub fn write_rows<W: Write>(writer: W, rows: &[StatsRow]) -> Result<(), csv::Error> {
    let mut w = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    w.write_record(COLUMNS)?;
    for row in rows {
        w.write_record(row.to_record())?;
    }
    w.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the table to it.
///
/// # Errors
///
/// Returns a `csv::Error` if the file cannot be created or written.
pub fn write_table(path: &Path, rows: &[StatsRow]) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_rows(std::io::BufWriter::new(file), rows)
}
