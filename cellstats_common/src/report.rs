//! CSV output.

use std::io::Write;

use crate::error::CellStatsError;
use crate::statistics::FileStatistics;

/// Writes the header once, then one flushed row per file.
///
/// Fields are only quoted when they contain a delimiter, quote or newline, so
/// plain file names produce bare comma-joined rows.
pub struct Reporter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter and writes the header row.
    ///
    /// # Errors
    ///
    /// Returns [`CellStatsError::Report`] if the header cannot be written.
    pub fn new(inner: W) -> Result<Self, CellStatsError> {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(inner);
        let mut reporter = Self { writer };
        reporter.writer.write_record(FileStatistics::HEADER)?;
        reporter.writer.flush()?;
        Ok(reporter)
    }

    /// Writes and flushes one row.
    ///
    /// # Errors
    ///
    /// Returns [`CellStatsError::Report`] on write failure.
    pub fn write(&mut self, stats: &FileStatistics) -> Result<(), CellStatsError> {
        self.writer.write_record(stats.to_record())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`CellStatsError::Report`] if the final flush fails.
    pub fn into_inner(self) -> Result<W, CellStatsError> {
        self.writer
            .into_inner()
            .map_err(|e| CellStatsError::from(e.into_error()))
    }
}
