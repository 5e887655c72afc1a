//! Semicolon-delimited CSV output
//!
//! The writer always uses `;` as delimiter and CRLF as line terminator.
//! Fields containing `;`, `"`, CR or LF are quoted with embedded quotes
//! doubled.

use crate::domain::{ExportRow, Result, UnitExportError, EXPORT_HEADER};
use chrono::{DateTime, TimeZone};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Field delimiter
pub const DELIMITER: u8 = b';';

/// Name of the export file for a run started at `started_at`
///
/// Pattern: `exported_data_<YYYY>-<MM>-<DD>_<HH>-<MM>-<SS>.csv`
pub fn export_file_name<Tz>(started_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "exported_data_{}.csv",
        started_at.format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Writer for export rows
///
/// The header is written on construction. Call [`finish`](Self::finish) to
/// flush and release the underlying writer; if the exporter is dropped on an
/// error path instead, buffered rows are flushed on a best-effort basis and the
/// file handle is closed.
pub struct CsvExporter<W: Write> {
    writer: csv::Writer<W>,
    path: Option<PathBuf>,
    rows_written: usize,
}

impl CsvExporter<File> {
    /// Create a new export file in `dir`, named after `started_at`
    ///
    /// The file is opened with create-new semantics: an existing file of the
    /// same name is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`UnitExportError::Io`] if the file already exists or cannot be
    /// created (missing directory, permission denied, disk full).
    pub fn create<Tz>(dir: &Path, started_at: &DateTime<Tz>) -> Result<Self>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let path = dir.join(export_file_name(started_at));
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| {
                UnitExportError::Io(format!(
                    "Failed to create export file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        tracing::info!(path = %path.display(), "Created export file");
        Self::build(file, Some(path))
    }
}

impl<W: Write> CsvExporter<W> {
    /// Write to an arbitrary sink, e.g. a buffer in tests
    pub fn from_writer(inner: W) -> Result<Self> {
        Self::build(inner, None)
    }

    fn build(inner: W, path: Option<PathBuf>) -> Result<Self> {
        let writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .terminator(Terminator::CRLF)
            .quote_style(QuoteStyle::Necessary)
            .has_headers(false)
            .from_writer(inner);

        let mut exporter = Self {
            writer,
            path,
            rows_written: 0,
        };
        exporter.writer.write_record(EXPORT_HEADER)?;
        Ok(exporter)
    }

    /// Append one data row
    pub fn write_row(&mut self, row: &ExportRow) -> Result<()> {
        self.writer.write_record(row.fields())?;
        self.rows_written += 1;
        Ok(())
    }

    /// Append every row of `rows`, returning how many were written
    pub fn write_rows<I>(&mut self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = ExportRow>,
    {
        let before = self.rows_written;
        for row in rows {
            self.write_row(&row)?;
        }
        Ok(self.rows_written - before)
    }

    /// Data rows written so far, header excluded
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Path of the export file, if writing to a file
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Flush buffered output and hand back the underlying writer
    ///
    /// For file exports the returned [`File`] is usually dropped right away,
    /// which closes it.
    pub fn finish(self) -> Result<W> {
        let path = self.path.clone();
        let mut inner = self.writer.into_inner().map_err(|e| {
            UnitExportError::Io(format!(
                "Failed to flush export output{}: {}",
                path.as_ref()
                    .map(|p| format!(" {}", p.display()))
                    .unwrap_or_default(),
                e.error()
            ))
        })?;
        inner.flush()?;
        Ok(inner)
    }
}
