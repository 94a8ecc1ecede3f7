//! Writing labelled tables
//!
//! Output is staged next to the destination and moved into place by
//! [`LabelWriter::finish`]. A writer dropped before that removes the staged
//! file, so a failed run never leaves a partial table behind.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use arrow::csv::WriterBuilder;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use crate::error::{KbError, Result};
use crate::schema::output_schema;
use crate::utils::log_warning;

/// File format of the labelled table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Parquet,
}

impl OutputFormat {
    /// Pick the format from the output file extension
    ///
    /// No extension, `.csv` and `.txt` give CSV; `.parquet` gives Parquet.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            None => Ok(Self::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("txt") => {
                Ok(Self::Csv)
            }
            Some(ext) if ext.eq_ignore_ascii_case("parquet") => Ok(Self::Parquet),
            Some(ext) => Err(KbError::Config(format!(
                "unsupported output extension '.{ext}' for {}",
                path.display()
            ))),
        }
    }
}

enum Sink {
    Csv(arrow::csv::Writer<BufWriter<File>>),
    Parquet(ArrowWriter<File>),
}

/// Writer for labelled record batches
pub struct LabelWriter {
    sink: Option<Sink>,
    staging_path: PathBuf,
    output_path: PathBuf,
    rows_written: usize,
}

impl LabelWriter {
    /// Create a writer for `output_path`
    pub fn create(output_path: &Path, delimiter: u8) -> Result<Self> {
        let format = OutputFormat::from_path(output_path)?;
        let staging_path = staging_path(output_path);
        let file = File::create(&staging_path).map_err(|e| KbError::io(&staging_path, e))?;

        let sink = match format {
            OutputFormat::Csv => Sink::Csv(
                WriterBuilder::new()
                    .with_header(true)
                    .with_delimiter(delimiter)
                    .build(BufWriter::new(file)),
            ),
            OutputFormat::Parquet => match ArrowWriter::try_new(file, output_schema(), None) {
                Ok(writer) => Sink::Parquet(writer),
                Err(e) => {
                    discard_staged(&staging_path);
                    return Err(e.into());
                }
            },
        };

        Ok(Self {
            sink: Some(sink),
            staging_path,
            output_path: output_path.to_path_buf(),
            rows_written: 0,
        })
    }

    /// Append a labelled batch
    pub fn write(&mut self, batch: &RecordBatch) -> Result<()> {
        match self.sink.as_mut() {
            Some(Sink::Csv(writer)) => writer.write(batch)?,
            Some(Sink::Parquet(writer)) => writer.write(batch)?,
            None => return Err(KbError::Config("writer already finished".to_string())),
        }
        self.rows_written += batch.num_rows();
        Ok(())
    }

    /// Flush all rows and move the table to its final path
    pub fn finish(mut self) -> Result<usize> {
        let Some(sink) = self.sink.take() else {
            return Err(KbError::Config("writer already finished".to_string()));
        };

        let committed = close_sink(sink, self.rows_written, &self.staging_path).and_then(|()| {
            fs::rename(&self.staging_path, &self.output_path)
                .map_err(|e| KbError::io(&self.output_path, e))
        });
        if committed.is_err() {
            discard_staged(&self.staging_path);
        }
        committed?;

        Ok(self.rows_written)
    }
}

impl Drop for LabelWriter {
    fn drop(&mut self) {
        if self.sink.take().is_some() {
            discard_staged(&self.staging_path);
        }
    }
}

fn close_sink(sink: Sink, rows_written: usize, staging_path: &Path) -> Result<()> {
    match sink {
        Sink::Csv(mut writer) => {
            if rows_written == 0 {
                // the header is emitted with the first batch
                writer.write(&RecordBatch::new_empty(output_schema()))?;
            }
            let mut buffered = writer.into_inner();
            std::io::Write::flush(&mut buffered).map_err(|e| KbError::io(staging_path, e))?;
        }
        Sink::Parquet(writer) => {
            writer.close()?;
        }
    }
    Ok(())
}

/// Remove a staged file, logging when it cannot be removed
fn discard_staged(staging_path: &Path) -> bool {
    match fs::remove_file(staging_path) {
        Ok(()) => true,
        Err(e) => {
            log_warning(
                &format!("Could not remove staged output: {e}"),
                Some(staging_path),
            );
            false
        }
    }
}

fn staging_path(output_path: &Path) -> PathBuf {
    let mut name = output_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    output_path.with_file_name(name)
}
