//! Module for reading indicator tables with header validation.

use std::fs::File;
use std::io::{Read, Seek};

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;

use crate::config::KbConfig;
use crate::error::{KbError, Result};
use crate::schema::{raw_input_schema, validate_header};
use crate::utils::log_operation_start;

/// Read the header names of a delimited file
pub fn read_header<R: Read>(reader: R, delimiter: u8) -> Result<Vec<String>> {
    let (schema, _) = Format::default()
        .with_header(true)
        .with_delimiter(delimiter)
        .infer_schema(reader, Some(0))?;

    Ok(schema
        .fields()
        .iter()
        .map(|field| field.name().clone())
        .collect())
}

/// Streaming reader over the record batches of an input table
///
/// Cells are kept as text; turning them into records is left to the
/// pipeline so that errors can name the offending row.
pub struct RecordReader {
    inner: arrow::csv::Reader<File>,
}

impl RecordReader {
    /// Open the configured input and validate its header
    ///
    /// Fails with [`KbError::SchemaMismatch`] before any row is decoded when
    /// the header does not list the expected columns.
    pub fn open(config: &KbConfig) -> Result<Self> {
        let path = config.input_path.as_path();
        log_operation_start("Reading indicator table", path);

        let mut file = File::open(path).map_err(|e| KbError::io(path, e))?;
        let header = read_header(&mut file, config.delimiter)?;
        validate_header(&header, config.validate_header_names)?;
        log::debug!("Header of {} validated: {} columns", path.display(), header.len());

        file.rewind().map_err(|e| KbError::io(path, e))?;
        let inner = ReaderBuilder::new(raw_input_schema())
            .with_header(true)
            .with_delimiter(config.delimiter)
            .with_batch_size(config.batch_size)
            .build(file)?;

        Ok(Self { inner })
    }
}

impl Iterator for RecordReader {
    type Item = Result<RecordBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|batch| batch.map_err(KbError::from_decode))
    }
}
