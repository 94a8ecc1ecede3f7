//! Labelling pipeline
//!
//! Reads the input table batch by batch, turns each row into a [`Record`],
//! labels it with both decision trees and writes the rows back out with the
//! `target_label` column appended. Row order is preserved throughout.

use std::sync::Arc;
use std::time::Instant;

use arrow::array::{ArrayRef, Int64Array, StringArray, UInt8Array};
use arrow::record_batch::RecordBatch;
use rayon::prelude::*;

use crate::algorithm::classify;
use crate::config::KbConfig;
use crate::error::Result;
use crate::models::{LabelSummary, Record, RiskLevel};
use crate::reader::RecordReader;
use crate::schema::{FIELD_COUNT, Field, output_schema};
use crate::utils::arrow::{downcast_column, string_cell};
use crate::utils::logging::{batch_progress, finish_progress};
use crate::utils::{log_operation_complete, log_warning};
use crate::writer::LabelWriter;

/// Parse the rows of a raw text batch into records
///
/// `first_row` is the 1-based data row of the batch's first row.
pub fn records_from_batch(batch: &RecordBatch, first_row: usize) -> Result<Vec<Record>> {
    let columns = Field::ALL
        .iter()
        .map(|field| downcast_column::<StringArray>(batch, *field, "Utf8"))
        .collect::<Result<Vec<_>>>()?;

    let mut cells: Vec<Option<&str>> = Vec::with_capacity(FIELD_COUNT);
    (0..batch.num_rows())
        .map(|idx| {
            cells.clear();
            cells.extend(columns.iter().map(|column| string_cell(column, idx)));
            Record::from_cells(first_row + idx, &cells)
        })
        .collect()
}

/// Label records in input order
///
/// With `parallel` set the records are classified on the rayon pool; the
/// returned labels keep the order of `records` either way.
#[must_use]
pub fn label_records(records: &[Record], parallel: bool) -> Vec<RiskLevel> {
    if parallel {
        records.par_iter().map(classify).collect()
    } else {
        records.iter().map(classify).collect()
    }
}

/// Build the output batch for labelled records
pub fn output_batch(records: &[Record], labels: &[RiskLevel]) -> Result<RecordBatch> {
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(FIELD_COUNT + 1);
    columns.push(Arc::new(StringArray::from_iter_values(
        records.iter().map(|record| record.identifier.as_str()),
    )));
    for field in Field::numeric() {
        columns.push(Arc::new(Int64Array::from_iter_values(
            records.iter().map(|record| record.value(field).unwrap_or_default()),
        )));
    }
    columns.push(Arc::new(UInt8Array::from_iter_values(
        labels.iter().map(|label| label.as_u8()),
    )));

    Ok(RecordBatch::try_new(output_schema(), columns)?)
}

/// Label one raw batch
///
/// Returns the output batch together with the labels it carries.
pub fn label_batch(
    batch: &RecordBatch,
    first_row: usize,
    parallel: bool,
) -> Result<(RecordBatch, Vec<RiskLevel>)> {
    let records = records_from_batch(batch, first_row)?;
    let labels = label_records(&records, parallel);
    let output = output_batch(&records, &labels)?;
    Ok((output, labels))
}

/// Run a complete labelling pass from input file to output file
///
/// Nothing is written to the output path unless every row was labelled.
pub fn run(config: &KbConfig) -> Result<LabelSummary> {
    config.validate()?;
    let start = Instant::now();

    let reader = RecordReader::open(config)?;
    let mut writer = LabelWriter::create(&config.output_path, config.delimiter)?;
    let progress = batch_progress(config.show_progress, Some("labelling"));
    let mut summary = LabelSummary::default();

    for batch in reader {
        let batch = batch?;
        let (output, labels) = label_batch(&batch, summary.total + 1, config.parallel)?;
        writer.write(&output)?;

        let batch_summary: LabelSummary = labels.into_iter().collect();
        summary.merge(&batch_summary);
        progress.inc(batch_summary.total as u64);
        log::debug!(
            "Labelled batch of {} rows ({} high, {} moderate)",
            batch_summary.total,
            batch_summary.high,
            batch_summary.moderate
        );
    }

    let written = writer.finish()?;
    finish_progress(&progress, None);

    if written == 0 {
        log_warning("Input table has no data rows", Some(config.input_path.as_path()));
    }
    log_operation_complete("labelled", &config.output_path, written, Some(start.elapsed()));
    log::info!(
        "Labels: {} no risk, {} moderate, {} high",
        summary.no_risk,
        summary.moderate,
        summary.high
    );

    Ok(summary)
}
