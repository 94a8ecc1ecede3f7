//! Utilities for working with Arrow arrays.
//!
//! This module provides helpers for safely extracting typed columns and
//! cells from record batches.

use arrow::array::{Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::error::{KbError, Result};
use crate::schema::Field;

/// Downcast the column of a record batch at a field's position
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `field` - The field whose column to fetch
/// * `expected_type_name` - Type name used in the error message
///
/// # Returns
///
/// * `Ok(&A)` - The downcasted array reference
/// * `Err(KbError)` - If the column is absent or has another type
pub fn downcast_column<'a, A: Array + 'static>(
    batch: &'a RecordBatch,
    field: Field,
    expected_type_name: &str,
) -> Result<&'a A> {
    if field.index() >= batch.num_columns() {
        return Err(KbError::SchemaMismatch(format!(
            "column '{}' missing from record batch with {} columns",
            field.name(),
            batch.num_columns()
        )));
    }

    batch
        .column(field.index())
        .as_any()
        .downcast_ref::<A>()
        .ok_or_else(|| {
            KbError::SchemaMismatch(format!(
                "column '{}' is not a {expected_type_name} column",
                field.name()
            ))
        })
}

/// Text of a string cell, `None` when the cell is null
#[must_use]
pub fn string_cell(array: &StringArray, row: usize) -> Option<&str> {
    (row < array.len() && !array.is_null(row)).then(|| array.value(row))
}
