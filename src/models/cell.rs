//! Cell normalization
//!
//! Input tables mark unanswered items with a single space. Such a cell reads
//! as `0`; any other cell must hold an integer.

use crate::error::{KbError, Result};
use crate::schema::Field;

/// Token that stands for an unanswered item
pub const BLANK_CELL: &str = " ";

/// Replace the blank token with `0`, leave anything else untouched
#[must_use]
pub fn normalize_cell(cell: &str) -> &str {
    if cell == BLANK_CELL { "0" } else { cell }
}

/// Parse a numeric cell
///
/// `row` is the 1-based data row, used only for the error message.
pub fn parse_numeric_cell(row: usize, field: Field, cell: Option<&str>) -> Result<i64> {
    let raw = cell.ok_or_else(|| missing(row, field))?;
    let value = normalize_cell(raw).trim();
    if value.is_empty() {
        return Err(missing(row, field));
    }

    value.parse::<i64>().map_err(|e| KbError::MalformedInput {
        row,
        column: field.name(),
        value: raw.to_string(),
        reason: format!("not an integer ({e})"),
    })
}

/// Read the identifier cell
///
/// The identifier is opaque and copied as-is apart from blank normalization.
pub fn parse_identifier_cell(row: usize, cell: Option<&str>) -> Result<String> {
    let raw = cell.ok_or_else(|| missing(row, Field::Identifier))?;
    if raw.is_empty() {
        return Err(missing(row, Field::Identifier));
    }
    Ok(normalize_cell(raw).to_string())
}

fn missing(row: usize, field: Field) -> KbError {
    KbError::MalformedInput {
        row,
        column: field.name(),
        value: String::new(),
        reason: "missing value".to_string(),
    }
}
