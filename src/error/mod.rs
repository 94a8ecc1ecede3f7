//! Error handling for the risk labeller.

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

/// Specialized error type for risk labelling runs
#[derive(Debug, Error)]
pub enum KbError {
    /// Error opening, reading, writing or renaming a file
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error decoding or encoding CSV through arrow
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error writing Parquet output
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error serializing a run summary
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input header does not match the expected columns
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// A cell is missing or not an integer after blank normalization
    #[error("Malformed input at row {row}, column '{column}' (value {value:?}): {reason}")]
    MalformedInput {
        /// 1-based data row, not counting the header
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },

    /// A data row is structurally broken (wrong number of fields)
    #[error("Malformed input row: {0}")]
    MalformedRow(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Blocking task failed to complete
    #[error("Task error: {0}")]
    Task(String),
}

impl KbError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error comes from bad input data rather than the environment
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. } | Self::MalformedRow(_))
    }

    /// Whether this error is a header/column layout problem
    #[must_use]
    pub const fn is_schema_mismatch(&self) -> bool {
        matches!(self, Self::SchemaMismatch(_))
    }

    /// Classify an arrow error raised while decoding rows
    ///
    /// Arrow reports ragged rows as CSV errors; these are input problems,
    /// everything else stays an arrow error.
    pub(crate) fn from_decode(error: ArrowError) -> Self {
        match error {
            ArrowError::CsvError(msg) | ArrowError::ParseError(msg) => Self::MalformedRow(msg),
            other => Self::Arrow(other),
        }
    }
}

/// Result type for risk labelling operations
pub type Result<T> = std::result::Result<T, KbError>;
