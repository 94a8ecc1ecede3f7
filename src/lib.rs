//! A Rust library for labelling suicide-risk levels in tables of clinical
//! and psychometric indicators, using two rule-based decision trees.

pub mod algorithm;
pub mod async_io;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod reader;
pub mod schema;
pub mod utils;
pub mod writer;

// Re-export the most common types for easier use
// Core types
pub use config::KbConfig;
pub use error::{KbError, Result};
pub use models::{LabelSummary, Record, RiskLevel};
pub use schema::{Field, TARGET_LABEL_COLUMN};

// Classifiers
pub use algorithm::{RiskAssessment, assess, classify, classify_high, classify_moderate};

// File pipeline
pub use pipeline::{label_batch, label_records, run};
pub use reader::RecordReader;
pub use writer::{LabelWriter, OutputFormat};

// Async functionality
pub use async_io::{run_async, run_many_async};
