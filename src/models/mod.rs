//! Domain models for risk labelling
//!
//! This module contains the typed record read from each input row, the risk
//! levels the classifiers assign, and the per-run label summary.

pub mod cell;
pub mod record;
pub mod risk;
pub mod summary;

// Re-export commonly used types
pub use record::Record;
pub use risk::RiskLevel;
pub use summary::LabelSummary;
