//! Shared utilities for labelling runs
//!
//! Logging helpers, progress reporting and Arrow array access.

pub mod arrow;
pub mod logging;

// Re-export commonly used functions for convenience
pub use logging::{log_operation_complete, log_operation_start, log_warning};
