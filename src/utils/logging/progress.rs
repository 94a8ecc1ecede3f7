//! Progress reporting for labelling runs
//!
//! The input is streamed, so the total row count is unknown up front and a
//! spinner counting processed rows is used instead of a bar.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Template for the row spinner
pub const ROW_SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {pos} rows ({per_sec}) {msg}";

/// Create a spinner counting labelled rows
///
/// Returns a hidden progress bar when `visible` is false so callers can
/// update it unconditionally.
///
/// # Arguments
/// * `visible` - Whether to draw the spinner
/// * `message` - Optional message to display with the spinner
#[must_use]
pub fn batch_progress(visible: bool, message: Option<&str>) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template(ROW_SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    if let Some(msg) = message {
        pb.set_message(msg.to_string());
    }

    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Finish a progress bar with an optional completion message
pub fn finish_progress(pb: &ProgressBar, message: Option<&str>) {
    if let Some(msg) = message {
        pb.finish_with_message(msg.to_string());
    } else {
        pb.finish_and_clear();
    }
}
