//! Async entry points for labelling runs
//!
//! The labelling pass does blocking file IO and CPU work, so it is moved to
//! tokio's blocking pool rather than run on the async executor.

use std::collections::HashSet;

use crate::config::KbConfig;
use crate::error::{KbError, Result};
use crate::models::LabelSummary;
use crate::pipeline::run;

/// Run a labelling pass without blocking the async runtime
///
/// # Arguments
/// * `config` - Run configuration, moved onto the blocking task
///
/// # Errors
/// Returns the error of the labelling pass, or [`KbError::Task`] if the
/// blocking task panicked or was cancelled
pub async fn run_async(config: KbConfig) -> Result<LabelSummary> {
    tokio::task::spawn_blocking(move || run(&config))
        .await
        .map_err(|e| KbError::Task(format!("labelling task failed: {e}")))?
}

/// Run several independent labelling passes concurrently
///
/// Results are returned in the order of `configs`. Two passes never write
/// the same output: a config whose output path was already claimed by an
/// earlier one fails with [`KbError::Config`] and is not run.
pub async fn run_many_async(configs: Vec<KbConfig>) -> Vec<Result<LabelSummary>> {
    let mut claimed = HashSet::new();
    let handles = configs
        .into_iter()
        .map(|config| {
            if claimed.insert(config.output_path.clone()) {
                Ok(tokio::spawn(run_async(config)))
            } else {
                Err(KbError::Config(format!(
                    "output {} is already written by another run",
                    config.output_path.display()
                )))
            }
        })
        .collect::<Vec<_>>();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(match handle {
            Ok(handle) => handle
                .await
                .map_err(|e| KbError::Task(format!("labelling task failed: {e}")))
                .and_then(|result| result),
            Err(e) => Err(e),
        });
    }
    results
}
