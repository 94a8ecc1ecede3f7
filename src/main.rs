use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use log::info;
use risk_kb::KbConfig;
use risk_kb::config::DEFAULT_INPUT_PATH;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let input_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH), PathBuf::from);
    let config = KbConfig::default()
        .with_input_path(input_path)
        .with_progress(std::io::stderr().is_terminal());

    info!(
        "Labelling {} into {}",
        config.input_path.display(),
        config.output_path.display()
    );

    let summary = risk_kb::run_async(config.clone()).await.with_context(|| {
        format!(
            "Failed to label {} into {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    info!("Labelled {} rows", summary.total);
    Ok(())
}
