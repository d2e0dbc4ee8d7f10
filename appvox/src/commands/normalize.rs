// appvox/src/commands/normalize.rs
//
// USE CASE: re-clean an existing raw export.

use std::path::PathBuf;

use appvox_core::application::run_normalize;
use appvox_core::infrastructure::config::load_run_config;

pub fn execute(
    project_dir: PathBuf,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = load_run_config(&project_dir)?;
    let target_dir = project_dir.join(&config.target_path);

    let input = input.unwrap_or_else(|| target_dir.join(&config.export.raw_file));
    let output = output.unwrap_or_else(|| target_dir.join(&config.export.clean_file));

    if let Err(e) = run_normalize(&input, &output, config.volume.min_total) {
        eprintln!("❌ Normalize failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
