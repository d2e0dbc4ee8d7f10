// appvox/src/commands/collect.rs
//
// USE CASE: run the full collection pipeline.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use appvox_core::application::run_collection;
use appvox_core::infrastructure::adapters::play_listing::PlayStoreListing;
use appvox_core::infrastructure::config::load_run_config;

pub async fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_run_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    println!("   Project: {} (v{})", config.name, config.version);

    // B. Instantiate the listing adapter
    // Here is where dependency injection happens: the application layer only
    // sees the ReviewListing port.
    let listing = PlayStoreListing::new(Duration::from_secs(config.listing.timeout_secs))
        .context("Failed to initialize the review-listing HTTP client")?;

    // C. Run the Pipeline (Application Layer)
    let result = run_collection(&listing, &project_dir, &config).await;

    match result {
        Ok(outcome) => {
            if outcome.volume.passed {
                println!("\n✨ SUCCESS! Collection finished in {:.2?}", start.elapsed());
            } else {
                println!(
                    "\n⚠️  Collection finished in {:.2?} with the volume KPI missed ({}/{})",
                    start.elapsed(),
                    outcome.volume.observed,
                    outcome.volume.threshold
                );
            }
        }
        Err(e) => {
            eprintln!("\n💥 CRITICAL PIPELINE ERROR: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
