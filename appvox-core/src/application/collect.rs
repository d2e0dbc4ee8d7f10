// appvox-core/src/application/collect.rs

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::application::save_json;
use crate::domain::cleaning::{CleanReport, clean_reviews};
use crate::domain::review::{aggregate, map_record};
use crate::domain::volume::{VolumeCheck, VolumeReport};
use crate::error::AppvoxError;
use crate::infrastructure::config::RunConfig;
use crate::infrastructure::export::write_reviews_csv;
use crate::ports::listing::{FetchOptions, ReviewListing};

/// Summary of one collection run, persisted as `collection_results.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CollectionOutcome {
    pub fetched: usize,
    pub mapped: usize,
    pub mapping_skipped: usize,
    pub clean: CleanReport,
    pub volume: VolumeReport,
    pub finished_at: String,
}

/// The full pipeline: Fetcher → Mapper (per target) → Aggregator → raw
/// export → Cleaner → clean export → Volume Validator (advisory).
///
/// Targets are processed strictly one after the other: one target is fully
/// fetched and mapped before the next begins. A fetch failure is fatal for
/// the whole run and propagates to the operator — no retry, no compensation
/// on the remaining targets. Mapping failures skip the record and count it.
pub async fn run_collection(
    listing: &dyn ReviewListing,
    project_dir: &Path,
    config: &RunConfig,
) -> Result<CollectionOutcome, AppvoxError> {
    println!("🚀 Starting review collection ({} targets)...", config.targets.len());
    let start_time = std::time::Instant::now();

    // 1. SETUP
    // Exports create the target dir themselves on first write.
    let target_dir = project_dir.join(&config.target_path);

    let opts = FetchOptions {
        lang: config.listing.lang.clone(),
        country: config.listing.country.clone(),
        cap: config.listing.per_target_cap,
        page_sleep_ms: config.listing.page_sleep_ms,
    };

    // 2. FETCH + MAP, one target at a time
    let mut per_target = Vec::with_capacity(config.targets.len());
    let mut fetched = 0;
    let mut mapping_skipped = 0;

    for target in &config.targets {
        println!("  📡 Fetching reviews for {} ({})...", target.bank, target.app_id);
        let raw = listing.fetch_all(&target.app_id, &opts).await?;
        fetched += raw.len();

        let mut batch = Vec::with_capacity(raw.len());
        for value in &raw {
            match map_record(value, &target.bank, listing.source_label()) {
                Ok(rec) => batch.push(rec),
                Err(e) => {
                    mapping_skipped += 1;
                    warn!(bank = %target.bank, error = %e, "Skipping unmappable source record");
                }
            }
        }

        println!("     {} reviews retrieved for {}", batch.len(), target.bank);
        per_target.push(batch);
    }

    // 3. AGGREGATE (pure fold) + RAW EXPORT (pre-cleaning snapshot)
    let combined = aggregate(per_target);
    let mapped = combined.len();

    let raw_path = target_dir.join(&config.export.raw_file);
    write_reviews_csv(&raw_path, &combined)?;
    println!("  💾 Raw export: {} records -> {}", mapped, raw_path.display());

    // 4. CLEAN + CLEAN EXPORT
    println!("  🧹 Cleaning combined dataset...");
    let (cleaned, clean) = clean_reviews(combined);
    println!(
        "     {} survivors ({} duplicates, {} incomplete, {} undatable)",
        clean.survivors, clean.duplicates_removed, clean.incomplete_dropped, clean.unparseable_dates
    );

    let clean_path = target_dir.join(&config.export.clean_file);
    write_reviews_csv(&clean_path, &cleaned)?;
    println!("  💾 Clean export: {} records -> {}", clean.survivors, clean_path.display());

    // 5. VOLUME KPI (advisory: partial datasets are still exported)
    let volume = VolumeCheck::report(clean.survivors, config.volume.min_total);
    match VolumeCheck::validate(clean.survivors, config.volume.min_total) {
        Ok(()) => println!("  ✅ Volume KPI met: {} >= {}", volume.observed, volume.threshold),
        Err(e) => eprintln!("  ⚠️  {} — advisory only, consider re-running collection", e),
    }

    // 6. FINALIZE
    let outcome = CollectionOutcome {
        fetched,
        mapped,
        mapping_skipped,
        clean,
        volume,
        finished_at: chrono::Utc::now().to_rfc3339(),
    };
    save_json(&target_dir.join("collection_results.json"), &outcome)?;

    println!("✨ Done in {:.2}s.", start_time.elapsed().as_secs_f64());
    Ok(outcome)
}
