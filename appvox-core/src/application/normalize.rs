// appvox-core/src/application/normalize.rs
//
// USE CASE: re-run the Cleaner + Volume Validator over an existing raw
// export, without re-fetching anything.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::cleaning::{CleanReport, clean_reviews};
use crate::domain::volume::{VolumeCheck, VolumeReport};
use crate::error::AppvoxError;
use crate::infrastructure::export::{read_reviews_csv, write_reviews_csv};

#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeOutcome {
    pub clean: CleanReport,
    pub volume: VolumeReport,
    pub finished_at: String,
}

pub fn run_normalize(
    input: &Path,
    output: &Path,
    min_total: usize,
) -> Result<NormalizeOutcome, AppvoxError> {
    println!("🧹 Normalizing raw export {}...", input.display());

    let records = read_reviews_csv(input)?;
    let (cleaned, clean) = clean_reviews(records);
    write_reviews_csv(output, &cleaned)?;

    println!(
        "   {} in, {} out ({} duplicates, {} incomplete, {} undatable)",
        clean.input,
        clean.survivors,
        clean.duplicates_removed,
        clean.incomplete_dropped,
        clean.unparseable_dates
    );
    println!("   💾 Clean export -> {}", output.display());

    let volume = VolumeCheck::report(clean.survivors, min_total);
    match VolumeCheck::validate(clean.survivors, min_total) {
        Ok(()) => println!("   ✅ Volume KPI met: {} >= {}", volume.observed, volume.threshold),
        Err(e) => eprintln!("   ⚠️  {} — advisory only", e),
    }

    Ok(NormalizeOutcome {
        clean,
        volume,
        finished_at: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw.csv");
        let output = dir.path().join("clean.csv");

        std::fs::write(
            &input,
            "review,rating,date,bank,source\n\
             Great app,5,2024-01-01,CBE,X\n\
             Great app,5,2024-01-01,CBE,X\n\
             ,4,2024-02-02,Dashen,X\n\
             Fine,3,2023-03-05T14:30:00Z,Dashen,X\n",
        )
        .unwrap();

        let outcome = run_normalize(&input, &output, 2).unwrap();

        assert_eq!(outcome.clean.input, 4);
        assert_eq!(outcome.clean.duplicates_removed, 1);
        assert_eq!(outcome.clean.incomplete_dropped, 1);
        assert_eq!(outcome.clean.survivors, 2);
        assert!(outcome.volume.passed);

        let cleaned = read_reviews_csv(&output).unwrap();
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[1].date, "2023-03-05");
    }

    #[test]
    fn test_normalize_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let res = run_normalize(
            &dir.path().join("nope.csv"),
            &dir.path().join("out.csv"),
            10,
        );
        assert!(res.is_err());
    }
}
