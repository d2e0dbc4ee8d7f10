// appvox-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Persist an export atomically.
///
/// Every run rewrites its exports in full (the raw/clean/scored CSVs and
/// the JSON run artifacts), and a downstream consumer must never observe a
/// truncated file: the bytes are staged in a temporary sibling first, then
/// one rename swaps it in. Missing parent directories — a fresh project's
/// target path — are created on the way.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let target = path.as_ref();
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }

    // Staged in the target's own directory so the rename never crosses
    // filesystems
    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_ref())?;
    staged
        .persist(target)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_missing_target_dir() -> Result<()> {
        let dir = tempdir()?;
        let export = dir.path().join("target").join("01_raw_reviews.csv");

        atomic_write(&export, "review,rating,date,bank,source\n")?;

        assert!(export.exists());
        assert_eq!(
            fs::read_to_string(export)?,
            "review,rating,date,bank,source\n"
        );
        Ok(())
    }

    #[test]
    fn test_rerun_replaces_previous_export_completely() -> Result<()> {
        let dir = tempdir()?;
        let export = dir.path().join("clean_bank_reviews.csv");

        atomic_write(&export, "review,rating,date,bank,source\nold,1,2024-01-01,CBE,X\n")?;
        atomic_write(&export, "review,rating,date,bank,source\n")?;

        assert_eq!(
            fs::read_to_string(export)?,
            "review,rating,date,bank,source\n"
        );
        Ok(())
    }

    #[test]
    fn test_no_staging_leftovers_beside_the_export() -> Result<()> {
        let dir = tempdir()?;
        let export = dir.path().join("scored_reviews.csv");

        atomic_write(&export, "done")?;

        let entries: Vec<_> = fs::read_dir(dir.path())?
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["scored_reviews.csv"]);
        Ok(())
    }
}
