// appvox-core/src/application/mod.rs

pub mod collect;
pub mod normalize;
pub mod score;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use appvox_core::application::{run_collection, run_normalize, run_scoring};`
// without knowing the internal file layout.

pub use collect::{CollectionOutcome, run_collection};
pub use normalize::{NormalizeOutcome, run_normalize};
pub use score::{ScoringOutcome, run_scoring};

use std::path::Path;

use crate::error::AppvoxError;

pub(crate) fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), AppvoxError> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| AppvoxError::InternalError(format!("Serialization: {}", e)))?;
    crate::infrastructure::fs::atomic_write(path, content)?;
    Ok(())
}
