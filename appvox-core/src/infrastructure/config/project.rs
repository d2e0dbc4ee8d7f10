// appvox-core/src/infrastructure/config/project.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::infrastructure::error::InfrastructureError;

/// One collection target: a bank label and the app identifier the listing
/// service knows it by. Declared as a list so target-processing order is
/// exactly the file order.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TargetSpec {
    pub bank: String,
    pub app_id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ListingConfig {
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_country")]
    pub country: String,
    /// Per-target fetch cap. Absent means everything available.
    #[serde(default = "default_cap")]
    pub per_target_cap: Option<usize>,
    /// Pause between pages, milliseconds.
    #[serde(default)]
    pub page_sleep_ms: u64,
    /// Per-request HTTP timeout. A hung target must not block the run.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            country: default_country(),
            per_target_cap: default_cap(),
            page_sleep_ms: 0,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct VolumeConfig {
    /// Minimum acceptable cleaned record count across all targets (the KPI).
    #[validate(range(min = 1))]
    #[serde(default = "default_min_total")]
    pub min_total: usize,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            min_total: default_min_total(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClassifierConfig {
    pub endpoint: String,
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

/// File names of the tabular exports, resolved under the target path.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_raw_file")]
    pub raw_file: String,
    #[serde(default = "default_clean_file")]
    pub clean_file: String,
    #[serde(default = "default_scored_file")]
    pub scored_file: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            raw_file: default_raw_file(),
            clean_file: default_clean_file(),
            scored_file: default_scored_file(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct RunConfig {
    pub name: String,
    pub version: String,

    #[validate(length(min = 1))]
    pub targets: Vec<TargetSpec>,

    #[serde(default)]
    pub listing: ListingConfig,

    #[validate(nested)]
    #[serde(default)]
    pub volume: VolumeConfig,

    /// Optional: absent config means `score` is unavailable, not an error.
    #[serde(default)]
    pub classifier: Option<ClassifierConfig>,

    #[serde(rename = "target-path", default = "default_target_path")]
    pub target_path: String,

    #[serde(default)]
    pub export: ExportConfig,
}

fn default_lang() -> String {
    "en".to_string()
}
fn default_country() -> String {
    "us".to_string()
}
fn default_cap() -> Option<usize> {
    Some(400)
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_min_total() -> usize {
    1200
}
fn default_max_input_chars() -> usize {
    512
}
fn default_target_path() -> String {
    "target".to_string()
}
fn default_raw_file() -> String {
    "01_raw_reviews.csv".to_string()
}
fn default_clean_file() -> String {
    "clean_bank_reviews.csv".to_string()
}
fn default_scored_file() -> String {
    "scored_reviews.csv".to_string()
}

// --- LOADER ---

#[instrument(skip(project_dir))]
pub fn load_run_config(project_dir: &Path) -> Result<RunConfig, InfrastructureError> {
    // 1. Discover the main file
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project configuration");

    // 2. Parse YAML
    let content = fs::read_to_string(&config_path)?;
    let mut config: RunConfig = serde_yaml::from_str(&content)?;

    // 3. Override via environment variables (layering)
    // Lets operators do: APPVOX_MIN_VOLUME=800 appvox collect
    apply_env_overrides(&mut config);

    // 4. Structural validation (fail-secure: a run with zero targets or a
    // zero KPI floor is a misconfiguration, not a degenerate run)
    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    let candidates = ["appvox_conf.yaml", "appvox.yaml"];
    for filename in candidates {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, candidates
    )))
}

fn apply_env_overrides(config: &mut RunConfig) {
    if let Ok(val) = std::env::var("APPVOX_TARGET_PATH") {
        info!(old = ?config.target_path, new = ?val, "Overriding target path via ENV");
        config.target_path = val;
    }
    if let Ok(val) = std::env::var("APPVOX_MIN_VOLUME")
        && let Ok(parsed) = val.parse::<usize>()
    {
        info!(old = config.volume.min_total, new = parsed, "Overriding volume KPI via ENV");
        config.volume.min_total = parsed;
    }
}
