// appvox-core/src/infrastructure/config/mod.rs

pub mod project;

pub use project::{
    ClassifierConfig, ExportConfig, ListingConfig, RunConfig, TargetSpec, VolumeConfig,
    load_run_config,
};
