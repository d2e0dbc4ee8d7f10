// appvox-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- HTTP (listing service, classifier endpoint) ---
    #[error("HTTP transport error: {0}")]
    #[diagnostic(
        code(appvox::infra::http),
        help("Check network connectivity and the configured endpoint.")
    )]
    Http(#[from] reqwest::Error),

    #[error("Service returned error {status}: {body}")]
    #[diagnostic(code(appvox::infra::api))]
    Api { status: u16, body: String },

    #[error("Response parsing error: {0}")]
    #[diagnostic(code(appvox::infra::parse))]
    Parse(String),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(appvox::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- EXPORT / CSV ---
    #[error("CSV Error: {0}")]
    #[diagnostic(code(appvox::infra::csv))]
    Csv(#[from] csv::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(appvox::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Project configuration not found at '{0}'")]
    #[diagnostic(code(appvox::infra::config_missing))]
    ConfigNotFound(String),
}
