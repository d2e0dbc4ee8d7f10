// appvox/src/commands/score.rs
//
// USE CASE: score a clean export through the sentiment classifier.

use std::path::PathBuf;

use appvox_core::application::run_scoring;
use appvox_core::infrastructure::adapters::sentiment_http::HttpSentimentClassifier;
use appvox_core::infrastructure::config::load_run_config;

pub async fn execute(
    project_dir: PathBuf,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = load_run_config(&project_dir)?;

    let Some(classifier_config) = config.classifier else {
        anyhow::bail!(
            "❌ No 'classifier' section in the project configuration — nothing to score with."
        );
    };

    let target_dir = project_dir.join(&config.target_path);
    let input = input.unwrap_or_else(|| target_dir.join(&config.export.clean_file));
    let output = output.unwrap_or_else(|| target_dir.join(&config.export.scored_file));

    let classifier = HttpSentimentClassifier::new(
        &classifier_config.endpoint,
        classifier_config.max_input_chars,
    )?;

    if let Err(e) = run_scoring(&classifier, &input, &output).await {
        eprintln!("❌ Scoring failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
