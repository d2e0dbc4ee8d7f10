// appvox-core/src/application/score.rs
//
// USE CASE: per-record sentiment hand-off. The classifier is an external
// collaborator; the only logic here is truncation and the neutral fallback,
// applied as one visible conversion per record.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::review::ScoredReview;
use crate::error::AppvoxError;
use crate::infrastructure::export::{read_reviews_csv, write_scored_csv};
use crate::ports::classifier::{ScoreOutcome, SentimentClassifier};

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoringOutcome {
    pub total: usize,
    pub scored: usize,
    pub fallbacks: usize,
    pub finished_at: String,
}

pub async fn run_scoring(
    classifier: &dyn SentimentClassifier,
    input: &Path,
    output: &Path,
) -> Result<ScoringOutcome, AppvoxError> {
    println!("🧠 Scoring sentiment with '{}'...", classifier.name());

    let records = read_reviews_csv(input)?;
    let total = records.len();
    let mut rows = Vec::with_capacity(total);
    let mut fallbacks = 0;

    for rec in records {
        let (sentiment_label, sentiment_score) = match rec
            .review
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            // No text at all: neutral with zero confidence, nothing to classify
            None => {
                fallbacks += 1;
                ("NEUTRAL".to_string(), 0.0)
            }
            Some(text) => {
                let truncated = truncate_chars(text, classifier.max_input_chars());
                let outcome: ScoreOutcome = classifier.classify(truncated).await.into();
                if matches!(outcome, ScoreOutcome::Failed) {
                    fallbacks += 1;
                    warn!(bank = %rec.bank, "Classifier failed, substituting neutral score");
                }
                outcome.or_neutral()
            }
        };

        rows.push(ScoredReview {
            base: rec,
            sentiment_label,
            sentiment_score,
        });
    }

    write_scored_csv(output, &rows)?;

    let scored = total - fallbacks;
    println!(
        "   Scored {}/{} reviews ({} neutral fallbacks) -> {}",
        scored,
        total,
        fallbacks,
        output.display()
    );

    let outcome = ScoringOutcome {
        total,
        scored,
        fallbacks,
        finished_at: chrono::Utc::now().to_rfc3339(),
    };
    crate::application::save_json(&output.with_file_name("scoring_results.json"), &outcome)?;
    Ok(outcome)
}

/// Truncate on a char boundary. The model bound is in characters, and a
/// byte-indexed slice could split a multi-byte char and panic.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
