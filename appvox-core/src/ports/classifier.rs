// appvox-core/src/ports/classifier.rs

use crate::error::AppvoxError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One classification as returned by the model service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentScore {
    pub label: String,
    pub score: f64,
}

/// Tagged classifier outcome at the integration boundary. The neutral
/// substitution policy lives in [`ScoreOutcome::or_neutral`] so it is one
/// visible conversion step, not something folded into call sites.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutcome {
    Scored { label: String, score: f64 },
    Failed,
}

impl ScoreOutcome {
    /// Collapse to a usable (label, score), substituting the neutral
    /// placeholder on the failure branch.
    pub fn or_neutral(self) -> (String, f64) {
        match self {
            ScoreOutcome::Scored { label, score } => (label, score),
            ScoreOutcome::Failed => ("NEUTRAL".to_string(), 0.5),
        }
    }
}

impl From<Result<SentimentScore, AppvoxError>> for ScoreOutcome {
    fn from(res: Result<SentimentScore, AppvoxError>) -> Self {
        match res {
            Ok(s) => ScoreOutcome::Scored {
                label: s.label,
                score: s.score,
            },
            Err(_) => ScoreOutcome::Failed,
        }
    }
}

#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Model/backend name, for reporting.
    fn name(&self) -> &'static str;

    /// Maximum input length the model accepts; callers truncate to this.
    fn max_input_chars(&self) -> usize;

    async fn classify(&self, text: &str) -> Result<SentimentScore, AppvoxError>;
}
