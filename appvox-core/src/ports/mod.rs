// appvox-core/src/ports/mod.rs

pub mod classifier;
pub mod listing;

pub use classifier::{ScoreOutcome, SentimentClassifier, SentimentScore};
pub use listing::{FetchOptions, ReviewListing};
