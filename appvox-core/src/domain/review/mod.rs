// appvox-core/src/domain/review/mod.rs

pub mod dates;
pub mod record;

pub use record::{CanonicalReview, ScoredReview, map_record};

/// Merge per-target record sequences into one combined sequence.
///
/// Pure union: target-processing order first, then the order inside each
/// target's batch. No dedup, no filtering — that is the Cleaner's job.
pub fn aggregate(per_target: Vec<Vec<CanonicalReview>>) -> Vec<CanonicalReview> {
    per_target.into_iter().flatten().collect()
}
