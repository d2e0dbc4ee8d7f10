// appvox-core/src/domain/cleaning.rs

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::review::CanonicalReview;
use crate::domain::review::dates::canonical_date;

/// Counters for everything the Cleaner absorbed. Dropped records are
/// reporting data, never errors.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub input: usize,
    pub duplicates_removed: usize,
    pub incomplete_dropped: usize,
    pub unparseable_dates: usize,
    pub survivors: usize,
}

/// Run the three cleaning steps, in this fixed order:
///
/// 1. Deduplicate on `(review, date, bank)`, first occurrence in aggregate
///    order wins. The key uses the canonical form of the date where one can
///    be computed, so the same physical review reaching us through two fetch
///    channels with different timestamp representations still collapses —
///    and re-cleaning already-clean output removes nothing.
/// 2. Drop records missing `review` or `rating`.
/// 3. Rewrite each survivor's `date` to canonical `YYYY-MM-DD`, in place.
///    A record whose date cannot be normalized at all is dropped and
///    counted.
///
/// Survivor order equals the relative input order.
pub fn clean_reviews(records: Vec<CanonicalReview>) -> (Vec<CanonicalReview>, CleanReport) {
    let mut report = CleanReport {
        input: records.len(),
        ..Default::default()
    };

    // 1. Deduplicate
    let mut seen: HashSet<(Option<String>, String, String)> = HashSet::new();
    let mut unique = Vec::with_capacity(records.len());
    for rec in records {
        let date_key = canonical_date(&rec.date).unwrap_or_else(|_| rec.date.clone());
        let key = (rec.review.clone(), date_key, rec.bank.clone());
        if seen.insert(key) {
            unique.push(rec);
        } else {
            report.duplicates_removed += 1;
        }
    }

    // 2. Drop incomplete, 3. Normalize dates
    let mut survivors = Vec::with_capacity(unique.len());
    for mut rec in unique {
        if !rec.has_required_fields() {
            report.incomplete_dropped += 1;
            continue;
        }
        match canonical_date(&rec.date) {
            Ok(date) => {
                rec.date = date;
                survivors.push(rec);
            }
            Err(_) => report.unparseable_dates += 1,
        }
    }

    report.survivors = survivors.len();
    (survivors, report)
}
