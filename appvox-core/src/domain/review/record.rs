// appvox-core/src/domain/review/record.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::DomainError;

/// The normalized unit of the pipeline.
///
/// Created by [`map_record`] from one raw listing-service record, possibly
/// discarded by the Cleaner, immutable once it survives cleaning (except the
/// single in-place date rewrite the Cleaner performs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalReview {
    /// Free text; `None` or blank means missing.
    pub review: Option<String>,
    /// Integer score, 1..5 expected. Not range-checked here.
    pub rating: Option<i64>,
    /// Source timestamp representation until cleaning, `YYYY-MM-DD` after.
    pub date: String,
    /// Target label (the bank the review concerns).
    pub bank: String,
    /// Origin-service label, constant per fetch channel.
    pub source: String,
}

impl CanonicalReview {
    /// Mandatory downstream fields: text for scoring, rating for reporting.
    pub fn has_required_fields(&self) -> bool {
        let has_text = self.review.as_deref().is_some_and(|s| !s.trim().is_empty());
        has_text && self.rating.is_some()
    }
}

/// A cleaned record with its classification attached — the row shape of the
/// scored export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    pub base: CanonicalReview,
    pub sentiment_label: String,
    pub sentiment_score: f64,
}

/// Map one heterogeneous source record into the canonical shape.
///
/// The source shape is a capability contract, not a concrete type: fields
/// are retrieved by name. An absent key is a contract violation and fails
/// explicitly; a key present but `null` maps to a missing value and still
/// produces a record — validation is the Cleaner's job.
pub fn map_record(raw: &Value, bank: &str, source: &str) -> Result<CanonicalReview, DomainError> {
    let review = match field(raw, "content")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => {
            return Err(DomainError::SourceFieldType {
                field: "content".to_string(),
                found: json_kind(other),
            });
        }
    };

    let rating = match field(raw, "score")? {
        Value::Null => None,
        v => match v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)) {
            Some(n) => Some(n),
            None => {
                return Err(DomainError::SourceFieldType {
                    field: "score".to_string(),
                    found: json_kind(v),
                });
            }
        },
    };

    // Timestamps travel verbatim; the Cleaner canonicalizes them later.
    let date = match field(raw, "at")? {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        v if v.is_number() => v.to_string(),
        other => {
            return Err(DomainError::SourceFieldType {
                field: "at".to_string(),
                found: json_kind(other),
            });
        }
    };

    Ok(CanonicalReview {
        review,
        rating,
        date,
        bank: bank.to_string(),
        source: source.to_string(),
    })
}

fn field<'a>(raw: &'a Value, name: &str) -> Result<&'a Value, DomainError> {
    raw.get(name).ok_or_else(|| DomainError::MissingSourceField {
        field: name.to_string(),
    })
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_record_full() {
        let raw = json!({
            "content": "Great app",
            "score": 5,
            "at": "2024-01-01T08:30:00Z",
            "userName": "someone",
            "thumbsUpCount": 12
        });

        let rec = map_record(&raw, "CBE", "Google Play Store").unwrap();
        assert_eq!(rec.review.as_deref(), Some("Great app"));
        assert_eq!(rec.rating, Some(5));
        assert_eq!(rec.date, "2024-01-01T08:30:00Z");
        assert_eq!(rec.bank, "CBE");
        assert_eq!(rec.source, "Google Play Store");
    }

    #[test]
    fn test_map_record_null_fields_still_produce_a_record() {
        let raw = json!({ "content": null, "score": null, "at": null });

        let rec = map_record(&raw, "Dashen", "Google Play Store").unwrap();
        assert_eq!(rec.review, None);
        assert_eq!(rec.rating, None);
        assert_eq!(rec.date, "");
        assert!(!rec.has_required_fields());
    }

    #[test]
    fn test_map_record_absent_key_fails_explicitly() {
        let raw = json!({ "content": "Fine", "score": 3 });

        let err = map_record(&raw, "CBE", "Google Play Store").unwrap_err();
        assert!(matches!(err, DomainError::MissingSourceField { field } if field == "at"));
    }

    #[test]
    fn test_map_record_float_score_truncates() {
        let raw = json!({ "content": "ok", "score": 4.0, "at": 1678026600 });
        let rec = map_record(&raw, "CBE", "Google Play Store").unwrap();
        assert_eq!(rec.rating, Some(4));
        assert_eq!(rec.date, "1678026600");
    }

    #[test]
    fn test_map_record_bad_score_type() {
        let raw = json!({ "content": "ok", "score": "five", "at": "2024-01-01" });
        let err = map_record(&raw, "CBE", "Google Play Store").unwrap_err();
        assert!(matches!(
            err,
            DomainError::SourceFieldType { field, found: "string" } if field == "score"
        ));
    }

    #[test]
    fn test_empty_review_counts_as_missing() {
        let rec = CanonicalReview {
            review: Some("   ".to_string()),
            rating: Some(4),
            date: "2024-02-02".to_string(),
            bank: "Dashen".to_string(),
            source: "X".to_string(),
        };
        assert!(!rec.has_required_fields());
    }
}
