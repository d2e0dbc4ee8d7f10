// appvox-core/src/infrastructure/export.rs

use std::path::Path;

use crate::domain::review::{CanonicalReview, ScoredReview};
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

/// Export contract: this exact column set, in this exact order.
pub const EXPORT_HEADER: [&str; 5] = ["review", "rating", "date", "bank", "source"];

pub const SCORED_HEADER: [&str; 7] = [
    "review",
    "rating",
    "date",
    "bank",
    "source",
    "sentiment_label",
    "sentiment_score",
];

/// Write records as UTF-8 comma-separated rows, no index column. Used for
/// both the raw (pre-cleaning) and the clean export — same row shape.
pub fn write_reviews_csv(
    path: &Path,
    records: &[CanonicalReview],
) -> Result<(), InfrastructureError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;

    for rec in records {
        writer.write_record(&[
            rec.review.clone().unwrap_or_default(),
            rec.rating.map(|r| r.to_string()).unwrap_or_default(),
            rec.date.clone(),
            rec.bank.clone(),
            rec.source.clone(),
        ])?;
    }

    atomic_write(path, take_buffer(writer)?)?;
    Ok(())
}

pub fn write_scored_csv(path: &Path, rows: &[ScoredReview]) -> Result<(), InfrastructureError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(SCORED_HEADER)?;

    for row in rows {
        writer.write_record(&[
            row.base.review.clone().unwrap_or_default(),
            row.base.rating.map(|r| r.to_string()).unwrap_or_default(),
            row.base.date.clone(),
            row.base.bank.clone(),
            row.base.source.clone(),
            row.sentiment_label.clone(),
            row.sentiment_score.to_string(),
        ])?;
    }

    atomic_write(path, take_buffer(writer)?)?;
    Ok(())
}

/// Read an export back (raw exports for `normalize`, clean exports for
/// `score`). Columns are looked up by header name; a header missing one of
/// the contract columns is a parse error, not a silent skip.
pub fn read_reviews_csv(path: &Path) -> Result<Vec<CanonicalReview>, InfrastructureError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let position = |name: &str| -> Result<usize, InfrastructureError> {
        headers.iter().position(|h| h == name).ok_or_else(|| {
            InfrastructureError::Parse(format!("missing column '{}' in {:?}", name, path))
        })
    };
    let idx_review = position("review")?;
    let idx_rating = position("rating")?;
    let idx_date = position("date")?;
    let idx_bank = position("bank")?;
    let idx_source = position("source")?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let cell = |idx: usize| row.get(idx).unwrap_or_default().to_string();

        let review = cell(idx_review);
        records.push(CanonicalReview {
            review: if review.is_empty() { None } else { Some(review) },
            rating: row
                .get(idx_rating)
                .and_then(|s| s.parse::<i64>().ok()),
            date: cell(idx_date),
            bank: cell(idx_bank),
            source: cell(idx_source),
        });
    }

    Ok(records)
}

fn take_buffer(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, InfrastructureError> {
    writer
        .into_inner()
        .map_err(|e| InfrastructureError::Io(std::io::Error::other(e.to_string())))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    fn sample() -> Vec<CanonicalReview> {
        vec![
            CanonicalReview {
                review: Some("Great app".to_string()),
                rating: Some(5),
                date: "2024-01-01".to_string(),
                bank: "CBE".to_string(),
                source: "Google Play Store".to_string(),
            },
            CanonicalReview {
                review: None,
                rating: None,
                date: "2024-02-02".to_string(),
                bank: "Dashen".to_string(),
                source: "Google Play Store".to_string(),
            },
        ]
    }

    #[test]
    fn test_header_row_matches_contract() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        write_reviews_csv(&path, &sample())?;

        let content = std::fs::read_to_string(&path)?;
        let first_line = content.lines().next().unwrap();
        assert_eq!(first_line, "review,rating,date,bank,source");
        Ok(())
    }

    #[test]
    fn test_round_trip_preserves_records_and_missing_fields() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        let records = sample();

        write_reviews_csv(&path, &records)?;
        let back = read_reviews_csv(&path)?;

        assert_eq!(back, records);
        Ok(())
    }

    #[test]
    fn test_commas_and_quotes_in_review_text_survive() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        let records = vec![CanonicalReview {
            review: Some("Slow, buggy, and it \"crashes\"\noften".to_string()),
            rating: Some(1),
            date: "2024-03-03".to_string(),
            bank: "BOA".to_string(),
            source: "Google Play Store".to_string(),
        }];

        write_reviews_csv(&path, &records)?;
        let back = read_reviews_csv(&path)?;
        assert_eq!(back, records);
        Ok(())
    }

    #[test]
    fn test_missing_contract_column_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "review,rating,date\nGreat,5,2024-01-01\n")?;

        let err = read_reviews_csv(&path).unwrap_err();
        assert!(matches!(err, InfrastructureError::Parse(_)));
        Ok(())
    }

    #[test]
    fn test_scored_export_appends_sentiment_columns() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("scored.csv");
        let rows = vec![ScoredReview {
            base: sample().remove(0),
            sentiment_label: "POSITIVE".to_string(),
            sentiment_score: 0.98,
        }];

        write_scored_csv(&path, &rows)?;
        let content = std::fs::read_to_string(&path)?;
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "review,rating,date,bank,source,sentiment_label,sentiment_score"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Great app,5,2024-01-01,CBE,Google Play Store,POSITIVE,0.98"
        );
        Ok(())
    }
}
