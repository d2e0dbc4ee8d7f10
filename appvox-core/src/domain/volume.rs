// appvox-core/src/domain/volume.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VolumeError {
    #[error("Collected volume below KPI floor: {observed} records (minimum: {threshold})")]
    BelowThreshold { observed: usize, threshold: usize },
}

/// Advisory result persisted with the run artifacts. The check never halts
/// the pipeline: partial datasets are still exported and usable, the KPI
/// only signals the operator to re-run collection.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct VolumeReport {
    pub passed: bool,
    pub observed: usize,
    pub threshold: usize,
}

pub struct VolumeCheck;

impl VolumeCheck {
    /// Compare the cleaned record count against the configured minimum.
    pub fn validate(observed: usize, threshold: usize) -> Result<(), VolumeError> {
        if observed < threshold {
            return Err(VolumeError::BelowThreshold {
                observed,
                threshold,
            });
        }
        Ok(())
    }

    pub fn report(observed: usize, threshold: usize) -> VolumeReport {
        VolumeReport {
            passed: Self::validate(observed, threshold).is_ok(),
            observed,
            threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_short_of_threshold_fails() {
        let res = VolumeCheck::validate(1199, 1200);
        assert!(matches!(
            res,
            Err(VolumeError::BelowThreshold { observed: 1199, threshold: 1200 })
        ));
    }

    #[test]
    fn test_exactly_at_threshold_passes() {
        assert!(VolumeCheck::validate(1200, 1200).is_ok());
    }

    #[test]
    fn test_report_is_advisory_data() {
        let report = VolumeCheck::report(800, 1200);
        assert!(!report.passed);
        assert_eq!(report.observed, 800);
        assert_eq!(report.threshold, 1200);

        let report = VolumeCheck::report(1500, 1200);
        assert!(report.passed);
    }
}
