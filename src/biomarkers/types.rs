use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AggregatedBiomarker, LabResult};

// ---------------------------------------------------------------------------
// BiomarkerError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum BiomarkerError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Engine config load failed ({0}): {1}")]
    ConfigLoad(String, String),

    #[error("Engine config parse failed ({0}): {1}")]
    ConfigParse(String, String),

    #[error("Invalid engine config: {0}")]
    InvalidConfig(String),
}

// ---------------------------------------------------------------------------
// Aggregation report
// ---------------------------------------------------------------------------

/// Why a raw result did not take part in grouping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Test name was empty or whitespace only.
    EmptyTestName,
}

/// A raw result excluded from aggregation, kept for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DroppedResult {
    pub report_id: String,
    pub raw_test_name: String,
    pub reason: DropReason,
}

/// Full outcome of one aggregation call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AggregationReport {
    /// One record per distinct canonical name, ascending by canonical name.
    pub biomarkers: Vec<AggregatedBiomarker>,
    pub dropped: Vec<DroppedResult>,
    /// Results that were grouped but whose value is not numeric.
    pub unparsed_values: usize,
}

impl AggregationReport {
    /// Total raw results that contributed to some biomarker.
    pub fn grouped_count(&self) -> usize {
        self.biomarkers.iter().map(|b| b.sample_count).sum()
    }
}

// ---------------------------------------------------------------------------
// BiomarkerAggregator trait
// ---------------------------------------------------------------------------

/// Merges raw lab results into one record per biomarker.
///
/// Implementations are pure: the input is only read, and every call builds
/// fresh records.
pub trait BiomarkerAggregator {
    /// Aggregate and report what was dropped along the way.
    fn aggregate_with_report(&self, results: &[LabResult]) -> AggregationReport;

    /// Aggregate, discarding diagnostics.
    fn aggregate(&self, results: &[LabResult]) -> Vec<AggregatedBiomarker> {
        self.aggregate_with_report(results).biomarkers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_reason_serializes_snake_case() {
        let json = serde_json::to_string(&DropReason::EmptyTestName).unwrap();
        assert_eq!(json, "\"empty_test_name\"");
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = BiomarkerError::InvalidEnum {
            field: "HealthStatus".into(),
            value: "great".into(),
        };
        assert_eq!(err.to_string(), "Invalid enum value for HealthStatus: great");
    }

    #[test]
    fn empty_report_has_no_grouped_results() {
        let report = AggregationReport::default();
        assert_eq!(report.grouped_count(), 0);
        assert!(report.dropped.is_empty());
    }
}
