use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{HealthStatus, TrendDirection};

/// Namespace for deterministic biomarker ids (UUID v5 over the canonical name).
const BIOMARKER_NAMESPACE: Uuid = Uuid::from_u128(0x6c0f_3d2e_9a41_4b7e_8f15_2d7c_90ab_e413);

/// One numeric reading in a biomarker's history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Numeric bounds parsed from a free-text reference range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
}

impl ReferenceRange {
    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One biomarker merged across every report it appears in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatedBiomarker {
    /// Trimmed, lower-cased test name. Grouping key.
    pub canonical_name: String,
    /// Test name as written on the most recent report.
    pub display_name: String,
    pub description: String,
    pub current_value_text: String,
    pub unit: String,
    pub reference_range_text: String,
    /// Parsed form of `reference_range_text`, for chart shading only.
    pub reference_range: Option<ReferenceRange>,
    pub category: String,
    pub latest_date: NaiveDate,
    pub latest_is_abnormal: bool,
    /// Numeric readings only, oldest first.
    pub historical_series: Vec<SeriesPoint>,
    pub health_status: HealthStatus,
    pub trend_direction: TrendDirection,
    pub trend_magnitude_text: String,
    pub trend_percentage_text: String,
    /// Every raw result in the group, numeric or not.
    pub sample_count: usize,
}

impl AggregatedBiomarker {
    /// Deterministic id derived from the canonical name.
    ///
    /// Records are rebuilt on every aggregation call; this gives callers a
    /// key that stays the same across calls for the same biomarker.
    pub fn stable_id(&self) -> Uuid {
        Uuid::new_v5(&BIOMARKER_NAMESPACE, self.canonical_name.as_bytes())
    }

    /// Values of the historical series, in date order.
    pub fn series_values(&self) -> Vec<f64> {
        self.historical_series.iter().map(|p| p.value).collect()
    }

    /// Lowest and highest reading in the series.
    pub fn series_bounds(&self) -> Option<(f64, f64)> {
        let mut values = self.historical_series.iter().map(|p| p.value);
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
