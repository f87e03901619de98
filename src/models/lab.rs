use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One test line from one lab report, as handed over by the record store.
///
/// Text fields are kept as extracted: `value` may be non-numeric ("n/a",
/// "positive") and `reference_range` may be empty or free-form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabResult {
    pub test_name: String,
    pub value: String,
    pub unit: String,
    pub reference_range: String,
    pub is_abnormal: bool,
    pub report_date: NaiveDate,
    pub report_id: String,
    pub lab_name: String,
    pub category: String,
}

impl LabResult {
    /// Numeric reading, if the value text holds a finite number.
    pub fn numeric_value(&self) -> Option<f64> {
        self.value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}
