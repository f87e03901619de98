use std::collections::BTreeMap;
use std::time::Instant;

use crate::config::EngineConfig;
use crate::models::{AggregatedBiomarker, LabResult, SeriesPoint};

use super::classify::classify_with;
use super::describe::describe;
use super::normalize::canonical_name;
use super::range::parse_range_with;
use super::trend::trend_with;
use super::types::{AggregationReport, BiomarkerAggregator, DropReason, DroppedResult};

/// Default implementation of the aggregator.
/// Groups by canonical name, then runs range parsing, trend and
/// classification over each group.
#[derive(Debug, Clone, Default)]
pub struct DefaultBiomarkerAggregator {
    config: EngineConfig,
}

impl DefaultBiomarkerAggregator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the record for one group. `members` must be non-empty.
    fn build_record(
        &self,
        canonical: String,
        mut members: Vec<&LabResult>,
    ) -> Option<AggregatedBiomarker> {
        // Stable: results sharing a date keep input order, so the last one
        // supplied for the newest date is the latest.
        members.sort_by_key(|r| r.report_date);
        let latest = *members.last()?;

        let historical_series: Vec<SeriesPoint> = members
            .iter()
            .filter_map(|r| {
                r.numeric_value().map(|value| SeriesPoint {
                    date: r.report_date,
                    value,
                })
            })
            .collect();
        let values: Vec<f64> = historical_series.iter().map(|p| p.value).collect();

        let trend = trend_with(&values, &self.config);
        let health_status = classify_with(latest.is_abnormal, &values, &self.config);

        Some(AggregatedBiomarker {
            description: describe(&canonical).to_string(),
            canonical_name: canonical,
            display_name: latest.test_name.trim().to_string(),
            current_value_text: latest.value.clone(),
            unit: latest.unit.clone(),
            reference_range_text: latest.reference_range.clone(),
            reference_range: parse_range_with(&latest.reference_range, &self.config),
            category: latest.category.clone(),
            latest_date: latest.report_date,
            latest_is_abnormal: latest.is_abnormal,
            historical_series,
            health_status,
            trend_direction: trend.direction,
            trend_magnitude_text: trend.magnitude_text,
            trend_percentage_text: trend.percentage_text,
            sample_count: members.len(),
        })
    }
}

impl BiomarkerAggregator for DefaultBiomarkerAggregator {
    fn aggregate_with_report(&self, results: &[LabResult]) -> AggregationReport {
        let start = Instant::now();

        let mut groups: BTreeMap<String, Vec<&LabResult>> = BTreeMap::new();
        let mut dropped = Vec::new();

        for result in results {
            match canonical_name(&result.test_name) {
                Some(key) => groups.entry(key).or_default().push(result),
                None => {
                    tracing::warn!(
                        report_id = %result.report_id,
                        lab = %result.lab_name,
                        "Skipping lab result with empty test name"
                    );
                    dropped.push(DroppedResult {
                        report_id: result.report_id.clone(),
                        raw_test_name: result.test_name.clone(),
                        reason: DropReason::EmptyTestName,
                    });
                }
            }
        }

        let biomarkers: Vec<AggregatedBiomarker> = groups
            .into_iter()
            .filter_map(|(canonical, members)| self.build_record(canonical, members))
            .collect();

        let unparsed_values: usize = biomarkers
            .iter()
            .map(|b| b.sample_count - b.historical_series.len())
            .sum();

        tracing::debug!(
            input = results.len(),
            biomarkers = biomarkers.len(),
            dropped = dropped.len(),
            unparsed_values,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Biomarker aggregation complete"
        );

        AggregationReport {
            biomarkers,
            dropped,
            unparsed_values,
        }
    }
}

/// Aggregate with the default policy.
pub fn aggregate(results: &[LabResult]) -> Vec<AggregatedBiomarker> {
    DefaultBiomarkerAggregator::default().aggregate(results)
}

/// Aggregate with the default policy, keeping diagnostics.
pub fn aggregate_with_report(results: &[LabResult]) -> AggregationReport {
    DefaultBiomarkerAggregator::default().aggregate_with_report(results)
}
