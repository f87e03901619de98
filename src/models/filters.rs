use serde::{Deserialize, Serialize};

use super::biomarker::AggregatedBiomarker;
use super::enums::HealthStatus;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BiomarkerFilter {
    /// Case-insensitive substring over display name and canonical name.
    pub query: Option<String>,
    pub category: Option<String>,
    pub status: Option<HealthStatus>,
    pub abnormal_only: bool,
}

impl BiomarkerFilter {
    pub fn matches(&self, biomarker: &AggregatedBiomarker) -> bool {
        if let Some(ref query) = self.query {
            let needle = query.trim().to_lowercase();
            if !needle.is_empty()
                && !biomarker.canonical_name.contains(&needle)
                && !biomarker.display_name.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if !biomarker.category.eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if biomarker.health_status != status {
                return false;
            }
        }
        if self.abnormal_only && !biomarker.latest_is_abnormal {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomarkerSort {
    /// Most recent result first.
    #[default]
    Date,
    Name,
    /// Most severe status first.
    Status,
    Category,
}

/// Keeps only the biomarkers matching `filter`, preserving order.
pub fn apply_filter(
    biomarkers: Vec<AggregatedBiomarker>,
    filter: &BiomarkerFilter,
) -> Vec<AggregatedBiomarker> {
    biomarkers.into_iter().filter(|b| filter.matches(b)).collect()
}

/// Sorts in place. Ties always fall back to canonical name so the
/// resulting order is deterministic.
pub fn sort_biomarkers(biomarkers: &mut [AggregatedBiomarker], sort: BiomarkerSort) {
    match sort {
        BiomarkerSort::Date => biomarkers.sort_by(|a, b| {
            b.latest_date
                .cmp(&a.latest_date)
                .then_with(|| a.canonical_name.cmp(&b.canonical_name))
        }),
        BiomarkerSort::Name => biomarkers.sort_by(|a, b| {
            a.display_name
                .to_lowercase()
                .cmp(&b.display_name.to_lowercase())
                .then_with(|| a.canonical_name.cmp(&b.canonical_name))
        }),
        BiomarkerSort::Status => biomarkers.sort_by(|a, b| {
            b.health_status
                .severity_rank()
                .cmp(&a.health_status.severity_rank())
                .then_with(|| a.canonical_name.cmp(&b.canonical_name))
        }),
        BiomarkerSort::Category => biomarkers.sort_by(|a, b| {
            a.category
                .to_lowercase()
                .cmp(&b.category.to_lowercase())
                .then_with(|| a.canonical_name.cmp(&b.canonical_name))
        }),
    }
}

/// Per-status counts for dashboard badges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub optimal: usize,
    pub good: usize,
    pub warning: usize,
    pub critical: usize,
}

impl StatusCounts {
    pub fn from_biomarkers(biomarkers: &[AggregatedBiomarker]) -> Self {
        let mut counts = Self::default();
        for b in biomarkers {
            match b.health_status {
                HealthStatus::Optimal => counts.optimal += 1,
                HealthStatus::Good => counts.good += 1,
                HealthStatus::Warning => counts.warning += 1,
                HealthStatus::Critical => counts.critical += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.optimal + self.good + self.warning + self.critical
    }

    pub fn needing_attention(&self) -> usize {
        self.warning + self.critical
    }
}
