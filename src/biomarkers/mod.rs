//! Biomarker aggregation and trend engine.
//!
//! Takes raw per-report lab results and produces one longitudinal record per
//! biomarker: grouped by canonical name, with the numeric history, a trend
//! over the last two readings, a health status and the parsed reference
//! range. Everything here is pure and synchronous; callers may shard input
//! by canonical name and merge the outputs.

pub mod aggregate;
pub mod classify;
pub mod describe;
pub mod normalize;
pub mod range;
pub mod trend;
pub mod types;

pub use aggregate::{aggregate, aggregate_with_report, DefaultBiomarkerAggregator};
pub use classify::{classify, classify_with};
pub use describe::describe;
pub use normalize::{canonical_name, same_biomarker};
pub use range::{parse_range, parse_range_with};
pub use trend::{trend, trend_with, Trend};
pub use types::*;
