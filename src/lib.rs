pub mod biomarkers; // Aggregation, range parsing, trend, classification
pub mod config;
pub mod models;

pub use biomarkers::{
    aggregate, aggregate_with_report, classify, parse_range, trend, AggregationReport,
    BiomarkerAggregator, BiomarkerError, DefaultBiomarkerAggregator, Trend,
};
pub use config::EngineConfig;
pub use models::{
    AggregatedBiomarker, HealthStatus, LabResult, ReferenceRange, SeriesPoint, TrendDirection,
};

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by RUST_LOG, or the crate default.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} v{} logging initialized", config::ENGINE_NAME, config::ENGINE_VERSION);
    }
}
