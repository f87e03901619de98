use crate::config::EngineConfig;
use crate::models::HealthStatus;

/// Health status from the latest abnormal flag and the numeric history.
///
/// - abnormal latest: critical when the recent window (last 3 readings)
///   holds at least 2 readings, warning otherwise
/// - normal latest: optimal with 3 or more readings, good otherwise
///
/// The window check counts readings; it does not re-test each older
/// reading for abnormality, so any abnormal latest result with two or
/// more numeric readings is critical. Reference ranges play no part.
pub fn classify(latest_is_abnormal: bool, series: &[f64]) -> HealthStatus {
    classify_with(latest_is_abnormal, series, &EngineConfig::default())
}

pub fn classify_with(
    latest_is_abnormal: bool,
    series: &[f64],
    config: &EngineConfig,
) -> HealthStatus {
    if latest_is_abnormal {
        let window = &series[series.len().saturating_sub(config.recent_window)..];
        if window.len() >= config.critical_min_recent {
            HealthStatus::Critical
        } else {
            HealthStatus::Warning
        }
    } else if series.len() >= config.optimal_min_samples {
        HealthStatus::Optimal
    } else {
        HealthStatus::Good
    }
}
