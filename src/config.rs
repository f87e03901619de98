use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::biomarkers::BiomarkerError;

/// Engine-level constants
pub const ENGINE_NAME: &str = "biomarker-trends";
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_CRATE_NAME"))
}

/// Numeric policy used by trend, classification and range parsing.
///
/// Defaults reproduce the stock behavior; overriding them is meant for
/// experimentation, not for changing clinical meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Absolute change below which a trend is reported as stable.
    pub stable_threshold: f64,
    /// Number of most recent readings inspected when the latest result is abnormal.
    pub recent_window: usize,
    /// Readings needed inside that window to escalate to critical.
    pub critical_min_recent: usize,
    /// Readings needed for a normal result to count as optimal.
    pub optimal_min_samples: usize,
    /// Upper bound for ">x" ranges is `x * open_ended_upper_factor`.
    pub open_ended_upper_factor: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stable_threshold: 0.01,
            recent_window: 3,
            critical_min_recent: 2,
            optimal_min_samples: 3,
            open_ended_upper_factor: 2.0,
        }
    }
}

impl EngineConfig {
    /// Load a JSON config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, BiomarkerError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            BiomarkerError::ConfigLoad(path.display().to_string(), e.to_string())
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|e| {
            BiomarkerError::ConfigParse(path.display().to_string(), e.to_string())
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded engine config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BiomarkerError> {
        if !self.stable_threshold.is_finite() || self.stable_threshold < 0.0 {
            return Err(BiomarkerError::InvalidConfig(format!(
                "stable_threshold must be a non-negative number, got {}",
                self.stable_threshold
            )));
        }
        if self.recent_window == 0 {
            return Err(BiomarkerError::InvalidConfig(
                "recent_window must be at least 1".into(),
            ));
        }
        if self.critical_min_recent == 0 || self.critical_min_recent > self.recent_window {
            return Err(BiomarkerError::InvalidConfig(format!(
                "critical_min_recent must be between 1 and recent_window ({})",
                self.recent_window
            )));
        }
        if self.optimal_min_samples == 0 {
            return Err(BiomarkerError::InvalidConfig(
                "optimal_min_samples must be at least 1".into(),
            ));
        }
        if !self.open_ended_upper_factor.is_finite() || self.open_ended_upper_factor <= 0.0 {
            return Err(BiomarkerError::InvalidConfig(format!(
                "open_ended_upper_factor must be positive, got {}",
                self.open_ended_upper_factor
            )));
        }
        Ok(())
    }
}
