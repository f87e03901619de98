use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::models::TrendDirection;

pub const NO_COMPARISON: &str = "No comparison";
pub const NO_PERCENTAGE: &str = "--";

/// Direction and display strings for the change between the last two readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// Absolute change, one decimal place.
    pub magnitude_text: String,
    /// Relative change, whole percent with a `%` suffix.
    pub percentage_text: String,
}

impl Trend {
    fn no_comparison() -> Self {
        Self {
            direction: TrendDirection::Stable,
            magnitude_text: NO_COMPARISON.into(),
            percentage_text: NO_PERCENTAGE.into(),
        }
    }
}

/// Trend over `series` with the default stability threshold.
///
/// Only the last two values are compared. Fewer than two values gives
/// `(stable, "No comparison", "--")`.
pub fn trend(series: &[f64]) -> Trend {
    trend_with(series, &EngineConfig::default())
}

pub fn trend_with(series: &[f64], config: &EngineConfig) -> Trend {
    let [.., previous, current] = series else {
        return Trend::no_comparison();
    };

    let change = current - previous;
    // A zero baseline has no meaningful relative change.
    let percentage = if *previous == 0.0 {
        0.0
    } else {
        (change / previous).abs() * 100.0
    };

    let direction = if change.abs() < config.stable_threshold {
        TrendDirection::Stable
    } else if change > 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    };

    Trend {
        direction,
        magnitude_text: format!("{:.1}", change.abs()),
        percentage_text: format!("{:.0}%", percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_series_has_no_comparison() {
        for series in [&[][..], &[42.0][..]] {
            let t = trend(series);
            assert_eq!(t.direction, TrendDirection::Stable);
            assert_eq!(t.magnitude_text, "No comparison");
            assert_eq!(t.percentage_text, "--");
        }
    }

    #[test]
    fn change_below_threshold_is_stable() {
        assert_eq!(trend(&[10.0, 10.005]).direction, TrendDirection::Stable);
        assert_eq!(trend(&[10.0, 9.995]).direction, TrendDirection::Stable);
    }

    #[test]
    fn change_above_threshold_has_direction() {
        assert_eq!(trend(&[10.0, 10.02]).direction, TrendDirection::Up);
        assert_eq!(trend(&[10.0, 9.9]).direction, TrendDirection::Down);
    }

    #[test]
    fn formats_magnitude_and_percentage() {
        let t = trend(&[14.0, 14.2]);
        assert_eq!(t.direction, TrendDirection::Up);
        assert_eq!(t.magnitude_text, "0.2");
        assert_eq!(t.percentage_text, "1%");

        let t = trend(&[200.0, 150.0]);
        assert_eq!(t.direction, TrendDirection::Down);
        assert_eq!(t.magnitude_text, "50.0");
        assert_eq!(t.percentage_text, "25%");
    }

    #[test]
    fn only_last_two_points_count() {
        assert_eq!(trend(&[1.0, 500.0, 100.0, 110.0]), trend(&[100.0, 110.0]));
    }

    #[test]
    fn zero_baseline_guards_percentage() {
        let t = trend(&[0.0, 5.0]);
        assert_eq!(t.direction, TrendDirection::Up);
        assert_eq!(t.magnitude_text, "5.0");
        assert_eq!(t.percentage_text, "0%");

        let t = trend(&[0.0, 0.0]);
        assert_eq!(t.direction, TrendDirection::Stable);
        assert_eq!(t.percentage_text, "0%");
    }

    #[test]
    fn negative_baseline_percentage_is_absolute() {
        let t = trend(&[-4.0, -2.0]);
        assert_eq!(t.direction, TrendDirection::Up);
        assert_eq!(t.percentage_text, "50%");
    }

    #[test]
    fn custom_threshold() {
        let config = EngineConfig {
            stable_threshold: 1.0,
            ..Default::default()
        };
        assert_eq!(trend_with(&[10.0, 10.5], &config).direction, TrendDirection::Stable);
        assert_eq!(trend_with(&[10.0, 11.5], &config).direction, TrendDirection::Up);
    }
}
