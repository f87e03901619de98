use crate::biomarkers::BiomarkerError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = BiomarkerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(BiomarkerError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(HealthStatus {
    Optimal => "optimal",
    Good => "good",
    Warning => "warning",
    Critical => "critical",
});

str_enum!(TrendDirection {
    Up => "up",
    Down => "down",
    Stable => "stable",
});

impl HealthStatus {
    /// 0 for optimal up to 3 for critical. Used to sort most severe first.
    pub fn severity_rank(&self) -> u8 {
        match self {
            Self::Optimal => 0,
            Self::Good => 1,
            Self::Warning => 2,
            Self::Critical => 3,
        }
    }

    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::Warning | Self::Critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn health_status_round_trip() {
        for (variant, s) in [
            (HealthStatus::Optimal, "optimal"),
            (HealthStatus::Good, "good"),
            (HealthStatus::Warning, "warning"),
            (HealthStatus::Critical, "critical"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(HealthStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn trend_direction_round_trip() {
        for (variant, s) in [
            (TrendDirection::Up, "up"),
            (TrendDirection::Down, "down"),
            (TrendDirection::Stable, "stable"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(TrendDirection::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(HealthStatus::from_str("excellent").is_err());
        assert!(TrendDirection::from_str("").is_err());
        assert!(HealthStatus::from_str("Optimal").is_err());
    }

    #[test]
    fn serde_matches_as_str() {
        let json = serde_json::to_string(&HealthStatus::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let parsed: TrendDirection = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(parsed, TrendDirection::Down);
    }

    #[test]
    fn severity_rank_orders_statuses() {
        assert!(HealthStatus::Optimal.severity_rank() < HealthStatus::Good.severity_rank());
        assert!(HealthStatus::Good.severity_rank() < HealthStatus::Warning.severity_rank());
        assert!(HealthStatus::Warning.severity_rank() < HealthStatus::Critical.severity_rank());
    }

    #[test]
    fn attention_only_for_warning_and_critical() {
        assert!(!HealthStatus::Optimal.needs_attention());
        assert!(!HealthStatus::Good.needs_attention());
        assert!(HealthStatus::Warning.needs_attention());
        assert!(HealthStatus::Critical.needs_attention());
    }
}
