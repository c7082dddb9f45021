pub mod climate_band;
pub mod district_profile;

pub use climate_band::{ClimateBand, ClimateBandStrategy};
pub use district_profile::{generic_fallback, DistrictProfileStrategy};

use crate::error::AgriSenseError;
use crate::models::{DistrictProfile, RecommendationRecord, Season, WeatherSummary};
use serde::{Deserialize, Serialize};

/// Inputs available to a strategy once classification has passed.
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext<'a> {
    pub district: Option<&'a DistrictProfile>,
    pub season: Season,
    pub weather: Option<&'a WeatherSummary>,
}

impl<'a> StrategyContext<'a> {
    pub fn new(district: Option<&'a DistrictProfile>, season: Season) -> Self {
        Self {
            district,
            season,
            weather: None,
        }
    }

    pub fn with_weather(mut self, weather: Option<&'a WeatherSummary>) -> Self {
        self.weather = weather;
        self
    }
}

/// Trait for crop selection strategies
pub trait RecommendationStrategy: Send + Sync {
    /// Unique identifier for this strategy
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Produce records for a farmable point. Restricted points never reach
    /// a strategy.
    fn recommend(&self, ctx: &StrategyContext<'_>) -> Vec<RecommendationRecord>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    DistrictProfile,
    ClimateBand,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::DistrictProfile => "district_profile",
            StrategyKind::ClimateBand => "climate_band",
        }
    }

    pub fn build(&self, policy: EmptyDistrictPolicy) -> Box<dyn RecommendationStrategy> {
        match self {
            StrategyKind::DistrictProfile => Box::new(DistrictProfileStrategy::new(policy)),
            StrategyKind::ClimateBand => Box::new(ClimateBandStrategy::new(
                DistrictProfileStrategy::new(policy),
            )),
        }
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = AgriSenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "district_profile" | "district" => Ok(StrategyKind::DistrictProfile),
            "climate_band" | "climate" => Ok(StrategyKind::ClimateBand),
            other => Err(AgriSenseError::Config(format!(
                "unknown strategy '{}' (expected district_profile or climate_band)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What to emit for a resolved district whose catalog lists are empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyDistrictPolicy {
    /// Emit nothing; the district note explains why.
    #[default]
    Empty,
    /// Emit the generic regional list instead.
    GenericFallback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_kind_from_str() {
        assert_eq!(
            "climate-band".parse::<StrategyKind>().unwrap(),
            StrategyKind::ClimateBand
        );
        assert_eq!(
            "District_Profile".parse::<StrategyKind>().unwrap(),
            StrategyKind::DistrictProfile
        );
        assert!("random".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn strategy_kind_round_trip() {
        for kind in [StrategyKind::DistrictProfile, StrategyKind::ClimateBand] {
            assert_eq!(kind.as_str().parse::<StrategyKind>().unwrap(), kind);
            assert_eq!(kind.build(EmptyDistrictPolicy::Empty).id(), kind.as_str());
        }
    }

    #[test]
    fn config_values_deserialize() {
        let kind: StrategyKind = serde_yaml::from_str("climate_band").unwrap();
        assert_eq!(kind, StrategyKind::ClimateBand);
        let policy: EmptyDistrictPolicy = serde_yaml::from_str("generic_fallback").unwrap();
        assert_eq!(policy, EmptyDistrictPolicy::GenericFallback);
    }
}
