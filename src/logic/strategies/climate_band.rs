use super::{DistrictProfileStrategy, RecommendationStrategy, StrategyContext};
use crate::models::{CultivationGuide, RecommendationKind, RecommendationRecord, WeatherSummary};

/// A weather envelope and the crops suited to it. Unset bounds always pass;
/// a set bound fails when the reading is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateBand {
    pub name: &'static str,
    pub min_temp_c: Option<f64>,
    pub max_temp_c: Option<f64>,
    pub min_humidity: Option<f64>,
    pub min_rainfall_mm: Option<f64>,
    pub max_rainfall_mm: Option<f64>,
    pub crops: &'static [&'static str],
    pub guide: CultivationGuide,
}

/// Series averages the bands are matched against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    pub temp_c: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall_mm: Option<f64>,
}

impl ClimateReading {
    pub fn from_summary(summary: &WeatherSummary) -> Option<Self> {
        let reading = Self {
            temp_c: summary.average_max_temp(),
            humidity: summary.average_humidity(),
            rainfall_mm: summary.average_precipitation(),
        };
        if reading.temp_c.is_none() && reading.humidity.is_none() && reading.rainfall_mm.is_none()
        {
            None
        } else {
            Some(reading)
        }
    }
}

fn at_least(value: Option<f64>, bound: Option<f64>) -> bool {
    match bound {
        Some(b) => value.is_some_and(|v| v >= b),
        None => true,
    }
}

fn below(value: Option<f64>, bound: Option<f64>) -> bool {
    match bound {
        Some(b) => value.is_some_and(|v| v < b),
        None => true,
    }
}

impl ClimateBand {
    pub fn matches(&self, reading: &ClimateReading) -> bool {
        at_least(reading.temp_c, self.min_temp_c)
            && below(reading.temp_c, self.max_temp_c)
            && at_least(reading.humidity, self.min_humidity)
            && at_least(reading.rainfall_mm, self.min_rainfall_mm)
            && below(reading.rainfall_mm, self.max_rainfall_mm)
    }
}

/// Bands are checked in order; the last one has no bounds.
pub fn default_bands() -> Vec<ClimateBand> {
    vec![
        ClimateBand {
            name: "Wet",
            min_temp_c: None,
            max_temp_c: None,
            min_humidity: None,
            min_rainfall_mm: Some(10.0),
            max_rainfall_mm: None,
            crops: &["Rice (Paddy)", "Sugarcane", "Finger Millet (Nachni)"],
            guide: CultivationGuide::new(
                "Clayey, water-retentive Soil",
                &["Urea", "DAP", "Zinc Sulphate"],
                &["Tricyclazole", "Neem Oil"],
                &["Transplanting: June-July", "Harvest: Oct-Nov"],
            ),
        },
        ClimateBand {
            name: "Warm and Humid",
            min_temp_c: Some(25.0),
            max_temp_c: None,
            min_humidity: Some(75.0),
            min_rainfall_mm: None,
            max_rainfall_mm: None,
            crops: &["Soybean", "Pigeon Pea (Tur)", "Maize"],
            guide: CultivationGuide::new(
                "Well-drained Loam",
                &["Rhizobium Culture", "Single Super Phosphate"],
                &["Neem-based Pesticides", "Pheromone Traps"],
                &["Sowing: June-July", "Harvest: Sep-Nov"],
            ),
        },
        ClimateBand {
            name: "Hot and Dry",
            min_temp_c: Some(35.0),
            max_temp_c: None,
            min_humidity: None,
            min_rainfall_mm: None,
            max_rainfall_mm: Some(2.5),
            crops: &["Bajra", "Jowar", "Groundnut"],
            guide: CultivationGuide::new(
                "Light to Medium Soil",
                &["Farmyard Manure", "Nitrogen Fertilizers"],
                &["Bio-pesticides"],
                &["Sowing: with first rains", "Harvest: 90-110 days"],
            ),
        },
        ClimateBand {
            name: "Cool",
            min_temp_c: None,
            max_temp_c: Some(25.0),
            min_humidity: None,
            min_rainfall_mm: None,
            max_rainfall_mm: None,
            crops: &["Wheat", "Gram", "Onions"],
            guide: CultivationGuide::new(
                "Medium to Heavy Soil",
                &["NPK Fertilizers", "Farm Yard Manure"],
                &["Integrated Pest Management"],
                &["Sowing: Oct-Nov", "Harvest: Feb-Mar"],
            ),
        },
        ClimateBand {
            name: "Moderate",
            min_temp_c: None,
            max_temp_c: None,
            min_humidity: None,
            min_rainfall_mm: None,
            max_rainfall_mm: None,
            crops: &["Cotton", "Soybean", "Jowar"],
            guide: CultivationGuide::new(
                "Black Cotton Soil",
                &["NPK Fertilizers", "Organic Compost"],
                &["Integrated Pest Management"],
                &["Sowing: June", "Harvest: Nov-Dec"],
            ),
        },
    ]
}

/// Picks crops from recent weather instead of the district table. Without
/// usable weather it defers to the district strategy.
pub struct ClimateBandStrategy {
    bands: Vec<ClimateBand>,
    fallback: DistrictProfileStrategy,
}

impl ClimateBandStrategy {
    pub fn new(fallback: DistrictProfileStrategy) -> Self {
        Self::with_bands(default_bands(), fallback)
    }

    pub fn with_bands(bands: Vec<ClimateBand>, fallback: DistrictProfileStrategy) -> Self {
        Self { bands, fallback }
    }

    pub fn band_for(&self, reading: &ClimateReading) -> Option<&ClimateBand> {
        self.bands.iter().find(|b| b.matches(reading))
    }
}

impl RecommendationStrategy for ClimateBandStrategy {
    fn id(&self) -> &'static str {
        "climate_band"
    }

    fn name(&self) -> &'static str {
        "Climate Band"
    }

    fn recommend(&self, ctx: &StrategyContext<'_>) -> Vec<RecommendationRecord> {
        let reading = ctx.weather.and_then(ClimateReading::from_summary);

        let Some(band) = reading.as_ref().and_then(|r| self.band_for(r)) else {
            tracing::debug!("no usable weather, deferring to district profile");
            return self.fallback.recommend(ctx);
        };

        tracing::debug!("climate band '{}' selected", band.name);
        band.crops
            .iter()
            .map(|name| {
                RecommendationRecord::new(*name, RecommendationKind::Crop, ctx.season, &band.guide)
            })
            .collect()
    }
}
