use super::assembler::RecommendationAssembler;
use super::catalog::DistrictCatalog;
use super::reference;
use super::resolver::{DistrictMatch, DistrictResolver, ResolverRules};
use super::restriction::{ClassificationResult, RestrictionClassifier, RestrictionRules};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{GeocodeResult, LocationReport, Season, WeatherSummary};
use std::sync::Arc;

/// Label used when the geocoder had nothing to say about a point.
pub const FALLBACK_LABEL: &str = "Rural Farming Area";

/// Classify, resolve and assemble in one call.
///
/// Holds only read-only state, so one engine can serve concurrent callers.
pub struct AdvisoryEngine {
    catalog: Arc<DistrictCatalog>,
    classifier: RestrictionClassifier,
    resolver: DistrictResolver,
    assembler: RecommendationAssembler,
}

impl AdvisoryEngine {
    pub fn new(
        catalog: Arc<DistrictCatalog>,
        classifier: RestrictionClassifier,
        resolver: DistrictResolver,
        assembler: RecommendationAssembler,
    ) -> Self {
        Self {
            catalog,
            classifier,
            resolver,
            assembler,
        }
    }

    /// Built-in tables with default thresholds and the district strategy.
    pub fn reference() -> Self {
        let catalog = Arc::new(DistrictCatalog::reference());
        Self::new(
            catalog.clone(),
            RestrictionClassifier::default(),
            DistrictResolver::new(catalog.clone(), ResolverRules::reference()),
            RecommendationAssembler::from_kind(catalog, Default::default(), Default::default()),
        )
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let catalog = match &config.catalog_path {
            Some(path) => DistrictCatalog::load(path, &reference::REGION_BOUNDS)?,
            None => DistrictCatalog::reference(),
        };
        let catalog = Arc::new(catalog);

        let rules = config
            .extra_keywords
            .iter()
            .fold(RestrictionRules::reference(), |rules, kw| rules.with_keyword(kw))
            .with_proximity_threshold(config.proximity_threshold_deg);

        let resolver_rules =
            ResolverRules::reference().with_nearest_center_cutoff(config.nearest_center_cutoff_deg);

        tracing::debug!(
            "engine: {} districts, strategy {}",
            catalog.len(),
            config.strategy
        );

        Ok(Self::new(
            catalog.clone(),
            RestrictionClassifier::new(rules),
            DistrictResolver::new(catalog.clone(), resolver_rules),
            RecommendationAssembler::from_kind(
                catalog,
                config.strategy,
                config.empty_district_policy,
            ),
        ))
    }

    pub fn catalog(&self) -> &DistrictCatalog {
        &self.catalog
    }

    pub fn classify(&self, geocode: &GeocodeResult) -> ClassificationResult {
        self.classifier.classify_geocode(geocode)
    }

    pub fn resolve(&self, geocode: &GeocodeResult) -> Option<DistrictMatch> {
        self.resolver.resolve_geocode(geocode)
    }

    pub fn evaluate(&self, geocode: &GeocodeResult, season: Season) -> LocationReport {
        self.evaluate_with_weather(geocode, season, None)
    }

    /// Resolution runs even for restricted points so the report can still
    /// name the district.
    pub fn evaluate_with_weather(
        &self,
        geocode: &GeocodeResult,
        season: Season,
        weather: Option<&WeatherSummary>,
    ) -> LocationReport {
        let classification = self.classify(geocode);
        let district_key = self.resolve(geocode).map(|m| m.key);
        let profile = district_key.as_deref().and_then(|k| self.catalog.get(k));

        let recommendations = self.assembler.assemble_with_weather(
            district_key.as_deref(),
            classification.is_restricted,
            season,
            weather,
        );

        let label = if geocode.display_name.trim().is_empty() {
            FALLBACK_LABEL.to_string()
        } else {
            geocode.display_name.clone()
        };

        LocationReport {
            coordinate: geocode.coordinate,
            label,
            is_restricted: classification.is_restricted,
            restriction_reason: classification.reason.map(|r| r.to_string()),
            district_name: profile.map(|p| p.name.clone()),
            district_note: profile.and_then(|p| p.note.clone()),
            district_key,
            season,
            weather: weather.and_then(|w| w.latest().cloned()),
            strategy: self.assembler.strategy().id().to_string(),
            recommendations,
        }
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::reference()
    }
}
