use super::catalog::DistrictCatalog;
use super::strategies::{
    DistrictProfileStrategy, EmptyDistrictPolicy, RecommendationStrategy, StrategyContext,
    StrategyKind,
};
use crate::models::{RecommendationRecord, Season, WeatherSummary};
use std::sync::Arc;

/// Turns a classification and a district key into recommendation records.
///
/// Restricted points get nothing. Otherwise the configured strategy decides;
/// with the district strategy that means the district's own lists, or the
/// regional default when no district resolved.
pub struct RecommendationAssembler {
    catalog: Arc<DistrictCatalog>,
    strategy: Box<dyn RecommendationStrategy>,
}

impl RecommendationAssembler {
    pub fn new(catalog: Arc<DistrictCatalog>, strategy: Box<dyn RecommendationStrategy>) -> Self {
        Self { catalog, strategy }
    }

    pub fn from_kind(
        catalog: Arc<DistrictCatalog>,
        kind: StrategyKind,
        policy: EmptyDistrictPolicy,
    ) -> Self {
        Self::new(catalog, kind.build(policy))
    }

    pub fn strategy(&self) -> &dyn RecommendationStrategy {
        self.strategy.as_ref()
    }

    pub fn assemble(
        &self,
        district_key: Option<&str>,
        is_restricted: bool,
        season: Season,
    ) -> Vec<RecommendationRecord> {
        self.assemble_with_weather(district_key, is_restricted, season, None)
    }

    pub fn assemble_with_weather(
        &self,
        district_key: Option<&str>,
        is_restricted: bool,
        season: Season,
        weather: Option<&WeatherSummary>,
    ) -> Vec<RecommendationRecord> {
        if is_restricted {
            return Vec::new();
        }

        let district = district_key.and_then(|key| {
            let profile = self.catalog.get(key);
            if profile.is_none() {
                tracing::warn!("district key '{}' is not in the catalog", key);
            }
            profile
        });

        let ctx = StrategyContext::new(district, season).with_weather(weather);
        self.strategy.recommend(&ctx)
    }
}

impl Default for RecommendationAssembler {
    fn default() -> Self {
        Self::new(
            Arc::new(DistrictCatalog::reference()),
            Box::new(DistrictProfileStrategy::default()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecommendationKind;

    #[test]
    fn restricted_is_always_empty() {
        let assembler = RecommendationAssembler::default();
        assert!(assembler.assemble(Some("amravati"), true, Season::Kharif).is_empty());
        assert!(assembler.assemble(None, true, Season::Kharif).is_empty());
    }

    #[test]
    fn resolved_district_lists() {
        let recs =
            RecommendationAssembler::default().assemble(Some("amravati"), false, Season::Kharif);
        assert_eq!(recs.len(), 10);
        assert!(recs
            .iter()
            .any(|r| r.name == "Orange" && r.kind == RecommendationKind::Fruit));
        assert!(recs
            .iter()
            .any(|r| r.name == "Cotton" && r.kind == RecommendationKind::Crop));
    }

    #[test]
    fn unresolved_gets_generic_list() {
        let recs = RecommendationAssembler::default().assemble(None, false, Season::Rabi);
        assert_eq!(recs.len(), 3);
        assert!(recs.iter().all(|r| r.season == Season::Rabi));
    }

    #[test]
    fn unknown_key_treated_as_unresolved() {
        let recs =
            RecommendationAssembler::default().assemble(Some("atlantis"), false, Season::Rabi);
        assert_eq!(recs.len(), 3);
    }

    #[test]
    fn assemble_is_idempotent() {
        let assembler = RecommendationAssembler::default();
        let first = assembler.assemble(Some("nashik"), false, Season::Zaid);
        let second = assembler.assemble(Some("nashik"), false, Season::Zaid);
        assert_eq!(first, second);
    }

    #[test]
    fn strategy_selected_by_kind() {
        let assembler = RecommendationAssembler::from_kind(
            Arc::new(DistrictCatalog::reference()),
            StrategyKind::ClimateBand,
            EmptyDistrictPolicy::Empty,
        );
        assert_eq!(assembler.strategy().id(), "climate_band");
    }
}
