use super::{EmptyDistrictPolicy, RecommendationStrategy, StrategyContext};
use crate::models::{
    CultivationGuide, DistrictProfile, RecommendationKind, RecommendationRecord, Season,
};

fn fruit_guide() -> CultivationGuide {
    CultivationGuide::new(
        "Loam to Clay Loam",
        &["Organic Manure", "NPK Fertilizer", "Micronutrients"],
        &["Neem Oil", "Bio-pesticides"],
        &["Planting: June-July", "Harvest: Oct-Nov"],
    )
}

fn crop_guide() -> CultivationGuide {
    CultivationGuide::new(
        "Well-drained Soil",
        &["Farm Yard Manure", "Urea", "DAP"],
        &["Recommended Pesticides"],
        &["Sowing: Monsoon season", "Harvest: Winter"],
    )
}

/// Regional default when no district resolves: Soybean, Cotton, Jowar.
pub fn generic_fallback(season: Season) -> Vec<RecommendationRecord> {
    let entries = [
        (
            "Soybean",
            CultivationGuide::new(
                "Well-drained Loam",
                &["Farm Yard Manure", "Phosphatic Fertilizers"],
                &["Neem-based Pesticides"],
                &["Sowing: June-July", "Harvest: Sep-Oct"],
            ),
        ),
        (
            "Cotton",
            CultivationGuide::new(
                "Black Cotton Soil",
                &["NPK Fertilizers", "Organic Compost"],
                &["Integrated Pest Management"],
                &["Sowing: June", "Harvest: Nov-Dec"],
            ),
        ),
        (
            "Jowar",
            CultivationGuide::new(
                "Medium to Heavy Soil",
                &["Nitrogen Fertilizers", "Farmyard Manure"],
                &["Bio-pesticides"],
                &["Sowing: June-July", "Harvest: Oct-Nov"],
            ),
        ),
    ];

    entries
        .iter()
        .map(|(name, guide)| {
            RecommendationRecord::new(*name, RecommendationKind::Crop, season, guide)
        })
        .collect()
}

/// Catalog-driven recommendations: the district's fruits then its crops,
/// or the generic regional list when no district resolved.
#[derive(Debug, Clone, Default)]
pub struct DistrictProfileStrategy {
    policy: EmptyDistrictPolicy,
}

impl DistrictProfileStrategy {
    pub fn new(policy: EmptyDistrictPolicy) -> Self {
        Self { policy }
    }

    fn from_profile(&self, profile: &DistrictProfile, season: Season) -> Vec<RecommendationRecord> {
        if profile.is_non_agricultural() && self.policy == EmptyDistrictPolicy::GenericFallback {
            tracing::debug!(
                "district '{}' lists nothing, using regional defaults",
                profile.key
            );
            return generic_fallback(season);
        }

        let fruit = fruit_guide();
        let crop = crop_guide();

        profile
            .fruits
            .iter()
            .map(|name| {
                RecommendationRecord::new(name.as_str(), RecommendationKind::Fruit, season, &fruit)
            })
            .chain(
                profile
                    .crops
                    .iter()
                    .map(|name| {
                        RecommendationRecord::new(
                            name.as_str(),
                            RecommendationKind::Crop,
                            season,
                            &crop,
                        )
                    }),
            )
            .collect()
    }
}

impl RecommendationStrategy for DistrictProfileStrategy {
    fn id(&self) -> &'static str {
        "district_profile"
    }

    fn name(&self) -> &'static str {
        "District Profile"
    }

    fn recommend(&self, ctx: &StrategyContext<'_>) -> Vec<RecommendationRecord> {
        match ctx.district {
            Some(profile) => self.from_profile(profile, ctx.season),
            None => generic_fallback(ctx.season),
        }
    }
}
