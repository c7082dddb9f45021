use super::normalize::{normalize, normalize_opt};
use super::reference;
use crate::models::{AddressTags, Coordinate, GeocodeResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Address fields folded into the keyword search text, besides the joined
/// value list.
const KEYWORD_ADDRESS_FIELDS: [&str; 11] = [
    "amenity",
    "building",
    "house_number",
    "road",
    "suburb",
    "neighbourhood",
    "village",
    "town",
    "city",
    "county",
    "state",
];

/// Why a point was classified as non-agricultural.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RestrictionReason {
    Keyword { keyword: String },
    FeatureTag { class: String, kind: String },
    CityProximity { city: String, distance_deg: f64 },
}

impl std::fmt::Display for RestrictionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestrictionReason::Keyword { keyword } => write!(f, "matched keyword '{}'", keyword),
            RestrictionReason::FeatureTag { class, kind } => {
                write!(f, "feature tagged {}={}", class, kind)
            }
            RestrictionReason::CityProximity { city, distance_deg } => write!(
                f,
                "built-up spot {:.3}° from {} city center",
                distance_deg, city
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub is_restricted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RestrictionReason>,
}

impl ClassificationResult {
    fn farmable() -> Self {
        Self::default()
    }

    fn restricted(reason: RestrictionReason) -> Self {
        Self {
            is_restricted: true,
            reason: Some(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityCenter {
    pub name: String,
    pub center: Coordinate,
}

/// Keyword, tag and proximity tables driving the classifier.
#[derive(Debug, Clone)]
pub struct RestrictionRules {
    keywords: BTreeSet<String>,
    built_types: HashSet<String>,
    water_types: HashSet<String>,
    highway_types: HashSet<String>,
    restricted_classes: HashSet<String>,
    man_made_types: HashSet<String>,
    leisure_types: HashSet<String>,
    landuse_types: HashSet<String>,
    city_centers: Vec<CityCenter>,
    proximity_threshold_deg: f64,
}

fn string_set<T: FromIterator<String>>(items: &[&str]) -> T {
    items.iter().map(|s| s.to_string()).collect()
}

impl RestrictionRules {
    pub fn reference() -> Self {
        Self {
            keywords: string_set(reference::RESTRICTED_KEYWORDS),
            built_types: string_set(reference::BUILT_TYPES),
            water_types: string_set(reference::WATER_TYPES),
            highway_types: string_set(reference::HIGHWAY_TYPES),
            restricted_classes: string_set(reference::RESTRICTED_CLASSES),
            man_made_types: string_set(reference::MAN_MADE_TYPES),
            leisure_types: string_set(reference::LEISURE_TYPES),
            landuse_types: string_set(reference::LANDUSE_TYPES),
            city_centers: reference::CITY_CENTERS
                .iter()
                .map(|(name, lat, lon)| CityCenter {
                    name: name.to_string(),
                    center: Coordinate::new(*lat, *lon),
                })
                .collect(),
            proximity_threshold_deg: reference::CITY_PROXIMITY_DEG,
        }
    }

    pub fn with_proximity_threshold(mut self, degrees: f64) -> Self {
        self.proximity_threshold_deg = degrees;
        self
    }

    /// Extra keyword, stored in normalized form.
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        let keyword = normalize(keyword);
        if !keyword.is_empty() {
            self.keywords.insert(keyword);
        }
        self
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

impl Default for RestrictionRules {
    fn default() -> Self {
        Self::reference()
    }
}

/// Decides whether a point is non-agricultural. Rules run in order and the
/// first hit wins; a point no rule flags is farmable.
#[derive(Debug, Clone, Default)]
pub struct RestrictionClassifier {
    rules: RestrictionRules,
}

impl RestrictionClassifier {
    pub fn new(rules: RestrictionRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RestrictionRules {
        &self.rules
    }

    pub fn classify(
        &self,
        address: &AddressTags,
        display_name: &str,
        coordinate: Coordinate,
        feature_class: &str,
        feature_type: &str,
    ) -> ClassificationResult {
        if let Some(keyword) = self.matched_keyword(address, display_name) {
            tracing::debug!("restricted: keyword '{}'", keyword);
            return ClassificationResult::restricted(RestrictionReason::Keyword { keyword });
        }

        if let Some(reason) = self.feature_tag_rule(feature_class, feature_type) {
            tracing::debug!("restricted: {}", reason);
            return ClassificationResult::restricted(reason);
        }

        if let Some(reason) = self.city_proximity_rule(address, coordinate) {
            tracing::debug!("restricted: {}", reason);
            return ClassificationResult::restricted(reason);
        }

        ClassificationResult::farmable()
    }

    pub fn classify_geocode(&self, geocode: &GeocodeResult) -> ClassificationResult {
        self.classify(
            &geocode.address,
            &geocode.display_name,
            geocode.coordinate,
            &geocode.feature_class,
            &geocode.feature_type,
        )
    }

    fn keyword_search_text(address: &AddressTags, display_name: &str) -> String {
        let mut parts = Vec::with_capacity(KEYWORD_ADDRESS_FIELDS.len() + 2);
        parts.push(normalize(display_name));
        parts.extend(
            KEYWORD_ADDRESS_FIELDS
                .iter()
                .map(|field| normalize_opt(address.get(field))),
        );
        parts.push(normalize(&address.joined_values()));
        parts.join(" ")
    }

    /// Substring containment, so "parkway" and "riverside" both hit.
    fn matched_keyword(&self, address: &AddressTags, display_name: &str) -> Option<String> {
        let text = Self::keyword_search_text(address, display_name);
        self.rules
            .keywords
            .iter()
            .find(|k| text.contains(k.as_str()))
            .cloned()
    }

    fn feature_tag_rule(
        &self,
        feature_class: &str,
        feature_type: &str,
    ) -> Option<RestrictionReason> {
        let class = normalize(feature_class);
        if class.is_empty() {
            return None;
        }
        let kind = normalize(feature_type);
        let rules = &self.rules;

        let hit = match class.as_str() {
            "amenity" if rules.built_types.contains(&kind) => true,
            "highway" if rules.highway_types.contains(&kind) => true,
            "man_made" if rules.man_made_types.contains(&kind) => true,
            "leisure" if rules.leisure_types.contains(&kind) => true,
            "landuse" if rules.landuse_types.contains(&kind) => true,
            c => rules.restricted_classes.contains(c) || rules.water_types.contains(&kind),
        };

        hit.then_some(RestrictionReason::FeatureTag { class, kind })
    }

    /// Near a city center only built-up spots are restricted; open land at
    /// the same distance stays farmable.
    fn city_proximity_rule(
        &self,
        address: &AddressTags,
        coordinate: Coordinate,
    ) -> Option<RestrictionReason> {
        if !address.has_built_tag() {
            return None;
        }

        self.rules.city_centers.iter().find_map(|city| {
            let distance = coordinate.distance_deg(&city.center);
            (distance < self.rules.proximity_threshold_deg).then(|| {
                RestrictionReason::CityProximity {
                    city: city.name.clone(),
                    distance_deg: distance,
                }
            })
        })
    }
}
