use super::catalog::DistrictCatalog;
use super::normalize::{normalize, normalize_opt};
use super::reference;
use crate::models::{AddressTags, BoundingBox, Coordinate, GeocodeResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Address fields that name administrative areas.
const DISTRICT_ADDRESS_FIELDS: [&str; 8] = [
    "district",
    "county",
    "state_district",
    "region",
    "city",
    "town",
    "village",
    "hamlet",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMethod {
    NearestCenter,
    NameMatch,
    Alias,
}

impl ResolutionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionMethod::NearestCenter => "nearest center",
            ResolutionMethod::NameMatch => "name match",
            ResolutionMethod::Alias => "alias",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictMatch {
    pub key: String,
    pub method: ResolutionMethod,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistrictAlias {
    pub alias: String,
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct ResolverRules {
    pub bounds: BoundingBox,
    pub nearest_center_cutoff_deg: f64,
    aliases: Vec<DistrictAlias>,
}

impl ResolverRules {
    pub fn reference() -> Self {
        Self {
            bounds: reference::REGION_BOUNDS,
            nearest_center_cutoff_deg: reference::NEAREST_CENTER_CUTOFF_DEG,
            aliases: reference::DISTRICT_ALIASES
                .iter()
                .map(|(alias, key)| DistrictAlias {
                    alias: alias.to_string(),
                    key: key.to_string(),
                })
                .collect(),
        }
    }

    pub fn with_nearest_center_cutoff(mut self, degrees: f64) -> Self {
        self.nearest_center_cutoff_deg = degrees;
        self
    }

    pub fn aliases(&self) -> &[DistrictAlias] {
        &self.aliases
    }
}

impl Default for ResolverRules {
    fn default() -> Self {
        Self::reference()
    }
}

/// Maps a point plus address metadata to a district key.
///
/// Resolution order:
/// 1. Points outside the region bounds never resolve.
/// 2. Nearest district center, if within the cutoff.
/// 3. Bidirectional containment of district names in the address text,
///    first in catalog order.
/// 4. Alias table, first in table order.
#[derive(Debug, Clone)]
pub struct DistrictResolver {
    catalog: Arc<DistrictCatalog>,
    rules: ResolverRules,
}

impl DistrictResolver {
    /// Aliases pointing at keys missing from `catalog` are dropped so that a
    /// resolved key always dereferences.
    pub fn new(catalog: Arc<DistrictCatalog>, mut rules: ResolverRules) -> Self {
        rules.aliases.retain(|a| {
            let known = catalog.contains_key(&a.key);
            if !known {
                tracing::warn!(
                    "Dropping alias '{}': district '{}' not in catalog",
                    a.alias,
                    a.key
                );
            }
            known
        });
        Self { catalog, rules }
    }

    pub fn catalog(&self) -> &DistrictCatalog {
        &self.catalog
    }

    pub fn resolve(
        &self,
        coordinate: Coordinate,
        address: &AddressTags,
        display_name: &str,
    ) -> Option<String> {
        self.resolve_detailed(coordinate, address, display_name)
            .map(|m| m.key)
    }

    pub fn resolve_geocode(&self, geocode: &GeocodeResult) -> Option<DistrictMatch> {
        self.resolve_detailed(geocode.coordinate, &geocode.address, &geocode.display_name)
    }

    pub fn resolve_detailed(
        &self,
        coordinate: Coordinate,
        address: &AddressTags,
        display_name: &str,
    ) -> Option<DistrictMatch> {
        if !self.rules.bounds.contains(&coordinate) {
            tracing::debug!("{} is outside the supported region", coordinate);
            return None;
        }

        if let Some(key) = self.nearest_center(coordinate) {
            return Some(Self::matched(key, ResolutionMethod::NearestCenter));
        }

        let text = Self::search_text(address, display_name);
        if text.is_empty() {
            return None;
        }

        if let Some(key) = self.name_match(&text) {
            return Some(Self::matched(key, ResolutionMethod::NameMatch));
        }

        self.alias_match(&text)
            .map(|key| Self::matched(key, ResolutionMethod::Alias))
    }

    fn matched(key: &str, method: ResolutionMethod) -> DistrictMatch {
        tracing::debug!("district '{}' resolved by {}", key, method.as_str());
        DistrictMatch {
            key: key.to_string(),
            method,
        }
    }

    /// Closest center under the cutoff; ties go to the earlier entry.
    fn nearest_center(&self, coordinate: Coordinate) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for profile in self.catalog.iter() {
            let distance = coordinate.distance_deg(&profile.center);
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((profile.key.as_str(), distance));
            }
        }

        best.filter(|(_, d)| *d < self.rules.nearest_center_cutoff_deg)
            .map(|(key, _)| key)
    }

    fn search_text(address: &AddressTags, display_name: &str) -> String {
        let mut parts = Vec::with_capacity(DISTRICT_ADDRESS_FIELDS.len() + 2);
        parts.push(normalize(display_name));
        parts.extend(
            DISTRICT_ADDRESS_FIELDS
                .iter()
                .map(|field| normalize_opt(address.get(field))),
        );
        parts.push(normalize(&address.joined_values()));
        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// District name inside the text, or the text as the leading words of
    /// the name ("mumbai" for "Mumbai City"). A fragment of a word never
    /// matches in the second direction.
    fn name_match(&self, text: &str) -> Option<&str> {
        self.catalog
            .iter()
            .find(|profile| {
                let name = normalize(&profile.name);
                !name.is_empty() && (text.contains(&name) || starts_with_words(&name, text))
            })
            .map(|profile| profile.key.as_str())
    }

    fn alias_match(&self, text: &str) -> Option<&str> {
        self.rules
            .aliases
            .iter()
            .find(|a| text.contains(a.alias.as_str()))
            .map(|a| a.key.as_str())
    }
}

fn starts_with_words(name: &str, text: &str) -> bool {
    let mut name_words = name.split_whitespace();
    let mut matched = false;
    for word in text.split_whitespace() {
        if name_words.next() != Some(word) {
            return false;
        }
        matched = true;
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DistrictProfile;

    fn resolver() -> DistrictResolver {
        DistrictResolver::new(
            Arc::new(DistrictCatalog::reference()),
            ResolverRules::reference(),
        )
    }

    /// Resolver whose nearest-center step never accepts, to exercise the
    /// text fallbacks.
    fn text_only_resolver() -> DistrictResolver {
        DistrictResolver::new(
            Arc::new(DistrictCatalog::reference()),
            ResolverRules::reference().with_nearest_center_cutoff(0.0),
        )
    }

    #[test]
    fn every_center_resolves_to_itself() {
        let resolver = resolver();
        for profile in resolver.catalog().iter() {
            assert_eq!(
                resolver.resolve(profile.center, &AddressTags::new(), &profile.name),
                Some(profile.key.clone()),
                "center of {} resolved elsewhere",
                profile.key
            );
        }
    }

    #[test]
    fn outside_region_never_resolves() {
        let resolver = resolver();
        let address = AddressTags::new().with("state_district", "Pune");
        for (lat, lon) in [(0.0, 0.0), (28.6, 77.2), (15.0, 74.0), (19.0, 81.5), (22.5, 75.0)] {
            assert_eq!(
                resolver.resolve(Coordinate::new(lat, lon), &address, "Pune"),
                None
            );
        }
    }

    #[test]
    fn non_finite_coordinate_never_resolves() {
        let coordinate = Coordinate::new(f64::NAN, 77.0);
        assert_eq!(resolver().resolve(coordinate, &AddressTags::new(), "Akola"), None);
    }

    #[test]
    fn nearest_center_wins_over_text() {
        let near_akola = Coordinate::new(20.71, 77.03);
        let m = resolver()
            .resolve_detailed(near_akola, &AddressTags::new(), "Latur")
            .unwrap();
        assert_eq!(m.key, "akola");
        assert_eq!(m.method, ResolutionMethod::NearestCenter);
    }

    #[test]
    fn name_match_fallback_uses_address_fields() {
        let address = AddressTags::new()
            .with("village", "Borgaon")
            .with("state_district", "Washim District");
        let m = text_only_resolver()
            .resolve_detailed(Coordinate::new(20.1, 77.2), &address, "")
            .unwrap();
        assert_eq!(m.key, "washim");
        assert_eq!(m.method, ResolutionMethod::NameMatch);
    }

    #[test]
    fn name_match_is_bidirectional() {
        let m = text_only_resolver()
            .resolve_detailed(Coordinate::new(19.0, 72.9), &AddressTags::new(), "Mumbai")
            .unwrap();
        assert_eq!(m.key, "mumbai_city");
        assert_eq!(m.method, ResolutionMethod::NameMatch);
    }

    #[test]
    fn word_fragments_do_not_match_names() {
        let resolver = resolver();
        let far_corner = Coordinate::new(15.65, 80.85);
        for label in ["a", "Ra", "Nagar", "pur"] {
            assert_eq!(
                resolver.resolve(far_corner, &AddressTags::new(), label),
                None,
                "'{}' should not resolve",
                label
            );
        }
    }

    #[test]
    fn leading_words_of_a_name_match() {
        let m = text_only_resolver()
            .resolve_detailed(Coordinate::new(19.0, 72.9), &AddressTags::new(), "Mumbai City")
            .unwrap();
        assert_eq!(m.key, "mumbai_city");
        assert!(starts_with_words("mumbai suburban", "mumbai"));
        assert!(!starts_with_words("mumbai suburban", "suburban"));
        assert!(!starts_with_words("ahmednagar", "nagar"));
        assert!(!starts_with_words("pune", ""));
    }

    #[test]
    fn name_match_takes_first_in_catalog_order() {
        let m = text_only_resolver()
            .resolve_detailed(
                Coordinate::new(19.0, 76.0),
                &AddressTags::new(),
                "Between Latur and Beed",
            )
            .unwrap();
        assert_eq!(m.key, "beed");
    }

    #[test]
    fn alias_fallback() {
        let m = text_only_resolver()
            .resolve_detailed(Coordinate::new(19.0, 72.9), &AddressTags::new(), "Bombay")
            .unwrap();
        assert_eq!(m.key, "mumbai_city");
        assert_eq!(m.method, ResolutionMethod::Alias);

        let m = text_only_resolver()
            .resolve_detailed(Coordinate::new(18.5, 73.8), &AddressTags::new(), "Poona Cantonment")
            .unwrap();
        assert_eq!(m.key, "pune");
    }

    #[test]
    fn no_text_and_no_center_is_unresolved() {
        let resolver = text_only_resolver();
        assert_eq!(
            resolver.resolve(Coordinate::new(20.0, 77.0), &AddressTags::new(), ""),
            None
        );
        assert_eq!(
            resolver.resolve(Coordinate::new(20.0, 77.0), &AddressTags::new(), "Somewhere"),
            None
        );
    }

    #[test]
    fn aliases_to_unknown_districts_are_dropped() {
        let catalog = DistrictCatalog::new(
            vec![DistrictProfile::new("pune", "Pune", 18.5204, 73.8567, &[], &["Wheat"])],
            &reference::REGION_BOUNDS,
        )
        .unwrap();
        let resolver = DistrictResolver::new(Arc::new(catalog), ResolverRules::reference());
        assert!(resolver.rules.aliases().iter().all(|a| a.key == "pune"));

        let resolver = DistrictResolver::new(
            resolver.catalog.clone(),
            ResolverRules::reference().with_nearest_center_cutoff(0.0),
        );
        assert_eq!(
            resolver.resolve(Coordinate::new(19.0, 72.9), &AddressTags::new(), "Bombay"),
            None
        );
    }

    #[test]
    fn resolved_key_always_in_catalog() {
        let resolver = resolver();
        let mut lat = 15.7;
        while lat < 22.0 {
            let mut lon = 72.7;
            while lon < 80.9 {
                let at = Coordinate::new(lat, lon);
                if let Some(key) = resolver.resolve(at, &AddressTags::new(), "") {
                    assert!(resolver.catalog().get(&key).is_some());
                }
                lon += 0.5;
            }
            lat += 0.5;
        }
    }
}
