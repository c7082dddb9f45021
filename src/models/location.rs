use crate::error::{AgriSenseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Validated constructor for user-supplied input.
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(AgriSenseError::InvalidData(format!(
                "latitude {} outside [-90, 90]",
                lat
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(AgriSenseError::InvalidData(format!(
                "longitude {} outside [-180, 180]",
                lon
            )));
        }
        Ok(Self { lat, lon })
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Planar distance in degrees. Good enough for the short ranges the
    /// district centroids and city radii are expressed in.
    pub fn distance_deg(&self, other: &Coordinate) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lon = self.lon - other.lon;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Non-finite coordinates are never contained.
    pub fn contains(&self, point: &Coordinate) -> bool {
        point.is_finite()
            && point.lat >= self.south
            && point.lat <= self.north
            && point.lon >= self.west
            && point.lon <= self.east
    }
}

/// Address tags as supplied by the geocoder. Keys are present only when the
/// geocoder returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressTags(BTreeMap<String, String>);

/// Tags whose presence marks a spot as part of the built environment.
pub const BUILT_ADDRESS_TAGS: [&str; 5] =
    ["road", "building", "house_number", "amenity", "postcode"];

impl AddressTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the tag value, treating empty strings as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn has_built_tag(&self) -> bool {
        BUILT_ADDRESS_TAGS.iter().any(|k| self.has(k))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// All values joined with a single space.
    pub fn joined_values(&self) -> String {
        self.values().collect::<Vec<_>>().join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, String)> for AddressTags {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a `key=value` pair as given on the command line.
pub fn parse_address_pair(s: &str) -> Result<(String, String)> {
    let (key, value) = s.split_once('=').ok_or_else(|| {
        AgriSenseError::InvalidData(format!("expected key=value, got '{}'", s))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(AgriSenseError::InvalidData(format!(
            "empty address key in '{}'",
            s
        )));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Everything the engine knows about a point. An all-default instance is a
/// valid input and classifies as farmable with no district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub coordinate: Coordinate,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub address: AddressTags,
    #[serde(default)]
    pub feature_class: String,
    #[serde(default)]
    pub feature_type: String,
}

impl GeocodeResult {
    /// A bare coordinate with no geocoder metadata, used when the lookup
    /// failed or was skipped.
    pub fn bare(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            display_name: String::new(),
            address: AddressTags::new(),
            feature_class: String::new(),
            feature_type: String::new(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_address(mut self, address: AddressTags) -> Self {
        self.address = address;
        self
    }

    pub fn with_feature(mut self, class: impl Into<String>, kind: impl Into<String>) -> Self {
        self.feature_class = class.into();
        self.feature_type = kind.into();
        self
    }
}

impl Default for GeocodeResult {
    fn default() -> Self {
        Self::bare(Coordinate::new(0.0, 0.0))
    }
}
