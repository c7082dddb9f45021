use crate::config::GeocoderConfig;
use crate::error::{AgriSenseError, Result};
use crate::models::{AddressTags, Coordinate, GeocodeResult};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub struct NominatimClient {
    client: reqwest::Client,
    config: GeocoderConfig,
}

// Nominatim jsonv2/json place structure. Every field may be missing.
#[derive(Debug, Default, Deserialize)]
struct NominatimPlace {
    #[serde(default)]
    lat: Option<Value>,
    #[serde(default)]
    lon: Option<Value>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    osm_class: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    osm_type: Option<String>,
    #[serde(default)]
    address: BTreeMap<String, Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Nominatim sends coordinates as strings; accept numbers as well.
fn parse_degrees(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn first_non_empty(a: Option<String>, b: Option<String>) -> String {
    a.filter(|s| !s.is_empty())
        .or(b.filter(|s| !s.is_empty()))
        .unwrap_or_default()
}

impl NominatimPlace {
    /// `fallback` is used when the payload carries no usable coordinate.
    fn into_geocode(self, fallback: Option<Coordinate>) -> Option<GeocodeResult> {
        let parsed = match (parse_degrees(self.lat.as_ref()), parse_degrees(self.lon.as_ref())) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        };
        let coordinate = fallback.or(parsed)?;

        let address: AddressTags = self
            .address
            .into_iter()
            .filter_map(|(k, v)| match v {
                Value::String(s) => Some((k, s)),
                Value::Number(n) => Some((k, n.to_string())),
                _ => None,
            })
            .collect();

        Some(GeocodeResult {
            coordinate,
            display_name: self.display_name.unwrap_or_default(),
            address,
            feature_class: first_non_empty(self.class, self.osm_class),
            feature_type: first_non_empty(self.kind, self.osm_type),
        })
    }

    /// Forward results without a display name are labelled with the query.
    fn into_search_result(self, query: &str) -> Option<GeocodeResult> {
        let mut geocode = self.into_geocode(None)?;
        if geocode.display_name.trim().is_empty() {
            geocode.display_name = query.to_string();
        }
        Some(geocode)
    }
}

impl NominatimClient {
    pub fn new(config: GeocoderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    /// Reverse lookup. The queried coordinate is kept; Nominatim snaps to
    /// the nearest feature, which may sit elsewhere.
    pub async fn reverse(&self, coordinate: Coordinate) -> Result<GeocodeResult> {
        let url = self.url(
            "reverse",
            &[
                ("format", "json".to_string()),
                ("lat", coordinate.lat.to_string()),
                ("lon", coordinate.lon.to_string()),
                ("addressdetails", "1".to_string()),
            ],
        )?;

        let place: NominatimPlace = self.get_json(url).await?;
        if let Some(err) = &place.error {
            tracing::debug!("Nominatim has nothing at {}: {}", coordinate, err);
        }

        Ok(place
            .into_geocode(Some(coordinate))
            .unwrap_or_else(|| GeocodeResult::bare(coordinate)))
    }

    /// Forward lookup, first hit only.
    pub async fn search(&self, query: &str) -> Result<GeocodeResult> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AgriSenseError::InvalidData("search query is empty".into()));
        }

        let url = self.url(
            "search",
            &[
                ("format", "json".to_string()),
                ("q", query.to_string()),
                ("addressdetails", "1".to_string()),
                ("limit", "1".to_string()),
            ],
        )?;

        let places: Vec<NominatimPlace> = self.get_json(url).await?;
        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| AgriSenseError::NotFound(format!("Location not found: {}", query)))?;

        place.into_search_result(query).ok_or_else(|| {
            AgriSenseError::InvalidData(format!(
                "Nominatim result for '{}' has no coordinate",
                query
            ))
        })
    }

    fn url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<reqwest::Url> {
        let base = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        reqwest::Url::parse_with_params(&base, params)
            .map_err(|e| AgriSenseError::Config(format!("Invalid geocoder URL {}: {}", base, e)))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: reqwest::Url) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AgriSenseError::DataSourceUnavailable(format!("Nominatim: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgriSenseError::DataSourceUnavailable(format!(
                "Nominatim returned {}: {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            AgriSenseError::DataSourceUnavailable(format!(
                "Failed to parse Nominatim response: {}",
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(json: &str) -> NominatimPlace {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn maps_reverse_payload() {
        let p = place(
            r#"{
                "lat": "20.9320", "lon": "77.7523",
                "display_name": "Badnera, Amravati, Maharashtra, India",
                "class": "place", "type": "village", "osm_type": "node",
                "address": {
                    "village": "Badnera", "state_district": "Amravati", "postcode": "444701"
                }
            }"#,
        );
        let queried = Coordinate::new(20.93, 77.75);
        let g = p.into_geocode(Some(queried)).unwrap();

        assert_eq!(g.coordinate, queried);
        assert_eq!(g.feature_class, "place");
        assert_eq!(g.feature_type, "village");
        assert_eq!(g.address.get("state_district"), Some("Amravati"));
        assert!(g.address.has_built_tag());
    }

    #[test]
    fn search_payload_uses_string_coordinates() {
        let p = place(r#"{"lat": "19.9975", "lon": "73.7898", "display_name": "Nashik"}"#);
        let g = p.into_geocode(None).unwrap();
        assert!((g.coordinate.lat - 19.9975).abs() < 1e-9);
        assert!((g.coordinate.lon - 73.7898).abs() < 1e-9);
        assert!(g.address.is_empty());
        assert_eq!(g.feature_class, "");
    }

    #[test]
    fn search_result_falls_back_to_query_label() {
        let unnamed = place(r#"{"lat": "20.13", "lon": "74.11", "display_name": ""}"#);
        let g = unnamed.into_search_result("Niphad").unwrap();
        assert_eq!(g.display_name, "Niphad");

        let named =
            place(r#"{"lat": "20.13", "lon": "74.11", "display_name": "Niphad, Nashik"}"#);
        let g = named.into_search_result("Niphad").unwrap();
        assert_eq!(g.display_name, "Niphad, Nashik");
    }

    #[test]
    fn osm_fields_used_when_class_and_type_missing() {
        let p =
            place(r#"{"lat": 18.5, "lon": 73.8, "osm_class": "amenity", "osm_type": "school"}"#);
        let g = p.into_geocode(None).unwrap();
        assert_eq!(g.feature_class, "amenity");
        assert_eq!(g.feature_type, "school");
    }

    #[test]
    fn error_payload_maps_to_bare_result() {
        let p = place(r#"{"error": "Unable to geocode"}"#);
        assert!(p.error.is_some());
        let at = Coordinate::new(18.0, 71.0);
        let g = p.into_geocode(Some(at)).unwrap();
        assert_eq!(g, GeocodeResult::bare(at));
    }

    #[test]
    fn search_without_coordinate_is_rejected() {
        assert!(place(r#"{"lat": "north", "display_name": "x"}"#)
            .into_geocode(None)
            .is_none());
    }

    #[test]
    fn non_string_address_values_are_dropped() {
        let p = place(
            r#"{"address": {"road": "MG Road", "ISO3166-2-lvl4": "IN-MH", "extra": {"a": 1}}}"#,
        );
        let g = p.into_geocode(Some(Coordinate::new(19.0, 73.0))).unwrap();
        assert_eq!(g.address.len(), 2);
        assert_eq!(g.address.get("road"), Some("MG Road"));
    }

    #[test]
    fn builds_reverse_url() {
        let client = NominatimClient::new(GeocoderConfig::default()).unwrap();
        let url = client
            .url("reverse", &[("lat", "19.5".to_string()), ("q", "a b".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://nominatim.openstreetmap.org/reverse?lat=19.5&q=a+b"
        );
    }
}
