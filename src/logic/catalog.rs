use super::reference;
use crate::error::{AgriSenseError, Result};
use crate::models::{is_snake_key, BoundingBox, DistrictProfile};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Read-only table of district profiles, kept in declaration order.
#[derive(Debug, Clone)]
pub struct DistrictCatalog {
    districts: Vec<DistrictProfile>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    districts: Vec<DistrictProfile>,
}

impl DistrictCatalog {
    /// Build a catalog, checking that keys are unique lowercase-snake and
    /// every center lies inside `bounds`.
    pub fn new(districts: Vec<DistrictProfile>, bounds: &BoundingBox) -> Result<Self> {
        let mut index = HashMap::with_capacity(districts.len());

        for (i, profile) in districts.iter().enumerate() {
            if !is_snake_key(&profile.key) {
                return Err(AgriSenseError::InvalidData(format!(
                    "district key '{}' is not lowercase snake case",
                    profile.key
                )));
            }
            if profile.name.trim().is_empty() {
                return Err(AgriSenseError::InvalidData(format!(
                    "district '{}' has an empty name",
                    profile.key
                )));
            }
            if !bounds.contains(&profile.center) {
                return Err(AgriSenseError::InvalidData(format!(
                    "district '{}' center ({}) lies outside the supported region",
                    profile.key, profile.center
                )));
            }
            if index.insert(profile.key.clone(), i).is_some() {
                return Err(AgriSenseError::InvalidData(format!(
                    "duplicate district key '{}'",
                    profile.key
                )));
            }
        }

        Ok(Self { districts, index })
    }

    /// The built-in Maharashtra catalog.
    pub fn reference() -> Self {
        let districts = reference::districts();
        let index = districts
            .iter()
            .enumerate()
            .map(|(i, d)| (d.key.clone(), i))
            .collect();
        Self { districts, index }
    }

    /// Parse a YAML document of the form `districts: [ {key, name, center: {lat, lon}, ...} ]`.
    pub fn from_yaml_str(yaml: &str, bounds: &BoundingBox) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::new(file.districts, bounds)
    }

    pub fn load(path: &Path, bounds: &BoundingBox) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            AgriSenseError::Config(format!("Failed to read catalog {:?}: {}", path, e))
        })?;
        let catalog = Self::from_yaml_str(&yaml, bounds)?;
        tracing::info!("Loaded {} districts from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn get(&self, key: &str) -> Option<&DistrictProfile> {
        self.index.get(key).map(|&i| &self.districts[i])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DistrictProfile> {
        self.districts.iter()
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }
}

impl Default for DistrictCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl<'a> IntoIterator for &'a DistrictCatalog {
    type Item = &'a DistrictProfile;
    type IntoIter = std::slice::Iter<'a, DistrictProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::reference::REGION_BOUNDS;

    #[test]
    fn reference_catalog_passes_validation() {
        let catalog = DistrictCatalog::new(reference::districts(), &REGION_BOUNDS).unwrap();
        assert_eq!(catalog.len(), DistrictCatalog::reference().len());
    }

    #[test]
    fn reference_catalog_contents() {
        let catalog = DistrictCatalog::reference();
        assert_eq!(catalog.len(), 36);

        let amravati = catalog.get("amravati").unwrap();
        assert_eq!(amravati.name, "Amravati");
        assert_eq!(amravati.fruits[0], "Orange");
        assert_eq!(amravati.crops[0], "Cotton");

        for key in ["mumbai_city", "mumbai_suburban"] {
            let d = catalog.get(key).unwrap();
            assert!(d.is_non_agricultural());
            assert!(d.note.is_some());
        }

        let urban = catalog.iter().filter(|d| d.is_non_agricultural()).count();
        assert_eq!(urban, 2);
    }

    #[test]
    fn declaration_order_is_kept() {
        let catalog = DistrictCatalog::reference();
        let first = catalog.iter().next().unwrap();
        assert_eq!(first.key, "ahmednagar");
        assert_eq!(catalog.iter().last().unwrap().key, "yavatmal");
    }

    #[test]
    fn rejects_duplicate_keys() {
        let a = DistrictProfile::new("pune", "Pune", 18.52, 73.85, &[], &["Wheat"]);
        let err = DistrictCatalog::new(vec![a.clone(), a], &REGION_BOUNDS).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn rejects_bad_key_and_out_of_region_center() {
        let bad_key = DistrictProfile::new("Pune", "Pune", 18.52, 73.85, &[], &[]);
        assert!(DistrictCatalog::new(vec![bad_key], &REGION_BOUNDS).is_err());

        let far = DistrictProfile::new("goa", "Goa", 15.3, 74.1, &[], &[]);
        assert!(DistrictCatalog::new(vec![far], &REGION_BOUNDS).is_err());
    }

    #[test]
    fn parses_yaml_catalog() {
        let yaml = r#"
districts:
  - key: latur
    name: Latur
    center: { lat: 18.4, lon: 76.5833 }
    fruits: [Grapes]
    crops: [Soybean, Pulses]
  - key: mumbai_city
    name: Mumbai City
    center: { lat: 19.076, lon: 72.8777 }
    note: Urban
"#;
        let catalog = DistrictCatalog::from_yaml_str(yaml, &REGION_BOUNDS).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("latur").unwrap().crops, vec!["Soybean", "Pulses"]);
        assert!(catalog.get("mumbai_city").unwrap().fruits.is_empty());
        assert!(catalog.get("pune").is_none());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(DistrictCatalog::from_yaml_str("districts: 3", &REGION_BOUNDS).is_err());
    }
}
