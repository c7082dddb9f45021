use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Agronomic profile of one administrative district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictProfile {
    pub key: String,
    pub name: String,
    pub center: Coordinate,
    #[serde(default)]
    pub fruits: Vec<String>,
    #[serde(default)]
    pub crops: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DistrictProfile {
    pub fn new(key: &str, name: &str, lat: f64, lon: f64, fruits: &[&str], crops: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            center: Coordinate::new(lat, lon),
            fruits: fruits.iter().map(|s| s.to_string()).collect(),
            crops: crops.iter().map(|s| s.to_string()).collect(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    /// True when the district lists neither fruits nor crops.
    pub fn is_non_agricultural(&self) -> bool {
        self.fruits.is_empty() && self.crops.is_empty()
    }

    /// Notification body, e.g. `District: Akola\nFruits: Orange\nCrops: Cotton`.
    pub fn notice(&self) -> String {
        format!(
            "District: {}\nFruits: {}\nCrops: {}",
            self.name,
            join_or_na(&self.fruits),
            join_or_na(&self.crops)
        )
    }
}

fn join_or_na(items: &[String]) -> String {
    if items.is_empty() {
        "N/A".to_string()
    } else {
        items.join(", ")
    }
}

/// Keys are lowercase ASCII words joined by single underscores.
pub fn is_snake_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .split('_')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_lowercase()))
}
