use super::Season;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Fruit,
    Crop,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Fruit => "fruit",
            RecommendationKind::Crop => "crop",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RecommendationKind::Fruit => "🍎",
            RecommendationKind::Crop => "🌾",
        }
    }
}

impl std::fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cultivation guidance shared by every record of the same origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultivationGuide {
    pub soil: String,
    pub fertilizers: Vec<String>,
    pub pesticides: Vec<String>,
    pub schedule: Vec<String>,
}

impl CultivationGuide {
    pub fn new(soil: &str, fertilizers: &[&str], pesticides: &[&str], schedule: &[&str]) -> Self {
        Self {
            soil: soil.to_string(),
            fertilizers: fertilizers.iter().map(|s| s.to_string()).collect(),
            pesticides: pesticides.iter().map(|s| s.to_string()).collect(),
            schedule: schedule.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub name: String,
    pub kind: RecommendationKind,
    pub season: Season,
    pub soil: String,
    pub fertilizers: Vec<String>,
    pub pesticides: Vec<String>,
    pub schedule: Vec<String>,
}

impl RecommendationRecord {
    pub fn new(
        name: impl Into<String>,
        kind: RecommendationKind,
        season: Season,
        guide: &CultivationGuide,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            season,
            soil: guide.soil.clone(),
            fertilizers: guide.fertilizers.clone(),
            pesticides: guide.pesticides.clone(),
            schedule: guide.schedule.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&RecommendationKind::Fruit).unwrap();
        assert_eq!(json, "\"fruit\"");
        assert_eq!(RecommendationKind::Crop.to_string(), "crop");
    }

    #[test]
    fn record_copies_guide() {
        let guide = CultivationGuide::new("Loam", &["Urea"], &["Neem Oil"], &["Sowing: June"]);
        let record =
            RecommendationRecord::new("Wheat", RecommendationKind::Crop, Season::Rabi, &guide);
        assert_eq!(record.soil, "Loam");
        assert_eq!(record.fertilizers, vec!["Urea"]);
        assert_eq!(record.season, Season::Rabi);
        assert_eq!(record.kind, RecommendationKind::Crop);
    }
}
