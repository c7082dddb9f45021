use super::{Coordinate, DailyWeather, RecommendationKind, RecommendationRecord, Season};
use serde::{Deserialize, Serialize};

/// The payload handed to rendering, export and messaging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationReport {
    pub coordinate: Coordinate,
    pub label: String,
    pub is_restricted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction_reason: Option<String>,
    pub district_key: Option<String>,
    pub district_name: Option<String>,
    pub district_note: Option<String>,
    pub season: Season,
    /// Last day of the weather series, when weather was fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<DailyWeather>,
    pub strategy: String,
    pub recommendations: Vec<RecommendationRecord>,
}

impl LocationReport {
    pub fn fruits(&self) -> impl Iterator<Item = &RecommendationRecord> {
        self.of_kind(RecommendationKind::Fruit)
    }

    pub fn crops(&self) -> impl Iterator<Item = &RecommendationRecord> {
        self.of_kind(RecommendationKind::Crop)
    }

    fn of_kind(&self, kind: RecommendationKind) -> impl Iterator<Item = &RecommendationRecord> {
        self.recommendations.iter().filter(move |r| r.kind == kind)
    }

    /// Short message body, e.g. for SMS.
    pub fn summary_text(&self) -> String {
        let names = if self.recommendations.is_empty() {
            "N/A".to_string()
        } else {
            self.recommendations
                .iter()
                .map(|r| r.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("AgriSense ({})\nCrops & Fruits: {}", self.label, names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CultivationGuide;

    fn report(recs: Vec<RecommendationRecord>) -> LocationReport {
        LocationReport {
            coordinate: Coordinate::new(20.0, 77.0),
            label: "Akola".into(),
            is_restricted: false,
            restriction_reason: None,
            district_key: None,
            district_name: None,
            district_note: None,
            season: Season::Kharif,
            weather: None,
            strategy: "district_profile".into(),
            recommendations: recs,
        }
    }

    #[test]
    fn summary_text_lists_names() {
        let guide = CultivationGuide::new("Loam", &[], &[], &[]);
        let recs = vec![
            RecommendationRecord::new("Orange", RecommendationKind::Fruit, Season::Kharif, &guide),
            RecommendationRecord::new("Cotton", RecommendationKind::Crop, Season::Kharif, &guide),
        ];
        let r = report(recs);
        assert_eq!(r.summary_text(), "AgriSense (Akola)\nCrops & Fruits: Orange, Cotton");
        assert_eq!(r.fruits().count(), 1);
        assert_eq!(r.crops().count(), 1);
    }

    #[test]
    fn summary_text_without_recommendations() {
        assert_eq!(report(Vec::new()).summary_text(), "AgriSense (Akola)\nCrops & Fruits: N/A");
    }
}
