use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the weather collaborator's daily series. Any field may be
/// missing for a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeather {
    pub date: NaiveDate,
    pub max_temp_c: Option<f64>,
    pub humidity_percent: Option<f64>,
    pub precipitation_mm: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub days: Vec<DailyWeather>,
}

impl WeatherSummary {
    pub fn new(days: Vec<DailyWeather>) -> Self {
        Self { days }
    }

    /// The last day of the series is treated as the current reading.
    pub fn latest(&self) -> Option<&DailyWeather> {
        self.days.last()
    }

    pub fn average_max_temp(&self) -> Option<f64> {
        average(self.days.iter().filter_map(|d| d.max_temp_c))
    }

    pub fn average_humidity(&self) -> Option<f64> {
        average(self.days.iter().filter_map(|d| d.humidity_percent))
    }

    /// Mean daily precipitation, ignoring negative sentinel values.
    pub fn average_precipitation(&self) -> Option<f64> {
        average(
            self.days
                .iter()
                .filter_map(|d| d.precipitation_mm)
                .filter(|p| *p >= 0.0),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
