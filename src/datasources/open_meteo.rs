use crate::config::WeatherConfig;
use crate::error::{AgriSenseError, Result};
use crate::models::{Coordinate, DailyWeather, WeatherSummary};
use chrono::NaiveDate;
use serde::Deserialize;

const DAILY_FIELDS: &str = "temperature_2m_max,precipitation_sum,relative_humidity_2m_max";

pub struct OpenMeteoClient {
    client: reqwest::Client,
    config: WeatherConfig,
}

// Open-Meteo forecast response, daily block only
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    daily: Option<DailyBlock>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    relative_humidity_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
}

fn at(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}

impl DailyBlock {
    /// Days with an unparseable date are skipped; short value arrays leave
    /// the trailing days' readings empty.
    fn into_summary(self) -> WeatherSummary {
        let days = self
            .time
            .iter()
            .enumerate()
            .filter_map(|(i, date)| {
                let date = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::warn!("Skipping weather day '{}': {}", date, e);
                        return None;
                    }
                };
                Some(DailyWeather {
                    date,
                    max_temp_c: at(&self.temperature_2m_max, i),
                    humidity_percent: at(&self.relative_humidity_2m_max, i),
                    precipitation_mm: at(&self.precipitation_sum, i),
                })
            })
            .collect();
        WeatherSummary::new(days)
    }
}

impl OpenMeteoClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Daily max temperature, max humidity and precipitation for the
    /// forecast window, in the location's own timezone.
    pub async fn fetch_daily(&self, coordinate: Coordinate) -> Result<WeatherSummary> {
        let base = format!("{}/forecast", self.config.base_url.trim_end_matches('/'));
        let url = reqwest::Url::parse_with_params(
            &base,
            &[
                ("latitude", coordinate.lat.to_string()),
                ("longitude", coordinate.lon.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ],
        )
        .map_err(|e| AgriSenseError::Config(format!("Invalid weather URL {}: {}", base, e)))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AgriSenseError::DataSourceUnavailable(format!("Open-Meteo: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgriSenseError::DataSourceUnavailable(format!(
                "Open-Meteo returned {}: {}",
                status, body
            )));
        }

        let parsed: ForecastResponse = response.json().await.map_err(|e| {
            AgriSenseError::DataSourceUnavailable(format!(
                "Failed to parse Open-Meteo response: {}",
                e
            ))
        })?;

        Self::convert_response(parsed)
    }

    fn convert_response(response: ForecastResponse) -> Result<WeatherSummary> {
        let daily = response.daily.ok_or_else(|| {
            AgriSenseError::InvalidData("Open-Meteo response has no daily block".into())
        })?;
        let summary = daily.into_summary();
        tracing::debug!("Fetched {} days of weather", summary.days.len());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<WeatherSummary> {
        OpenMeteoClient::convert_response(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn maps_daily_series() {
        let summary = parse(
            r#"{
                "latitude": 20.94, "longitude": 77.78,
                "daily": {
                    "time": ["2024-07-14", "2024-07-15", "2024-07-16"],
                    "temperature_2m_max": [31.2, 29.8, null],
                    "precipitation_sum": [12.4, 0.0, 3.1],
                    "relative_humidity_2m_max": [88, 91, 95]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(summary.days.len(), 3);
        let latest = summary.latest().unwrap();
        assert_eq!(latest.date, NaiveDate::from_ymd_opt(2024, 7, 16).unwrap());
        assert_eq!(latest.max_temp_c, None);
        assert_eq!(latest.humidity_percent, Some(95.0));
        assert_eq!(latest.precipitation_mm, Some(3.1));
        assert!((summary.average_max_temp().unwrap() - 30.5).abs() < 1e-9);
    }

    #[test]
    fn short_value_arrays_leave_gaps() {
        let summary = parse(
            r#"{"daily": {"time": ["2024-01-01", "2024-01-02"], "temperature_2m_max": [24.0]}}"#,
        )
        .unwrap();
        assert_eq!(summary.days[1].max_temp_c, None);
        assert_eq!(summary.days[0].humidity_percent, None);
    }

    #[test]
    fn bad_dates_are_skipped() {
        let summary = parse(r#"{"daily": {"time": ["yesterday", "2024-01-02"]}}"#).unwrap();
        assert_eq!(summary.days.len(), 1);
    }

    #[test]
    fn missing_daily_block_is_invalid() {
        assert!(matches!(
            parse(r#"{"error": true, "reason": "Latitude must be in range"}"#),
            Err(AgriSenseError::InvalidData(_))
        ));
    }
}
