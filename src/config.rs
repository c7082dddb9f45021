use crate::error::{AgriSenseError, Result};
use crate::logic::reference;
use crate::logic::strategies::{EmptyDistrictPolicy, StrategyKind};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocoderConfig {
    #[serde(default = "default_geocoder_url")]
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying User-Agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_url")]
    pub base_url: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub strategy: StrategyKind,
    #[serde(default)]
    pub empty_district_policy: EmptyDistrictPolicy,
    #[serde(default = "default_proximity")]
    pub proximity_threshold_deg: f64,
    #[serde(default = "default_cutoff")]
    pub nearest_center_cutoff_deg: f64,
    /// Optional YAML catalog replacing the built-in districts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Added to the built-in restriction keywords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_keywords: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org".into()
}

fn default_user_agent() -> String {
    concat!("agrisense/", env!("CARGO_PKG_VERSION")).into()
}

fn default_weather_url() -> String {
    "https://api.open-meteo.com/v1".into()
}

fn default_proximity() -> f64 {
    reference::CITY_PROXIMITY_DEG
}

fn default_cutoff() -> f64 {
    reference::NEAREST_CENTER_CUTOFF_DEG
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoder_url(),
            user_agent: default_user_agent(),
            enabled: true,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_url(),
            enabled: true,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            empty_district_policy: EmptyDistrictPolicy::default(),
            proximity_threshold_deg: default_proximity(),
            nearest_center_cutoff_deg: default_cutoff(),
            catalog_path: None,
            extra_keywords: Vec::new(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("proximity_threshold_deg", self.proximity_threshold_deg),
            ("nearest_center_cutoff_deg", self.nearest_center_cutoff_deg),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AgriSenseError::Config(format!(
                    "engine.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AgriSenseError::Config(format!(
                "Config file not found at {:?}. Run `agrisense init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgriSenseError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_yaml_str(&config_str)?;
        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults. A file that
    /// exists and fails to parse is still an error.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        if Self::exists(config_override.as_ref()) {
            Self::load(config_override)
        } else {
            tracing::debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // Substitute environment variables
        let yaml = Self::substitute_env_vars(yaml)?;

        let config: Config = serde_yaml::from_str(&yaml)
            .map_err(|e| AgriSenseError::Config(format!("Failed to parse config: {}", e)))?;
        config.engine.validate()?;
        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("agrisense").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/agrisense/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgriSenseError::Config("Cannot determine config directory".into()))?
            .join("agrisense");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        let input_err = |e: dialoguer::Error| AgriSenseError::Config(format!("Input error: {}", e));

        println!();
        println!("Let's set up AgriSense!");
        println!();

        println!("Geocoding (Nominatim)");
        let geocoder_url: String = Input::new()
            .with_prompt("  Base URL")
            .default(default_geocoder_url())
            .interact_text()
            .map_err(input_err)?;

        let user_agent: String = Input::new()
            .with_prompt("  User-Agent (include a contact address)")
            .default(default_user_agent())
            .interact_text()
            .map_err(input_err)?;

        println!();

        println!("Recommendations");
        let strategies = [StrategyKind::DistrictProfile, StrategyKind::ClimateBand];
        let labels: Vec<&str> = strategies.iter().map(|s| s.as_str()).collect();
        let strategy_idx = Select::new()
            .with_prompt("  Strategy")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(input_err)?;

        let policies = [EmptyDistrictPolicy::Empty, EmptyDistrictPolicy::GenericFallback];
        let policy_idx = Select::new()
            .with_prompt("  Districts without farmland (e.g. Mumbai) show")
            .items(&["nothing", "regional defaults"])
            .default(0)
            .interact()
            .map_err(input_err)?;

        println!();

        let config = Config {
            geocoder: GeocoderConfig {
                base_url: geocoder_url,
                user_agent,
                enabled: true,
            },
            weather: WeatherConfig::default(),
            engine: EngineConfig {
                strategy: strategies[strategy_idx],
                empty_district_policy: policies[policy_idx],
                ..EngineConfig::default()
            },
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AgriSenseError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# AgriSense Configuration\n\
             # Generated by `agrisense init`\n\
             # Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| AgriSenseError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert_eq!(config.engine.strategy, StrategyKind::DistrictProfile);
        assert_eq!(config.engine.empty_district_policy, EmptyDistrictPolicy::Empty);
        assert!((config.engine.proximity_threshold_deg - 0.045).abs() < 1e-12);
        assert!((config.engine.nearest_center_cutoff_deg - 1.0).abs() < 1e-12);
        assert!(config.geocoder.enabled);
        assert!(config.geocoder.user_agent.starts_with("agrisense/"));
    }

    #[test]
    fn parses_engine_section() {
        let yaml = r#"
engine:
  strategy: climate_band
  empty_district_policy: generic_fallback
  proximity_threshold_deg: 0.03
  extra_keywords: [quarry, brick kiln]
weather:
  enabled: false
"#;
        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(config.engine.strategy, StrategyKind::ClimateBand);
        assert_eq!(
            config.engine.empty_district_policy,
            EmptyDistrictPolicy::GenericFallback
        );
        assert!((config.engine.proximity_threshold_deg - 0.03).abs() < 1e-12);
        assert_eq!(config.engine.extra_keywords, vec!["quarry", "brick kiln"]);
        assert!(!config.weather.enabled);
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1");
    }

    #[test]
    fn rejects_negative_threshold() {
        let err = Config::from_yaml_str("engine:\n  nearest_center_cutoff_deg: -1\n").unwrap_err();
        assert!(err.to_string().contains("nearest_center_cutoff_deg"));
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(Config::from_yaml_str("engine:\n  strategy: astrology\n").is_err());
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("AGRISENSE_TEST_UA", "farm-bot/1.0 (ops@example.org)");
        let config =
            Config::from_yaml_str("geocoder:\n  user_agent: \"${AGRISENSE_TEST_UA}\"\n").unwrap();
        assert_eq!(config.geocoder.user_agent, "farm-bot/1.0 (ops@example.org)");
    }

    #[test]
    fn unset_variables_are_left_in_place() {
        let out = Config::substitute_env_vars("url: ${AGRISENSE_SURELY_UNSET_VAR}").unwrap();
        assert_eq!(out, "url: ${AGRISENSE_SURELY_UNSET_VAR}");
    }

    #[test]
    fn missing_override_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/agrisense/config.yaml");
        assert!(Config::load(Some(path.clone())).is_err());
        assert!(Config::load_or_default(Some(path)).is_ok());
    }
}
