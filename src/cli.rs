use crate::config::EngineConfig;
use crate::error::{AgriSenseError, Result};
use crate::logic::StrategyKind;
use crate::models::parse_address_pair;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agrisense",
    version,
    about = "Land-use classification and crop recommendations for Maharashtra"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a point from metadata given on the command line (offline)
    Classify {
        #[command(flatten)]
        point: PointArgs,

        /// Display name / free-text label of the point
        #[arg(long, default_value = "")]
        name: String,

        /// Address tag, repeatable (e.g. --address road="Marine Drive")
        #[arg(long = "address", value_name = "KEY=VALUE", value_parser = parse_address_pair)]
        address: Vec<(String, String)>,

        /// Geocoder feature class (e.g. amenity, highway)
        #[arg(long = "class", default_value = "")]
        feature_class: String,

        /// Geocoder feature type (e.g. hospital, residential)
        #[arg(long = "type", default_value = "")]
        feature_type: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Reverse-geocode a point, then classify it
    Lookup {
        #[command(flatten)]
        point: PointArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Look up a place by name, then classify it
    Search {
        /// Free-text place query
        query: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the district catalog
    Districts {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Re-run interactive setup
    Init,
    /// Validate config and test connections
    Check,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct PointArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Month (1-12) used for the season; defaults to the current month
    #[arg(long, value_parser = parse_month)]
    pub month: Option<u32>,

    /// Recommendation strategy, overriding config (district_profile, climate_band)
    #[arg(long)]
    pub strategy: Option<StrategyKind>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl OutputArgs {
    pub fn apply_overrides(&self, engine: &mut EngineConfig) {
        if let Some(strategy) = self.strategy {
            engine.strategy = strategy;
        }
    }
}

fn parse_month(s: &str) -> Result<u32> {
    let month: u32 = s
        .trim()
        .parse()
        .map_err(|_| AgriSenseError::InvalidData(format!("'{}' is not a month number", s)))?;
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(AgriSenseError::InvalidData(format!(
            "month must be 1-12, got {}",
            month
        )))
    }
}
