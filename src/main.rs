use agrisense::cli::{Cli, Commands, OutputArgs};
use agrisense::config::Config;
use agrisense::datasources::{NominatimClient, OpenMeteoClient};
use agrisense::logic::AdvisoryEngine;
use agrisense::models::{
    AddressTags, Coordinate, DailyWeather, GeocodeResult, LocationReport, Season,
    WeatherSummary,
};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Init => {
            Config::setup_interactive().context("interactive setup failed")?;
        }
        Commands::Check => run_check(cli.config).await?,
        Commands::Districts { json } => {
            let config = Config::load_or_default(cli.config)?;
            let engine = AdvisoryEngine::from_config(&config.engine)?;
            print_districts(&engine, json)?;
        }
        Commands::Classify {
            point,
            name,
            address,
            feature_class,
            feature_type,
            output,
        } => {
            let mut config = Config::load_or_default(cli.config)?;
            output.apply_overrides(&mut config.engine);
            let engine = AdvisoryEngine::from_config(&config.engine)?;
            let coordinate = Coordinate::try_new(point.lat, point.lon)?;
            let geocode = GeocodeResult::bare(coordinate)
                .with_display_name(name)
                .with_address(address.into_iter().collect::<AddressTags>())
                .with_feature(feature_class, feature_type);
            let report = engine.evaluate(&geocode, season_for(&output));
            print_report(&report, output.json)?;
        }
        Commands::Lookup { point, output } => {
            let mut config = Config::load_or_default(cli.config)?;
            output.apply_overrides(&mut config.engine);
            let engine = AdvisoryEngine::from_config(&config.engine)?;
            let coordinate = Coordinate::try_new(point.lat, point.lon)?;
            let geocode = reverse_or_bare(&config, coordinate).await;
            let weather = weather_for(&config, coordinate).await;
            let report =
                engine.evaluate_with_weather(&geocode, season_for(&output), weather.as_ref());
            print_report(&report, output.json)?;
        }
        Commands::Search { query, output } => {
            let mut config = Config::load_or_default(cli.config)?;
            output.apply_overrides(&mut config.engine);
            if !config.geocoder.enabled {
                anyhow::bail!("search needs the geocoder; enable it in config.yaml");
            }
            let engine = AdvisoryEngine::from_config(&config.engine)?;
            let client = NominatimClient::new(config.geocoder.clone())?;
            let geocode = client
                .search(&query)
                .await
                .with_context(|| format!("searching for '{}'", query))?;
            let weather = weather_for(&config, geocode.coordinate).await;
            let report =
                engine.evaluate_with_weather(&geocode, season_for(&output), weather.as_ref());
            print_report(&report, output.json)?;
        }
    }

    Ok(())
}

fn season_for(output: &OutputArgs) -> Season {
    output.month.map(Season::from_month).unwrap_or_else(Season::current)
}

/// The engine accepts a bare coordinate, so a failed lookup is not fatal.
async fn reverse_or_bare(config: &Config, coordinate: Coordinate) -> GeocodeResult {
    if !config.geocoder.enabled {
        return GeocodeResult::bare(coordinate);
    }

    let result = match NominatimClient::new(config.geocoder.clone()) {
        Ok(client) => client.reverse(coordinate).await,
        Err(e) => Err(e),
    };

    result.unwrap_or_else(|e| {
        tracing::warn!("Reverse geocoding failed, continuing without metadata: {}", e);
        GeocodeResult::bare(coordinate)
    })
}

/// A failed fetch leaves the report without weather; the climate strategy
/// then defers to the district profile.
async fn weather_for(config: &Config, coordinate: Coordinate) -> Option<WeatherSummary> {
    if !config.weather.enabled {
        return None;
    }

    match OpenMeteoClient::new(config.weather.clone())
        .fetch_daily(coordinate)
        .await
    {
        Ok(summary) => Some(summary),
        Err(e) => {
            tracing::warn!("Weather fetch failed, continuing without it: {}", e);
            None
        }
    }
}

fn print_report(report: &LocationReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("{}", report.label);
    println!("  Coordinate: {}", report.coordinate);
    println!("  Season:     {}", report.season);

    match &report.district_name {
        Some(name) => println!("  District:   {}", name),
        None => println!("  District:   (outside supported region)"),
    }
    if let Some(note) = &report.district_note {
        println!("  Note:       {}", note);
    }
    if let Some(day) = &report.weather {
        println!("  Weather:    {}", weather_line(day));
    }

    if report.is_restricted {
        println!();
        println!("Not a farming location.");
        if let Some(reason) = &report.restriction_reason {
            println!("  Reason: {}", reason);
        }
        return Ok(());
    }

    println!();
    if report.recommendations.is_empty() {
        println!("No recommendations for this district.");
        return Ok(());
    }

    println!("Recommendations ({}):", report.strategy);
    for rec in &report.recommendations {
        println!("  {} {} ({})", rec.kind.symbol(), rec.name, rec.kind);
        println!("      Soil:        {}", rec.soil);
        println!("      Fertilizers: {}", rec.fertilizers.join(", "));
        println!("      Pesticides:  {}", rec.pesticides.join(", "));
        println!("      Schedule:    {}", rec.schedule.join("; "));
    }

    println!();
    println!("{}", report.summary_text());
    Ok(())
}

fn weather_line(day: &DailyWeather) -> String {
    let reading = |value: Option<f64>, unit: &str| match value {
        Some(v) => format!("{:.1}{}", v, unit),
        None => "n/a".to_string(),
    };
    format!(
        "{} max {}, humidity {}, rain {}",
        day.date,
        reading(day.max_temp_c, "°C"),
        reading(day.humidity_percent, "%"),
        reading(day.precipitation_mm, " mm")
    )
}

fn print_districts(engine: &AdvisoryEngine, json: bool) -> anyhow::Result<()> {
    if json {
        let districts: Vec<_> = engine.catalog().iter().collect();
        println!("{}", serde_json::to_string_pretty(&districts)?);
        return Ok(());
    }

    for profile in engine.catalog() {
        println!(
            "{:<18} {:<20} {:>8.4}, {:>8.4}",
            profile.key, profile.name, profile.center.lat, profile.center.lon
        );
        println!("    {}", profile.notice().replace('\n', "\n    "));
    }
    Ok(())
}

async fn run_check(config_path: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let config = Config::load(config_path).context("loading configuration")?;
    println!("Config: OK");

    let engine = AdvisoryEngine::from_config(&config.engine).context("building engine")?;
    println!(
        "Catalog: OK ({} districts, strategy {})",
        engine.catalog().len(),
        config.engine.strategy
    );

    // Amravati district center
    let amravati = Coordinate::new(20.9374, 77.7796);

    if config.geocoder.enabled {
        let client = NominatimClient::new(config.geocoder.clone())?;
        match client.reverse(amravati).await {
            Ok(_) => println!("Nominatim: OK"),
            Err(e) => println!("Nominatim: FAILED ({})", e),
        }
    } else {
        println!("Nominatim: disabled");
    }

    if config.weather.enabled {
        match OpenMeteoClient::new(config.weather.clone())
            .fetch_daily(amravati)
            .await
        {
            Ok(summary) => println!("Open-Meteo: OK ({} days)", summary.days.len()),
            Err(e) => println!("Open-Meteo: FAILED ({})", e),
        }
    } else {
        println!("Open-Meteo: disabled");
    }

    Ok(())
}
