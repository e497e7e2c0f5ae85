//! Seasons command line tool
//!
//! Reads a scan configuration, finds the equinoxes and solstices in its range
//! and prints them.
//!
//! # Usage
//!
//! ```bash
//! # Use ./seasons.toml (or config/seasons.toml, ../seasons.toml)
//! cargo run --bin seasons
//!
//! # Explicit configuration file, JSON output
//! SEASONS_FORMAT=json cargo run --bin seasons -- my-range.toml
//! ```
//!
//! # Environment Variables
//!
//! - `SEASONS_FORMAT`: `text` or `json`, overrides `[output] format`
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use seasons::{OutputFormat, ScanConfig, SeasonalEvent, SeasonalMarkerScanner, MeeusSun};

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from {}", path);
            ScanConfig::from_file(&path)?
        }
        None => ScanConfig::from_default_location()?,
    };

    let format = match env::var("SEASONS_FORMAT") {
        Ok(value) => value.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
        Err(_) => config.output.format,
    };

    let request = config.to_request()?;
    info!(
        "Scanning JD {} to {} every {} days (high_precision={})",
        request.start().value(),
        request.end().value(),
        request.step().value(),
        request.high_precision()
    );

    let events = SeasonalMarkerScanner::new(MeeusSun).calculate_checked(&request);
    info!("Found {} events", events.len());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&events)?),
        OutputFormat::Text => {
            for event in &events {
                println!("{}", format_event(event));
            }
        }
    }

    Ok(())
}

fn format_event(event: &SeasonalEvent) -> String {
    let mut line = format!(
        "{:<18} JD {:.5}  {}",
        event.kind(),
        event.julian_date().value(),
        event.datetime().format("%Y-%m-%d %H:%M:%S UTC")
    );
    if let Some(declination) = event.declination() {
        line.push_str(&format!("  dec {:+.4}°", declination.value()));
    }
    line
}
