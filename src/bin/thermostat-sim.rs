//! Host simulator: runs the thermostat controller against a room model.
//!
//! Without a scenario the built-in hot-afternoon / cold-night profile is
//! used.  Actuator changes are logged as they happen; a JSON summary is
//! printed at the end.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tracing_subscriber::filter::LevelFilter;

use thermostat::config::SimConfig;
use thermostat::sim::Simulation;

/// Run the thermostat controller against a simulated room.
#[derive(Parser, Debug)]
#[command(name = "thermostat-sim", version, about)]
struct Cli {
    /// Log every tick, not just actuator changes
    #[arg(short, long)]
    verbose: bool,

    /// JSON scenario file (defaults to the built-in day/night profile)
    scenario: Option<PathBuf>,
}

fn load_scenario(path: Option<&PathBuf>) -> Result<SimConfig> {
    let Some(path) = path else {
        info!("No scenario given, using built-in profile");
        return Ok(SimConfig::default());
    };
    info!("Loading scenario from {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing scenario {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO })
        .init();

    info!("thermostat-sim v{}", env!("CARGO_PKG_VERSION"));

    let config = load_scenario(cli.scenario.as_ref())?;
    let mut sim = Simulation::new(config).context("invalid scenario")?;
    let summary = sim.run();

    info!(
        "Done: {} ticks, indoor {:.1}..{:.1}F, final {:.1}F",
        summary.ticks, summary.min_indoor_f, summary.max_indoor_f, summary.final_indoor_f
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
