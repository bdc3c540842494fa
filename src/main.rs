use anyhow::{bail, Context};
use clap::Parser;
use eco_route_viz::sdk::{
    config::{ClientConfig, MapConfig},
    map::{InMemoryMap, RouteMap},
    routing::{Coordinate, RemoteRouteOptimizer},
    util::log::init_logging,
    view::{RequestState, RouteDetails, RouteViewModel, SubmitControl, WeatherPanel},
};
use std::{fs, path::PathBuf};

/// Ask the route-optimisation service for a route and export the drawn map layers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start coordinates as "latitude,longitude" (e.g., "51.5074,-0.1278")
    #[arg(short, long, allow_hyphen_values = true)]
    start: String,

    /// End coordinates as "latitude,longitude" (e.g., "48.8566,2.3522")
    #[arg(short, long, allow_hyphen_values = true)]
    end: String,

    /// Where to write the route layers as GeoJSON
    #[arg(short, long, default_value = "route_map.geojson")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    // --- 1. Configuration ---
    let client_config = ClientConfig::from_env().context("Invalid route client configuration")?;
    let map_config = MapConfig::from_env();
    log::info!("Using route service at {}", client_config.base_url);

    // --- 2. Wiring ---
    let optimizer =
        RemoteRouteOptimizer::new(client_config).context("Failed to build HTTP client")?;
    let start_hint = cli.start.parse::<Coordinate>().ok();
    let map = RouteMap::new(InMemoryMap::new(&map_config, start_hint));
    let mut view = RouteViewModel::new(optimizer, map);

    // --- 3. Submit ---
    view.set_start_input(cli.start.as_str()).ok();
    view.set_end_input(cli.end.as_str()).ok();
    log::debug!("{:?}", SubmitControl::for_state(view.state()));

    if let Err(err) = view.submit_and_wait().await {
        bail!("{err}");
    }

    // --- 4. Output ---
    let result = match view.state() {
        RequestState::Success(result) => result,
        RequestState::Failure(message) => bail!("{message}"),
        other => bail!("Unexpected request state: {other:?}"),
    };
    log::info!("{}", RouteDetails(result));
    log::info!("{}", WeatherPanel(&result.weather));

    let geojson = serde_json::to_string_pretty(&view.observer().surface().to_geojson())?;
    fs::write(&cli.output, geojson)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    log::info!("✅ Route layers written to {}", cli.output.display());

    Ok(())
}
