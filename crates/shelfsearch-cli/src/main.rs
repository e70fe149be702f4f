mod snapshot;

use std::path::PathBuf;

use clap::Parser;
use shelfsearch_core::Coordinates;
use shelfsearch_engine::SearchEngine;
use tracing_subscriber::EnvFilter;

use crate::snapshot::JsonFileSource;

#[derive(Debug, Parser)]
#[command(name = "shelfsearch")]
#[command(about = "Find items across store snapshots")]
struct Cli {
    /// Free-text query.
    query: String,

    /// Path to the item snapshot (JSON array).
    #[arg(long)]
    items: PathBuf,

    /// Path to the approved-store snapshot (JSON array).
    #[arg(long)]
    stores: PathBuf,

    /// Requester latitude in decimal degrees.
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Requester longitude in decimal degrees.
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Emit results as pretty-printed JSON instead of a plain listing.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = shelfsearch_core::load_search_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let requester_location = match (cli.lat, cli.lng) {
        (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
        _ => None,
    };

    let source = JsonFileSource::new(cli.items, cli.stores);
    let engine = SearchEngine::with_config(source, config);
    let results = engine.search(&cli.query, requester_location).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("no results");
        return Ok(());
    }
    for (position, result) in results.iter().enumerate() {
        let distance = result
            .distance_km
            .map_or_else(|| "-".to_string(), |km| format!("{km} km"));
        println!(
            "{:>2}. {} @ {} ({}) {}",
            position + 1,
            result.item.name,
            result.store.name,
            result.store.address,
            distance
        );
    }
    Ok(())
}
