//! CLI tool for the geocode cache.
//!
//! Resolves and inspects cached geocoding results without going through the
//! HTTP API. Uses the same environment configuration as the server.
//!
//! # Usage
//!
//! ```bash
//! # Resolve an address (writes to the cache on a miss)
//! cargo run --bin geocache -- resolve "1600 Broadway, Denver, CO"
//!
//! # Show what is cached for an address
//! cargo run --bin geocache -- lookup "1600 broadway, denver, co"
//!
//! # Check the cache backend
//! cargo run --bin geocache -- ping
//! ```

use project_tracker::application::services::{GeocodeOutcome, GeocodeService};
use project_tracker::config;
use project_tracker::domain::entities::{GeoKey, GeoResult};
use project_tracker::infrastructure::cache::REDIS_BACKEND;
use project_tracker::server::{build_geocode_service, connect_cache};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for the geocode cache.
#[derive(Parser)]
#[command(name = "geocache")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an address through the cache, calling the geocoder on a miss
    Resolve {
        /// Free-text address
        address: String,
    },

    /// Show the cached result for an address without calling the geocoder
    Lookup {
        /// Free-text address
        address: String,
    },

    /// Check the cache backend
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let cache = connect_cache(&config).await;
    if config.is_cache_enabled() && cache.backend() != REDIS_BACKEND {
        println!(
            "{} Redis unreachable, results are not persisted",
            "!".yellow().bold()
        );
    }

    let service = build_geocode_service(&config, Arc::clone(&cache))?;

    match cli.command {
        Commands::Resolve { address } => resolve(&service, &address).await,
        Commands::Lookup { address } => lookup(&service, &address).await,
        Commands::Ping => {
            if cache.health_check().await {
                println!("{} {} cache reachable", "✓".green().bold(), cache.backend());
            } else {
                println!("{} {} cache unreachable", "✗".red().bold(), cache.backend());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn resolve(service: &GeocodeService, address: &str) {
    let outcome = service.resolve_with_outcome(address).await;

    let label = match &outcome {
        GeocodeOutcome::Hit(_) | GeocodeOutcome::Resolved(_) => outcome.label().green(),
        GeocodeOutcome::DegenerateInput | GeocodeOutcome::EmptyResult => {
            outcome.label().yellow()
        }
        GeocodeOutcome::ProviderError { .. } | GeocodeOutcome::ParseError => {
            outcome.label().red()
        }
    };

    println!("{}  {}", "Key:".bold(), GeoKey::from_address(address));
    println!("{}  {}", "Outcome:".bold(), label);
    if let GeocodeOutcome::ProviderError { reason } = &outcome {
        println!("{}  {}", "Reason:".bold(), reason);
    }
    print_result(outcome.result());
}

async fn lookup(service: &GeocodeService, address: &str) {
    println!("{}  {}", "Key:".bold(), GeoKey::from_address(address));

    match service.cached(address).await {
        Some(result) => print_result(result),
        None => println!("{}", "Not cached".dimmed()),
    }
}

fn print_result(result: GeoResult) {
    match result.coordinates() {
        Some((lat, lon)) => println!("{}  {}, {}", "Coords:".bold(), lat, lon),
        None if result.is_none() => println!("{}  {}", "Coords:".bold(), "none".yellow()),
        None => println!(
            "{}  lat={:?} lon={:?}",
            "Coords:".bold(),
            result.lat,
            result.lon
        ),
    }
}
