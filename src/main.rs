use chrono::Utc;
use clap::{Parser, Subcommand};
use city_suggest::catalog::Catalog;
use city_suggest::server::{self, SuggestionsResponse};
use city_suggest::suggest::SuggestionEngine;
use std::path::PathBuf;
use std::sync::Arc;

/// City Suggest — city name autocomplete with location-aware ranking
///
/// Loads a tab-separated city dataset and ranks cities whose name contains
/// the query. Passing the latitude/longitude exactly as the service formats
/// them (5 decimals) boosts the matching city.
///
/// Examples:
///   city-suggest
///   city-suggest --data cities_canada-usa.tsv serve --port 9090
///   city-suggest query Londo
///   city-suggest query London --latitude 42.98339 --longitude -81.23304
#[derive(Parser)]
#[command(name = "city-suggest", version, about, long_about = None)]
struct Cli {
    /// Path to the TSV dataset (header row, name at column 1, lat/long at 4/5).
    #[arg(long, short = 'd', global = true, default_value = "cities_canada-usa.tsv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve GET /suggestions over HTTP (default).
    Serve {
        /// Interface to bind.
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on.
        #[arg(long, short = 'p', default_value_t = 9090)]
        port: u16,
    },

    /// Run one query and print the JSON response.
    Query {
        /// Search term (case-insensitive substring).
        term: String,

        /// Latitude hint, 5-decimal fixed point.
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        latitude: String,

        /// Longitude hint, 5-decimal fixed point.
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        longitude: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // ── Load catalog ────────────────────────────────────────────

    let (catalog, report) = Catalog::load(&cli.data).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    eprintln!("[{}] Loaded {} cities from {} ({} rows skipped)",
        Utc::now().format("%H:%M:%S"),
        catalog.len(),
        cli.data.display(),
        report.skipped,
    );

    let engine = SuggestionEngine::new(Arc::new(catalog));

    // ── Dispatch ────────────────────────────────────────────────

    match cli.command {
        None => server::start(engine, "0.0.0.0", 9090).await,
        Some(Command::Serve { host, port }) => server::start(engine, &host, port).await,
        Some(Command::Query { term, latitude, longitude }) => {
            let response = SuggestionsResponse {
                suggestions: engine.suggest(&term, &latitude, &longitude),
            };
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
