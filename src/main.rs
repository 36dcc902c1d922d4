//! # Provider Directory CLI (`pdq`)
//!
//! The `pdq` binary is the primary interface for the provider directory
//! query engine. It loads the configured dataset and answers region and
//! specialty queries, and can serve the same operations over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! pdq --config ./config/directory.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `pdq search [QUERY] [--state TOKEN]` | Filter providers by specialty and region |
//! | `pdq regions` | List distinct regions in the dataset |
//! | `pdq get <ID>` | Print one provider by record id |
//! | `pdq stats` | Dataset summary |
//! | `pdq validate` | Strict dataset checks (duplicate ids, ranges) |
//! | `pdq sources` | Show the configured data source and its health |
//! | `pdq serve http` | Start the JSON HTTP server |
//!
//! ## Examples
//!
//! ```bash
//! # Everything, unfiltered
//! pdq search
//!
//! # Substring match, case-insensitive
//! pdq search cardio --state maharashtra
//!
//! # Populate a state dropdown
//! pdq regions
//!
//! # Serve GET /providers, /regions, /health
//! pdq serve http
//! ```

mod cache;
mod config;
mod error;
mod get;
mod loader;
mod models;
mod query;
mod regions;
mod search;
mod server;
mod sources;
mod stats;
mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Provider Directory CLI — load a JSON provider directory and query it by
/// region and specialty.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/directory.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "pdq",
    about = "Provider Directory — query a JSON provider directory by region and specialty",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/directory.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Filter providers by specialty and region.
    ///
    /// Both tokens are optional substrings, compared case-insensitively
    /// and trimmed. With no arguments the whole collection is printed in
    /// source order. The specialty token matches either the primary
    /// speciality or the focus area.
    Search {
        /// Specialty token (e.g. `cardio`, `Dermatologist`).
        query: Option<String>,

        /// Region token, matched against the provider's state.
        #[arg(long)]
        state: Option<String>,
    },

    /// List the distinct regions in the dataset.
    ///
    /// Regions appear in first-seen order with 1-based ids. The ids are
    /// render keys for selection controls, not stable identifiers.
    Regions,

    /// Print one provider by record id.
    Get {
        /// Record id from the dataset.
        id: i64,
    },

    /// Print a dataset summary: counts, regions, fee range.
    Stats,

    /// Run strict dataset checks.
    ///
    /// Fails on duplicate record ids; warns on empty names, out-of-range
    /// ratings, and records without a state.
    Validate,

    /// Show the configured data source and its health.
    Sources,

    /// Start the JSON HTTP server.
    ///
    /// Exposes `GET /providers`, `GET /regions`, and `GET /health` on the
    /// address configured in `[server].bind`.
    Serve {
        #[command(subcommand)]
        service: ServeService,
    },
}

/// Server subcommands.
#[derive(Subcommand)]
enum ServeService {
    /// Serve the directory over HTTP.
    Http,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Search { query, state } => {
            search::run_search(
                &cfg,
                query.as_deref().unwrap_or(""),
                state.as_deref().unwrap_or(""),
            )
            .await?;
        }
        Commands::Regions => {
            regions::run_regions(&cfg).await?;
        }
        Commands::Get { id } => {
            get::run_get(&cfg, id).await?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg).await?;
        }
        Commands::Validate => {
            validate::run_validate(&cfg).await?;
        }
        Commands::Sources => {
            sources::run_sources(&cfg)?;
        }
        Commands::Serve { service } => match service {
            ServeService::Http => {
                server::run_server(&cfg).await?;
            }
        },
    }

    Ok(())
}
