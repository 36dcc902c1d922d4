//! # Provider Directory
//!
//! A query engine for a healthcare-provider directory: load a JSON array of
//! provider records from a configured data source and answer two questions
//! over the loaded snapshot — which regions exist, and which providers match
//! a region token and a specialty token.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────┐   ┌───────────────┐
//! │ Data source  │──▶│  Loader   │──▶│   Snapshot    │
//! │ file/url/raw │   │ validate  │   │ (immutable)   │
//! └──────────────┘   └──────────┘   └──────┬────────┘
//!                                          │
//!                        ┌─────────────────┤
//!                        ▼                 ▼
//!                   ┌──────────┐     ┌──────────┐
//!                   │   CLI    │     │   HTTP   │
//!                   │  (pdq)   │     │  (axum)  │
//!                   └──────────┘     └──────────┘
//! ```
//!
//! The loader performs ingestion and shape validation only; all matching and
//! normalization lives in [`query`], which is purely functional over the
//! snapshot handed to it. Snapshots are immutable, so any number of callers
//! may query one concurrently.
//!
//! ## Quick start
//!
//! ```bash
//! pdq regions                              # distinct states in the dataset
//! pdq search cardio --state maharashtra    # substring filter
//! pdq serve http                           # start the JSON API
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Provider record data types |
//! | [`error`] | Loader failure kinds |
//! | [`loader`] | Data source abstraction and payload validation |
//! | [`query`] | Region derivation and the search filter |
//! | [`cache`] | Snapshot caching policy (none / ttl / static) |
//! | [`server`] | JSON HTTP server |

pub mod cache;
pub mod config;
pub mod error;
pub mod get;
pub mod loader;
pub mod models;
pub mod query;
pub mod regions;
pub mod search;
pub mod server;
pub mod sources;
pub mod stats;
pub mod validate;
