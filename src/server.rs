//! JSON HTTP server.
//!
//! Exposes the directory's two query operations to a presentation layer
//! (web front-end, another service) over plain GET endpoints.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/providers?state=&query=` | Filtered provider list; both params optional |
//! | `GET` | `/regions` | Distinct region list `{id, name}` |
//! | `GET` | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! Zero matches is a `200` with `[]`. Only load failures produce errors,
//! with a body distinguishing the cause:
//!
//! ```json
//! { "error": { "code": "data_source", "message": "failed to read ..." } }
//! ```
//!
//! Codes: `data_source` (502), `schema` (500).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted; the expected caller is
//! a browser front-end on another origin.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::cache::Directory;
use crate::config::Config;
use crate::error::DirectoryError;
use crate::models::{ProviderRecord, Region};
use crate::query;

/// Shared application state: the cached directory handle.
#[derive(Clone)]
struct AppState {
    directory: Arc<Directory>,
}

/// Starts the HTTP server.
///
/// Binds to `[server].bind` and serves until the process is terminated.
/// Snapshots are loaded per the configured cache policy, so with
/// `cache.mode = "none"` every request re-reads the data source, exactly
/// like the original front-end.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let state = AppState {
        directory: Arc::new(Directory::new(config.clone())),
    };

    let app = router(state);

    println!("Directory server listening on http://{}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/providers", get(handle_providers))
        .route("/regions", get(handle_regions))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

// ============ Error response ============

/// JSON error envelope.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable code (`data_source` or `schema`).
    code: String,
    message: String,
}

/// Internal error type that converts into an HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        let status = match err {
            // The upstream source failed us, not the client.
            DirectoryError::DataSource(_) => StatusCode::BAD_GATEWAY,
            DirectoryError::Schema(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        AppError {
            status,
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

// ============ GET /providers ============

/// Query parameters for `GET /providers`. Both tokens are optional; both
/// absent means the whole collection.
#[derive(Deserialize)]
struct ProvidersParams {
    /// Region token, matched as a substring of `address.state`.
    #[serde(default)]
    state: String,
    /// Specialty token, matched against `speciality` and `focusArea`.
    #[serde(default)]
    query: String,
}

async fn handle_providers(
    State(state): State<AppState>,
    Query(params): Query<ProvidersParams>,
) -> Result<Json<Vec<ProviderRecord>>, AppError> {
    let snapshot = state.directory.snapshot().await?;
    let results = query::search(&snapshot, &params.state, &params.query);
    Ok(Json(results))
}

// ============ GET /regions ============

async fn handle_regions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Region>>, AppError> {
    let snapshot = state.directory.snapshot().await?;
    Ok(Json(query::distinct_regions(&snapshot)))
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
