//! Loader and cache tests against real transports: a throwaway HTTP
//! listener for the URL source, and tempdir files for the cache policies.

use std::path::PathBuf;
use std::time::Duration;

use axum::{routing::get, Router};
use tempfile::TempDir;

use provider_directory::cache::{CachePolicy, Directory};
use provider_directory::config::{CacheConfig, Config, DirectoryConfig, ServerConfig};
use provider_directory::error::DirectoryError;
use provider_directory::loader;

const PAYLOAD: &str = r#"[
  {"id": 1, "name": "Dr. Asha Verma", "speciality": "Cardiologist",
   "focusArea": "Heart Failure", "address": {"state": "Delhi"}},
  {"id": 2, "name": "Dr. Anjali Kapoor", "speciality": "Dermatologist",
   "focusArea": "Skin & Hair", "address": {"state": "Maharashtra"}}
]"#;

fn config_with_path(path: PathBuf, cache_mode: &str) -> Config {
    Config {
        directory: DirectoryConfig {
            path: Some(path),
            url: None,
            timeout_secs: 5,
        },
        cache: CacheConfig {
            mode: cache_mode.to_string(),
            ttl_secs: 60,
        },
        server: ServerConfig {
            bind: "127.0.0.1:0".to_string(),
        },
    }
}

fn config_with_url(url: String, timeout_secs: u64) -> Config {
    Config {
        directory: DirectoryConfig {
            path: None,
            url: Some(url),
            timeout_secs,
        },
        cache: CacheConfig::default(),
        server: ServerConfig {
            bind: "127.0.0.1:0".to_string(),
        },
    }
}

/// Serves the given routes on an ephemeral port and returns the base URL.
async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_load_from_http_url() {
    let app = Router::new().route("/doctors.json", get(|| async { PAYLOAD }));
    let base = spawn_server(app).await;

    let config = config_with_url(format!("{}/doctors.json", base), 5);
    let records = loader::load(&config).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Dr. Asha Verma");
    assert_eq!(records[1].address.state, "Maharashtra");
}

#[tokio::test]
async fn test_http_non_array_payload_is_schema_error() {
    let app = Router::new().route("/doctors.json", get(|| async { r#"{"doctors": []}"# }));
    let base = spawn_server(app).await;

    let config = config_with_url(format!("{}/doctors.json", base), 5);
    let err = loader::load(&config).await.unwrap_err();
    assert!(matches!(err, DirectoryError::Schema(_)));
    assert_eq!(err.code(), "schema");
}

#[tokio::test]
async fn test_http_error_status_is_data_source_error() {
    let app = Router::new(); // no routes: every path is a 404
    let base = spawn_server(app).await;

    let config = config_with_url(format!("{}/doctors.json", base), 5);
    let err = loader::load(&config).await.unwrap_err();
    assert!(matches!(err, DirectoryError::DataSource(_)));
    assert_eq!(err.code(), "data_source");
}

#[tokio::test]
async fn test_slow_source_hits_bounded_timeout() {
    let app = Router::new().route(
        "/doctors.json",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            PAYLOAD
        }),
    );
    let base = spawn_server(app).await;

    let config = config_with_url(format!("{}/doctors.json", base), 1);
    let err = loader::load(&config).await.unwrap_err();
    assert!(matches!(err, DirectoryError::DataSource(_)));
    assert!(err.to_string().contains("timed out"), "got: {}", err);
}

#[tokio::test]
async fn test_cache_none_refetches_every_call() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("providers.json");
    std::fs::write(&path, PAYLOAD).unwrap();

    let directory = Directory::new(config_with_path(path.clone(), "none"));
    assert_eq!(directory.policy(), CachePolicy::None);

    let first = directory.snapshot().await.unwrap();
    assert_eq!(first.len(), 2);

    // With no caching, removing the file breaks the next call.
    std::fs::remove_file(&path).unwrap();
    let err = directory.snapshot().await.unwrap_err();
    assert!(matches!(err, DirectoryError::DataSource(_)));
}

#[tokio::test]
async fn test_cache_static_loads_once_per_process() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("providers.json");
    std::fs::write(&path, PAYLOAD).unwrap();

    let directory = Directory::new(config_with_path(path.clone(), "static"));

    let first = directory.snapshot().await.unwrap();
    std::fs::remove_file(&path).unwrap();

    // The snapshot outlives the backing file.
    let second = directory.snapshot().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_cache_ttl_reuses_fresh_snapshot() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("providers.json");
    std::fs::write(&path, PAYLOAD).unwrap();

    let directory = Directory::new(config_with_path(path.clone(), "ttl"));

    let first = directory.snapshot().await.unwrap();
    std::fs::write(&path, "[]").unwrap();

    // Well inside the 60s TTL: the stale-but-fresh snapshot is reused.
    let second = directory.snapshot().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(second.len(), 2);
}
