//! Directory loader: data source abstraction and payload validation.
//!
//! The loader obtains the raw JSON payload from the configured source and
//! validates its shape. It performs no filtering, sorting, or
//! normalization — that is deferred to [`crate::query`] so the matching
//! rules are single-sourced and testable without a transport.
//!
//! One read per call, no retries, no caching here; callers wanting a
//! snapshot policy layer [`crate::cache::Directory`] on top.

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::error::DirectoryError;
use crate::models::ProviderRecord;

/// A place the raw directory payload can be fetched from.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Human-readable description for `pdq sources` and error messages.
    fn describe(&self) -> String;

    /// Fetch the raw payload. The bounded timeout is applied by [`load`],
    /// not by implementations.
    async fn fetch(&self) -> Result<String, DirectoryError>;
}

/// Local JSON file.
pub struct FileSource {
    pub path: PathBuf,
}

#[async_trait]
impl DirectorySource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch(&self) -> Result<String, DirectoryError> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DirectoryError::DataSource(format!("failed to read {}: {}", self.path.display(), e))
        })
    }
}

/// HTTP endpoint serving the JSON payload.
pub struct HttpSource {
    pub url: String,
}

#[async_trait]
impl DirectorySource for HttpSource {
    fn describe(&self) -> String {
        format!("url {}", self.url)
    }

    async fn fetch(&self) -> Result<String, DirectoryError> {
        let response = reqwest::get(&self.url)
            .await
            .map_err(|e| DirectoryError::DataSource(format!("failed to fetch {}: {}", self.url, e)))?;

        let response = response.error_for_status().map_err(|e| {
            DirectoryError::DataSource(format!("failed to fetch {}: {}", self.url, e))
        })?;

        response
            .text()
            .await
            .map_err(|e| DirectoryError::DataSource(format!("failed to read body: {}", e)))
    }
}

/// Embedded dataset: a payload already in memory. Used for demos and tests.
pub struct InlineSource {
    pub payload: String,
}

#[async_trait]
impl DirectorySource for InlineSource {
    fn describe(&self) -> String {
        "inline payload".to_string()
    }

    async fn fetch(&self) -> Result<String, DirectoryError> {
        Ok(self.payload.clone())
    }
}

/// Builds the source described by `[directory]` in the config.
pub fn source_from_config(config: &Config) -> Result<Box<dyn DirectorySource>, DirectoryError> {
    match (&config.directory.path, &config.directory.url) {
        (Some(path), _) => Ok(Box::new(FileSource { path: path.clone() })),
        (None, Some(url)) => Ok(Box::new(HttpSource { url: url.clone() })),
        (None, None) => Err(DirectoryError::DataSource(
            "no directory source configured".to_string(),
        )),
    }
}

/// Parses and shape-validates a raw payload.
///
/// The payload must be a JSON array; anything else (an object, a string,
/// invalid JSON) is a [`DirectoryError::Schema`]. Absent record fields
/// default; a field of the wrong JSON type is a schema error naming the
/// record index.
pub fn parse_records(payload: &str) -> Result<Vec<ProviderRecord>, DirectoryError> {
    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| DirectoryError::Schema(format!("payload is not valid JSON: {}", e)))?;

    let items = value.as_array().ok_or_else(|| {
        DirectoryError::Schema(format!(
            "expected a JSON array of provider records, got {}",
            json_type_name(&value)
        ))
    })?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let record: ProviderRecord = serde_json::from_value(item.clone())
            .map_err(|e| DirectoryError::Schema(format!("record {}: {}", index, e)))?;
        records.push(record);
    }

    Ok(records)
}

/// One fetch from the configured source, bounded by `directory.timeout_secs`,
/// then shape validation. Returns the records unmodified and in source order.
pub async fn load(config: &Config) -> Result<Vec<ProviderRecord>, DirectoryError> {
    let source = source_from_config(config)?;
    let payload = fetch_with_timeout(source.as_ref(), config.directory.timeout()).await?;
    parse_records(&payload)
}

async fn fetch_with_timeout(
    source: &dyn DirectorySource,
    timeout: Duration,
) -> Result<String, DirectoryError> {
    tokio::time::timeout(timeout, source.fetch())
        .await
        .map_err(|_| {
            DirectoryError::DataSource(format!(
                "timed out after {}s fetching {}",
                timeout.as_secs(),
                source.describe()
            ))
        })?
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
