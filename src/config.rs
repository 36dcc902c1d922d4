use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DirectoryConfig {
    /// Path to a local JSON file. Exactly one of `path` / `url` must be set.
    pub path: Option<PathBuf>,
    /// URL serving the JSON payload (originally `/doctors.json`).
    pub url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    #[serde(default = "default_cache_mode")]
    pub mode: String,
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            mode: default_cache_mode(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_cache_mode() -> String {
    // The original front-end re-fetched on every navigation.
    "none".to_string()
}

fn default_ttl_secs() -> u64 {
    60
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

impl DirectoryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate directory source
    match (&config.directory.path, &config.directory.url) {
        (Some(_), Some(_)) => {
            anyhow::bail!("directory.path and directory.url are mutually exclusive")
        }
        (None, None) => anyhow::bail!("one of directory.path or directory.url must be set"),
        _ => {}
    }

    if config.directory.timeout_secs == 0 {
        anyhow::bail!("directory.timeout_secs must be > 0");
    }

    // Validate cache policy
    match config.cache.mode.as_str() {
        "none" | "static" => {}
        "ttl" => {
            if config.cache.ttl_secs == 0 {
                anyhow::bail!("cache.ttl_secs must be > 0 when cache.mode is 'ttl'");
            }
        }
        other => anyhow::bail!(
            "Unknown cache mode: '{}'. Must be none, ttl, or static.",
            other
        ),
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Config> {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), content).unwrap();
        load_config(tmp.path())
    }

    const BASE: &str = r#"
[directory]
path = "./providers.json"

[server]
bind = "127.0.0.1:7340"
"#;

    #[test]
    fn test_minimal_config_defaults() {
        let config = parse(BASE).unwrap();
        assert_eq!(config.directory.timeout_secs, 10);
        assert_eq!(config.cache.mode, "none");
        assert_eq!(config.cache.ttl_secs, 60);
    }

    #[test]
    fn test_path_and_url_conflict() {
        let err = parse(
            r#"
[directory]
path = "./providers.json"
url = "http://localhost/doctors.json"

[server]
bind = "127.0.0.1:7340"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn test_source_required() {
        let err = parse("[directory]\n\n[server]\nbind = \"127.0.0.1:7340\"\n").unwrap_err();
        assert!(err.to_string().contains("must be set"));
    }

    #[test]
    fn test_unknown_cache_mode_rejected() {
        let err = parse(&format!("{BASE}\n[cache]\nmode = \"forever\"\n")).unwrap_err();
        assert!(err.to_string().contains("Unknown cache mode"));
    }

    #[test]
    fn test_ttl_requires_positive_seconds() {
        let err = parse(&format!("{BASE}\n[cache]\nmode = \"ttl\"\nttl_secs = 0\n")).unwrap_err();
        assert!(err.to_string().contains("ttl_secs"));
    }
}
