//! Snapshot caching policy.
//!
//! The original front-end re-fetched the dataset on every navigation. That
//! behavior is kept as the default but made an explicit policy choice:
//!
//! - `none`   — reload on every call (original behavior);
//! - `ttl`    — reuse a snapshot younger than `cache.ttl_secs`;
//! - `static` — load once per process and keep it.
//!
//! Snapshots are immutable `Arc<Vec<..>>`, so any number of concurrent
//! readers can hold one while a newer snapshot replaces it in the cache.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::error::DirectoryError;
use crate::loader;
use crate::models::ProviderRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    None,
    Ttl(Duration),
    Static,
}

impl CachePolicy {
    /// Reads the policy from validated config. Unknown modes were rejected
    /// at config load time.
    pub fn from_config(config: &Config) -> Self {
        match config.cache.mode.as_str() {
            "ttl" => CachePolicy::Ttl(Duration::from_secs(config.cache.ttl_secs)),
            "static" => CachePolicy::Static,
            _ => CachePolicy::None,
        }
    }
}

struct CachedSnapshot {
    records: Arc<Vec<ProviderRecord>>,
    loaded_at: Instant,
}

/// A handle to the directory that loads snapshots per the configured policy.
pub struct Directory {
    config: Config,
    policy: CachePolicy,
    cached: RwLock<Option<CachedSnapshot>>,
}

impl Directory {
    pub fn new(config: Config) -> Self {
        let policy = CachePolicy::from_config(&config);
        Self {
            config,
            policy,
            cached: RwLock::new(None),
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Returns a snapshot of the directory, loading if the policy requires.
    pub async fn snapshot(&self) -> Result<Arc<Vec<ProviderRecord>>, DirectoryError> {
        if let Some(records) = self.cached_snapshot().await {
            return Ok(records);
        }

        // Reload outside any lock; concurrent callers may race here, which
        // only costs a duplicate fetch of a small file.
        let records = Arc::new(loader::load(&self.config).await?);

        if self.policy != CachePolicy::None {
            let mut guard = self.cached.write().await;
            *guard = Some(CachedSnapshot {
                records: records.clone(),
                loaded_at: Instant::now(),
            });
        }

        Ok(records)
    }

    async fn cached_snapshot(&self) -> Option<Arc<Vec<ProviderRecord>>> {
        let guard = self.cached.read().await;
        let cached = guard.as_ref()?;

        match self.policy {
            CachePolicy::None => None,
            CachePolicy::Static => Some(cached.records.clone()),
            CachePolicy::Ttl(ttl) => {
                if cached.loaded_at.elapsed() < ttl {
                    Some(cached.records.clone())
                } else {
                    None
                }
            }
        }
    }
}
