//! Response caching using Moka.
//!
//! Fetched JSON bodies are cached per (resource, params) so repeated
//! dashboard loads within the TTL do not hit the network.

use std::sync::Arc;
use std::time::Duration;

use agencyhub_shared::config::CacheConfig;
use moka::future::Cache;
use serde_json::Value;

use crate::resource::{Resource, ResourceKey};

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache for fetched responses.
///
/// Cloning is cheap and clones share the same storage.
#[derive(Clone)]
pub struct FetchCache {
    cache: Cache<ResourceKey, Arc<Value>>,
}

impl FetchCache {
    /// Creates a cache with default settings.
    ///
    /// Default: 100 entries max, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with custom capacity and TTL.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Creates a cache from loaded configuration.
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_config(config.max_capacity, config.ttl_secs)
    }

    /// Returns the cached body for a key, if still fresh.
    pub async fn get(&self, key: &ResourceKey) -> Option<Arc<Value>> {
        self.cache.get(key).await
    }

    /// Stores a body under a key.
    pub async fn insert(&self, key: ResourceKey, value: Arc<Value>) {
        self.cache.insert(key, value).await;
    }

    /// Invalidates one key.
    pub async fn invalidate(&self, key: &ResourceKey) {
        self.cache.invalidate(key).await;
    }

    /// Invalidates every key of a resource, whatever its params.
    ///
    /// Call after a mutation of that resource.
    pub async fn invalidate_resource(&self, resource: Resource) {
        let stale: Vec<Arc<ResourceKey>> = self
            .cache
            .iter()
            .filter(|(key, _)| key.resource == resource)
            .map(|(key, _)| key)
            .collect();

        for key in stale {
            self.cache.invalidate(key.as_ref()).await;
        }
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    ///
    /// The count is eventually consistent; call `run_pending_tasks` first
    /// for an exact figure.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    pub async fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks().await;
    }
}

impl Default for FetchCache {
    fn default() -> Self {
        Self::new()
    }
}
