//! Key/value cache port for raw manifest text.
//!
//! The manifest store never owns an eviction policy. It asks a [`CacheStore`]
//! whether a key is present, reads it, or writes it, and leaves TTL and size
//! limits to the implementation. Keys come from [`cache_key`], a SHA-256 hex
//! digest of the resolved manifest path, so the key space does not depend on
//! manifest contents.
//!
//! [`MemoryCache`] is the default process-wide implementation. It is backed by
//! a [`DashMap`] so a single instance can be shared between threads through an
//! `Arc` without external locking.

use dashmap::DashMap;
use sha2::{Digest, Sha256};

/// Cache collaborator used by [`ManifestStore`](crate::manifest::ManifestStore).
///
/// Values are raw manifest file contents, stored before parsing.
pub trait CacheStore: Send + Sync {
    /// Whether a value is stored under `key`.
    fn has(&self, key: &str) -> bool;

    /// The value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: String);
}

/// Compute the cache key for a resolved manifest path.
///
/// # Examples
///
/// ```
/// use vite_tags::cache::cache_key;
///
/// let key = cache_key("themes/site/dist/manifest.json");
/// assert_eq!(key.len(), 64);
/// assert_eq!(key, cache_key("themes/site/dist/manifest.json"));
/// ```
#[must_use]
pub fn cache_key(path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    hex::encode(hasher.finalize())
}

/// In-memory [`CacheStore`] living for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, String>,
}

impl MemoryCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl CacheStore for MemoryCache {
    fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn put(&self, key: &str, value: String) {
        tracing::debug!("Caching manifest under key {}", &key[..12.min(key.len())]);
        self.entries.insert(key.to_string(), value);
    }
}
