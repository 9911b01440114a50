//! Cached, failure-tolerant manifest loading.

use dashmap::DashSet;
use std::sync::Arc;

use super::Manifest;
use crate::cache::{CacheStore, cache_key};
use crate::core::ViteError;
use crate::host::{Logger, Storage};

/// Message handed to the [`Logger`] on every reported failure.
pub(crate) const MANIFEST_LOAD_FAILED: &str = "Could not load the Vite manifest";

/// Loads manifests through the cache and storage ports.
///
/// # Failure handling
///
/// [`get`](Self::get) never fails. When the path is empty, unreadable, empty,
/// or not a valid manifest it returns an empty [`Manifest`], so pages still
/// render (with fewer tags) while a deploy is half finished.
///
/// Each failing path is reported to the [`Logger`] once for the lifetime of
/// the store, no matter how many directives ask for it. Failures are never
/// written to the cache: the next call retries the read, so a manifest that
/// appears later is picked up immediately. Raw text is cached only once it
/// parses, so a manifest caught half-written during a deploy is never pinned. A successful load clears the
/// reported state, so a path that breaks again is reported again.
pub struct ManifestStore {
    cache: Arc<dyn CacheStore>,
    storage: Arc<dyn Storage>,
    logger: Arc<dyn Logger>,
    reported: DashSet<String>,
}

impl ManifestStore {
    /// Create a store over the given ports.
    pub fn new(cache: Arc<dyn CacheStore>, storage: Arc<dyn Storage>, logger: Arc<dyn Logger>) -> Self {
        Self {
            cache,
            storage,
            logger,
            reported: DashSet::new(),
        }
    }

    /// The storage port, shared with manifest path lookup.
    #[must_use]
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Load the manifest at an already-resolved path, degrading to empty.
    pub fn get(&self, manifest_path: &str) -> Manifest {
        match self.load(manifest_path) {
            Ok(manifest) => {
                self.reported.remove(manifest_path);
                manifest
            }
            Err(error) => {
                self.report(manifest_path, &error);
                Manifest::new()
            }
        }
    }

    /// Load the manifest at an already-resolved path.
    ///
    /// Cache hits are parsed from the cached text. On a miss the file is read
    /// through [`Storage`] and its text cached once it parses.
    ///
    /// # Errors
    ///
    /// - [`ViteError::ManifestNotFound`] for an empty path, a failed read, or
    ///   blank content
    /// - [`ViteError::MalformedManifest`] when the text is not a manifest
    pub fn load(&self, manifest_path: &str) -> Result<Manifest, ViteError> {
        if manifest_path.is_empty() {
            return Err(ViteError::ManifestNotFound {
                path: String::new(),
            });
        }

        let key = cache_key(manifest_path);
        if self.cache.has(&key) {
            if let Some(content) = self.cache.get(&key) {
                tracing::debug!("Manifest cache hit for {}", manifest_path);
                return Manifest::parse(manifest_path, &content);
            }
        }

        let content = self.storage.read(manifest_path).map_err(|e| {
            tracing::debug!("Manifest read failed: {}", e);
            ViteError::ManifestNotFound {
                path: manifest_path.to_string(),
            }
        })?;

        if content.trim().is_empty() {
            return Err(ViteError::ManifestNotFound {
                path: manifest_path.to_string(),
            });
        }

        let manifest = Manifest::parse(manifest_path, &content)?;
        self.cache.put(&key, content);
        tracing::debug!("Loaded manifest {} ({} chunks)", manifest_path, manifest.len());
        Ok(manifest)
    }

    fn report(&self, manifest_path: &str, error: &ViteError) {
        if self.reported.insert(manifest_path.to_string()) {
            self.logger.error(MANIFEST_LOAD_FAILED, error);
        } else {
            tracing::debug!("Suppressing repeated manifest failure for '{}'", manifest_path);
        }
    }
}

impl std::fmt::Debug for ManifestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestStore").field("reported", &self.reported.len()).finish_non_exhaustive()
    }
}
