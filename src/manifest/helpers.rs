//! Manifest path lookup.

use crate::constants::DEFAULT_MANIFEST_PATHS;
use crate::host::{PathResolver, Storage};

/// Find the manifest to load.
///
/// The configured logical path is accepted as soon as the path resolver finds
/// it. Otherwise each of [`DEFAULT_MANIFEST_PATHS`] is tried and accepted only
/// if it resolves and `storage` confirms it exists.
///
/// Returns an empty string when no candidate is found;
/// [`ManifestStore::get`](super::ManifestStore::get) treats that as a missing
/// manifest without attempting a read.
pub fn locate_manifest(configured: &str, resolver: &dyn PathResolver, storage: &dyn Storage) -> String {
    if !configured.trim().is_empty() {
        if let Some(path) = resolver.resolve(configured) {
            tracing::debug!("Using configured manifest {}", path);
            return path;
        }
        tracing::debug!("Configured manifest '{}' not found, trying defaults", configured);
    }

    for candidate in DEFAULT_MANIFEST_PATHS {
        if let Some(path) = resolver.resolve(candidate) {
            if storage.exists(&path) {
                tracing::debug!("Using default manifest {}", path);
                return path;
            }
        }
    }

    String::new()
}
