//! Vite build manifest parsing and loading.
//!
//! `vite build` with `build.manifest: true` writes a JSON document mapping each
//! source chunk name to the files it was emitted as:
//!
//! ```json
//! {
//!   "main.js": {
//!     "file": "assets/main.4889e940.js",
//!     "src": "main.js",
//!     "isEntry": true,
//!     "css": ["assets/main.b82dbe22.css"],
//!     "imports": ["_shared.83069a53.js"]
//!   },
//!   "_shared.83069a53.js": {
//!     "file": "assets/shared.83069a53.js",
//!     "css": ["assets/shared.a834bfc3.css"]
//!   }
//! }
//! ```
//!
//! Only `file`, `css`, and `imports` take part in tag generation. The other
//! documented fields are deserialized so the type describes the whole format.
//!
//! # Loading
//!
//! - [`locate_manifest`] picks the manifest path: the configured logical path
//!   first, then [`DEFAULT_MANIFEST_PATHS`](crate::constants::DEFAULT_MANIFEST_PATHS)
//! - [`ManifestStore`] reads it through the cache and storage ports and never
//!   fails: a missing or malformed manifest is reported once and treated as empty

mod helpers;
mod store;

pub use helpers::locate_manifest;
pub use store::ManifestStore;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::ViteError;

/// One chunk or entrypoint in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Emitted file, relative to the output directory.
    pub file: String,

    /// Stylesheets emitted for this chunk, in load order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css: Vec<String>,

    /// Chunk names this chunk statically imports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    /// Source file the chunk was built from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Whether the chunk is a build entrypoint.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_entry: bool,

    /// Chunk names this chunk imports with `import()`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dynamic_imports: Vec<String>,

    /// Static assets referenced by the chunk.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<String>,
}

impl ManifestEntry {
    /// An entry with only its emitted file set.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            css: Vec::new(),
            imports: Vec::new(),
            src: None,
            is_entry: false,
            dynamic_imports: Vec::new(),
            assets: Vec::new(),
        }
    }

    /// Add an emitted stylesheet.
    #[must_use]
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css.push(css.into());
        self
    }

    /// Add a statically imported chunk name.
    #[must_use]
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }
}

/// The full manifest: chunk name to [`ManifestEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: HashMap<String, ManifestEntry>,
}

impl Manifest {
    /// An empty manifest, the result of every load failure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse manifest JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ViteError::MalformedManifest`] when `content` is not a JSON
    /// object of manifest entries.
    pub fn parse(path: &str, content: &str) -> Result<Self, ViteError> {
        serde_json::from_str(content).map_err(|e| ViteError::MalformedManifest {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, entry: ManifestEntry) {
        self.entries.insert(name.into(), entry);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, entry: ManifestEntry) -> Self {
        self.insert(name, entry);
        self
    }

    /// Look up a chunk by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.entries.get(name)
    }

    /// Whether a chunk is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no chunks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of chunks flagged `isEntry`, sorted.
    #[must_use]
    pub fn entrypoints(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_entry)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}
