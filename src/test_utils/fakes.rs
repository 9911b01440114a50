//! In-memory fakes for the host ports.
//!
//! The recording fakes count calls so tests can assert how often the store
//! touched storage or the logger. The panicking fakes prove a code path never
//! reaches a port at all.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::cache::CacheStore;
use crate::core::ViteError;
use crate::host::{Logger, PathResolver, Storage};

/// [`Storage`] over an in-memory file map that counts reads per path.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Mutex<HashMap<String, String>>,
    reads: Mutex<HashMap<String, usize>>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder that adds a file.
    #[must_use]
    pub fn with_file(self, path: &str, content: impl Into<String>) -> Self {
        self.write(path, content);
        self
    }

    /// Add or replace a file.
    pub fn write(&self, path: &str, content: impl Into<String>) {
        self.files.lock().unwrap().insert(path.to_string(), content.into());
    }

    /// Reads attempted for `path`, successful or not.
    pub fn read_count(&self, path: &str) -> usize {
        self.reads.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    /// Reads attempted for any path.
    pub fn total_reads(&self) -> usize {
        self.reads.lock().unwrap().values().sum()
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn read(&self, path: &str) -> Result<String, ViteError> {
        *self.reads.lock().unwrap().entry(path.to_string()).or_insert(0) += 1;
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| ViteError::IoError {
            operation: "read".to_string(),
            path: path.to_string(),
            reason: "No such file".to_string(),
        })
    }
}

/// [`Logger`] that records every call.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    calls: Mutex<Vec<(String, ViteError)>>,
}

impl RecordingLogger {
    /// Logger with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `error` calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Recorded messages in call order.
    pub fn messages(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(message, _)| message.clone()).collect()
    }

    /// Recorded errors in call order.
    pub fn errors(&self) -> Vec<ViteError> {
        self.calls.lock().unwrap().iter().map(|(_, error)| error.clone()).collect()
    }
}

impl Logger for RecordingLogger {
    fn error(&self, message: &str, error: &ViteError) {
        self.calls.lock().unwrap().push((message.to_string(), error.clone()));
    }
}

/// [`CacheStore`] that panics on any access.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanickingCache;

impl CacheStore for PanickingCache {
    fn has(&self, key: &str) -> bool {
        panic!("cache accessed: has({key})")
    }

    fn get(&self, key: &str) -> Option<String> {
        panic!("cache accessed: get({key})")
    }

    fn put(&self, key: &str, _value: String) {
        panic!("cache accessed: put({key})")
    }
}

/// [`Storage`] that panics on any access.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanickingStorage;

impl Storage for PanickingStorage {
    fn exists(&self, path: &str) -> bool {
        panic!("storage accessed: exists({path})")
    }

    fn read(&self, path: &str) -> Result<String, ViteError> {
        panic!("storage accessed: read({path})")
    }
}

/// [`PathResolver`] over a fixed logical-to-concrete map, with an optional
/// public prefix applied by `to_public`.
#[derive(Debug, Default)]
pub struct StaticPathResolver {
    paths: HashMap<String, String>,
    public_prefix: Option<String>,
}

impl StaticPathResolver {
    /// Resolver that finds nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver mapping every logical path to itself.
    #[must_use]
    pub fn identity(paths: &[&str]) -> Self {
        paths.iter().fold(Self::new(), |resolver, path| resolver.with_path(path, path))
    }

    /// Builder that maps `logical` to `concrete`.
    #[must_use]
    pub fn with_path(mut self, logical: &str, concrete: &str) -> Self {
        self.paths.insert(logical.to_string(), concrete.to_string());
        self
    }

    /// Builder that makes `to_public` rewrite `"/` into `"{prefix}/`.
    #[must_use]
    pub fn with_public_prefix(mut self, prefix: &str) -> Self {
        self.public_prefix = Some(prefix.to_string());
        self
    }
}

impl PathResolver for StaticPathResolver {
    fn resolve(&self, logical: &str) -> Option<String> {
        self.paths.get(logical).cloned()
    }

    fn to_public(&self, html: &str) -> String {
        match &self.public_prefix {
            Some(prefix) => html.replace("=\"/", &format!("=\"{prefix}/")),
            None => html.to_string(),
        }
    }
}
