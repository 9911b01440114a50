//! Ports to the host application.
//!
//! The core never touches the file system, a logging backend, or the host's
//! template path rules directly. It consumes three traits, injected into
//! [`ManifestStore`](crate::manifest::ManifestStore) and
//! [`ViteResolver`](crate::resolver::ViteResolver) at construction:
//!
//! - [`Storage`] - existence checks and raw reads by path
//! - [`PathResolver`] - logical path lookup and public-path rewriting
//! - [`Logger`] - reporting of non-fatal manifest failures
//!
//! The cache port lives in [`crate::cache`].
//!
//! Default implementations are provided so the crate works standalone:
//! [`FsStorage`], [`ThemePathResolver`], and [`TracingLogger`]. Tests substitute
//! the recording and panicking fakes from `test_utils`.

mod logger;
mod paths;
mod storage;

pub use logger::TracingLogger;
pub use paths::ThemePathResolver;
pub use storage::FsStorage;

use crate::core::ViteError;

/// Raw read access to files by path.
pub trait Storage: Send + Sync {
    /// Whether `path` exists and can be read.
    fn exists(&self, path: &str) -> bool;

    /// Read the full contents of `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`ViteError::IoError`] when the file cannot be read.
    fn read(&self, path: &str) -> Result<String, ViteError>;
}

/// The host's template path rules.
pub trait PathResolver: Send + Sync {
    /// Resolve a logical path (e.g. `dist/manifest.json`) to a concrete path,
    /// or `None` when the host cannot find it.
    fn resolve(&self, logical: &str) -> Option<String>;

    /// Rewrite root-relative asset paths in a rendered tag block onto the
    /// site's public base path.
    ///
    /// The default leaves the block unchanged.
    fn to_public(&self, html: &str) -> String {
        html.to_string()
    }
}

/// Sink for manifest load failures.
///
/// Called once per failing manifest path, never per tag or per directive.
pub trait Logger: Send + Sync {
    /// Report a non-fatal error with the failure that caused it.
    fn error(&self, message: &str, error: &ViteError);
}
