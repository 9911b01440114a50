//! Error handling for vite-tags
//!
//! This module provides the error type shared by the library and the CLI, plus
//! the user-friendly reporting used by the binary. Two principles apply:
//! 1. **Strongly-typed errors** for collaborators and configuration loading
//! 2. **Graceful degradation** inside the rendering path: a manifest or
//!    directive failure renders less output, it never aborts a page
//!
//! # Error Categories
//!
//! - **Manifest**: [`ViteError::ManifestNotFound`], [`ViteError::MalformedManifest`]
//! - **Templates**: [`ViteError::MalformedDirective`]
//! - **Configuration**: [`ViteError::ConfigError`], [`ViteError::InvalidEnvironment`]
//! - **File System**: [`ViteError::IoError`]
//!
//! Neither manifest variant ever reaches a template author. The
//! [`ManifestStore`](crate::manifest::ManifestStore) hands them to the
//! [`Logger`](crate::host::Logger) port and carries on with an empty manifest.
//!
//! # Examples
//!
//! ```rust,no_run
//! use vite_tags::core::{ViteError, user_friendly_error};
//!
//! let error = ViteError::InvalidEnvironment {
//!     value: "staging".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for vite-tags operations
///
/// Every variant owns plain strings so the type is `Clone`, which lets the
/// manifest store hand the same failure to its logger and keep a copy for
/// diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViteError {
    /// The manifest path did not resolve, could not be read, or was empty.
    #[error("Vite manifest not found: {path}")]
    ManifestNotFound {
        /// Resolved path that was attempted (empty when no candidate existed)
        path: String,
    },

    /// The manifest file exists but is not a valid manifest document.
    #[error("Vite manifest at '{path}' is malformed: {reason}")]
    MalformedManifest {
        /// Resolved path of the manifest
        path: String,
        /// Parser message
        reason: String,
    },

    /// Text looked like a directive but did not match the directive grammar.
    #[error("Malformed directive at byte {offset}: {reason}")]
    MalformedDirective {
        /// Byte offset of the `@vite` token in the source
        offset: usize,
        /// What the parser expected
        reason: String,
    },

    /// A configured environment value is neither `development` nor `production`.
    #[error("Invalid environment '{value}': expected 'development' or 'production'")]
    InvalidEnvironment {
        /// The rejected value
        value: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// File system operation failed
    #[error("Failed to {operation} '{path}': {reason}")]
    IoError {
        /// The operation, e.g. "read"
        operation: String,
        /// Path involved
        path: String,
        /// Underlying I/O message
        reason: String,
    },
}

impl ViteError {
    /// Build an [`ViteError::IoError`] from a [`std::io::Error`].
    pub fn io(operation: &str, path: impl Into<String>, error: &std::io::Error) -> Self {
        Self::IoError {
            operation: operation.to_string(),
            path: path.into(),
            reason: error.to_string(),
        }
    }
}

/// Error wrapper carrying a suggestion and details for terminal display
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ViteError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from a [`ViteError`]
    #[must_use]
    pub const fn new(error: ViteError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for the CLI.
///
/// Known [`ViteError`]s get tailored suggestions; I/O and TOML errors found in
/// the chain are mapped to the closest variant; anything else is reported as a
/// configuration error carrying the full `anyhow` chain.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(vite_error) = error.downcast_ref::<ViteError>() {
        return create_error_context(vite_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        return ErrorContext::new(ViteError::io("access", "unknown", io_error))
            .with_details(format!("{error:#}"))
            .with_suggestion("Check that the file exists and that you have permission to read it");
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(ViteError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in your vite-tags.toml file")
        .with_details("Recognized keys: dev_server_url, manifest_path, environment, warn_unknown_entrypoints");
    }

    ErrorContext::new(ViteError::ConfigError {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: ViteError) -> ErrorContext {
    match &error {
        ViteError::ManifestNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Run 'vite build' with 'build.manifest: true', or point --manifest at the generated manifest.json")
            .with_details("Defaults tried: dist/manifest.json, dist/.vite/manifest.json"),
        ViteError::MalformedManifest { .. } => ErrorContext::new(error)
            .with_suggestion("Rebuild the assets; the manifest should be the JSON file written by Vite"),
        ViteError::MalformedDirective { .. } => ErrorContext::new(error)
            .with_suggestion("Use @vite('entry.js'), @vite(['a.js', 'b.css']) or @vite('entry.js', {\"outDir\": \"dist\"})"),
        ViteError::InvalidEnvironment { .. } => ErrorContext::new(error)
            .with_suggestion("Set VITE_ENVIRONMENT (or --environment) to 'development' or 'production'"),
        ViteError::ConfigError { .. } => ErrorContext::new(error),
        ViteError::IoError { .. } => ErrorContext::new(error)
            .with_suggestion("Check that the path exists and is readable"),
    }
}
