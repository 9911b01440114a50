//! Core types for vite-tags
//!
//! Error handling and the rendering [`Mode`] shared by every other module.
//!
//! - [`ViteError`] - Enumerated error types for collaborators and configuration
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions for the CLI
//! - [`user_friendly_error`] - Convert any error to a user-friendly format
//! - [`Mode`] - Development (dev server) or production (manifest) rendering

pub mod error;

pub use error::{ErrorContext, ViteError, user_friendly_error};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendering mode, fixed when a resolver is constructed.
///
/// In [`Mode::Development`] tags point at the Vite dev server and the manifest
/// is never consulted. In [`Mode::Production`] tags are resolved through the
/// build manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Serve unbundled modules from the dev server
    #[default]
    Development,
    /// Serve hashed bundles listed in the manifest
    Production,
}

impl Mode {
    /// The value exposed to templates and accepted in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Whether tags should point at the dev server.
    #[must_use]
    pub const fn uses_dev_server(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ViteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ViteError::InvalidEnvironment {
                value: s.to_string(),
            }),
        }
    }
}
