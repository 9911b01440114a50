//! Configuration management for vite-tags
//!
//! Configuration is read once, when a [`ViteResolver`](crate::resolver::ViteResolver)
//! is built, and never re-evaluated per render. Layers apply in this order,
//! later layers winning:
//!
//! 1. **Defaults** - development mode, no manifest path, default dev server URL
//! 2. **Config file** - `vite-tags.toml` in the working directory, or `--config`
//! 3. **Environment** - `VITE_DEV_SERVER_URL`, `VITE_MANIFEST_PATH`, `VITE_ENVIRONMENT`
//! 4. **CLI flags** - applied by the binary on top of the loaded value
//!
//! # File Format
//!
//! ```toml
//! dev_server_url = "http://localhost:5173"
//! manifest_path = "dist/.vite/manifest.json"
//! environment = "production"
//! warn_unknown_entrypoints = true
//! ```
//!
//! Empty environment variables count as unset, so an exported but blank
//! `VITE_ENVIRONMENT` keeps the file or default value.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_DEV_SERVER_URL, ENV_DEV_SERVER_URL, ENV_ENVIRONMENT, ENV_MANIFEST_PATH,
};
use crate::core::{Mode, ViteError};

/// Resolver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViteConfig {
    /// Base URL of the Vite dev server. Empty means [`DEFAULT_DEV_SERVER_URL`].
    pub dev_server_url: String,

    /// Logical path of the manifest, resolved through the host's path rules.
    /// Empty means only the default locations are tried.
    pub manifest_path: String,

    /// Development or production rendering.
    pub environment: Mode,

    /// Emit a tracing warning for entrypoints missing from the manifest.
    pub warn_unknown_entrypoints: bool,
}

impl ViteConfig {
    /// Defaults overlaid with the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ViteError::InvalidEnvironment`] when `VITE_ENVIRONMENT` is set
    /// to something other than `development` or `production`.
    pub fn from_env() -> Result<Self, ViteError> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Load the layered configuration.
    ///
    /// An explicit `path` must exist. Without one, `vite-tags.toml` in the
    /// working directory is used if present.
    ///
    /// # Errors
    ///
    /// Fails when an explicit file is missing, a file cannot be parsed, or the
    /// environment holds an invalid mode.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Parse a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not valid configuration TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Overlay values from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ViteError::InvalidEnvironment`] for an unrecognized mode.
    pub fn apply_env(&mut self) -> Result<(), ViteError> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Overlay values from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ViteError::InvalidEnvironment`] for an unrecognized mode.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ViteError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(url) = get(ENV_DEV_SERVER_URL) {
            self.dev_server_url = url;
        }
        if let Some(path) = get(ENV_MANIFEST_PATH) {
            self.manifest_path = path;
        }
        if let Some(environment) = get(ENV_ENVIRONMENT) {
            self.environment = environment.parse()?;
        }
        Ok(())
    }

    /// The dev server URL with the default applied and trailing slashes removed.
    #[must_use]
    pub fn effective_dev_server_url(&self) -> String {
        let url = self.dev_server_url.trim().trim_end_matches('/');
        if url.is_empty() {
            DEFAULT_DEV_SERVER_URL.to_string()
        } else {
            url.to_string()
        }
    }
}
