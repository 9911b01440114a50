//! Global constants used throughout the vite-tags codebase.
//!
//! Default locations, URL suffixes, and environment variable names live here so
//! the resolver, the configuration loader, and the CLI agree on them.

/// Dev server URL used when the configured URL is empty.
pub const DEFAULT_DEV_SERVER_URL: &str = "http://localhost:5173";

/// Manifest locations tried, in order, when the configured path does not resolve.
///
/// Vite 4 writes `dist/manifest.json`; Vite 5 moved it under `dist/.vite/`.
pub const DEFAULT_MANIFEST_PATHS: &[&str] = &["dist/manifest.json", "dist/.vite/manifest.json"];

/// Output directory prefixed to manifest file paths when a directive gives none.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Path of the HMR client on the dev server.
pub const VITE_CLIENT_PATH: &str = "@vite/client";

/// Path of the React refresh runtime on the dev server.
pub const REACT_REFRESH_PATH: &str = "@react-refresh";

/// File extensions that Vite emits as stylesheets.
pub const STYLESHEET_EXTENSIONS: &[&str] =
    &["css", "less", "sass", "scss", "styl", "stylus", "pcss", "postcss"];

/// Environment variable holding the dev server URL.
pub const ENV_DEV_SERVER_URL: &str = "VITE_DEV_SERVER_URL";

/// Environment variable holding the logical manifest path.
pub const ENV_MANIFEST_PATH: &str = "VITE_MANIFEST_PATH";

/// Environment variable holding `development` or `production`.
pub const ENV_ENVIRONMENT: &str = "VITE_ENVIRONMENT";

/// Environment variable naming the configuration file, read by the CLI.
pub const ENV_CONFIG_FILE: &str = "VITE_TAGS_CONFIG";

/// Configuration file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "vite-tags.toml";
