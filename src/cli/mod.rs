//! Command-line interface for vite-tags.
//!
//! The binary drives the same resolver a host application embeds, which makes
//! it useful for build scripts, static sites, and checking templates in CI.
//!
//! # Available Commands
//!
//! - `render` - Rewrite directives in a template file or stdin
//! - `resolve` - Print the tags for one or more entrypoints
//! - `check` - List the directives in a template, flagging malformed ones
//! - `env` - Print the template globals for the current configuration
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Only log errors
//! - `--config` - Path to a `vite-tags.toml` file
//!
//! # Examples
//!
//! ```bash
//! # Render a template for production
//! vite-tags render templates/layout.html --environment production -o public/index.html
//!
//! # Resolve entrypoints against a theme chain
//! vite-tags resolve src/main.ts --root . --theme site --theme system --public-base /themes/site
//!
//! # Find malformed directives in CI
//! vite-tags check templates/layout.html --format json
//! ```
//!
//! Settings are layered: defaults, then the config file, then `VITE_*`
//! environment variables, then command-line flags.

mod check;
mod common;
mod env;
mod render;
mod resolve;

pub use common::{OutputFormat, SiteArgs};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::constants::ENV_CONFIG_FILE;

/// Logging settings derived from the global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Filter directive for the subscriber. `None` defers to `RUST_LOG`, then
    /// `warn`.
    pub log_level: Option<String>,

    /// Explicit configuration file.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The filter the subscriber is installed with.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        }
    }

    /// Install the global `tracing` subscriber on stderr.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .try_init();
    }
}

/// Embed Vite asset tags into server-rendered templates.
#[derive(Parser, Debug)]
#[command(name = "vite-tags", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a configuration file (defaults to ./vite-tags.toml when present).
    #[arg(long, global = true, value_name = "FILE", env = ENV_CONFIG_FILE)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rewrite @vite directives in a template.
    Render(render::RenderCommand),

    /// Print the tags for entrypoints.
    Resolve(resolve::ResolveCommand),

    /// List the directives found in a template.
    Check(check::CheckCommand),

    /// Print the template globals.
    Env(env::EnvCommand),
}

impl Cli {
    /// Parse-time flags to runtime settings.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Install logging and run the selected command.
    ///
    /// # Errors
    ///
    /// Returns configuration, I/O, and output errors with context attached.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(&config)
    }

    /// Run the selected command without touching the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns configuration, I/O, and output errors with context attached.
    pub fn execute_with_config(self, config: &CliConfig) -> Result<()> {
        let config_path = config.config_path.as_deref();
        match self.command {
            Commands::Render(cmd) => cmd.execute(config_path),
            Commands::Resolve(cmd) => cmd.execute(config_path),
            Commands::Check(cmd) => cmd.execute(),
            Commands::Env(cmd) => cmd.execute(config_path),
        }
    }
}
