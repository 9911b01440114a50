//! Arguments and helpers shared by several commands.

use anyhow::{Context, Result};
use clap::Args;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::config::ViteConfig;
use crate::core::Mode;
use crate::host::ThemePathResolver;
use crate::resolver::ViteResolver;

/// Output format for commands with machine-readable output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one item per line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Where the site lives and how it is built.
#[derive(Args, Debug, Clone, Default)]
pub struct SiteArgs {
    /// Document root that logical paths are resolved under.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Theme to search, most specific first. Repeatable.
    #[arg(long = "theme", value_name = "NAME")]
    pub themes: Vec<String>,

    /// Public base path prefixed to root-relative asset URLs.
    #[arg(long, value_name = "PATH")]
    pub public_base: Option<String>,

    /// `development` or `production`.
    #[arg(long, value_name = "MODE")]
    pub environment: Option<Mode>,

    /// Vite dev server URL.
    #[arg(long, value_name = "URL")]
    pub dev_server_url: Option<String>,

    /// Logical path of the manifest.
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<String>,
}

impl SiteArgs {
    /// Overlay the flags that were given onto `config`.
    pub fn apply_to(&self, config: &mut ViteConfig) {
        if let Some(mode) = self.environment {
            config.environment = mode;
        }
        if let Some(url) = &self.dev_server_url {
            config.dev_server_url.clone_from(url);
        }
        if let Some(path) = &self.manifest {
            config.manifest_path.clone_from(path);
        }
    }

    /// The theme-chain path resolver these flags describe.
    #[must_use]
    pub fn path_resolver(&self) -> ThemePathResolver {
        let resolver = self.themes.iter().fold(ThemePathResolver::new(&self.root), |resolver, theme| {
            resolver.with_theme(theme.as_str())
        });
        match &self.public_base {
            Some(base) => resolver.with_public_base(base.as_str()),
            None => resolver,
        }
    }

    /// Load the layered configuration with these flags on top.
    ///
    /// # Errors
    ///
    /// Fails when the configuration file or environment is invalid.
    pub fn load_config(&self, config_path: Option<&Path>) -> Result<ViteConfig> {
        let mut config = ViteConfig::load(config_path)?;
        self.apply_to(&mut config);
        tracing::debug!("Effective configuration: {:?}", config);
        Ok(config)
    }

    /// Build a resolver over the default ports.
    ///
    /// # Errors
    ///
    /// Fails when the configuration file or environment is invalid.
    pub fn build_resolver(&self, config_path: Option<&Path>) -> Result<ViteResolver> {
        let config = self.load_config(config_path)?;
        Ok(ViteResolver::with_defaults(&config, self.path_resolver()))
    }
}

/// Read a template from a path, or stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source).context("Failed to read template from stdin")?;
        return Ok(source);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read template {}", path.display()))
}

/// Write to a file, or stdout when no path is given.
pub(crate) fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write output to {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes()).context("Failed to write to stdout")?;
            if !content.is_empty() && !content.ends_with('\n') {
                stdout.write_all(b"\n").context("Failed to write to stdout")?;
            }
            Ok(())
        }
    }
}
