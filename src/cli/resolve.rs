//! `vite-tags resolve`

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::Path;

use super::common::{OutputFormat, SiteArgs, write_output};
use crate::resolver::{ResolvedAsset, TagOptions};

/// Print the tags for entrypoints.
#[derive(Args, Debug)]
pub struct ResolveCommand {
    /// Entrypoint names as they appear in the manifest.
    #[arg(value_name = "ENTRY", required = true)]
    pub entrypoints: Vec<String>,

    /// Directory manifest files are served from.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<String>,

    /// Tag options as a JSON object, as in a directive.
    #[arg(long, value_name = "JSON")]
    pub options: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub site: SiteArgs,
}

#[derive(Serialize)]
struct AssetReport<'a> {
    #[serde(flatten)]
    asset: &'a ResolvedAsset,
    html: String,
}

impl ResolveCommand {
    /// The tag options given by `--options` and `--out-dir`, the latter winning.
    ///
    /// # Errors
    ///
    /// Fails when `--options` is not valid options JSON.
    pub fn tag_options(&self) -> Result<TagOptions> {
        let mut options = match &self.options {
            Some(json) => TagOptions::from_json(json).context("Invalid --options JSON")?,
            None => TagOptions::default(),
        };
        if let Some(out_dir) = &self.out_dir {
            options.out_dir = Some(out_dir.clone());
        }
        Ok(options)
    }

    /// # Errors
    ///
    /// Fails on invalid configuration or options, or when output fails.
    pub fn execute(self, config_path: Option<&Path>) -> Result<()> {
        let resolver = self.site.build_resolver(config_path)?;
        let options = self.tag_options()?;
        let assets = resolver.resolve(&self.entrypoints, &options);

        match self.format {
            OutputFormat::Text => {
                let html = assets.iter().map(ResolvedAsset::render).collect::<Vec<_>>().join("\n");
                write_output(None, &resolver.path_resolver().to_public(&html))
            }
            OutputFormat::Json => {
                let reports: Vec<AssetReport<'_>> = assets
                    .iter()
                    .map(|asset| AssetReport {
                        asset,
                        html: resolver.path_resolver().to_public(&asset.render()),
                    })
                    .collect();
                write_output(None, &serde_json::to_string_pretty(&reports)?)
            }
        }
    }
}
