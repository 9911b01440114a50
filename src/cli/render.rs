//! `vite-tags render`

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use super::common::{SiteArgs, read_input, write_output};
use crate::templating::DirectiveRewriter;

/// Rewrite a template's directives into tags.
#[derive(Args, Debug)]
pub struct RenderCommand {
    /// Template to rewrite, or `-` for stdin.
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Write the result here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub site: SiteArgs,
}

impl RenderCommand {
    /// # Errors
    ///
    /// Fails on invalid configuration or when the template cannot be read or
    /// the output cannot be written. Directive and manifest problems never fail.
    pub fn execute(self, config_path: Option<&Path>) -> Result<()> {
        let resolver = self.site.build_resolver(config_path)?;
        let source = read_input(&self.template)?;

        let rendered = DirectiveRewriter::new(&resolver).rewrite(&source);
        write_output(self.output.as_deref(), &rendered)?;

        if let Some(output) = &self.output {
            tracing::info!("Wrote {}", output.display());
        }
        Ok(())
    }
}
