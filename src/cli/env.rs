//! `vite-tags env`

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::common::{OutputFormat, SiteArgs, write_output};

/// Print the template globals, `NAME=value` per line or as a JSON object.
#[derive(Args, Debug)]
pub struct EnvCommand {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub site: SiteArgs,
}

impl EnvCommand {
    /// # Errors
    ///
    /// Fails on invalid configuration.
    pub fn execute(self, config_path: Option<&Path>) -> Result<()> {
        let resolver = self.site.build_resolver(config_path)?;
        let globals = resolver.template_globals();

        let output = match self.format {
            OutputFormat::Text => {
                globals.iter().map(|(name, value)| format!("{name}={value}")).collect::<Vec<_>>().join("\n")
            }
            OutputFormat::Json => {
                let object: serde_json::Map<String, serde_json::Value> = globals
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), serde_json::Value::String(value)))
                    .collect();
                serde_json::to_string_pretty(&object)?
            }
        };
        write_output(None, &output)
    }
}
