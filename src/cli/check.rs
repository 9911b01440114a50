//! `vite-tags check`

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use super::common::{OutputFormat, read_input, write_output};
use crate::core::ViteError;
use crate::templating::{DirectiveMatch, scan_directives};

/// List the directives in a template.
///
/// Exits with an error when any `@vite(...)` call is malformed, since such
/// calls are left in the rendered page unchanged.
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Template to check, or `-` for stdin.
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// One scanned directive, for JSON output.
#[derive(Debug, Serialize)]
pub struct DirectiveReport {
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive: Option<DirectiveMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DirectiveReport {
    fn new(source: &str, result: Result<DirectiveMatch, ViteError>) -> Self {
        match result {
            Ok(directive) => Self {
                line: line_of(source, directive.span.start),
                directive: Some(directive),
                error: None,
            },
            Err(error) => {
                let offset = match &error {
                    ViteError::MalformedDirective {
                        offset,
                        ..
                    } => *offset,
                    _ => 0,
                };
                Self {
                    line: line_of(source, offset),
                    directive: None,
                    error: Some(error.to_string()),
                }
            }
        }
    }
}

/// 1-based line number of a byte offset.
fn line_of(source: &str, offset: usize) -> usize {
    let offset = offset.min(source.len());
    source.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

impl CheckCommand {
    /// # Errors
    ///
    /// Fails when the template cannot be read or holds malformed directives.
    pub fn execute(self) -> Result<()> {
        let source = read_input(&self.template)?;
        let results = scan_directives(&source);
        let first_error = results.iter().find_map(|result| result.as_ref().err().cloned());
        let reports: Vec<DirectiveReport> =
            results.into_iter().map(|result| DirectiveReport::new(&source, result)).collect();
        let malformed = reports.iter().filter(|report| report.error.is_some()).count();

        match self.format {
            OutputFormat::Json => write_output(None, &serde_json::to_string_pretty(&reports)?)?,
            OutputFormat::Text => {
                for report in &reports {
                    match (&report.directive, &report.error) {
                        (Some(directive), _) => println!(
                            "{} {}: {}",
                            "✓".green(),
                            report.line,
                            directive.entrypoints.join(", ")
                        ),
                        (None, Some(error)) => println!("{} {}: {}", "✗".red(), report.line, error),
                        (None, None) => {}
                    }
                }
                println!("{} directive(s), {} malformed", reports.len(), malformed);
            }
        }

        match first_error {
            Some(error) => Err(anyhow::Error::new(error)
                .context(format!("{} malformed directive(s) in {}", malformed, self.template.display()))),
            None => Ok(()),
        }
    }
}
