//! Common test utilities for the vite-tags test suites
//!
//! [`TestSite`] lays out a throwaway document root with themes, manifests, and
//! templates, and runs the `vite-tags` binary inside it.

// Not every suite uses every helper
#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use vite_tags::test_utils::ManifestFixture;

/// Variables the CLI reads; cleared for every run so the host shell cannot leak in.
const VITE_ENV_VARS: &[&str] =
    &["VITE_DEV_SERVER_URL", "VITE_MANIFEST_PATH", "VITE_ENVIRONMENT", "VITE_TAGS_CONFIG", "RUST_LOG"];

/// Captured output of a CLI run.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

/// A temporary site root.
pub struct TestSite {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    root: PathBuf,
}

impl TestSite {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("site");
        fs::create_dir_all(&root)?;
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a file relative to the root, creating directories.
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    /// Write a manifest fixture relative to the root.
    pub fn write_manifest(&self, relative: &str, fixture: &ManifestFixture) -> Result<PathBuf> {
        fixture.write_to(&self.root, relative)
    }

    pub fn read(&self, relative: &str) -> Result<String> {
        fs::read_to_string(self.root.join(relative)).with_context(|| format!("reading {relative}"))
    }

    /// Run the binary with the root as working directory.
    pub fn run_vite_tags(&self, args: &[&str]) -> Result<CommandOutput> {
        self.run_vite_tags_with_env(args, &[])
    }

    /// Run the binary with extra environment variables.
    pub fn run_vite_tags_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> Result<CommandOutput> {
        let binary = env!("CARGO_BIN_EXE_vite-tags");
        let mut command = Command::new(binary);
        command.args(args).current_dir(&self.root).env("NO_COLOR", "1");
        for name in VITE_ENV_VARS {
            command.env_remove(name);
        }
        for (name, value) in env {
            command.env(name, value);
        }

        let output = command.output().context("Failed to run vite-tags")?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// The production tags for `main.js` in [`ManifestFixture::with_chunk`], under `prefix`.
pub fn with_chunk_tags(prefix: &str) -> String {
    [
        format!(r#"<link rel="stylesheet" href="{prefix}/dist/main.def456.css">"#),
        format!(r#"<link rel="stylesheet" href="{prefix}/dist/chunk.jkl012.css">"#),
        format!(r#"<script type="module" src="{prefix}/dist/main.abc123.js"></script>"#),
        format!(r#"<link rel="modulepreload" href="{prefix}/dist/chunk.ghi789.js">"#),
    ]
    .join("\n")
}
