//! Manifest fixtures.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A named manifest document.
#[derive(Clone, Debug)]
pub struct ManifestFixture {
    pub name: String,
    pub content: String,
}

impl ManifestFixture {
    /// `main.js` with its own stylesheet and one imported chunk that carries a
    /// stylesheet of its own.
    pub fn with_chunk() -> Self {
        Self {
            name: "with_chunk".to_string(),
            content: r#"{
  "main.js": {
    "file": "main.abc123.js",
    "css": ["main.def456.css"],
    "imports": ["chunk.js"]
  },
  "chunk.js": {
    "file": "chunk.ghi789.js",
    "css": ["chunk.jkl012.css"]
  }
}"#
            .to_string(),
        }
    }

    /// Two independent entrypoints plus a stylesheet entrypoint.
    pub fn multi_entry() -> Self {
        Self {
            name: "multi_entry".to_string(),
            content: r#"{
  "a.js": { "file": "assets/a.111.js", "css": ["assets/a.111.css"], "isEntry": true },
  "b.js": { "file": "assets/b.222.js", "imports": ["_vendor.js"], "isEntry": true },
  "style.scss": { "file": "assets/style.333.css", "isEntry": true },
  "_vendor.js": { "file": "assets/vendor.444.js", "css": ["assets/vendor.444.css"] }
}"#
            .to_string(),
        }
    }

    /// An import chain two levels deep.
    pub fn nested_imports() -> Self {
        Self {
            name: "nested_imports".to_string(),
            content: r#"{
  "app.js": { "file": "app.1.js", "imports": ["_mid.js"] },
  "_mid.js": { "file": "mid.2.js", "css": ["mid.2.css"], "imports": ["_leaf.js"] },
  "_leaf.js": { "file": "leaf.3.js", "css": ["leaf.3.css"] }
}"#
            .to_string(),
        }
    }

    /// Not JSON.
    pub fn malformed() -> Self {
        Self {
            name: "malformed".to_string(),
            content: r#"{ "main.js": { "file": "#.to_string(),
        }
    }

    /// Write the fixture to `dir/relative`, creating parent directories.
    pub fn write_to(&self, dir: &Path, relative: &str) -> Result<PathBuf> {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&path, &self.content)
            .with_context(|| format!("writing manifest fixture '{}'", self.name))?;
        Ok(path)
    }
}
