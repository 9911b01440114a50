//! Per-directive tag options.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OUT_DIR;
use crate::html::Attributes;

/// Options accepted as the second directive argument.
///
/// ```json
/// {"outDir": "build", "scriptTagAttributes": {"defer": true}, "linkTagAttributes": {"media": "print"}}
/// ```
///
/// Every field is optional and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagOptions {
    /// Directory the manifest's `file` values are relative to, as served.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    /// Merged over the built-in attributes of production entry scripts.
    pub script_tag_attributes: Attributes,

    /// Merged over the built-in attributes of production entry stylesheets.
    pub link_tag_attributes: Attributes,
}

impl TagOptions {
    /// Parse the JSON object form used in directives.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `json` is not an object of the
    /// expected shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<serde_json::Value>(json)? {
            value @ serde_json::Value::Object(_) => serde_json::from_value(value),
            _ => Err(serde_json::Error::custom("tag options must be a JSON object")),
        }
    }

    /// Builder that sets the output directory.
    #[must_use]
    pub fn with_out_dir(mut self, out_dir: impl Into<String>) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    /// The output directory with surrounding `/` and `\` removed.
    #[must_use]
    pub fn out_dir(&self) -> &str {
        self.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR).trim_matches(|c| c == '/' || c == '\\')
    }

    /// Public URL of a manifest `file` under the output directory.
    ///
    /// ```
    /// use vite_tags::resolver::TagOptions;
    ///
    /// assert_eq!(TagOptions::default().asset_url("main.abc.js"), "/dist/main.abc.js");
    /// assert_eq!(TagOptions::default().with_out_dir("/build/").asset_url("a.css"), "/build/a.css");
    /// assert_eq!(TagOptions::default().with_out_dir("").asset_url("a.css"), "/a.css");
    /// ```
    #[must_use]
    pub fn asset_url(&self, file: &str) -> String {
        match self.out_dir() {
            "" => format!("/{file}"),
            dir => format!("/{dir}/{file}"),
        }
    }
}
