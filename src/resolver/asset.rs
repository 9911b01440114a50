//! Resolved assets and their tag form.

use serde::Serialize;

use crate::constants::STYLESHEET_EXTENSIONS;
use crate::html::{Attributes, TagName, render_tag};

/// What a resolved path is loaded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// `<script type="module" src="...">`
    Script,
    /// `<link rel="stylesheet" href="...">`
    Stylesheet,
    /// `<link rel="modulepreload" href="...">`
    #[serde(rename = "modulepreload")]
    ModulePreload,
}

/// One tag's worth of output from the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAsset {
    pub kind: AssetKind,
    /// The URL the built-in `src`/`href` attribute was set to.
    pub path: String,
    /// Every attribute in render order, built-ins first.
    pub attributes: Attributes,
}

impl ResolvedAsset {
    /// A module script, with `extra` merged over `type` and `src`.
    pub fn script(path: impl Into<String>, extra: &Attributes) -> Self {
        let path = path.into();
        let attributes = Attributes::new().with("type", "module").with("src", path.as_str()).merged(extra);
        Self {
            kind: AssetKind::Script,
            path,
            attributes,
        }
    }

    /// A stylesheet link, with `extra` merged over `rel` and `href`.
    pub fn stylesheet(path: impl Into<String>, extra: &Attributes) -> Self {
        let path = path.into();
        let attributes = Attributes::new().with("rel", "stylesheet").with("href", path.as_str()).merged(extra);
        Self {
            kind: AssetKind::Stylesheet,
            path,
            attributes,
        }
    }

    /// A modulepreload hint.
    pub fn module_preload(path: impl Into<String>) -> Self {
        let path = path.into();
        let attributes = Attributes::new().with("rel", "modulepreload").with("href", path.as_str());
        Self {
            kind: AssetKind::ModulePreload,
            path,
            attributes,
        }
    }

    #[must_use]
    pub const fn tag(&self) -> TagName {
        match self.kind {
            AssetKind::Script => TagName::Script,
            AssetKind::Stylesheet | AssetKind::ModulePreload => TagName::Link,
        }
    }

    /// The serialized tag.
    #[must_use]
    pub fn render(&self) -> String {
        render_tag(self.tag(), &self.attributes)
    }
}

/// Whether an emitted file is a stylesheet, judged by its extension.
///
/// ```
/// use vite_tags::resolver::is_stylesheet;
///
/// assert!(is_stylesheet("assets/style.4c2d.css"));
/// assert!(is_stylesheet("theme.scss"));
/// assert!(!is_stylesheet("assets/main.4c2d.js"));
/// assert!(!is_stylesheet("css"));
/// ```
#[must_use]
pub fn is_stylesheet(file: &str) -> bool {
    file.rsplit_once('.').is_some_and(|(_, extension)| STYLESHEET_EXTENSIONS.contains(&extension))
}
