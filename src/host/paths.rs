//! Theme-aware [`PathResolver`].
//!
//! Sites keep their templates and build output in per-theme directories under
//! a document root:
//!
//! ```text
//! <root>/
//!   themes/
//!     site/            <- active theme
//!       dist/.vite/manifest.json
//!     system/          <- fallback theme
//! ```
//!
//! A logical path is looked up in each theme of the chain in order, then
//! directly under the root. Rendered tags use root-relative URLs such as
//! `/dist/main.js`; [`ThemePathResolver::to_public`] prefixes those with the
//! configured public base (e.g. `/themes/site`) so they match where the web
//! server actually exposes the files.

use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::PathResolver;

/// `src="/..."` and `href="/..."` preceded by whitespace, excluding
/// protocol-relative `//host` URLs and attributes such as `data-src`.
static ROOT_RELATIVE_ATTR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"(^|\s)(src|href)="/([^/"][^"]*)?""#).ok());

/// Resolves logical paths through a theme chain below a document root.
#[derive(Debug, Clone)]
pub struct ThemePathResolver {
    root: PathBuf,
    themes: Vec<String>,
    public_base: String,
}

impl ThemePathResolver {
    /// Resolver rooted at `root` with no themes and a public base of `/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            themes: Vec::new(),
            public_base: "/".to_string(),
        }
    }

    /// Append a theme to the lookup chain. The first theme added wins.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.themes.push(theme.into());
        self
    }

    /// Set the public base path that root-relative asset URLs are moved under.
    #[must_use]
    pub fn with_public_base(mut self, base: impl Into<String>) -> Self {
        self.public_base = base.into();
        self
    }

    /// The lookup chain, most specific first.
    #[must_use]
    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    fn candidates(&self, logical: &str) -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = self
            .themes
            .iter()
            .map(|theme| self.root.join("themes").join(theme).join(logical))
            .collect();
        candidates.push(self.root.join(logical));
        candidates
    }
}

impl PathResolver for ThemePathResolver {
    fn resolve(&self, logical: &str) -> Option<String> {
        let logical = logical.trim();
        if logical.is_empty() {
            return None;
        }

        if Path::new(logical).is_absolute() {
            return Path::new(logical).is_file().then(|| logical.to_string());
        }

        let found = self.candidates(logical).into_iter().find(|candidate| candidate.is_file());
        match &found {
            Some(path) => tracing::debug!("Resolved '{}' to {}", logical, path.display()),
            None => tracing::debug!("Could not resolve '{}' in {} location(s)", logical, self.themes.len() + 1),
        }
        found.map(|path| path.display().to_string())
    }

    fn to_public(&self, html: &str) -> String {
        let base = self.public_base.trim_end_matches('/');
        if base.is_empty() {
            return html.to_string();
        }

        let Some(pattern) = ROOT_RELATIVE_ATTR.as_ref() else {
            return html.to_string();
        };

        pattern
            .replace_all(html, |caps: &Captures<'_>| {
                let rest = caps.get(3).map_or("", |m| m.as_str());
                format!("{}{}=\"{}/{}\"", &caps[1], &caps[2], base, rest)
            })
            .into_owned()
    }
}
