//! Entrypoint to asset-tag resolution.
//!
//! [`ViteResolver`] turns a list of entrypoint names into the ordered set of
//! tags a page needs. The [`Mode`] is fixed when the resolver is built.
//!
//! # Development
//!
//! Tags point at the dev server and the manifest is never read:
//!
//! ```html
//! <script type="module" src="http://localhost:5173/@vite/client"></script>
//! <script type="module" src="http://localhost:5173/main.js"></script>
//! ```
//!
//! # Production
//!
//! Tags come from the build manifest, always in this order:
//!
//! 1. Stylesheets listed in each entrypoint's `css`
//! 2. Stylesheets of each chunk named in an entrypoint's `imports` (one level)
//! 3. The entrypoint itself, as a stylesheet link or a module script
//! 4. A `modulepreload` hint for each imported chunk
//!
//! Entrypoints and imports missing from the manifest are skipped. A missing or
//! malformed manifest resolves everything to nothing; the failure is reported
//! once through the [`Logger`] port.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use vite_tags::cache::MemoryCache;
//! use vite_tags::config::ViteConfig;
//! use vite_tags::core::Mode;
//! use vite_tags::host::{FsStorage, ThemePathResolver, TracingLogger};
//! use vite_tags::resolver::{TagOptions, ViteResolver};
//!
//! let config = ViteConfig {
//!     environment: Mode::Development,
//!     ..ViteConfig::default()
//! };
//! let resolver = ViteResolver::new(
//!     &config,
//!     Arc::new(MemoryCache::new()),
//!     Arc::new(FsStorage::new()),
//!     Arc::new(ThemePathResolver::new(".")),
//!     Arc::new(TracingLogger),
//! );
//!
//! let html = resolver.render(&["main.js"], &TagOptions::default());
//! assert_eq!(
//!     html,
//!     "<script type=\"module\" src=\"http://localhost:5173/@vite/client\"></script>\n\
//!      <script type=\"module\" src=\"http://localhost:5173/main.js\"></script>"
//! );
//! ```

mod asset;
mod options;

pub use asset::{AssetKind, ResolvedAsset, is_stylesheet};
pub use options::TagOptions;

use std::sync::Arc;

use crate::cache::{CacheStore, MemoryCache};
use crate::config::ViteConfig;
use crate::constants::{REACT_REFRESH_PATH, VITE_CLIENT_PATH};
use crate::core::Mode;
use crate::host::{FsStorage, Logger, PathResolver, Storage, ThemePathResolver, TracingLogger};
use crate::html::Attributes;
use crate::manifest::{Manifest, ManifestEntry, ManifestStore, locate_manifest};

/// Template global holding `development` or `production`.
pub const GLOBAL_ENVIRONMENT: &str = "VITE_ENVIRONMENT";

/// Template global holding the dev server URL.
pub const GLOBAL_DEV_SERVER_URL: &str = "VITE_DEV_SERVER_URL";

/// Resolves entrypoints to tags for one configuration.
pub struct ViteResolver {
    mode: Mode,
    dev_server_url: String,
    manifest_path: String,
    warn_unknown_entrypoints: bool,
    manifest: ManifestStore,
    paths: Arc<dyn PathResolver>,
}

impl ViteResolver {
    /// Build a resolver over the given ports.
    ///
    /// Configuration is captured here and never re-read.
    pub fn new(
        config: &ViteConfig,
        cache: Arc<dyn CacheStore>,
        storage: Arc<dyn Storage>,
        paths: Arc<dyn PathResolver>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        tracing::debug!(
            "Creating resolver: mode={}, manifest_path='{}'",
            config.environment,
            config.manifest_path
        );

        Self {
            mode: config.environment,
            dev_server_url: config.effective_dev_server_url(),
            manifest_path: config.manifest_path.clone(),
            warn_unknown_entrypoints: config.warn_unknown_entrypoints,
            manifest: ManifestStore::new(cache, storage, logger),
            paths,
        }
    }

    /// Resolver using the built-in ports: an in-memory cache, the file system,
    /// `paths` for lookup, and `tracing` for failures.
    pub fn with_defaults(config: &ViteConfig, paths: ThemePathResolver) -> Self {
        Self::new(
            config,
            Arc::new(MemoryCache::new()),
            Arc::new(FsStorage::new()),
            Arc::new(paths),
            Arc::new(TracingLogger),
        )
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// `"development"` or `"production"`.
    #[must_use]
    pub const fn environment(&self) -> &'static str {
        self.mode.as_str()
    }

    /// The dev server URL, defaulted and without a trailing slash.
    #[must_use]
    pub fn dev_server_url(&self) -> &str {
        &self.dev_server_url
    }

    /// The host path rules rendered blocks are passed through.
    #[must_use]
    pub fn path_resolver(&self) -> &dyn PathResolver {
        self.paths.as_ref()
    }

    /// Global variables a host template engine should expose, in order.
    #[must_use]
    pub fn template_globals(&self) -> Vec<(&'static str, String)> {
        vec![
            (GLOBAL_ENVIRONMENT, self.environment().to_string()),
            (GLOBAL_DEV_SERVER_URL, self.dev_server_url.clone()),
        ]
    }

    /// Locate and load the manifest. Empty when it cannot be loaded.
    pub fn manifest(&self) -> Manifest {
        let path = locate_manifest(&self.manifest_path, self.paths.as_ref(), self.manifest.storage());
        self.manifest.get(&path)
    }

    /// Resolve entrypoints to assets in output order.
    pub fn resolve<S: AsRef<str>>(&self, entrypoints: &[S], options: &TagOptions) -> Vec<ResolvedAsset> {
        if self.mode.uses_dev_server() {
            return self.resolve_dev(entrypoints);
        }

        let manifest = self.manifest();
        let chunks: Vec<&ManifestEntry> = entrypoints
            .iter()
            .map(|name| name.as_ref())
            .filter_map(|name| {
                let chunk = manifest.get(name);
                if chunk.is_none() {
                    self.report_unknown(name, &manifest);
                }
                chunk
            })
            .collect();

        let mut assets = Vec::new();

        for chunk in &chunks {
            for css in &chunk.css {
                assets.push(ResolvedAsset::stylesheet(options.asset_url(css), &Attributes::new()));
            }
        }

        for chunk in &chunks {
            for import in imports_of(&manifest, chunk) {
                for css in &import.css {
                    assets.push(ResolvedAsset::stylesheet(options.asset_url(css), &Attributes::new()));
                }
            }
        }

        for chunk in &chunks {
            let url = options.asset_url(&chunk.file);
            if is_stylesheet(&chunk.file) {
                assets.push(ResolvedAsset::stylesheet(url, &options.link_tag_attributes));
            } else {
                assets.push(ResolvedAsset::script(url, &options.script_tag_attributes));
            }
        }

        for chunk in &chunks {
            for import in imports_of(&manifest, chunk) {
                assets.push(ResolvedAsset::module_preload(options.asset_url(&import.file)));
            }
        }

        tracing::debug!("Resolved {} entrypoint(s) to {} asset(s)", entrypoints.len(), assets.len());
        assets
    }

    /// Resolve and serialize, one tag per line. Empty when nothing resolves.
    pub fn render<S: AsRef<str>>(&self, entrypoints: &[S], options: &TagOptions) -> String {
        self.resolve(entrypoints, options).iter().map(ResolvedAsset::render).collect::<Vec<_>>().join("\n")
    }

    /// The React refresh runtime preamble, or an empty string in production.
    #[must_use]
    pub fn react_refresh_preamble(&self) -> String {
        if !self.mode.uses_dev_server() {
            return String::new();
        }

        format!(
            concat!(
                "<script type=\"module\">\n",
                "    import RefreshRuntime from '{url}/{path}'\n",
                "    RefreshRuntime.injectIntoGlobalHook(window)\n",
                "    window.$RefreshReg$ = () => {{}}\n",
                "    window.$RefreshSig$ = () => (type) => type\n",
                "    window.__vite_plugin_react_preamble_installed__ = true\n",
                "</script>"
            ),
            url = self.dev_server_url,
            path = REACT_REFRESH_PATH
        )
    }

    fn resolve_dev<S: AsRef<str>>(&self, entrypoints: &[S]) -> Vec<ResolvedAsset> {
        let none = Attributes::new();
        let client = format!("{}/{}", self.dev_server_url, VITE_CLIENT_PATH);

        std::iter::once(ResolvedAsset::script(client, &none))
            .chain(
                entrypoints.iter().map(|entry| {
                    ResolvedAsset::script(format!("{}/{}", self.dev_server_url, entry.as_ref()), &none)
                }),
            )
            .collect()
    }

    fn report_unknown(&self, name: &str, manifest: &Manifest) {
        // An empty manifest was already reported by the store.
        if self.warn_unknown_entrypoints && !manifest.is_empty() {
            tracing::warn!("{}", unknown_entrypoint_message(name, manifest));
        } else {
            tracing::debug!("Skipping unknown entrypoint '{}'", name);
        }
    }
}

fn unknown_entrypoint_message(name: &str, manifest: &Manifest) -> String {
    let known = manifest.entrypoints();
    if known.is_empty() {
        format!("Entrypoint '{name}' is not in the Vite manifest")
    } else {
        format!("Entrypoint '{name}' is not in the Vite manifest (entrypoints: {})", known.join(", "))
    }
}

/// Chunks imported by `chunk` that exist in the manifest.
fn imports_of<'m>(manifest: &'m Manifest, chunk: &ManifestEntry) -> Vec<&'m ManifestEntry> {
    chunk.imports.iter().filter_map(|import| manifest.get(import)).collect()
}

impl std::fmt::Debug for ViteResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViteResolver")
            .field("mode", &self.mode)
            .field("dev_server_url", &self.dev_server_url)
            .field("manifest_path", &self.manifest_path)
            .field("manifest", &self.manifest)
            .finish_non_exhaustive()
    }
}
