//! vite-tags - Vite asset tags for server-rendered templates
//!
//! Templates name their build entrypoints with directives:
//!
//! ```html
//! @viteReactRefresh
//! @vite(['src/main.ts', 'src/style.css'], {"scriptTagAttributes": {"defer": true}})
//! ```
//!
//! In development these become `<script type="module">` tags pointing at the
//! Vite dev server. In production they become the hashed bundles listed in the
//! build manifest, with their stylesheets, imported-chunk stylesheets, and
//! `modulepreload` hints, in the order browsers need them.
//!
//! # Core Modules
//!
//! - [`templating`] - Directive tokenizer, parser, and template rewriter
//! - [`resolver`] - Entrypoint to tag resolution ([`ViteResolver`](resolver::ViteResolver))
//! - [`manifest`] - Manifest types, path lookup, and cached failure-tolerant loading
//! - [`html`] - Ordered attribute maps and tag serialization
//!
//! # Host Integration
//!
//! - [`host`] - `Storage`, `PathResolver`, and `Logger` ports with default implementations
//! - [`cache`] - `CacheStore` port and the in-memory default
//! - [`config`] - Layered configuration (defaults, `vite-tags.toml`, environment)
//!
//! # Supporting Modules
//!
//! - [`core`] - Error types and the rendering [`Mode`](core::Mode)
//! - [`constants`] - Default paths, URLs, and environment variable names
//! - [`cli`] - The `vite-tags` command-line interface
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use vite_tags::cache::MemoryCache;
//! use vite_tags::config::ViteConfig;
//! use vite_tags::host::{FsStorage, ThemePathResolver, TracingLogger};
//! use vite_tags::resolver::ViteResolver;
//! use vite_tags::templating::rewrite;
//!
//! let resolver = ViteResolver::new(
//!     &ViteConfig::default(),
//!     Arc::new(MemoryCache::new()),
//!     Arc::new(FsStorage::new()),
//!     Arc::new(ThemePathResolver::new(".")),
//!     Arc::new(TracingLogger),
//! );
//!
//! let html = rewrite(&resolver, "<head>@vite('src/main.ts')</head>");
//! assert!(html.contains("http://localhost:5173/@vite/client"));
//! assert!(html.contains("http://localhost:5173/src/main.ts"));
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod host;
pub mod html;
pub mod manifest;
pub mod resolver;
pub mod templating;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
