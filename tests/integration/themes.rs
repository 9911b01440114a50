use std::sync::Arc;

use vite_tags::cache::MemoryCache;
use vite_tags::config::ViteConfig;
use vite_tags::core::{Mode, ViteError};
use vite_tags::host::{FsStorage, ThemePathResolver};
use vite_tags::resolver::ViteResolver;
use vite_tags::templating::rewrite;
use vite_tags::test_utils::{ManifestFixture, RecordingLogger, init_test_logging};

use crate::common::{TestSite, with_chunk_tags};

fn production() -> ViteConfig {
    ViteConfig {
        environment: Mode::Production,
        ..ViteConfig::default()
    }
}

fn site_resolver(config: &ViteConfig, paths: ThemePathResolver) -> (ViteResolver, Arc<RecordingLogger>) {
    let logger = Arc::new(RecordingLogger::new());
    let resolver = ViteResolver::new(
        config,
        Arc::new(MemoryCache::new()),
        Arc::new(FsStorage::new()),
        Arc::new(paths),
        logger.clone(),
    );
    (resolver, logger)
}

#[test]
fn test_active_theme_manifest_wins_over_fallback() {
    init_test_logging(None);
    let site = TestSite::new().unwrap();
    site.write_manifest("themes/site/dist/manifest.json", &ManifestFixture::with_chunk()).unwrap();
    site.write_manifest("themes/system/dist/manifest.json", &ManifestFixture::multi_entry()).unwrap();

    let paths = ThemePathResolver::new(site.root()).with_theme("site").with_theme("system");
    let (resolver, logger) = site_resolver(&production(), paths);

    assert_eq!(rewrite(&resolver, "@vite('main.js')"), with_chunk_tags(""));
    assert_eq!(rewrite(&resolver, "@vite('a.js')"), "");
    assert_eq!(logger.count(), 0);
}

#[test]
fn test_fallback_theme_and_public_base() {
    init_test_logging(None);
    let site = TestSite::new().unwrap();
    site.write_manifest("themes/system/dist/.vite/manifest.json", &ManifestFixture::with_chunk()).unwrap();

    let paths = ThemePathResolver::new(site.root())
        .with_theme("site")
        .with_theme("system")
        .with_public_base("/themes/system/");
    let (resolver, _) = site_resolver(&production(), paths);

    assert_eq!(
        rewrite(&resolver, "<head>@vite('main.js')</head>"),
        format!("<head>{}</head>", with_chunk_tags("/themes/system"))
    );
}

#[test]
fn test_configured_manifest_path() {
    init_test_logging(None);
    let site = TestSite::new().unwrap();
    site.write_manifest("build/assets.json", &ManifestFixture::with_chunk()).unwrap();
    site.write_manifest("dist/manifest.json", &ManifestFixture::multi_entry()).unwrap();

    let config = ViteConfig {
        manifest_path: "build/assets.json".to_string(),
        ..production()
    };
    let (configured, _) = site_resolver(&config, ThemePathResolver::new(site.root()));
    assert!(configured.manifest().contains("chunk.js"));

    let config = ViteConfig {
        manifest_path: "missing/assets.json".to_string(),
        ..production()
    };
    let (fallback, _) = site_resolver(&config, ThemePathResolver::new(site.root()));
    assert!(fallback.manifest().contains("_vendor.js"), "falls back to the default locations");
}

/// A manifest written mid-deploy is picked up on the next render
#[test]
fn test_manifest_appearing_after_failure() {
    init_test_logging(None);
    let site = TestSite::new().unwrap();
    let (resolver, logger) = site_resolver(&production(), ThemePathResolver::new(site.root()));

    for _ in 0..3 {
        assert_eq!(rewrite(&resolver, "@vite('main.js')"), "");
    }
    assert_eq!(logger.count(), 1);

    site.write_manifest("dist/manifest.json", &ManifestFixture::with_chunk()).unwrap();
    assert_eq!(rewrite(&resolver, "@vite('main.js')"), with_chunk_tags(""));
    assert_eq!(logger.count(), 1);
}

#[test]
fn test_malformed_manifest_on_disk() {
    init_test_logging(None);
    let site = TestSite::new().unwrap();
    site.write_manifest("dist/manifest.json", &ManifestFixture::malformed()).unwrap();
    let (resolver, logger) = site_resolver(&production(), ThemePathResolver::new(site.root()));

    assert_eq!(rewrite(&resolver, "@vite('main.js')@vite('main.js')"), "");
    assert_eq!(logger.count(), 1);
    assert!(matches!(logger.errors()[0], ViteError::MalformedManifest { .. }));
}

#[test]
fn test_development_ignores_broken_site() {
    init_test_logging(None);
    let site = TestSite::new().unwrap();
    site.write_manifest("dist/manifest.json", &ManifestFixture::malformed()).unwrap();

    let (resolver, logger) = site_resolver(&ViteConfig::default(), ThemePathResolver::new(site.root()));
    let html = rewrite(&resolver, "@vite('main.js')");
    assert!(html.contains("http://localhost:5173/main.js"));
    assert_eq!(logger.count(), 0);
}
