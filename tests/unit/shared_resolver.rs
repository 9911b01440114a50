//! One resolver shared by concurrent renders.

use std::sync::Arc;
use std::thread;

use vite_tags::cache::MemoryCache;
use vite_tags::config::ViteConfig;
use vite_tags::core::Mode;
use vite_tags::resolver::{TagOptions, ViteResolver};
use vite_tags::templating::rewrite;
use vite_tags::test_utils::{ManifestFixture, MemoryStorage, RecordingLogger, StaticPathResolver, init_test_logging};

const MANIFEST_PATH: &str = "dist/manifest.json";

fn production(storage: Arc<MemoryStorage>) -> (Arc<ViteResolver>, Arc<RecordingLogger>) {
    let logger = Arc::new(RecordingLogger::new());
    let config = ViteConfig {
        environment: Mode::Production,
        manifest_path: MANIFEST_PATH.to_string(),
        ..ViteConfig::default()
    };
    let resolver = ViteResolver::new(
        &config,
        Arc::new(MemoryCache::new()),
        storage,
        Arc::new(StaticPathResolver::identity(&[MANIFEST_PATH])),
        logger.clone(),
    );
    (Arc::new(resolver), logger)
}

#[test]
fn test_concurrent_renders_agree() {
    init_test_logging(None);
    let storage = Arc::new(MemoryStorage::new().with_file(MANIFEST_PATH, ManifestFixture::multi_entry().content));
    let (resolver, logger) = production(storage);
    let expected = resolver.render(&["a.js", "b.js"], &TagOptions::default());
    assert!(!expected.is_empty());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || rewrite(&resolver, "@vite(['a.js', 'b.js'])"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(logger.count(), 0);
}

#[test]
fn test_concurrent_failures_are_logged_once() {
    init_test_logging(None);
    let storage = Arc::new(MemoryStorage::new());
    let (resolver, logger) = production(storage.clone());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || rewrite(&resolver, "x@vite('a.js')y"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "xy");
    }
    assert_eq!(logger.count(), 1);
}
