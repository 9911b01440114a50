//! Test utilities for vite-tags
//!
//! This module provides helpers shared by unit tests and the `tests/` suites:
//! - Once-guarded tracing setup for tests
//! - In-memory and panicking fakes for every host port
//! - Manifest fixtures, including the ordering fixture used across suites
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vite_tags::test_utils::{ManifestFixture, MemoryStorage, RecordingLogger};
//!
//! let storage = Arc::new(
//!     MemoryStorage::new().with_file("dist/manifest.json", ManifestFixture::with_chunk().content),
//! );
//! let logger = Arc::new(RecordingLogger::new());
//! assert_eq!(logger.count(), 0);
//! ```

pub mod fakes;
pub mod fixtures;

pub use fakes::{MemoryStorage, PanickingCache, PanickingStorage, RecordingLogger, StaticPathResolver};
pub use fixtures::ManifestFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Respects `RUST_LOG` when set, otherwise uses `level`. With neither, tests
/// run without a subscriber.
///
/// ```bash
/// RUST_LOG=vite_tags=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
