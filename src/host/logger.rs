//! [`Logger`] backed by the `tracing` facade.

use super::Logger;
use crate::core::ViteError;

/// Forwards manifest failures to `tracing::error!`.
///
/// The binary installs a `tracing-subscriber` formatter, so these end up on
/// stderr alongside the rest of the crate's diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str, error: &ViteError) {
        tracing::error!(target: "vite_tags::manifest", error = %error, "{}", message);
    }
}
