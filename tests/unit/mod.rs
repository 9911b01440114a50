//! Unit test suite for vite-tags
//!
//! Exercises the public library API with in-memory ports from `test_utils`.
//! Module-internal behavior is covered by the `#[cfg(test)]` modules in `src/`.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod shared_resolver;
