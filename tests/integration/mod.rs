//! Integration test suite for vite-tags
//!
//! End-to-end tests against real files in temporary site roots, through both
//! the library's default ports and the `vite-tags` binary.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: `render`, `resolve`, `check`, and `env` commands
//! - **config_env**: Configuration layering from files and environment variables
//! - **themes**: Theme-chain manifest lookup and public path rewriting on disk

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cli;
mod config_env;
mod themes;
