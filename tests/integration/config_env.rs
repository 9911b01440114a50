//! Configuration read from the process environment.
//!
//! These tests mutate process-wide environment variables and run serially.

use serial_test::serial;
use std::env;

use vite_tags::config::ViteConfig;
use vite_tags::core::{Mode, ViteError};

const VARS: &[&str] = &["VITE_DEV_SERVER_URL", "VITE_MANIFEST_PATH", "VITE_ENVIRONMENT"];

/// Sets variables for the guard's lifetime and clears them on drop.
struct EnvGuard;

impl EnvGuard {
    fn set(vars: &[(&str, &str)]) -> Self {
        for name in VARS {
            // SAFETY: tests touching the environment are #[serial]
            unsafe { env::remove_var(name) };
        }
        for (name, value) in vars {
            // SAFETY: tests touching the environment are #[serial]
            unsafe { env::set_var(name, value) };
        }
        Self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for name in VARS {
            // SAFETY: tests touching the environment are #[serial]
            unsafe { env::remove_var(name) };
        }
    }
}

#[test]
#[serial]
fn test_from_env_reads_all_variables() {
    let _guard = EnvGuard::set(&[
        ("VITE_DEV_SERVER_URL", "http://vite.test:5173"),
        ("VITE_MANIFEST_PATH", "dist/.vite/manifest.json"),
        ("VITE_ENVIRONMENT", "production"),
    ]);

    let config = ViteConfig::from_env().unwrap();
    assert_eq!(config.dev_server_url, "http://vite.test:5173");
    assert_eq!(config.manifest_path, "dist/.vite/manifest.json");
    assert_eq!(config.environment, Mode::Production);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    let _guard = EnvGuard::set(&[]);
    assert_eq!(ViteConfig::from_env().unwrap(), ViteConfig::default());
}

#[test]
#[serial]
fn test_invalid_environment_variable() {
    let _guard = EnvGuard::set(&[("VITE_ENVIRONMENT", "qa")]);
    assert_eq!(
        ViteConfig::from_env().unwrap_err(),
        ViteError::InvalidEnvironment {
            value: "qa".to_string()
        }
    );
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vite-tags.toml");
    std::fs::write(&path, "environment = \"production\"\nmanifest_path = \"from/file.json\"\n").unwrap();

    let _guard = EnvGuard::set(&[("VITE_MANIFEST_PATH", "from/env.json")]);
    let config = ViteConfig::load(Some(&path)).unwrap();
    assert_eq!(config.environment, Mode::Production);
    assert_eq!(config.manifest_path, "from/env.json");
}
