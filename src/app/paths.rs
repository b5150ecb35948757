// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to the `_with_override()` functions
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`FOLIO_WHEEL_DATA_DIR`, `FOLIO_WHEEL_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs`, with [`APP_NAME`] appended
//!
//! The config directory holds `settings.toml`; the data directory holds the
//! session state file.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "FolioWheel";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "FOLIO_WHEEL_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FOLIO_WHEEL_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` flags.
///
/// Only the first call has an effect; later calls are ignored with a warning.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::warn!("CLI directory overrides were already initialized");
    }
}

/// Where a directory lookup should look, in priority order.
struct DirSource<'a> {
    override_path: Option<PathBuf>,
    cli: &'a OnceLock<Option<PathBuf>>,
    env_var: &'a str,
    platform: fn() -> Option<PathBuf>,
}

impl DirSource<'_> {
    fn resolve(self) -> Option<PathBuf> {
        if let Some(path) = self.override_path {
            return Some(path);
        }

        if let Some(path) = self.cli.get().and_then(Clone::clone) {
            return Some(path);
        }

        if let Ok(env_path) = std::env::var(self.env_var) {
            if !env_path.is_empty() {
                return Some(PathBuf::from(env_path));
            }
        }

        (self.platform)().map(|mut path| {
            path.push(APP_NAME);
            path
        })
    }
}

/// Returns the application data directory (session state).
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory, preferring `override_path`.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    DirSource {
        override_path,
        cli: &CLI_DATA_DIR,
        env_var: ENV_DATA_DIR,
        platform: dirs::data_dir,
    }
    .resolve()
}

/// Returns the application config directory (`settings.toml`).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory, preferring `override_path`.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    DirSource {
        override_path,
        cli: &CLI_CONFIG_DIR,
        env_var: ENV_CONFIG_DIR,
        platform: dirs::config_dir,
    }
    .resolve()
}
