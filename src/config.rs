//! User configuration
//!
//! Read from `<config_dir>/todo-dash/config.toml`:
//!
//! ```toml
//! [storage]
//! data_dir = "/home/me/todos"
//!
//! [display]
//! color = false
//! ```
//!
//! A missing or unreadable file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::paths;

/// User configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where state is persisted
    #[serde(default)]
    pub storage: StorageConfig,
    /// Output preferences
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory; platform default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Output preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colour human-readable output
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl Config {
    /// Load from the default config path
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&paths::config_file())
    }

    /// Load from `path`, or defaults if it is missing or invalid
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            debug!("No config at {}, using defaults", path.display());
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_else(|err| {
            warn!("Ignoring invalid config {}: {err}", path.display());
            Self::default()
        })
    }

    /// Write to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Resolve the data directory
    ///
    /// Precedence: `cli_override`, then `TODO_DASH_DATA_DIR`, then the
    /// config file, then the platform default.
    #[must_use]
    pub fn data_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(dir) = cli_override {
            return dir.to_path_buf();
        }
        if let Some(dir) = std::env::var_os(paths::DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }
        self.storage.data_dir.clone().unwrap_or_else(paths::default_data_dir)
    }
}
