//! Centralized path definitions for todo-dash
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/todo-dash/
//! └── config.toml               # User preferences
//!
//! ~/.local/share/todo-dash/     # Default data directory
//! ├── todos.json                # Task list
//! └── darkMode.json             # Theme flag
//! ```
//!
//! Actual base directories follow the platform conventions of the `dirs`
//! crate.

use std::path::PathBuf;

/// Directory name used under the platform config and data roots
pub const APP_DIR: &str = "todo-dash";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "TODO_DASH_DATA_DIR";

/// Get the config directory.
///
/// Returns `<config_dir>/todo-dash`, falling back to `./.todo-dash` when
/// the platform has no config root.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".todo-dash"), |d| d.join(APP_DIR))
}

/// Get the config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Get the default data directory.
///
/// Returns `<data_dir>/todo-dash`, falling back to `./.todo-dash/data`.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".todo-dash").join("data"), |d| d.join(APP_DIR))
}
