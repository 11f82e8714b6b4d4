//! Filesystem locations
//!
//! ```text
//! ~/.config/custom-log-levels/
//! └── config.toml               # Server and filter defaults
//! ```

use std::path::PathBuf;

/// Application directory name under the user config directory
pub const APP_DIR: &str = "custom-log-levels";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// User-level config directory (`$XDG_CONFIG_HOME/custom-log-levels`)
///
/// Falls back to the current directory when no home is available.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Default config file path
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
