//! Config directory resolution with test isolation support.
//!
//! `dirs::config_dir()` uses platform APIs that ignore environment variables
//! on Windows, so tests point `MAPPORT_CONFIG_HOME` at a temp directory
//! instead.

use std::path::PathBuf;

/// Environment variable overriding the user config directory.
pub const CONFIG_HOME_VAR: &str = "MAPPORT_CONFIG_HOME";

/// Directory holding the user's `config.toml`.
///
/// `MAPPORT_CONFIG_HOME` wins when set; otherwise `<config_dir>/mapport`.
pub fn mapport_config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_HOME_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("mapport")))
}
