//! Configuration module for mapport
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MAPPORT_*)
//! 3. `--config` file, `./mapport.toml`, or the user config file
//! 4. Built-in defaults (lowest priority)
//!
//! The configuration is only ever read.

mod loader;
mod types;

pub use loader::{
    load_with_warnings, resolve, search_paths, with_env_overrides, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE, SOURCE_GAME_VAR, TARGET_GAME_VAR,
};
pub use types::{
    BuildConfig, Config, ExportConfig, PathsConfig, TemplatesConfig, ToolsConfig,
};
