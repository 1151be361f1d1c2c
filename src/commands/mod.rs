//! Subcommand implementations
//!
//! Each command resolves its selection in the foreground, then hands the
//! run to the background worker and prints events as they arrive.

pub mod list;
pub mod paths;
pub mod run;

use anyhow::Result;

use mapport::config::Config;
use mapport::domain::ports::PathProvider;
use mapport::error::MapportError;
use mapport::infrastructure::ConfiguredPaths;
use mapport::presentation::{create_paths, OutputFormat};

/// Everything a command needs from the global flags and configuration
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl CommandContext {
    pub fn new(config: Config, format: OutputFormat) -> Self {
        Self { config, format }
    }

    /// Configured paths that point at existing directories
    pub fn valid_paths(&self) -> Result<ConfiguredPaths> {
        let paths = create_paths(&self.config)?;
        if !paths.is_valid() {
            return Err(MapportError::PathsNotConfigured {
                reason: format!(
                    "{} or {} does not exist",
                    paths.source_game_dir().display(),
                    paths.target_game_dir().display()
                ),
            }
            .into());
        }
        Ok(paths)
    }
}
