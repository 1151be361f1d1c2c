//! Configured game paths
//!
//! Implements the PathProvider port from the loaded configuration.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::ports::PathProvider;
use crate::error::{MapportError, MapportResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredPaths {
    source_game: PathBuf,
    target_game: PathBuf,
    export_executable: String,
    build_executable: String,
    export_args: Vec<String>,
    build_args: Vec<String>,
    run_args: Vec<String>,
}

impl ConfiguredPaths {
    /// Both game directories must be set; whether they exist is checked later
    pub fn from_config(config: &Config) -> MapportResult<Self> {
        let source_game = config.paths.source_game.clone().ok_or_else(|| {
            MapportError::PathsNotConfigured {
                reason: "paths.source_game is not set (or set MAPPORT_SOURCE_GAME)".to_string(),
            }
        })?;
        let target_game = config.paths.target_game.clone().ok_or_else(|| {
            MapportError::PathsNotConfigured {
                reason: "paths.target_game is not set (or set MAPPORT_TARGET_GAME)".to_string(),
            }
        })?;

        Ok(Self {
            source_game,
            target_game,
            export_executable: config.tools.export_executable.clone(),
            build_executable: config.tools.build_executable.clone(),
            export_args: config.tools.export_args.clone(),
            build_args: config.tools.build_args.clone(),
            run_args: config.tools.run_args.clone(),
        })
    }
}

impl PathProvider for ConfiguredPaths {
    fn source_game_dir(&self) -> &Path {
        &self.source_game
    }

    fn target_game_dir(&self) -> &Path {
        &self.target_game
    }

    fn export_tool(&self) -> PathBuf {
        self.source_game.join(&self.export_executable)
    }

    fn build_tool(&self) -> PathBuf {
        self.target_game.join(&self.build_executable)
    }

    fn export_arguments(&self) -> &[String] {
        &self.export_args
    }

    fn build_arguments(&self) -> &[String] {
        &self.build_args
    }

    fn run_arguments(&self) -> &[String] {
        &self.run_args
    }

    fn is_valid(&self) -> bool {
        self.source_game.is_dir() && self.target_game.is_dir()
    }
}
