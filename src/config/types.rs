//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::{BuildOptions, ExportOptions};
use crate::domain::services::templates::{TemplateSet, DEFAULT_AMBIENT};
use crate::error::MapportResult;

use super::loader::{self, ConfigWarning};

/// Game install roots
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PathsConfig {
    /// IW3 (Call of Duty 4) install directory
    #[serde(default)]
    pub source_game: Option<PathBuf>,

    /// IW4x install directory
    #[serde(default)]
    pub target_game: Option<PathBuf>,
}

/// External tool configuration
///
/// Arguments are templates; see `domain::services::arguments` for the
/// placeholder rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolsConfig {
    /// Converter, relative to the source game directory
    #[serde(default = "default_export_executable")]
    pub export_executable: String,

    /// Build tool, relative to the target game directory
    #[serde(default = "default_build_executable")]
    pub build_executable: String,

    #[serde(default = "default_export_args")]
    pub export_args: Vec<String>,

    #[serde(default = "default_build_args")]
    pub build_args: Vec<String>,

    /// Passed to the build tool when starting a built map
    #[serde(default = "default_run_args")]
    pub run_args: Vec<String>,

    /// Command placed before every tool, e.g. `["wine"]`
    #[serde(default)]
    pub launcher: Vec<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            export_executable: default_export_executable(),
            build_executable: default_build_executable(),
            export_args: default_export_args(),
            build_args: default_build_args(),
            run_args: default_run_args(),
            launcher: Vec::new(),
        }
    }
}

fn default_export_executable() -> String {
    "iw3xport.exe".to_string()
}

fn default_build_executable() -> String {
    "iw4x.exe".to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_export_args() -> Vec<String> {
    strings(&[
        "+set",
        "export_convert_gsc",
        "{convert_scripts}",
        "+set",
        "export_correct_speculars",
        "{correct_speculars}",
        "+set",
        "export_path",
        "{destination}",
        "+dumpmap",
        "{map}",
        "+quit",
    ])
}

fn default_build_args() -> Vec<String> {
    strings(&[
        "-zonebuilder",
        "+set",
        "zb_build_teams",
        "{teams}",
        "+buildzone",
        "{zone}",
        "+quit",
    ])
}

fn default_run_args() -> Vec<String> {
    strings(&["+devmap", "{map}"])
}

/// Export defaults (each can be flipped on the command line)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    #[serde(default = "default_true")]
    pub write_manifest: bool,

    #[serde(default = "default_true")]
    pub write_arena: bool,

    #[serde(default = "default_true")]
    pub convert_scripts: bool,

    #[serde(default = "default_true")]
    pub correct_speculars: bool,

    #[serde(default)]
    pub overwrite_existing: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            write_manifest: true,
            write_arena: true,
            convert_scripts: true,
            correct_speculars: true,
            overwrite_existing: false,
        }
    }
}

impl ExportConfig {
    pub fn to_options(&self) -> ExportOptions {
        ExportOptions {
            write_manifest: self.write_manifest,
            write_arena: self.write_arena,
            convert_scripts: self.convert_scripts,
            correct_speculars: self.correct_speculars,
            overwrite_existing: self.overwrite_existing,
        }
    }
}

/// Build defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BuildConfig {
    #[serde(default)]
    pub build_teams: bool,
}

impl BuildConfig {
    pub fn to_options(&self) -> BuildOptions {
        BuildOptions {
            build_teams: self.build_teams,
        }
    }
}

/// Generated file templates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplatesConfig {
    /// Ambient sound for generated main scripts
    #[serde(default = "default_ambient")]
    pub ambient: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            ambient: default_ambient(),
        }
    }
}

impl TemplatesConfig {
    pub fn to_template_set(&self) -> TemplateSet {
        TemplateSet::new(self.ambient.as_str())
    }
}

fn default_ambient() -> String {
    DEFAULT_AMBIENT.to_string()
}

fn default_true() -> bool {
    true
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub templates: TemplatesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MapportResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MapportResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply `MAPPORT_*` environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
