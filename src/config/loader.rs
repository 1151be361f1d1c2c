//! Configuration loading
//!
//! Lookup order, first hit wins:
//! 1. `--config <file>`
//! 2. `./mapport.toml`
//! 3. `<config_dir>/mapport/config.toml` (`MAPPORT_CONFIG_HOME` overrides the directory)
//! 4. Built-in defaults
//!
//! `MAPPORT_SOURCE_GAME` and `MAPPORT_TARGET_GAME` are applied on top.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MapportError, MapportResult};
use crate::infrastructure::fs::mapport_config_dir;

use super::types::Config;

pub const PROJECT_CONFIG_FILE: &str = "mapport.toml";
pub const USER_CONFIG_FILE: &str = "config.toml";
pub const SOURCE_GAME_VAR: &str = "MAPPORT_SOURCE_GAME";
pub const TARGET_GAME_VAR: &str = "MAPPORT_TARGET_GAME";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, `None` for defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MapportResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MapportError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Candidate config files in lookup order, excluding `--config`
pub fn search_paths(cwd: &Path) -> Vec<PathBuf> {
    let mut paths = vec![cwd.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = mapport_config_dir() {
        paths.push(dir.join(USER_CONFIG_FILE));
    }
    paths
}

/// Resolve configuration for a run.
///
/// An explicit file must exist and parse; discovered files are optional.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> MapportResult<LoadedConfig> {
    let source = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => search_paths(cwd).into_iter().find(|p| p.is_file()),
    };

    let (config, warnings) = match &source {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    Ok(LoadedConfig {
        config: config.with_env_overrides(),
        source,
        warnings,
    })
}

/// Apply environment overrides read through `lookup`
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(SOURCE_GAME_VAR).filter(|v| !v.is_empty()) {
        config.paths.source_game = Some(PathBuf::from(dir));
    }
    if let Some(dir) = lookup(TARGET_GAME_VAR).filter(|v| !v.is_empty()) {
        config.paths.target_game = Some(PathBuf::from(dir));
    }
    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "source_game",
        "target_game",
        "tools",
        "export_executable",
        "build_executable",
        "export_args",
        "build_args",
        "run_args",
        "launcher",
        "export",
        "write_manifest",
        "write_arena",
        "convert_scripts",
        "correct_speculars",
        "overwrite_existing",
        "build",
        "build_teams",
        "templates",
        "ambient",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
