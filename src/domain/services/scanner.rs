//! Asset Scanner
//!
//! Reports which optional asset categories exist in a map's data directory.
//! Scanning only reads: it is safe to repeat and nothing is cached. A
//! missing directory or file yields an empty/false category, never an error.

use std::path::{Path, PathBuf};

use crate::domain::entities::ScanResult;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{LogicalPath, RequiredScript};

/// Scripts are discovered below this subpath
pub const SCRIPTS_DIR: &str = "maps/mp";
pub const SCRIPT_EXTENSION: &str = "gsc";
pub const EFFECTS_DIR: &str = "fx";
pub const EFFECT_EXTENSION: &str = "iw4xFX";
pub const SOUNDS_DIR: &str = "sounds";
pub const SOUND_EXTENSION: &str = "json";
pub const MODELS_LIST: &str = "additionalModels.txt";
pub const MINIGUN_MARKER: &str = "HAS_MINIGUN";

/// Sky file, relative to the data directory
pub fn sun_path(map_name: &str) -> String {
    format!("sun/{}.sun", map_name)
}

/// Vision file, relative to the data directory
pub fn vision_path(map_name: &str) -> String {
    format!("vision/{}.vision", map_name)
}

/// Join a forward-slash path onto a directory
pub fn join_logical(root: &Path, logical: &str) -> PathBuf {
    logical
        .split('/')
        .filter(|s| !s.is_empty())
        .fold(root.to_path_buf(), |acc, part| acc.join(part))
}

/// Logical effect name: scan root, category prefix and extension stripped
pub fn effect_name(fx_root: &Path, file: &Path) -> Option<String> {
    LogicalPath::under(fx_root, file)
        .ok()
        .map(|p| p.without_extension().into_string())
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// Scans data directories through a [`FileSystem`]
pub struct AssetScanner<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> AssetScanner<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Scan the data directory of `map_name`
    pub fn scan(&self, map_name: &str, data_dir: &Path) -> ScanResult {
        tracing::debug!(map = map_name, dir = %data_dir.display(), "scanning data directory");

        ScanResult {
            scripts: self.scripts(data_dir),
            missing_scripts: self.missing_scripts(map_name, data_dir),
            effects: self.effects(data_dir),
            sounds: self.sounds(data_dir),
            additional_models: self.additional_models(data_dir),
            has_minigun: self.fs.exists(&data_dir.join(MINIGUN_MARKER)),
            has_sun: self.fs.exists(&join_logical(data_dir, &sun_path(map_name))),
            has_vision: self
                .fs
                .exists(&join_logical(data_dir, &vision_path(map_name))),
        }
    }

    /// All `*.gsc` below `maps/mp/`, relative to the data directory
    pub fn scripts(&self, data_dir: &Path) -> Vec<String> {
        let root = join_logical(data_dir, SCRIPTS_DIR);
        let mut scripts: Vec<String> = self
            .walk(&root)
            .into_iter()
            .filter(|p| has_extension(p, SCRIPT_EXTENSION))
            .filter_map(|p| LogicalPath::under(data_dir, &p).ok())
            .map(LogicalPath::into_string)
            .collect();
        scripts.sort();
        scripts
    }

    /// Required scripts absent from disk, in header order
    pub fn missing_scripts(&self, map_name: &str, data_dir: &Path) -> Vec<RequiredScript> {
        RequiredScript::ALL
            .into_iter()
            .filter(|s| !self.fs.exists(&join_logical(data_dir, &s.logical_path(map_name))))
            .collect()
    }

    /// Effect logical names below `fx/`
    pub fn effects(&self, data_dir: &Path) -> Vec<String> {
        let root = data_dir.join(EFFECTS_DIR);
        let mut effects: Vec<String> = self
            .walk(&root)
            .into_iter()
            .filter(|p| has_extension(p, EFFECT_EXTENSION))
            .filter_map(|p| effect_name(&root, &p))
            .collect();
        effects.sort();
        effects
    }

    /// Stems of `sounds/*.json` (not recursive)
    pub fn sounds(&self, data_dir: &Path) -> Vec<String> {
        let root = data_dir.join(SOUNDS_DIR);
        if !self.fs.is_dir(&root) {
            return Vec::new();
        }
        let files = match self.fs.list_files(&root) {
            Ok(files) => files,
            Err(e) => {
                tracing::debug!(dir = %root.display(), error = %e, "cannot list sounds");
                return Vec::new();
            }
        };
        let mut sounds: Vec<String> = files
            .into_iter()
            .filter(|p| has_extension(p, SOUND_EXTENSION))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        sounds.sort();
        sounds
    }

    /// Lines of `additionalModels.txt`, blank lines dropped
    pub fn additional_models(&self, data_dir: &Path) -> Vec<String> {
        let list = data_dir.join(MODELS_LIST);
        if !self.fs.exists(&list) {
            return Vec::new();
        }
        match self.fs.read(&list) {
            Ok(content) => content
                .lines()
                .map(|l| l.trim_end_matches('\r'))
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .collect(),
            Err(e) => {
                tracing::debug!(file = %list.display(), error = %e, "cannot read model list");
                Vec::new()
            }
        }
    }

    fn walk(&self, root: &Path) -> Vec<PathBuf> {
        if !self.fs.is_dir(root) {
            return Vec::new();
        }
        self.fs.walk_files_lossy(root).unwrap_or_else(|e| {
            tracing::debug!(dir = %root.display(), error = %e, "cannot walk directory");
            Vec::new()
        })
    }
}
