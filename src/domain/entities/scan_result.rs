//! ScanResult - what the asset scanner found in a data directory
//!
//! Every category defaults to empty/false: a missing directory or file is
//! simply an absent category, never an error.

use crate::domain::value_objects::RequiredScript;

/// Optional asset categories present in a data directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Every script under `maps/mp/`, as sorted forward-slash paths relative to the data dir
    pub scripts: Vec<String>,
    /// Required scripts that are absent from disk
    pub missing_scripts: Vec<RequiredScript>,
    /// Effect logical names (`fx/` prefix and extension stripped), sorted
    pub effects: Vec<String>,
    /// Sound names (file stems of `sounds/*.json`), sorted
    pub sounds: Vec<String>,
    /// Lines of `additionalModels.txt`, verbatim, blank lines dropped
    pub additional_models: Vec<String>,
    /// `HAS_MINIGUN` marker present
    pub has_minigun: bool,
    /// `sun/<name>.sun` present
    pub has_sun: bool,
    /// `vision/<name>.vision` present
    pub has_vision: bool,
}

impl ScanResult {
    /// True when `script` was found on disk
    pub fn has_script(&self, script: RequiredScript) -> bool {
        !self.missing_scripts.contains(&script)
    }

    /// True when none of the optional categories are present
    pub fn is_bare(&self) -> bool {
        self.effects.is_empty()
            && self.sounds.is_empty()
            && self.additional_models.is_empty()
            && !self.has_minigun
            && !self.has_sun
            && !self.has_vision
    }
}
