//! Export Options

/// Options for the export use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Write the zone source after a successful extraction
    pub write_manifest: bool,
    /// Write `usermaps/<name>/<name>.arena`
    pub write_arena: bool,
    /// Ask the converter to convert GSC scripts
    pub convert_scripts: bool,
    /// Ask the converter to fix specular maps
    pub correct_speculars: bool,
    /// Replace stub scripts and the material descriptor when they exist
    pub overwrite_existing: bool,
}

impl Default for ExportOptions {
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

impl ExportOptions {
    pub fn with_manifest(mut self, enabled: bool) -> Self {
        self.write_manifest = enabled;
        self
    }

    pub fn with_arena(mut self, enabled: bool) -> Self {
        self.write_arena = enabled;
        self
    }

    pub fn with_overwrite(mut self, enabled: bool) -> Self {
        self.overwrite_existing = enabled;
        self
    }
}
