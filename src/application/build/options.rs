//! Build Options

/// Options for the build use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Build team assets alongside the map (`{teams}` placeholder)
    pub build_teams: bool,
}

impl BuildOptions {
    pub fn with_teams(mut self, enabled: bool) -> Self {
        self.build_teams = enabled;
        self
    }
}
