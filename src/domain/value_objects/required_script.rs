//! Required scripts
//!
//! Four scripts every zone source includes. When one is missing from the
//! data directory a stub is generated for it.

/// One of the four scripts the header block always references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequiredScript {
    /// `maps/mp/<name>.gsc`
    Main,
    /// `maps/mp/<name>_fx.gsc`
    MainFx,
    /// `maps/createfx/<name>_fx.gsc`
    CreateFx,
    /// `maps/createart/<name>_art.gsc`
    CreateArt,
}

impl RequiredScript {
    /// In header order
    pub const ALL: [RequiredScript; 4] = [
        RequiredScript::Main,
        RequiredScript::MainFx,
        RequiredScript::CreateFx,
        RequiredScript::CreateArt,
    ];

    /// Forward-slash path relative to the data directory
    pub fn logical_path(&self, map_name: &str) -> String {
        match self {
            RequiredScript::Main => format!("maps/mp/{}.gsc", map_name),
            RequiredScript::MainFx => format!("maps/mp/{}_fx.gsc", map_name),
            RequiredScript::CreateFx => format!("maps/createfx/{}_fx.gsc", map_name),
            RequiredScript::CreateArt => format!("maps/createart/{}_art.gsc", map_name),
        }
    }
}
