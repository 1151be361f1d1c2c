//! Category value object - display grouping for items
//!
//! Categories only drive listing order. They carry no behavior.

use serde::{Deserialize, Serialize};

/// Group an item belongs to when listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapCategory {
    /// Stock multiplayer map shipped with the source game
    Multiplayer,
    /// Custom map from the source game's `usermaps/` folder
    Usermap,
    /// Zone source present in the target game's `zone_source/` folder
    ZoneSource,
}

impl MapCategory {
    /// All categories in display order
    pub const ALL: [MapCategory; 3] = [
        MapCategory::Multiplayer,
        MapCategory::Usermap,
        MapCategory::ZoneSource,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            MapCategory::Multiplayer => "multiplayer",
            MapCategory::Usermap => "usermap",
            MapCategory::ZoneSource => "zone source",
        }
    }
}

impl std::fmt::Display for MapCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
