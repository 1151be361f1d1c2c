//! AssetItem entity - a map or zone the user can select
//!
//! Called a "map" during export and a "zone" during build. Items are created
//! by scanning the game folders and never change afterwards; a new scan
//! simply replaces the old list.

use crate::domain::value_objects::{ItemName, MapCategory};
use std::path::{Path, PathBuf};

/// A selectable map or zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetItem {
    /// Case-insensitive identity
    name: ItemName,
    /// Display grouping
    category: MapCategory,
    /// Extracted-data directory for this item
    data_dir: PathBuf,
}

impl AssetItem {
    pub fn new(name: impl Into<ItemName>, category: MapCategory, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            category,
            data_dir: data_dir.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn item_name(&self) -> &ItemName {
        &self.name
    }

    pub fn category(&self) -> MapCategory {
        self.category
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl std::fmt::Display for AssetItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_item_stores_fields() {
        let item = AssetItem::new("mp_crash", MapCategory::Multiplayer, "/iw4x/zone_raw/mp_crash");

        assert_eq!(item.name(), "mp_crash");
        assert_eq!(item.category(), MapCategory::Multiplayer);
        assert_eq!(item.data_dir(), Path::new("/iw4x/zone_raw/mp_crash"));
    }

    #[test]
    fn identity_ignores_case() {
        let a = AssetItem::new("MP_Crash", MapCategory::Multiplayer, "/a");
        assert!(a.item_name().matches("mp_crash"));
    }
}
