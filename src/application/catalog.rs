//! Item catalog
//!
//! Discovers what can be exported (IW3 maps) and what can be built
//! (zone sources), and resolves user selections against those lists.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::entities::AssetItem;
use crate::domain::ports::{FileSystem, PathProvider};
use crate::domain::value_objects::{ItemName, MapCategory};
use crate::error::{MapportError, MapportResult};

const MAP_EXTENSION: &str = ".ff";
const LOAD_SUFFIX: &str = "_load.ff";
const ZONE_SOURCE_EXTENSION: &str = "csv";

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// Stock and custom source maps, stock first, each group sorted by name.
///
/// A name present in both locations is listed once as a stock map.
pub fn list_source_maps<FS, PP>(fs: &FS, paths: &PP) -> Vec<AssetItem>
where
    FS: FileSystem + ?Sized,
    PP: PathProvider + ?Sized,
{
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for name in stock_map_names(fs, &paths.stock_maps_dir()) {
        let key = ItemName::new(name.as_str());
        if seen.insert(key) {
            let data_dir = paths.data_dir(&name);
            items.push(AssetItem::new(name, MapCategory::Multiplayer, data_dir));
        }
    }
    for name in custom_map_names(fs, &paths.source_usermaps_dir()) {
        let key = ItemName::new(name.as_str());
        if seen.insert(key) {
            let data_dir = paths.data_dir(&name);
            items.push(AssetItem::new(name, MapCategory::Usermap, data_dir));
        }
    }

    items.sort_by(|a, b| {
        a.category()
            .cmp(&b.category())
            .then_with(|| a.item_name().cmp(b.item_name()))
    });
    items
}

/// `mp_*.ff` under the stock zone folder, minus load-screen zones
fn stock_map_names<FS: FileSystem + ?Sized>(fs: &FS, dir: &Path) -> Vec<String> {
    if !fs.is_dir(dir) {
        tracing::debug!(dir = %dir.display(), "no stock map directory");
        return Vec::new();
    }
    fs.list_files(dir)
        .unwrap_or_default()
        .iter()
        .filter_map(|p| file_name(p))
        .filter(|n| {
            let lower = n.to_ascii_lowercase();
            lower.starts_with("mp_") && lower.ends_with(MAP_EXTENSION) && !lower.ends_with(LOAD_SUFFIX)
        })
        .map(|n| n[..n.len() - MAP_EXTENSION.len()].to_string())
        .collect()
}

/// `usermaps/<name>/` folders that contain `<name>.ff`
fn custom_map_names<FS: FileSystem + ?Sized>(fs: &FS, dir: &Path) -> Vec<String> {
    if !fs.is_dir(dir) {
        return Vec::new();
    }
    fs.list_dirs(dir)
        .unwrap_or_default()
        .iter()
        .filter_map(|d| {
            let name = file_name(d)?;
            fs.exists(&d.join(format!("{}{}", name, MAP_EXTENSION)))
                .then_some(name)
        })
        .collect()
}

/// Zone sources that can be built, sorted by name
pub fn list_zone_sources<FS, PP>(fs: &FS, paths: &PP) -> Vec<AssetItem>
where
    FS: FileSystem + ?Sized,
    PP: PathProvider + ?Sized,
{
    let dir = paths.zone_source_dir();
    if !fs.is_dir(&dir) {
        return Vec::new();
    }
    let mut items: Vec<AssetItem> = fs
        .list_files(&dir)
        .unwrap_or_default()
        .iter()
        .filter(|p| {
            p.extension()
                .map(|e| e.eq_ignore_ascii_case(ZONE_SOURCE_EXTENSION))
                .unwrap_or(false)
        })
        .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .map(|name| {
            let data_dir = paths.data_dir(&name);
            AssetItem::new(name, MapCategory::ZoneSource, data_dir)
        })
        .collect();
    items.sort_by(|a, b| a.item_name().cmp(b.item_name()));
    items
}

/// Resolve names against `available`, keeping the caller's order.
///
/// Names match case-insensitively; duplicates are dropped.
pub fn select(available: &[AssetItem], names: &[String]) -> MapportResult<Vec<AssetItem>> {
    let mut seen = HashSet::new();
    let mut selected = Vec::new();
    for name in names {
        let item = available
            .iter()
            .find(|i| i.item_name().matches(name))
            .ok_or_else(|| MapportError::UnknownItem { name: name.clone() })?;
        if seen.insert(item.item_name().clone()) {
            selected.push(item.clone());
        }
    }
    Ok(selected)
}

/// Zones whose names match items that just exported successfully
pub fn preselect(zones: &[AssetItem], succeeded: &[String]) -> Vec<AssetItem> {
    zones
        .iter()
        .filter(|z| succeeded.iter().any(|s| z.item_name().matches(s)))
        .cloned()
        .collect()
}
