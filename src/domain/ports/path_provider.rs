//! PathProvider port - where games, tools and generated files live
//!
//! Implementations supply the two install roots plus tool settings; every
//! other location is derived from them by the provided methods. The core
//! checks [`PathProvider::is_valid`] before starting any run and never
//! edits configuration.

use std::path::{Path, PathBuf};

pub trait PathProvider: Send + Sync {
    /// Source game (IW3) install directory
    fn source_game_dir(&self) -> &Path;

    /// Target game (IW4x) install directory
    fn target_game_dir(&self) -> &Path;

    /// Converter executable
    fn export_tool(&self) -> PathBuf;

    /// Build tool executable
    fn build_tool(&self) -> PathBuf;

    /// Argument template for the converter
    fn export_arguments(&self) -> &[String];

    /// Argument template for the build tool
    fn build_arguments(&self) -> &[String];

    /// Argument template for starting the game on a built map
    fn run_arguments(&self) -> &[String];

    /// Whether both install roots point at existing directories
    fn is_valid(&self) -> bool;

    /// Stock source maps (`zone/english/*.ff`)
    fn stock_maps_dir(&self) -> PathBuf {
        self.source_game_dir().join("zone").join("english")
    }

    /// Custom source maps (`usermaps/<name>/`)
    fn source_usermaps_dir(&self) -> PathBuf {
        self.source_game_dir().join("usermaps")
    }

    /// Extracted-data directory for a map
    fn data_dir(&self, name: &str) -> PathBuf {
        self.target_game_dir().join("zone_raw").join(name)
    }

    fn zone_source_dir(&self) -> PathBuf {
        self.target_game_dir().join("zone_source")
    }

    /// Generated manifest for a map
    fn zone_source_path(&self, name: &str) -> PathBuf {
        self.zone_source_dir().join(format!("{}.csv", name))
    }

    /// Output folder of the build tool for a map
    fn usermap_dir(&self, name: &str) -> PathBuf {
        self.target_game_dir().join("usermaps").join(name)
    }

    /// Built, loadable bundle
    fn map_bundle_path(&self, name: &str) -> PathBuf {
        self.usermap_dir(name).join(format!("{}.ff", name))
    }

    fn arena_path(&self, name: &str) -> PathBuf {
        self.usermap_dir(name).join(format!("{}.arena", name))
    }

    fn iwd_path(&self, name: &str) -> PathBuf {
        self.usermap_dir(name).join(format!("{}.iwd", name))
    }
}
