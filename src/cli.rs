//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --json, --verbose) are inherited by all subcommands
//! - Map and zone names are matched case-insensitively

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Mapport - port IW3 maps to IW4x
#[derive(Parser, Debug)]
#[command(name = "mapport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./mapport.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for scripting (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List maps available for export (or zone sources with --zones)
    List {
        /// List zone sources ready to build instead
        #[arg(long)]
        zones: bool,
    },

    /// Extract maps with iw3xport and generate their zone sources
    Export {
        /// Maps to export, in order
        #[arg(required = true, value_name = "MAP")]
        maps: Vec<String>,

        #[command(flatten)]
        flags: ExportFlags,
    },

    /// Build zone sources into loadable maps
    Build {
        /// Zones to build, in order
        #[arg(required = true, value_name = "ZONE")]
        zones: Vec<String>,

        /// Build team assets as well
        #[arg(long)]
        teams: bool,
    },

    /// Rewrite zone sources from already extracted data
    Regenerate {
        #[arg(required = true, value_name = "ZONE")]
        zones: Vec<String>,
    },

    /// Pack images and sounds of built maps into IWD archives
    Package {
        #[arg(required = true, value_name = "ZONE")]
        zones: Vec<String>,
    },

    /// Start IW4x on a built map
    Run {
        #[arg(value_name = "ZONE")]
        zone: String,
    },

    /// Show the resolved game and tool paths
    Paths,
}

/// Export switches; unset flags fall back to the `[export]` config section
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct ExportFlags {
    /// Do not write the zone source
    #[arg(long)]
    pub no_manifest: bool,

    /// Do not write the arena file
    #[arg(long)]
    pub no_arena: bool,

    /// Do not ask the converter to convert scripts
    #[arg(long)]
    pub no_convert_scripts: bool,

    /// Do not ask the converter to correct speculars
    #[arg(long)]
    pub no_correct_speculars: bool,

    /// Replace existing scripts and materials
    #[arg(long)]
    pub overwrite: bool,
}
