//! Mapport CLI - port IW3 maps to IW4x
//!
//! Usage: mapport <COMMAND>
//!
//! Commands:
//!   list        List maps (or zone sources) available for a run
//!   export      Extract maps and generate their zone sources
//!   build       Build zone sources into loadable maps
//!   regenerate  Rewrite zone sources from extracted data
//!   package     Pack images and sounds into IWD archives
//!   paths       Show the resolved game and tool paths

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;

use cli::{Cli, Commands};
use commands::CommandContext;
use mapport::presentation::OutputFormat;

/// Logs go to stderr so stdout carries only status output
fn setup_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let cwd = std::env::current_dir()?;
    let loaded = mapport::config::resolve(cli.config.as_deref(), &cwd)?;
    for warning in &loaded.warnings {
        eprintln!("warning: {}", warning);
    }
    let ctx = CommandContext::new(loaded.config, OutputFormat::from_flag(cli.json));

    let success = match &cli.command {
        Commands::List { zones } => commands::list::cmd_list(&ctx, *zones)?,
        Commands::Export { maps, flags } => commands::run::cmd_export(&ctx, maps, flags)?,
        Commands::Build { zones, teams } => commands::run::cmd_build(&ctx, zones, *teams)?,
        Commands::Regenerate { zones } => commands::run::cmd_regenerate(&ctx, zones)?,
        Commands::Package { zones } => commands::run::cmd_package(&ctx, zones)?,
        Commands::Run { zone } => commands::run::cmd_launch(&ctx, zone)?,
        Commands::Paths => commands::paths::cmd_paths(&ctx)?,
    };

    if !success {
        std::process::exit(1);
    }
    Ok(())
}
