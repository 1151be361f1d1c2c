//! Pipeline commands: export, build, regenerate, package, run

use anyhow::Result;

use mapport::application::{list_source_maps, list_zone_sources, preselect, select, ExportOptions};
use mapport::domain::entities::RunReport;
use mapport::domain::ports::PipelineEventSink;
use mapport::error::{MapportError, MapportResult};
use mapport::infrastructure::{LocalFs, Runner};
use mapport::presentation::{
    create_build_use_case, create_export_use_case, create_launch_use_case, create_package_use_case,
    create_regenerate_use_case, EventPrinter, OutputFormat,
};

use super::CommandContext;
use crate::cli::ExportFlags;

/// Run `job` on the worker and stream its events to stdout
fn run_in_background<F>(format: OutputFormat, job: F) -> Result<RunReport>
where
    F: FnOnce(&dyn PipelineEventSink) -> MapportResult<RunReport> + Send + 'static,
{
    let runner = Runner::new();
    let handle = runner.spawn(job)?;
    let printer = EventPrinter::new(format);
    handle
        .receiver()
        .wait_for_completion(|event| printer.print(event));
    Ok(handle.join()?)
}

/// Command-line switches layered over the configured defaults
pub fn apply_export_flags(mut options: ExportOptions, flags: &ExportFlags) -> ExportOptions {
    if flags.no_manifest {
        options.write_manifest = false;
    }
    if flags.no_arena {
        options.write_arena = false;
    }
    if flags.no_convert_scripts {
        options.convert_scripts = false;
    }
    if flags.no_correct_speculars {
        options.correct_speculars = false;
    }
    if flags.overwrite {
        options.overwrite_existing = true;
    }
    options
}

pub fn cmd_export(ctx: &CommandContext, maps: &[String], flags: &ExportFlags) -> Result<bool> {
    let paths = ctx.valid_paths()?;
    let fs = LocalFs::new();
    let items = select(&list_source_maps(&fs, &paths), maps)?;
    let options = apply_export_flags(ctx.config.export.to_options(), flags);
    let use_case = create_export_use_case(&ctx.config)?;

    let report = run_in_background(ctx.format, move |sink| {
        use_case.execute(items, &options, sink)
    })?;

    if ctx.format == OutputFormat::Text && !report.succeeded.is_empty() {
        let ready = preselect(&list_zone_sources(&fs, &paths), &report.succeeded);
        if !ready.is_empty() {
            let names: Vec<&str> = ready.iter().map(|z| z.name()).collect();
            println!("Ready to build: mapport build {}", names.join(" "));
        }
    }
    Ok(report.is_success())
}

pub fn cmd_build(ctx: &CommandContext, zones: &[String], teams: bool) -> Result<bool> {
    let paths = ctx.valid_paths()?;
    let items = select(&list_zone_sources(&LocalFs::new(), &paths), zones)?;
    let options = ctx.config.build.to_options();
    let options = if teams { options.with_teams(true) } else { options };
    let use_case = create_build_use_case(&ctx.config)?;

    let report = run_in_background(ctx.format, move |sink| {
        use_case.execute(items, &options, sink)
    })?;
    Ok(report.is_success())
}

pub fn cmd_regenerate(ctx: &CommandContext, zones: &[String]) -> Result<bool> {
    let paths = ctx.valid_paths()?;
    let items = select(&list_zone_sources(&LocalFs::new(), &paths), zones)?;
    let use_case = create_regenerate_use_case(&ctx.config)?;

    let report = run_in_background(ctx.format, move |sink| use_case.execute(items, sink))?;
    Ok(report.is_success())
}

pub fn cmd_package(ctx: &CommandContext, zones: &[String]) -> Result<bool> {
    let paths = ctx.valid_paths()?;
    let items = select(&list_zone_sources(&LocalFs::new(), &paths), zones)?;
    let use_case = create_package_use_case(&ctx.config)?;

    let report = run_in_background(ctx.format, move |sink| use_case.execute(items, sink))?;
    Ok(report.is_success())
}

pub fn cmd_launch(ctx: &CommandContext, zone: &str) -> Result<bool> {
    let paths = ctx.valid_paths()?;
    let selected = select(&list_zone_sources(&LocalFs::new(), &paths), &[zone.to_string()])?;
    let Some(item) = selected.into_iter().next() else {
        return Err(MapportError::EmptySelection.into());
    };
    let use_case = create_launch_use_case(&ctx.config)?;

    let report = run_in_background(ctx.format, move |sink| use_case.execute(item, sink))?;
    Ok(report.is_success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_only_switch_away_from_defaults() {
        let defaults = ExportOptions::default();
        assert_eq!(apply_export_flags(defaults.clone(), &ExportFlags::default()), defaults);

        let flags = ExportFlags {
            no_arena: true,
            overwrite: true,
            ..ExportFlags::default()
        };
        let options = apply_export_flags(defaults, &flags);
        assert!(options.write_manifest);
        assert!(!options.write_arena);
        assert!(options.overwrite_existing);
    }
}
