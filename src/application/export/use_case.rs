//! Export Use Case
//!
//! Per item:
//! 1. Run the converter to extract the map into its data directory
//! 2. Scan the data directory and generate the zone source
//! 3. Write the manifest and arena file (per options) and the auxiliary files

use crate::application::materialize::FileMaterializer;
use crate::application::run::{drive, preflight, run_tool};
use crate::domain::entities::{AssetItem, RunReport};
use crate::domain::ports::{
    FileSystem, PathProvider, PipelineEvent, PipelineEventSink, ToolInvocation, ToolInvoker,
};
use crate::domain::services::{expand_arguments, ArgumentVars, AssetScanner, ManifestGenerator};
use crate::domain::value_objects::Operation;
use crate::error::{MapportResult, PipelineFailure};

use super::options::ExportOptions;

/// Export use case - drives the converter over selected maps
pub struct ExportUseCase<FS, TI, PP>
where
    FS: FileSystem,
    TI: ToolInvoker,
    PP: PathProvider,
{
    file_system: FS,
    invoker: TI,
    paths: PP,
    generator: ManifestGenerator,
}

impl<FS, TI, PP> ExportUseCase<FS, TI, PP>
where
    FS: FileSystem,
    TI: ToolInvoker,
    PP: PathProvider,
{
    pub fn new(file_system: FS, invoker: TI, paths: PP, generator: ManifestGenerator) -> Self {
        Self {
            file_system,
            invoker,
            paths,
            generator,
        }
    }

    /// Export `items` in order, stopping at the first failure.
    ///
    /// Errors only when the run cannot start; failures during the run are
    /// reported in the returned [`RunReport`].
    pub fn execute(
        &self,
        items: Vec<AssetItem>,
        options: &ExportOptions,
        sink: &dyn PipelineEventSink,
    ) -> MapportResult<RunReport> {
        preflight(&self.paths, &items)?;
        Ok(drive(Operation::Export, items, sink, |item, sink| {
            self.export_item(item, options, sink)
        }))
    }

    /// Converter call for one map
    pub fn invocation(&self, item: &AssetItem, options: &ExportOptions) -> ToolInvocation {
        let vars = ArgumentVars::new()
            .set("map", item.name())
            .set("destination", item.data_dir().display().to_string())
            .flag("convert_scripts", options.convert_scripts)
            .flag("correct_speculars", options.correct_speculars);
        ToolInvocation::new(self.paths.export_tool())
            .with_args(expand_arguments(self.paths.export_arguments(), &vars))
            .with_working_dir(self.paths.source_game_dir())
    }

    fn export_item(
        &self,
        item: &AssetItem,
        options: &ExportOptions,
        sink: &dyn PipelineEventSink,
    ) -> Result<(), PipelineFailure> {
        run_tool(&self.invoker, &self.invocation(item, options), sink)?;

        let name = item.name();
        let scan = AssetScanner::new(&self.file_system).scan(name, item.data_dir());
        let project = self.generator.generate(item, &scan);
        let materializer = FileMaterializer::new(&self.file_system, sink);

        if options.write_manifest {
            materializer.write_manifest(&project, &self.paths.zone_source_path(name))?;
            sink.on_event(PipelineEvent::note(format!(
                "Generated source file for {}",
                name
            )));
        }
        if options.write_arena {
            materializer.write_arena(name, &self.paths.arena_path(name))?;
            sink.on_event(PipelineEvent::note(format!(
                "Generated arena file for {}",
                name
            )));
        }
        materializer.write_auxiliary(&project, options.overwrite_existing)
    }
}
