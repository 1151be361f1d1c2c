//! Build Use Case
//!
//! Per item, check that the zone source exists and run the build tool on
//! it. A missing zone source aborts the run before the tool is invoked.

use crate::application::run::{drive, preflight, run_tool};
use crate::domain::entities::{AssetItem, RunReport};
use crate::domain::ports::{FileSystem, PathProvider, PipelineEventSink, ToolInvocation, ToolInvoker};
use crate::domain::services::{expand_arguments, ArgumentVars};
use crate::domain::value_objects::Operation;
use crate::error::{MapportResult, PipelineFailure};

use super::options::BuildOptions;

/// Build use case - drives ZoneBuilder over selected zones
pub struct BuildUseCase<FS, TI, PP>
where
    FS: FileSystem,
    TI: ToolInvoker,
    PP: PathProvider,
{
    file_system: FS,
    invoker: TI,
    paths: PP,
}

impl<FS, TI, PP> BuildUseCase<FS, TI, PP>
where
    FS: FileSystem,
    TI: ToolInvoker,
    PP: PathProvider,
{
    pub fn new(file_system: FS, invoker: TI, paths: PP) -> Self {
        Self {
            file_system,
            invoker,
            paths,
        }
    }

    pub fn execute(
        &self,
        items: Vec<AssetItem>,
        options: &BuildOptions,
        sink: &dyn PipelineEventSink,
    ) -> MapportResult<RunReport> {
        preflight(&self.paths, &items)?;
        Ok(drive(Operation::Build, items, sink, |item, sink| {
            self.build_item(item, options, sink)
        }))
    }

    /// Build tool call for one zone
    pub fn invocation(&self, item: &AssetItem, options: &BuildOptions) -> ToolInvocation {
        let vars = ArgumentVars::new()
            .set("zone", item.name())
            .set("map", item.name())
            .flag("teams", options.build_teams);
        ToolInvocation::new(self.paths.build_tool())
            .with_args(expand_arguments(self.paths.build_arguments(), &vars))
            .with_working_dir(self.paths.target_game_dir())
    }

    fn build_item(
        &self,
        item: &AssetItem,
        options: &BuildOptions,
        sink: &dyn PipelineEventSink,
    ) -> Result<(), PipelineFailure> {
        let source = self.paths.zone_source_path(item.name());
        if !self.file_system.exists(&source) {
            return Err(PipelineFailure::PrerequisiteMissing { path: source });
        }
        run_tool(&self.invoker, &self.invocation(item, options), sink)
    }
}
