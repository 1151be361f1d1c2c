//! Regenerate Use Case
//!
//! Rewrites zone sources from data that was already extracted, without
//! running the converter again. Only the manifest is written.

use crate::application::materialize::FileMaterializer;
use crate::application::run::{drive, preflight};
use crate::domain::entities::{AssetItem, RunReport};
use crate::domain::ports::{FileSystem, PathProvider, PipelineEvent, PipelineEventSink};
use crate::domain::services::{AssetScanner, ManifestGenerator};
use crate::domain::value_objects::Operation;
use crate::error::{MapportResult, PipelineFailure};

pub struct RegenerateUseCase<FS, PP>
where
    FS: FileSystem,
    PP: PathProvider,
{
    file_system: FS,
    paths: PP,
    generator: ManifestGenerator,
}

impl<FS, PP> RegenerateUseCase<FS, PP>
where
    FS: FileSystem,
    PP: PathProvider,
{
    pub fn new(file_system: FS, paths: PP, generator: ManifestGenerator) -> Self {
        Self {
            file_system,
            paths,
            generator,
        }
    }

    pub fn execute(
        &self,
        items: Vec<AssetItem>,
        sink: &dyn PipelineEventSink,
    ) -> MapportResult<RunReport> {
        preflight(&self.paths, &items)?;
        Ok(drive(Operation::Regenerate, items, sink, |item, sink| {
            self.regenerate_item(item, sink)
        }))
    }

    fn regenerate_item(
        &self,
        item: &AssetItem,
        sink: &dyn PipelineEventSink,
    ) -> Result<(), PipelineFailure> {
        if !self.file_system.is_dir(item.data_dir()) {
            return Err(PipelineFailure::PrerequisiteMissing {
                path: item.data_dir().to_path_buf(),
            });
        }
        let scan = AssetScanner::new(&self.file_system).scan(item.name(), item.data_dir());
        let project = self.generator.generate(item, &scan);
        FileMaterializer::new(&self.file_system, sink)
            .write_manifest(&project, &self.paths.zone_source_path(item.name()))?;
        sink.on_event(PipelineEvent::note(format!(
            "Regenerated source file for {}",
            item.name()
        )));
        Ok(())
    }
}
