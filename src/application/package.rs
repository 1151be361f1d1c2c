//! Package Use Case
//!
//! Packs a built map's loose images and sounds into `<name>.iwd` next to
//! the bundle. A map that has not been built yet aborts the run.

use std::path::Path;

use crate::application::run::{drive, preflight};
use crate::domain::entities::{AssetItem, RunReport};
use crate::domain::ports::{
    ArchiveEntry, ArchiveWriter, FileSystem, PathProvider, PipelineEvent, PipelineEventSink,
};
use crate::domain::value_objects::{LogicalPath, Operation};
use crate::error::{MapportResult, PipelineFailure};

/// Data-directory folders stored in the IWD
pub const PACKED_DIRS: [&str; 2] = ["images", "sound"];

pub struct PackageUseCase<FS, AW, PP>
where
    FS: FileSystem,
    AW: ArchiveWriter,
    PP: PathProvider,
{
    file_system: FS,
    archiver: AW,
    paths: PP,
}

impl<FS, AW, PP> PackageUseCase<FS, AW, PP>
where
    FS: FileSystem,
    AW: ArchiveWriter,
    PP: PathProvider,
{
    pub fn new(file_system: FS, archiver: AW, paths: PP) -> Self {
        Self {
            file_system,
            archiver,
            paths,
        }
    }

    pub fn execute(
        &self,
        items: Vec<AssetItem>,
        sink: &dyn PipelineEventSink,
    ) -> MapportResult<RunReport> {
        preflight(&self.paths, &items)?;
        Ok(drive(Operation::Package, items, sink, |item, sink| {
            self.package_item(item, sink)
        }))
    }

    /// Files to pack for `data_dir`, sorted by archive name
    pub fn entries(&self, data_dir: &Path) -> Result<Vec<ArchiveEntry>, PipelineFailure> {
        let mut entries = Vec::new();
        for dir in PACKED_DIRS.iter().map(|d| data_dir.join(d)) {
            if !self.file_system.is_dir(&dir) {
                continue;
            }
            let files = self
                .file_system
                .walk_files(&dir)
                .map_err(|e| PipelineFailure::FilesystemRead {
                    path: dir.clone(),
                    message: e.to_string(),
                })?;
            entries.extend(files.into_iter().filter_map(|source| {
                let name = LogicalPath::under(data_dir, &source).ok()?.into_string();
                Some(ArchiveEntry { source, name })
            }));
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn package_item(
        &self,
        item: &AssetItem,
        sink: &dyn PipelineEventSink,
    ) -> Result<(), PipelineFailure> {
        let name = item.name();
        let bundle = self.paths.map_bundle_path(name);
        if !self.file_system.exists(&bundle) {
            return Err(PipelineFailure::PrerequisiteMissing { path: bundle });
        }

        let entries = self.entries(item.data_dir())?;
        if entries.is_empty() {
            sink.on_event(PipelineEvent::note(format!(
                "No images or sounds to pack for {}",
                name
            )));
            return Ok(());
        }

        let destination = self.paths.iwd_path(name);
        self.archiver
            .write_archive(&destination, &entries)
            .map_err(|e| PipelineFailure::FilesystemWrite {
                path: destination.clone(),
                message: e.to_string(),
            })?;
        tracing::debug!(path = %destination.display(), files = entries.len(), "wrote iwd");
        sink.on_event(PipelineEvent::FileWritten { path: destination });
        Ok(())
    }
}
