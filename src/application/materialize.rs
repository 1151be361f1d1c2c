//! File Materializer
//!
//! Applies a [`ManifestProject`] to disk. The manifest is always
//! overwritten; auxiliary files are skipped when they already exist unless
//! the caller asks for overwrites. Nothing is rolled back when a write fails
//! part way through.

use std::path::Path;

use crate::domain::entities::ManifestProject;
use crate::domain::ports::{FileSystem, PipelineEvent, PipelineEventSink};
use crate::domain::services::render_arena;
use crate::error::PipelineFailure;

pub struct FileMaterializer<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    sink: &'a dyn PipelineEventSink,
}

impl<'a, FS: FileSystem + ?Sized> FileMaterializer<'a, FS> {
    pub fn new(fs: &'a FS, sink: &'a dyn PipelineEventSink) -> Self {
        Self { fs, sink }
    }

    /// Write the zone source to `destination`
    pub fn write_manifest(
        &self,
        project: &ManifestProject,
        destination: &Path,
    ) -> Result<(), PipelineFailure> {
        self.write(destination, project.source())
    }

    /// Write stubs and the material descriptor
    pub fn write_auxiliary(
        &self,
        project: &ManifestProject,
        overwrite: bool,
    ) -> Result<(), PipelineFailure> {
        for file in project.auxiliary_files() {
            if !overwrite && self.fs.exists(file.path()) {
                self.sink.on_event(PipelineEvent::FileSkipped {
                    path: file.path().to_path_buf(),
                });
                continue;
            }
            self.write(file.path(), file.content())?;
        }
        Ok(())
    }

    /// Write the arena file for `map_name`, replacing any previous one
    pub fn write_arena(&self, map_name: &str, destination: &Path) -> Result<(), PipelineFailure> {
        self.write(destination, &render_arena(map_name))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), PipelineFailure> {
        self.fs
            .write(path, content)
            .map_err(|e| PipelineFailure::FilesystemWrite {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::debug!(path = %path.display(), "wrote file");
        self.sink.on_event(PipelineEvent::FileWritten {
            path: path.to_path_buf(),
        });
        Ok(())
    }
}
