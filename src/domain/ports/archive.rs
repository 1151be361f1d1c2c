//! Archive port - writing IWD packages
//!
//! An IWD is a zip archive the game mounts next to the built zone.

use std::path::{Path, PathBuf};

use super::file_system::FsResult;

/// A file to store in an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// File on disk
    pub source: PathBuf,
    /// Forward-slash name inside the archive
    pub name: String,
}

pub trait ArchiveWriter: Send + Sync {
    /// Write `entries` to a new archive at `destination`, replacing any existing one
    fn write_archive(&self, destination: &Path, entries: &[ArchiveEntry]) -> FsResult<()>;
}

impl<T: ArchiveWriter + ?Sized> ArchiveWriter for std::sync::Arc<T> {
    fn write_archive(&self, destination: &Path, entries: &[ArchiveEntry]) -> FsResult<()> {
        (**self).write_archive(destination, entries)
    }
}
