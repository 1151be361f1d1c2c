//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temporary file in the target directory and are
/// renamed into place, so readers never see a half-written manifest.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    fn list(&self, dir: &Path, want_dirs: bool) -> FsResult<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| FsError::at(dir, e))? {
            let entry = entry.map_err(|e| FsError::at(dir, e))?;
            let path = entry.path();
            if path.is_dir() == want_dirs {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Recursive file listing. With `skip_bad` set, unreadable entries and
    /// link loops below the root are logged and left out.
    fn walk(&self, dir: &Path, skip_bad: bool) -> FsResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if skip_bad && e.depth() > 0 => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
                Err(e) => return Err(walk_error(dir, e)),
            };
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }
}

fn walk_error(dir: &Path, e: walkdir::Error) -> FsError {
    let path = e.path().unwrap_or(dir).to_path_buf();
    match e.into_io_error() {
        Some(io) => FsError::at(&path, io),
        None => FsError::Other(format!("filesystem loop at {}", path.display())),
    }
}

/// Write `content` to `path` atomically
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
    tmp.write_all(content).map_err(|e| FsError::at(path, e))?;
    tmp.flush().map_err(|e| FsError::at(path, e))?;
    tmp.persist(path).map_err(|e| FsError::at(path, e.error))?;
    Ok(())
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        atomic_write(path, content.as_bytes())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        self.list(dir, false)
    }

    fn list_dirs(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        self.list(dir, true)
    }

    fn walk_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        self.walk(dir, false)
    }

    fn walk_files_lossy(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        self.walk(dir, true)
    }
}
