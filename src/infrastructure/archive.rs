//! Zip-backed IWD writer

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::domain::ports::{ArchiveEntry, ArchiveWriter, FsError, FsResult};

/// Writes IWD archives as deflated zip files
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiveWriter;

impl ZipArchiveWriter {
    pub fn new() -> Self {
        Self
    }
}

fn zip_error(path: &Path, err: zip::result::ZipError) -> FsError {
    FsError::Other(format!("zip error in {}: {}", path.display(), err))
}

impl ArchiveWriter for ZipArchiveWriter {
    fn write_archive(&self, destination: &Path, entries: &[ArchiveEntry]) -> FsResult<()> {
        let parent = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

        let tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
        let mut zip = ZipWriter::new(tmp);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for entry in entries {
            zip.start_file(entry.name.clone(), options)
                .map_err(|e| zip_error(destination, e))?;
            let mut file = File::open(&entry.source).map_err(|e| FsError::at(&entry.source, e))?;
            io::copy(&mut file, &mut zip).map_err(|e| FsError::at(&entry.source, e))?;
        }

        let mut tmp = zip.finish().map_err(|e| zip_error(destination, e))?;
        tmp.flush().map_err(|e| FsError::at(destination, e))?;
        tmp.persist(destination)
            .map_err(|e| FsError::at(destination, e.error))?;
        Ok(())
    }
}
