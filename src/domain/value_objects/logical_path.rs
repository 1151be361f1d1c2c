//! Logical Path Value Object
//!
//! The build tool addresses assets with forward-slash paths relative to the
//! map's data directory (`maps/mp/foo.gsc`, `foo/bar` for effects). This
//! value object turns filesystem paths into that form:
//! - Relative to a root (never absolute)
//! - No traversal components (..)
//! - Separators normalized to `/` whatever the host OS

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Error when a path cannot be expressed as a logical path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path is not located under the given root
    NotUnderRoot { path: PathBuf, root: PathBuf },
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path is empty
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => {
                write!(f, "Path contains traversal components (..)")
            }
            PathError::NotUnderRoot { path, root } => {
                write!(
                    f,
                    "Path '{}' is not under '{}'",
                    path.display(),
                    root.display()
                )
            }
            PathError::AbsoluteNotAllowed => {
                write!(f, "Absolute paths are not allowed")
            }
            PathError::Empty => {
                write!(f, "Path is empty")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A forward-slash path relative to some root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalPath(String);

impl LogicalPath {
    /// Build from a relative filesystem path
    pub fn from_relative<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(PathError::Empty);
        }

        let mut segments: Vec<String> = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => {
                    // A backslash inside a component means a Windows path read on Unix
                    for piece in part.to_string_lossy().split('\\') {
                        match piece {
                            "" | "." => {}
                            ".." => return Err(PathError::ContainsTraversal),
                            _ => segments.push(piece.to_string()),
                        }
                    }
                }
                Component::CurDir => {}
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
            }
        }

        if segments.is_empty() {
            return Err(PathError::Empty);
        }

        Ok(Self(segments.join("/")))
    }

    /// Build from a path located under `root`
    pub fn under<R: AsRef<Path>, P: AsRef<Path>>(root: R, path: P) -> Result<Self, PathError> {
        let root = root.as_ref();
        let path = path.as_ref();
        let relative = path
            .strip_prefix(root)
            .map_err(|_| PathError::NotUnderRoot {
                path: path.to_path_buf(),
                root: root.to_path_buf(),
            })?;
        Self::from_relative(relative)
    }

    /// Same path with the extension of the last segment removed
    pub fn without_extension(&self) -> Self {
        let (dir, file) = match self.0.rfind('/') {
            Some(idx) => (&self.0[..=idx], &self.0[idx + 1..]),
            None => ("", self.0.as_str()),
        };
        let stem = match file.rfind('.') {
            Some(0) | None => file,
            Some(idx) => &file[..idx],
        };
        Self(format!("{}{}", dir, stem))
    }

    /// Final segment of the path
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LogicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
