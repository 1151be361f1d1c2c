//! ManifestProject entity - the outcome of generating one item's zone source
//!
//! A project only *describes* writes. Nothing here touches the filesystem;
//! the materializer applies the description later.

use crate::domain::entities::{AssetItem, ManifestDocument};
use crate::domain::value_objects::RequiredScript;
use std::path::{Path, PathBuf};

/// What kind of generated file an [`AuxiliaryFile`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxiliaryKind {
    /// Load-screen material descriptor
    MaterialDescriptor,
    /// Placeholder for a required script that was missing
    StubScript(RequiredScript),
}

/// A generated file other than the manifest itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxiliaryFile {
    /// Absolute target path
    path: PathBuf,
    /// Literal content
    content: String,
    kind: AuxiliaryKind,
}

impl AuxiliaryFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, kind: AuxiliaryKind) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> AuxiliaryKind {
        self.kind
    }
}

/// Generated zone source plus the auxiliary files it depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestProject {
    item: AssetItem,
    document: ManifestDocument,
    source: String,
    auxiliary: Vec<AuxiliaryFile>,
}

impl ManifestProject {
    pub fn new(item: AssetItem, document: ManifestDocument, auxiliary: Vec<AuxiliaryFile>) -> Self {
        let source = document.render();
        Self {
            item,
            document,
            source,
            auxiliary,
        }
    }

    pub fn item(&self) -> &AssetItem {
        &self.item
    }

    pub fn map_name(&self) -> &str {
        self.item.name()
    }

    pub fn data_dir(&self) -> &Path {
        self.item.data_dir()
    }

    pub fn document(&self) -> &ManifestDocument {
        &self.document
    }

    /// Rendered manifest text
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn auxiliary_files(&self) -> &[AuxiliaryFile] {
        &self.auxiliary
    }

    /// Stub scripts scheduled because their originals were absent
    pub fn stub_scripts(&self) -> impl Iterator<Item = &AuxiliaryFile> {
        self.auxiliary
            .iter()
            .filter(|f| matches!(f.kind(), AuxiliaryKind::StubScript(_)))
    }
}
