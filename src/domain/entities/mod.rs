//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `AssetItem` - A selectable map or zone
//! - `ScanResult` - Asset categories found in a data directory
//! - `ManifestDocument` - Zone source lines
//! - `ManifestProject` - Generated zone source plus auxiliary files
//! - `PipelineQueue` / `RunReport` - Per-run item state and outcome

mod asset_item;
mod manifest;
mod pipeline;
mod project;
mod scan_result;

pub use asset_item::AssetItem;
pub use manifest::{Directive, ManifestDocument, ManifestLine, RULE};
pub use pipeline::{ItemState, PipelineItem, PipelineQueue, RunOutcome, RunReport};
pub use project::{AuxiliaryFile, AuxiliaryKind, ManifestProject};
pub use scan_result::ScanResult;
