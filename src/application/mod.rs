//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ExportUseCase` - Run the converter per map, then generate zone sources
//! - `BuildUseCase` - Build zone sources into map bundles
//! - `RegenerateUseCase` - Rewrite zone sources from extracted data
//! - `PackageUseCase` - Pack images and sounds into IWD archives
//! - `LaunchUseCase` - Start the game on a built map
//!
//! ## Services
//!
//! - `catalog` - List and select maps and zones
//! - `FileMaterializer` - Write generated files, honoring overwrite policy
//! - `run` - Fail-fast queue driver shared by every use case

pub mod build;
pub mod catalog;
pub mod export;
pub mod launch;
pub mod materialize;
pub mod package;
pub mod regenerate;
pub mod run;

#[cfg(test)]
pub(crate) mod test_support;

pub use build::{BuildOptions, BuildUseCase};
pub use catalog::{list_source_maps, list_zone_sources, preselect, select};
pub use export::{ExportOptions, ExportUseCase};
pub use launch::LaunchUseCase;
pub use materialize::FileMaterializer;
pub use package::{PackageUseCase, PACKED_DIRS};
pub use regenerate::RegenerateUseCase;
