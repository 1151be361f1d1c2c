//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{
    BuildUseCase, ExportUseCase, LaunchUseCase, PackageUseCase, RegenerateUseCase,
};
use crate::config::Config;
use crate::domain::services::ManifestGenerator;
use crate::error::MapportResult;
use crate::infrastructure::{ConfiguredPaths, LocalFs, ProcessToolInvoker, ZipArchiveWriter};

/// Type alias for the concrete ExportUseCase with all dependencies
pub type ConcreteExportUseCase = ExportUseCase<LocalFs, ProcessToolInvoker, ConfiguredPaths>;

/// Type alias for the concrete BuildUseCase with all dependencies
pub type ConcreteBuildUseCase = BuildUseCase<LocalFs, ProcessToolInvoker, ConfiguredPaths>;

pub type ConcreteRegenerateUseCase = RegenerateUseCase<LocalFs, ConfiguredPaths>;

pub type ConcretePackageUseCase = PackageUseCase<LocalFs, ZipArchiveWriter, ConfiguredPaths>;

pub type ConcreteLaunchUseCase = LaunchUseCase<LocalFs, ProcessToolInvoker, ConfiguredPaths>;

/// Game paths from the configuration
pub fn create_paths(config: &Config) -> MapportResult<ConfiguredPaths> {
    ConfiguredPaths::from_config(config)
}

fn create_invoker(config: &Config) -> ProcessToolInvoker {
    ProcessToolInvoker::new().with_launcher(config.tools.launcher.clone())
}

fn create_generator(config: &Config) -> ManifestGenerator {
    ManifestGenerator::new(config.templates.to_template_set())
}

/// Create an export use case with all dependencies wired up
pub fn create_export_use_case(config: &Config) -> MapportResult<ConcreteExportUseCase> {
    Ok(ExportUseCase::new(
        LocalFs::new(),
        create_invoker(config),
        create_paths(config)?,
        create_generator(config),
    ))
}

/// Create a build use case with all dependencies wired up
pub fn create_build_use_case(config: &Config) -> MapportResult<ConcreteBuildUseCase> {
    Ok(BuildUseCase::new(
        LocalFs::new(),
        create_invoker(config),
        create_paths(config)?,
    ))
}

pub fn create_regenerate_use_case(config: &Config) -> MapportResult<ConcreteRegenerateUseCase> {
    Ok(RegenerateUseCase::new(
        LocalFs::new(),
        create_paths(config)?,
        create_generator(config),
    ))
}

pub fn create_package_use_case(config: &Config) -> MapportResult<ConcretePackageUseCase> {
    Ok(PackageUseCase::new(
        LocalFs::new(),
        ZipArchiveWriter::new(),
        create_paths(config)?,
    ))
}

/// Create a launch use case; the game goes through the same launcher as the tools
pub fn create_launch_use_case(config: &Config) -> MapportResult<ConcreteLaunchUseCase> {
    Ok(LaunchUseCase::new(
        LocalFs::new(),
        create_invoker(config),
        create_paths(config)?,
    ))
}
