//! Mapport - ports IW3 maps to IW4x
//!
//! Drives the `iw3xport` converter over selected maps, generates ZoneBuilder
//! zone sources from the extracted data, and builds the zones with IW4x.
//! Runs happen on a background worker and report progress through a
//! status channel.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{AssetItem, RunOutcome, RunReport, ScanResult};
pub use domain::ports::{PipelineEvent, PipelineEventSink};
pub use error::{MapportError, MapportResult, PipelineFailure};
pub use infrastructure::{RunHandle, Runner};
