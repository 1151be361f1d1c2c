//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and config directory lookup
//! - `process/` - External tool invocation
//! - `events/` - Status channel and JSON event sinks
//! - `archive` - IWD (zip) writer
//! - `paths` - PathProvider backed by the configuration
//! - `worker` - Single background run with a status channel

pub mod archive;
pub mod events;
pub mod fs;
pub mod paths;
pub mod process;
pub mod worker;

// Re-export for convenience
pub use archive::ZipArchiveWriter;
pub use events::{status_channel, ChannelEventSink, JsonEventSink, StatusReceiver};
pub use fs::LocalFs;
pub use paths::ConfiguredPaths;
pub use process::ProcessToolInvoker;
pub use worker::{RunHandle, Runner};
