//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archive;
pub mod file_system;
pub mod path_provider;
pub mod pipeline_events;
pub mod tool_invoker;

pub use archive::{ArchiveEntry, ArchiveWriter};
pub use file_system::{FileSystem, FsError, FsResult};
pub use path_provider::PathProvider;
#[cfg(test)]
pub(crate) use pipeline_events::RecordingEventSink;
pub use pipeline_events::{NoopEventSink, PipelineEvent, PipelineEventSink};
pub use tool_invoker::{ToolError, ToolInvocation, ToolInvoker};
