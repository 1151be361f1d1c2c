//! Error types for Mapport
//!
//! Library errors use `thiserror`. Pipeline failures are kept separate from
//! [`MapportError`]: they never escape a run, they become its outcome.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Mapport operations
pub type MapportResult<T> = Result<T, MapportError>;

/// Main error type for Mapport operations
#[derive(Error, Debug)]
pub enum MapportError {
    /// Game install paths are missing or point to nothing
    #[error("game paths are not configured: {reason}")]
    PathsNotConfigured { reason: String },

    /// Invalid TOML configuration
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A selected name does not match any known map or zone
    #[error("unknown map '{name}' (run `mapport list` to see available maps)")]
    UnknownItem { name: String },

    /// Nothing was selected for a run
    #[error("no items selected")]
    EmptySelection,

    /// A run is already in flight; only one may run at a time
    #[error("another operation is still running")]
    RunInProgress,

    /// The background worker died before reporting completion
    #[error("worker thread terminated unexpectedly")]
    WorkerLost,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a pipeline run stopped early.
///
/// Every variant is terminal for the queue: the failing item is marked
/// failed and no later item is started.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineFailure {
    /// The external tool ran and exited with a non-zero status
    #[error("{tool} exited with status {code}")]
    ToolExecution { tool: String, code: i32 },

    /// The external tool could not be started at all
    #[error("could not launch {tool}: {message}")]
    ToolLaunch { tool: String, message: String },

    /// The external tool was killed before it produced an exit status
    #[error("{tool} was terminated without an exit status")]
    ToolTerminated { tool: String },

    /// A file the step depends on is absent
    #[error("required file is missing: {}", path.display())]
    PrerequisiteMissing { path: PathBuf },

    /// Reading assets to package failed
    #[error("failed to read {}: {message}", path.display())]
    FilesystemRead { path: PathBuf, message: String },

    /// Writing a generated file failed
    #[error("failed to write {}: {message}", path.display())]
    FilesystemWrite { path: PathBuf, message: String },
}

impl PipelineFailure {
    /// Short machine-readable tag used in JSON events
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineFailure::ToolExecution { .. } => "tool_execution",
            PipelineFailure::ToolLaunch { .. } => "tool_launch",
            PipelineFailure::ToolTerminated { .. } => "tool_terminated",
            PipelineFailure::PrerequisiteMissing { .. } => "prerequisite_missing",
            PipelineFailure::FilesystemRead { .. } => "filesystem_read",
            PipelineFailure::FilesystemWrite { .. } => "filesystem_write",
        }
    }
}
