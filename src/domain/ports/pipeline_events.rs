//! Pipeline Event Port
//!
//! Observable interface for pipeline runs. Every event renders to exactly
//! one status line; the last event of a run is always
//! [`PipelineEvent::RunComplete`].

use std::path::PathBuf;

use crate::domain::entities::RunReport;
use crate::domain::value_objects::Operation;
use crate::error::PipelineFailure;

/// Event emitted during a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// Run started
    RunStarted {
        operation: Operation,
        item_count: usize,
    },

    /// An item moved to `Running`
    ItemStarted {
        index: usize,
        total: usize,
        name: String,
    },

    /// One line of external tool output
    ToolOutput { line: String },

    /// External tool exited normally
    ToolExited { tool: String, code: i32 },

    /// A generated file was written
    FileWritten { path: PathBuf },

    /// A generated file already existed and was left alone
    FileSkipped { path: PathBuf },

    /// Free-form progress annotation
    Note { message: String },

    /// Item finished successfully
    ItemSucceeded { index: usize, name: String },

    /// Item failed; the run stops here
    ItemFailed {
        index: usize,
        name: String,
        failure: PipelineFailure,
    },

    /// Run finished (always the last event)
    RunComplete(RunReport),
}

impl PipelineEvent {
    pub fn note(message: impl Into<String>) -> Self {
        PipelineEvent::Note {
            message: message.into(),
        }
    }

    /// Human-readable status line
    pub fn to_line(&self) -> String {
        match self {
            PipelineEvent::RunStarted {
                operation,
                item_count,
            } => format!("Starting {} of {} item(s)", operation, item_count),
            PipelineEvent::ItemStarted { index, total, name } => {
                format!("[{}/{}] {}", index + 1, total, name)
            }
            PipelineEvent::ToolOutput { line } => line.clone(),
            PipelineEvent::ToolExited { tool, code } => {
                format!("{} program terminated with output {}", tool, code)
            }
            PipelineEvent::FileWritten { path } => format!("Wrote {}", path.display()),
            PipelineEvent::FileSkipped { path } => {
                format!("Kept existing {}", path.display())
            }
            PipelineEvent::Note { message } => message.clone(),
            PipelineEvent::ItemSucceeded { name, .. } => format!("{} done", name),
            PipelineEvent::ItemFailed { name, failure, .. } => {
                format!("{} failed: {}", name, failure)
            }
            PipelineEvent::RunComplete(report) => report.summary().to_string(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineEvent::RunComplete(_))
    }
}

/// Trait for receiving pipeline events
///
/// Implementations:
/// - `ChannelEventSink`: forwards to a foreground consumer
/// - `JsonEventSink`: NDJSON event stream
/// - `NoopEventSink`: silent operation
pub trait PipelineEventSink: Send + Sync {
    /// Handle a pipeline event
    fn on_event(&self, event: PipelineEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PipelineEventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}
}

/// Test event sink that records all events
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingEventSink {
    events: std::sync::Mutex<Vec<PipelineEvent>>,
}

#[cfg(test)]
impl RecordingEventSink {
    pub(crate) fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.events().iter().map(PipelineEvent::to_line).collect()
    }
}

#[cfg(test)]
impl PipelineEventSink for RecordingEventSink {
    fn on_event(&self, event: PipelineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RunOutcome;

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingEventSink::default();

        sink.on_event(PipelineEvent::RunStarted {
            operation: Operation::Export,
            item_count: 2,
        });
        sink.on_event(PipelineEvent::ToolOutput {
            line: "Dumping mp_crash".to_string(),
        });

        assert_eq!(
            sink.lines(),
            vec!["Starting export of 2 item(s)", "Dumping mp_crash"]
        );
    }

    #[test]
    fn tool_exit_line() {
        let event = PipelineEvent::ToolExited {
            tool: "iw3xport.exe".to_string(),
            code: 0,
        };
        assert_eq!(event.to_line(), "iw3xport.exe program terminated with output 0");
    }

    #[test]
    fn item_started_is_one_based() {
        let event = PipelineEvent::ItemStarted {
            index: 0,
            total: 3,
            name: "mp_crash".to_string(),
        };
        assert_eq!(event.to_line(), "[1/3] mp_crash");
    }

    #[test]
    fn run_complete_is_terminal() {
        let event = PipelineEvent::RunComplete(RunReport {
            operation: Operation::Build,
            succeeded: vec![],
            outcome: RunOutcome::Completed,
        });
        assert!(event.is_terminal());
        assert!(!PipelineEvent::note("x").is_terminal());
    }
}
