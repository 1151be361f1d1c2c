//! JSON Event Sink
//!
//! Outputs pipeline events as NDJSON for scripting and automation.

use crate::domain::entities::RunOutcome;
use crate::domain::ports::{PipelineEvent, PipelineEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON form of a pipeline event
pub fn event_to_json(event: &PipelineEvent) -> serde_json::Value {
    match event {
        PipelineEvent::RunStarted {
            operation,
            item_count,
        } => serde_json::json!({
            "event": "start",
            "command": operation.name(),
            "item_count": item_count,
        }),

        PipelineEvent::ItemStarted { index, total, name } => serde_json::json!({
            "event": "item_start",
            "index": index,
            "total": total,
            "name": name,
        }),

        PipelineEvent::ToolOutput { line } => serde_json::json!({
            "event": "output",
            "line": line,
        }),

        PipelineEvent::ToolExited { tool, code } => serde_json::json!({
            "event": "tool_exit",
            "tool": tool,
            "code": code,
        }),

        PipelineEvent::FileWritten { path } => serde_json::json!({
            "event": "file_written",
            "path": path.display().to_string(),
        }),

        PipelineEvent::FileSkipped { path } => serde_json::json!({
            "event": "file_skipped",
            "path": path.display().to_string(),
        }),

        PipelineEvent::Note { message } => serde_json::json!({
            "event": "note",
            "message": message,
        }),

        PipelineEvent::ItemSucceeded { index, name } => serde_json::json!({
            "event": "item_done",
            "index": index,
            "name": name,
        }),

        PipelineEvent::ItemFailed {
            index,
            name,
            failure,
        } => serde_json::json!({
            "event": "item_error",
            "index": index,
            "name": name,
            "kind": failure.kind(),
            "error": failure.to_string(),
        }),

        PipelineEvent::RunComplete(report) => {
            let (status, failed) = match &report.outcome {
                RunOutcome::Completed => ("success", None),
                RunOutcome::Aborted { item, .. } => ("aborted", Some(item.clone())),
            };
            serde_json::json!({
                "event": "complete",
                "command": report.operation.name(),
                "status": status,
                "succeeded": report.succeeded,
                "failed": failed,
                "message": report.summary(),
            })
        }
    }
}

impl PipelineEventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        self.write_event(event_to_json(&event));
    }
}
