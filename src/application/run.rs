//! Fail-fast pipeline driver
//!
//! Every operation is a loop over selected items with one step per item.
//! Items run strictly in order; the first failing step aborts the queue and
//! no later item is started. The driver owns the queue for the whole run and
//! always finishes with a `RunComplete` event.

use crate::domain::entities::{AssetItem, PipelineQueue, RunReport};
use crate::domain::ports::{
    PathProvider, PipelineEvent, PipelineEventSink, ToolError, ToolInvocation, ToolInvoker,
};
use crate::domain::value_objects::Operation;
use crate::error::{MapportError, MapportResult, PipelineFailure};

/// Checks made before a run is allowed to start
pub fn preflight<PP: PathProvider + ?Sized>(paths: &PP, items: &[AssetItem]) -> MapportResult<()> {
    if !paths.is_valid() {
        return Err(MapportError::PathsNotConfigured {
            reason: format!(
                "expected game directories at {} and {}",
                paths.source_game_dir().display(),
                paths.target_game_dir().display()
            ),
        });
    }
    if items.is_empty() {
        return Err(MapportError::EmptySelection);
    }
    Ok(())
}

/// Run `step` for every item until one fails
pub fn drive<F>(
    operation: Operation,
    items: Vec<AssetItem>,
    sink: &dyn PipelineEventSink,
    mut step: F,
) -> RunReport
where
    F: FnMut(&AssetItem, &dyn PipelineEventSink) -> Result<(), PipelineFailure>,
{
    let mut queue = PipelineQueue::new(items);
    let total = queue.len();
    sink.on_event(PipelineEvent::RunStarted {
        operation,
        item_count: total,
    });
    tracing::info!(operation = %operation, items = total, "run started");

    let mut failure = None;
    while let Some(index) = queue.start_next() {
        let Some(item) = queue.item(index).cloned() else {
            break;
        };
        let name = item.name().to_string();
        sink.on_event(PipelineEvent::ItemStarted {
            index,
            total,
            name: name.clone(),
        });

        match step(&item, sink) {
            Ok(()) => {
                queue.succeed_current();
                tracing::info!(item = %name, "item succeeded");
                sink.on_event(PipelineEvent::ItemSucceeded { index, name });
            }
            Err(err) => {
                queue.fail_current();
                tracing::warn!(item = %name, error = %err, "item failed, aborting run");
                sink.on_event(PipelineEvent::ItemFailed {
                    index,
                    name: name.clone(),
                    failure: err.clone(),
                });
                failure = Some((name, err));
            }
        }
    }

    let report = RunReport::from_queue(operation, &queue, failure);
    sink.on_event(PipelineEvent::RunComplete(report.clone()));
    report
}

/// Invoke an external tool, streaming its output to `sink`
pub fn run_tool<TI: ToolInvoker + ?Sized>(
    invoker: &TI,
    invocation: &ToolInvocation,
    sink: &dyn PipelineEventSink,
) -> Result<(), PipelineFailure> {
    let tool = invocation.tool_name();
    tracing::debug!(
        program = %invocation.program().display(),
        args = ?invocation.args(),
        "invoking tool"
    );

    let result = invoker.invoke(invocation, &mut |line: &str| {
        sink.on_event(PipelineEvent::ToolOutput {
            line: line.to_string(),
        })
    });

    match result {
        Ok(code) => {
            sink.on_event(PipelineEvent::ToolExited {
                tool: tool.clone(),
                code,
            });
            if code == 0 {
                Ok(())
            } else {
                Err(PipelineFailure::ToolExecution { tool, code })
            }
        }
        Err(ToolError::Launch { source, .. }) => Err(PipelineFailure::ToolLaunch {
            tool,
            message: source.to_string(),
        }),
        Err(ToolError::Terminated { .. }) | Err(ToolError::Wait { .. }) => {
            Err(PipelineFailure::ToolTerminated { tool })
        }
    }
}
