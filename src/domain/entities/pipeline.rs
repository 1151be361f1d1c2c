//! Pipeline entities - per-item state and the outcome of a run
//!
//! Items move `Pending -> Running -> Succeeded | Failed`. A failure is
//! terminal for the whole queue: once an item fails, no later item leaves
//! `Pending`.

use crate::domain::entities::AssetItem;
use crate::domain::value_objects::Operation;
use crate::error::PipelineFailure;

/// State of one queued item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Pending,
    Running,
    Succeeded,
    Failed,
}

/// An item plus its state during a run
#[derive(Debug, Clone)]
pub struct PipelineItem {
    item: AssetItem,
    state: ItemState,
}

impl PipelineItem {
    pub fn item(&self) -> &AssetItem {
        &self.item
    }

    pub fn state(&self) -> ItemState {
        self.state
    }
}

/// Ordered queue with a cursor, owned by one run
#[derive(Debug)]
pub struct PipelineQueue {
    items: Vec<PipelineItem>,
    current: Option<usize>,
    aborted: bool,
}

impl PipelineQueue {
    pub fn new(items: Vec<AssetItem>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| PipelineItem {
                    item,
                    state: ItemState::Pending,
                })
                .collect(),
            current: None,
            aborted: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move the next pending item to `Running` and return its index.
    ///
    /// Returns `None` once the queue is exhausted or aborted, or while an item
    /// is still running.
    pub fn start_next(&mut self) -> Option<usize> {
        if self.aborted {
            return None;
        }
        let next = match self.current {
            None => 0,
            Some(idx) if self.items[idx].state == ItemState::Running => return None,
            Some(idx) => idx + 1,
        };
        let entry = self.items.get_mut(next)?;
        entry.state = ItemState::Running;
        self.current = Some(next);
        Some(next)
    }

    pub fn item(&self, index: usize) -> Option<&AssetItem> {
        self.items.get(index).map(|p| &p.item)
    }

    /// Mark the running item succeeded
    pub fn succeed_current(&mut self) {
        if let Some(entry) = self.running_mut() {
            entry.state = ItemState::Succeeded;
        }
    }

    /// Mark the running item failed and abort the rest of the queue
    pub fn fail_current(&mut self) {
        if let Some(entry) = self.running_mut() {
            entry.state = ItemState::Failed;
        }
        self.aborted = true;
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub fn states(&self) -> Vec<ItemState> {
        self.items.iter().map(|p| p.state).collect()
    }

    pub fn items(&self) -> &[PipelineItem] {
        &self.items
    }

    /// Names of succeeded items, in processing order
    pub fn succeeded_names(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|p| p.state == ItemState::Succeeded)
            .map(|p| p.item.name().to_string())
            .collect()
    }

    fn running_mut(&mut self) -> Option<&mut PipelineItem> {
        let idx = self.current?;
        self.items
            .get_mut(idx)
            .filter(|p| p.state == ItemState::Running)
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every item succeeded
    Completed,
    /// The queue stopped at `item`
    Aborted {
        item: String,
        failure: PipelineFailure,
    },
}

/// Final result of a run, delivered with the run-complete event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub operation: Operation,
    /// Names that succeeded, in processing order
    pub succeeded: Vec<String>,
    pub outcome: RunOutcome,
}

impl RunReport {
    pub fn from_queue(operation: Operation, queue: &PipelineQueue, failure: Option<(String, PipelineFailure)>) -> Self {
        let outcome = match failure {
            Some((item, failure)) => RunOutcome::Aborted { item, failure },
            None => RunOutcome::Completed,
        };
        Self {
            operation,
            succeeded: queue.succeeded_names(),
            outcome,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, RunOutcome::Completed)
    }

    pub fn is_aborted(&self) -> bool {
        !self.is_success()
    }

    pub fn failure(&self) -> Option<&PipelineFailure> {
        match &self.outcome {
            RunOutcome::Aborted { failure, .. } => Some(failure),
            RunOutcome::Completed => None,
        }
    }

    /// Closing status line for the run
    pub fn summary(&self) -> &'static str {
        if self.is_success() {
            self.operation.success_message()
        } else {
            self.operation.abort_message()
        }
    }
}
