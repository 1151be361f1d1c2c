//! Background runner
//!
//! Runs one pipeline at a time on a worker thread and hands the foreground
//! a [`StatusReceiver`] for its events. A second run is refused while the
//! first is still in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::domain::entities::RunReport;
use crate::domain::ports::PipelineEventSink;
use crate::error::{MapportError, MapportResult};
use crate::infrastructure::events::{status_channel, StatusReceiver};

const WORKER_THREAD_NAME: &str = "mapport-worker";

#[derive(Debug, Clone, Default)]
pub struct Runner {
    busy: Arc<AtomicBool>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Start `job` on the worker thread.
    ///
    /// Fails with [`MapportError::RunInProgress`] if a previous job has not
    /// returned yet.
    pub fn spawn<F>(&self, job: F) -> MapportResult<RunHandle>
    where
        F: FnOnce(&dyn PipelineEventSink) -> MapportResult<RunReport> + Send + 'static,
    {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(MapportError::RunInProgress);
        }

        let guard = BusyGuard(Arc::clone(&self.busy));
        let (sink, receiver) = status_channel();

        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                let _guard = guard;
                let sink: &dyn PipelineEventSink = &sink;
                let result = job(sink);
                tracing::debug!(ok = result.is_ok(), "worker finished");
                result
            });

        match handle {
            Ok(handle) => Ok(RunHandle { receiver, handle }),
            Err(err) => {
                // The guard moved into the closure is dropped with it
                tracing::error!(error = %err, "failed to spawn worker thread");
                Err(MapportError::Io(err))
            }
        }
    }
}

/// Clears the busy flag when the job ends, even by panic
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// A run in flight
#[derive(Debug)]
pub struct RunHandle {
    receiver: StatusReceiver,
    handle: JoinHandle<MapportResult<RunReport>>,
}

impl RunHandle {
    pub fn receiver(&self) -> &StatusReceiver {
        &self.receiver
    }

    /// Wait for the worker and return its report
    pub fn join(self) -> MapportResult<RunReport> {
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => Err(MapportError::WorkerLost),
        }
    }
}
