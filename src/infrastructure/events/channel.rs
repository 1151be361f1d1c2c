//! Status channel
//!
//! Carries pipeline events from the background worker to the foreground.
//! The channel is unbounded so the worker never waits on the consumer;
//! events arrive in the order they were sent.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::entities::RunReport;
use crate::domain::ports::{PipelineEvent, PipelineEventSink};

/// Create a connected sink/receiver pair
pub fn status_channel() -> (ChannelEventSink, StatusReceiver) {
    let (tx, rx) = mpsc::channel();
    (
        ChannelEventSink { tx: Mutex::new(tx) },
        StatusReceiver { rx },
    )
}

/// Producer half, handed to the worker
pub struct ChannelEventSink {
    tx: Mutex<Sender<PipelineEvent>>,
}

impl PipelineEventSink for ChannelEventSink {
    fn on_event(&self, event: PipelineEvent) {
        if let Ok(tx) = self.tx.lock() {
            // A dropped receiver means nobody is listening any more
            let _ = tx.send(event);
        }
    }
}

/// Consumer half, kept by the foreground
#[derive(Debug)]
pub struct StatusReceiver {
    rx: Receiver<PipelineEvent>,
}

impl StatusReceiver {
    /// Block until the next event; `None` once the worker is gone
    pub fn recv(&self) -> Option<PipelineEvent> {
        self.rx.recv().ok()
    }

    /// Next event if one is ready
    pub fn try_recv(&self) -> Option<PipelineEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait at most `timeout` for the next event
    pub fn recv_timeout(&self, timeout: Duration) -> Option<PipelineEvent> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Events until the worker hangs up
    pub fn iter(&self) -> impl Iterator<Item = PipelineEvent> + '_ {
        self.rx.iter()
    }

    /// Feed every event to `on_event` and return the final report.
    ///
    /// `None` if the worker ended without a run-complete event.
    pub fn wait_for_completion<F>(&self, mut on_event: F) -> Option<RunReport>
    where
        F: FnMut(&PipelineEvent),
    {
        for event in self.rx.iter() {
            on_event(&event);
            if let PipelineEvent::RunComplete(report) = event {
                return Some(report);
            }
        }
        None
    }
}
