//! Event Sink Implementations
//!
//! Provides concrete implementations of PipelineEventSink:
//! - ChannelEventSink: background worker to foreground consumer
//! - JsonEventSink: NDJSON output for scripting

mod channel;
mod json;

pub use channel::{status_channel, ChannelEventSink, StatusReceiver};
pub use json::{event_to_json, JsonEventSink};
