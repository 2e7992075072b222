//! Agent runner abstraction.
//!
//! This module provides the pieces every backend shares:
//!
//! - **Event**: the canonical model of one line of agent output
//! - **Question**: in-band clarification request detection
//! - **Prompt**: prompt assembly for the first turn of a conversation
//! - **Options**: per-invocation parameters, including session resumption
//! - **Registry**: backend name → adapter constructor
//! - **Claude**: the CLI-agent adapter (stream-JSON over stdout)
//!
//! # Contract
//!
//! [`Runner::run`] returns immediately with a pair of receivers. The event
//! receiver disconnects exactly once, when the backend output is exhausted.
//! The error receiver yields at most one error, only if the backend
//! terminated abnormally, and then disconnects. Callers must drain both.
//!
//! There is no cancellation primitive. A caller that stops consuming leaves
//! the worker running until the agent process exits on its own.

pub mod claude;
mod event;
mod options;
pub mod prompt;
mod question;
pub mod registry;

pub use event::{
    AssistantEvent, ContentBlock, Event, EventKind, Payload, ResultEvent, SystemEvent, ToolUse,
};
pub use options::RunOptions;
pub use prompt::{build_prompt, build_prompt_with_header};
pub use question::{Question, QuestionOption, detect_questions};
pub use registry::{new_runner, register, registered_names};

use crate::error::SpektError;
use std::sync::mpsc::{self, Receiver, SyncSender};

/// Capacity of the per-invocation event channel.
///
/// A slow consumer applies backpressure to the worker once this many events
/// are buffered.
pub const EVENT_BUFFER: usize = 64;

/// A backend adapter able to drive one agent invocation at a time per call.
pub trait Runner: Send + Sync {
    /// Start an invocation and return its live streams.
    fn run(&self, options: RunOptions) -> RunStreams;
}

/// Receiving side of one invocation.
#[derive(Debug)]
pub struct RunStreams {
    /// Events in the exact order the backend emitted them.
    pub events: Receiver<Event>,
    /// At most one error, sent after the event stream is exhausted.
    pub errors: Receiver<SpektError>,
}

/// Producing side of one invocation, owned by the adapter's worker.
///
/// Dropping it closes both streams. [`RunSender::fail`] consumes it, so a
/// second error cannot be sent.
#[derive(Debug)]
pub struct RunSender {
    events: SyncSender<Event>,
    errors: SyncSender<SpektError>,
}

impl RunStreams {
    /// Create a connected sender/streams pair with a bounded event buffer.
    pub fn channel() -> (RunSender, RunStreams) {
        let (event_tx, event_rx) = mpsc::sync_channel(EVENT_BUFFER);
        let (error_tx, error_rx) = mpsc::sync_channel(1);
        (
            RunSender {
                events: event_tx,
                errors: error_tx,
            },
            RunStreams {
                events: event_rx,
                errors: error_rx,
            },
        )
    }

    /// Block until the invocation finishes, collecting everything it produced.
    pub fn drain(self) -> (Vec<Event>, Option<SpektError>) {
        let events = self.events.iter().collect();
        let error = self.errors.recv().ok();
        (events, error)
    }
}

impl RunSender {
    /// Forward one event, blocking while the buffer is full.
    ///
    /// Returns `false` once the consumer has dropped its receiver.
    pub fn send_event(&self, event: Event) -> bool {
        self.events.send(event).is_ok()
    }

    /// Report abnormal termination and close both streams.
    pub fn fail(self, error: SpektError) {
        let RunSender { events, errors } = self;
        drop(events);
        // Capacity 1 and a single send: never blocks. A dropped receiver is fine.
        let _ = errors.send(error);
    }
}

/// Adapters that ship with this crate, registered on first registry access.
pub(crate) fn builtin_runners() -> Vec<(&'static str, registry::Constructor)> {
    vec![(claude::NAME, claude::ClaudeRunner::boxed as registry::Constructor)]
}
