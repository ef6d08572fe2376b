//! Channel-backed event sinks.
//!
//! These let the polling thread hand translated events to a consumer that
//! lives elsewhere, e.g. a simulation thread or an async task. Sending never
//! blocks the polling thread.
//!
//! # Example (Sync)
//!
//! ```no_run
//! use frameinput::channel::event_channel;
//! use frameinput::{AppState, InputConfig, InputSubsystem, MemoryBackend};
//!
//! let (mut sink, rx) = event_channel(256);
//! let mut input = InputSubsystem::new(MemoryBackend::new(), InputConfig::default()).unwrap();
//! input.init_from_config();
//!
//! let mut commands: Vec<String> = Vec::new();
//! input.start_tic(&AppState::playing(), &mut commands);
//! input.drain_events(&mut sink);
//!
//! for event in rx.try_iter() {
//!     println!("{:?}", event);
//! }
//! ```

use crate::event::LogicalEvent;
use crate::sink::EventSink;
use std::sync::mpsc::{self, Receiver, Sender, SyncSender, TrySendError};

/// Sink that forwards events to a bounded channel, dropping them when full.
pub struct ChannelSink {
    sender: SyncSender<LogicalEvent>,
    dropped: usize,
}

impl ChannelSink {
    /// Number of events dropped because the channel was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl EventSink for ChannelSink {
    fn post(&mut self, event: LogicalEvent) {
        // Don't block the polling thread if the consumer is slow
        if let Err(TrySendError::Full(_)) = self.sender.try_send(event) {
            self.dropped += 1;
        }
    }
}

/// Sink that forwards events to an unbounded channel.
pub struct UnboundedChannelSink {
    sender: Sender<LogicalEvent>,
}

impl EventSink for UnboundedChannelSink {
    fn post(&mut self, event: LogicalEvent) {
        let _ = self.sender.send(event);
    }
}

/// Create a bounded channel sink.
///
/// # Arguments
///
/// * `capacity` - Maximum number of events to buffer. If the buffer is full,
///   new events are dropped and counted in [`ChannelSink::dropped`].
pub fn event_channel(capacity: usize) -> (ChannelSink, Receiver<LogicalEvent>) {
    let (sender, receiver) = mpsc::sync_channel(capacity);
    (ChannelSink { sender, dropped: 0 }, receiver)
}

/// Create an unbounded channel sink.
///
/// Nothing is ever dropped, so memory grows if the consumer falls behind.
pub fn unbounded_event_channel() -> (UnboundedChannelSink, Receiver<LogicalEvent>) {
    let (sender, receiver) = mpsc::channel();
    (UnboundedChannelSink { sender }, receiver)
}

// ============================================================================
// Tokio async support (behind feature flag)
// ============================================================================

#[cfg(feature = "tokio")]
pub use tokio_channel::*;

#[cfg(feature = "tokio")]
mod tokio_channel {
    use super::*;
    use tokio::sync::mpsc as tokio_mpsc;

    /// Sink that forwards events to a tokio channel.
    pub struct AsyncChannelSink {
        sender: tokio_mpsc::Sender<LogicalEvent>,
        dropped: usize,
    }

    impl AsyncChannelSink {
        /// Number of events dropped because the channel was full.
        pub fn dropped(&self) -> usize {
            self.dropped
        }
    }

    impl EventSink for AsyncChannelSink {
        fn post(&mut self, event: LogicalEvent) {
            // Use try_send to avoid blocking the polling thread
            if let Err(tokio_mpsc::error::TrySendError::Full(_)) = self.sender.try_send(event) {
                self.dropped += 1;
            }
        }
    }

    /// Create a sink that feeds a tokio receiver.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use frameinput::channel::async_event_channel;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let (sink, mut rx) = async_event_channel(256);
    ///     // hand `sink` to the polling loop ...
    ///     while let Some(event) = rx.recv().await {
    ///         println!("{:?}", event);
    ///     }
    /// }
    /// ```
    pub fn async_event_channel(
        capacity: usize,
    ) -> (AsyncChannelSink, tokio_mpsc::Receiver<LogicalEvent>) {
        let (sender, receiver) = tokio_mpsc::channel(capacity);
        (AsyncChannelSink { sender, dropped: 0 }, receiver)
    }
}
