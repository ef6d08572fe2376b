//! Recording and replay of translated input.
//!
//! An [`EventRecorder`] is an [`EventSink`] that groups everything it receives
//! by tick. The finished [`Recording`] can be saved as JSON and later replayed
//! into any sink, which makes it useful for:
//! - Regression tests of input-driven game logic
//! - Reproducing bug reports
//! - Attract-mode scripts
//!
//! # Example
//!
//! ```no_run
//! use frameinput::recorder::{EventRecorder, Recording};
//! use frameinput::{AppState, InputConfig, InputSubsystem, LogicalEvent, MemoryBackend};
//!
//! let mut input = InputSubsystem::new(MemoryBackend::new(), InputConfig::default()).unwrap();
//! input.init_from_config();
//!
//! let mut recorder = EventRecorder::new();
//! let mut commands: Vec<String> = Vec::new();
//! for _ in 0..35 {
//!     input.start_tic(&AppState::playing(), &mut commands);
//!     input.drain_events(&mut recorder);
//!     recorder.next_tick();
//! }
//! recorder.finish().save("session.json").unwrap();
//!
//! // Replay later
//! let recording = Recording::load("session.json").unwrap();
//! recording.replay(&mut |event: LogicalEvent| println!("{:?}", event));
//! ```

use crate::error::{Error, Result};
use crate::event::LogicalEvent;
use crate::sink::EventSink;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::SystemTime;

/// Events delivered during one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedTick {
    /// Tick number, counted from the start of the recording.
    pub tick: u64,
    /// Events in delivery order.
    pub events: Vec<LogicalEvent>,
}

/// A complete recording of translated input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    /// Ticks that delivered at least one event.
    pub ticks: Vec<RecordedTick>,
    /// When the recording was created.
    pub created_at: SystemTime,
    /// Optional description.
    pub description: Option<String>,
}

impl Recording {
    /// Create a new empty recording.
    pub fn new() -> Self {
        Self {
            ticks: Vec::new(),
            created_at: SystemTime::now(),
            description: None,
        }
    }

    /// Set a description for this recording.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Get the number of events in this recording.
    pub fn event_count(&self) -> usize {
        self.ticks.iter().map(|t| t.events.len()).sum()
    }

    /// Number of ticks spanned, up to and including the last one with input.
    pub fn tick_count(&self) -> u64 {
        self.ticks.last().map(|t| t.tick + 1).unwrap_or(0)
    }

    /// Events recorded for `tick`. Empty for a tick without input.
    pub fn events_at(&self, tick: u64) -> &[LogicalEvent] {
        self.ticks
            .iter()
            .find(|t| t.tick == tick)
            .map(|t| t.events.as_slice())
            .unwrap_or(&[])
    }

    /// Save the recording to a file (JSON format).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            Error::Serialization(format!("Failed to serialize recording: {}", e))
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a recording from a file (JSON format).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let recording: Recording = serde_json::from_str(&json).map_err(|e| {
            Error::Serialization(format!("Failed to deserialize recording: {}", e))
        })?;
        Ok(recording)
    }

    /// Post every recorded event to `sink`, in order, ignoring tick
    /// boundaries.
    pub fn replay(&self, sink: &mut dyn EventSink) {
        for event in self.ticks.iter().flat_map(|t| t.events.iter()) {
            sink.post(*event);
        }
    }

    /// Post the events recorded for `tick` to `sink`. Drive this from the
    /// game loop to reproduce the original timing.
    pub fn replay_tick(&self, tick: u64, sink: &mut dyn EventSink) {
        for event in self.events_at(tick) {
            sink.post(*event);
        }
    }
}

impl Default for Recording {
    fn default() -> Self {
        Self::new()
    }
}

/// Records translated events, grouped by tick.
pub struct EventRecorder {
    recording: Recording,
    tick: u64,
}

impl EventRecorder {
    /// Create a new event recorder, starting at tick 0.
    pub fn new() -> Self {
        Self {
            recording: Recording::new(),
            tick: 0,
        }
    }

    /// Current tick number.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance to the next tick. Call once per game tick after draining.
    pub fn next_tick(&mut self) {
        self.tick += 1;
    }

    /// Stop recording and return the recording.
    pub fn finish(self) -> Recording {
        log::debug!(
            "recorded {} events over {} ticks",
            self.recording.event_count(),
            self.tick
        );
        self.recording
    }
}

impl Default for EventRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for EventRecorder {
    fn post(&mut self, event: LogicalEvent) {
        match self.recording.ticks.last_mut() {
            Some(last) if last.tick == self.tick => last.events.push(event),
            _ => self.recording.ticks.push(RecordedTick {
                tick: self.tick,
                events: vec![event],
            }),
        }
    }
}
