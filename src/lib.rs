//! # frameinput
//!
//! A per-frame input layer for games: keyboard, pointer and controller
//! devices translated into one logical event stream, with focus-driven
//! pointer capture.
//!
//! ## Features
//!
//! - One [`LogicalEvent`] shape for key, button, pointer motion and axis input
//! - Keyboard translation with shift/caps-aware text and reserved
//!   window-manager combinations filtered out
//! - Pointer drivers with continuous re-centering or raw capture deltas
//! - Controller buttons, deadzoned axes and edge-detected hats
//! - Pointer capture decided once per tick from focus, fullscreen and
//!   application mode
//! - Platform code behind the [`RawBackend`] trait, with an in-memory
//!   backend for tests and tools
//!
//! ## Quick Start
//!
//! ```no_run
//! use frameinput::{AppState, EventKind, InputConfig, InputSubsystem, MemoryBackend, keycode};
//!
//! let mut config = InputConfig::default();
//! config.apply_args(std::env::args());
//!
//! let mut input = InputSubsystem::new(MemoryBackend::new(), config).expect("input init");
//! input.init_from_config();
//!
//! let mut commands: Vec<String> = Vec::new();
//! loop {
//!     input.start_tic(&AppState::playing(), &mut commands);
//!     while let Some(event) = input.next_event() {
//!         match event.kind {
//!             EventKind::KeyDown if event.code == keycode::ESCAPE => return,
//!             EventKind::PointerMove => println!("look {:?}", event.pointer_delta()),
//!             _ => {}
//!         }
//!     }
//!     if commands.drain(..).any(|c| c == "quit") {
//!         break;
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! The [`InputSubsystem`] owns the backend and one device per kind. Devices
//! never hold the backend; it is lent to them for each call, so the whole
//! layer is single-threaded plain data. Translated events can be handed to
//! other threads through the sinks in [`channel`].

pub mod backend;
pub mod channel;
pub mod config;
pub mod device;
pub mod error;
pub mod event;
pub mod focus;
pub mod keycode;
pub mod keymap;
#[cfg(feature = "recorder")]
pub mod recorder;
pub mod sink;
pub mod state;
pub mod subsystem;

// Re-exports
pub use backend::{EventClass, GrabMode, MemoryBackend, RawBackend, RawEvent, TextMode};
pub use config::{InputConfig, MotionMode, PointerDriver};
pub use device::{DeviceInfo, DeviceKind, InputDevice};
pub use error::{Error, Result};
pub use event::{EventKind, LogicalEvent};
pub use focus::{AppState, GameState, should_grab};
pub use keycode::KeyCode;
pub use keymap::KeyTables;
#[cfg(feature = "recorder")]
pub use recorder::{EventRecorder, RecordedTick, Recording};
pub use sink::{CommandSink, EventSink};
pub use state::ModMask;
pub use subsystem::InputSubsystem;
