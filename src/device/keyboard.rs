//! Keyboard device.
//!
//! Translates raw key notifications through the shared [`KeyTables`],
//! composes printable text for key downs, drops backend auto-repeat and
//! intercepts the reserved alt combinations:
//!
//! - alt+tab (focus switch) is dropped entirely
//! - alt+F4 (close) is turned into a single [`RawEvent::Quit`] pushed back
//!   onto the backend queue for the application layer to handle

use super::{DeviceKind, EventQueue, InputDevice};
use crate::backend::{EventClass, RawBackend, RawEvent, Sym, TextMode, sym};
use crate::event::LogicalEvent;
use crate::keycode;
use crate::keymap::KeyTables;
use crate::state::ModMask;

/// What to do with a key notification before translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reserved {
    /// Not a reserved combination.
    None,
    /// Focus switch: drop.
    FocusSwitch,
    /// Close: drop and forward a quit request.
    Close,
}

fn reserved_combination(key: Sym, mods: ModMask) -> Reserved {
    if !mods.alt() {
        return Reserved::None;
    }
    match key {
        sym::TAB => Reserved::FocusSwitch,
        sym::F4 => Reserved::Close,
        _ => Reserved::None,
    }
}

/// The keyboard.
pub struct KeyboardDevice {
    enabled: bool,
    queue: EventQueue,
    tables: &'static KeyTables,
    text_mode: TextMode,
}

impl KeyboardDevice {
    /// Create a paused keyboard using the backend's text delivery mode.
    pub fn new(backend: &dyn RawBackend) -> Self {
        Self {
            enabled: false,
            queue: EventQueue::new(),
            tables: KeyTables::shared(),
            text_mode: backend.text_mode(),
        }
    }

    /// Logical code for a backend symbol, 0 if unknown.
    pub fn translate_key(&self, sym: Sym) -> i32 {
        self.tables.translate_key(sym)
    }

    /// Printable character for a backend symbol under `mods`, 0 if none.
    pub fn translate_text(&self, sym: Sym, mods: ModMask) -> i32 {
        self.tables.translate_text(sym, mods)
    }

    /// Text for the key down at `index`, taken from the first text
    /// notification that follows it. Another key down in between means the
    /// text belongs to that key instead.
    fn lookahead_text(events: &[RawEvent], index: usize) -> i32 {
        for event in &events[index + 1..] {
            match event {
                RawEvent::KeyDown { .. } => return 0,
                RawEvent::TextInput { text } => {
                    return text.chars().next().map_or(0, |c| c as i32);
                }
                _ => {}
            }
        }
        0
    }

    fn compose_text(&self, events: &[RawEvent], index: usize, sym: Sym, mods: ModMask) -> i32 {
        match self.text_mode {
            TextMode::Translated => self.translate_text(sym, mods),
            TextMode::Separate => Self::lookahead_text(events, index),
        }
    }
}

impl InputDevice for KeyboardDevice {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Keyboard
    }

    fn classes(&self) -> EventClass {
        EventClass::KEYBOARD
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn queue(&self) -> &EventQueue {
        &self.queue
    }

    fn queue_mut(&mut self) -> &mut EventQueue {
        &mut self.queue
    }

    fn gather_events(&mut self, backend: &mut dyn RawBackend) {
        if !self.active(backend) {
            return;
        }

        let events = backend.take_events(self.classes());
        for (index, event) in events.iter().enumerate() {
            let (sym, mods, down) = match *event {
                RawEvent::KeyDown { sym, mods, repeat } => {
                    if repeat {
                        continue;
                    }
                    (sym, mods, true)
                }
                RawEvent::KeyUp { sym, mods } => (sym, mods, false),
                // consumed by the lookahead of the key down that produced it
                _ => continue,
            };

            match reserved_combination(sym, mods) {
                Reserved::FocusSwitch => continue,
                Reserved::Close => {
                    if down {
                        log::debug!("close combination pressed, requesting quit");
                        backend.push_event(RawEvent::Quit);
                    }
                    continue;
                }
                Reserved::None => {}
            }

            let code = self.translate_key(sym);
            if code == keycode::NONE {
                continue;
            }

            let logical = if down {
                LogicalEvent::key_down(code, self.compose_text(&events, index, sym, mods))
            } else {
                LogicalEvent::key_up(code)
            };
            self.queue.push_back(logical);
        }
    }
}
