//! The logical event stream handed to the application.

use crate::keycode::KeyCode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The type of logical event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventKind {
    /// A key, pointer button, wheel direction, controller button or hat
    /// direction went down.
    KeyDown,
    /// A key, pointer button, controller button or hat direction was released.
    KeyUp,
    /// The pointer moved by a relative amount.
    PointerMove,
    /// A controller axis changed.
    ControllerMove,
}

/// A translated input event.
///
/// The meaning of `value` and `extra` depends on `kind`:
///
/// | kind | `code` | `value` | `extra` |
/// |---|---|---|---|
/// | `KeyDown` from keyboard | logical key | composed character | composed character |
/// | `KeyUp` from keyboard | logical key | 0 | 0 |
/// | `KeyDown`/`KeyUp` from pointer | `MOUSEn` / `MWHEEL*` | 0 | 0 |
/// | `KeyDown`/`KeyUp` from controller | `JOYn` / hat code | same as `code` | 0 |
/// | `PointerMove` | 0 | horizontal delta | vertical delta, up positive |
/// | `ControllerMove` | 0 | axis index | axis value after deadzone |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogicalEvent {
    /// The type of event.
    pub kind: EventKind,
    /// Logical code, see [`crate::keycode`].
    pub code: KeyCode,
    /// Composed text, horizontal delta or axis index.
    pub value: i32,
    /// Composed text, vertical delta or axis value.
    pub extra: i32,
}

impl LogicalEvent {
    /// Create an event from raw parts.
    pub const fn new(kind: EventKind, code: KeyCode, value: i32, extra: i32) -> Self {
        Self {
            kind,
            code,
            value,
            extra,
        }
    }

    /// Create a keyboard key down event with composed text (0 if none).
    pub const fn key_down(code: KeyCode, text: i32) -> Self {
        Self::new(EventKind::KeyDown, code, text, text)
    }

    /// Create a keyboard key up event.
    pub const fn key_up(code: KeyCode) -> Self {
        Self::new(EventKind::KeyUp, code, 0, 0)
    }

    /// Create a pointer button or wheel event.
    pub const fn button(kind: EventKind, code: KeyCode) -> Self {
        Self::new(kind, code, 0, 0)
    }

    /// Create a controller button or hat event.
    pub const fn controller_button(kind: EventKind, code: KeyCode) -> Self {
        Self::new(kind, code, code, 0)
    }

    /// Create a pointer motion event. `dy` is already in logical space (up positive).
    pub const fn pointer_move(dx: i32, dy: i32) -> Self {
        Self::new(EventKind::PointerMove, 0, dx, dy)
    }

    /// Create a controller axis event.
    pub const fn controller_move(axis: i32, value: i32) -> Self {
        Self::new(EventKind::ControllerMove, 0, axis, value)
    }

    /// Composed printable character of a keyboard key down, if any.
    pub fn text(&self) -> Option<char> {
        match self.kind {
            EventKind::KeyDown if self.value > 0 => char::from_u32(self.value as u32),
            _ => None,
        }
    }

    /// Relative motion `(dx, dy)` of a pointer event.
    pub fn pointer_delta(&self) -> Option<(i32, i32)> {
        match self.kind {
            EventKind::PointerMove => Some((self.value, self.extra)),
            _ => None,
        }
    }

    /// `(axis, value)` of a controller axis event.
    pub fn axis(&self) -> Option<(i32, i32)> {
        match self.kind {
            EventKind::ControllerMove => Some((self.value, self.extra)),
            _ => None,
        }
    }

    /// Check if this is a key down or key up event.
    pub fn is_key(&self) -> bool {
        matches!(self.kind, EventKind::KeyDown | EventKind::KeyUp)
    }

    /// Check if this is a motion event (pointer or controller axis).
    pub fn is_motion(&self) -> bool {
        matches!(self.kind, EventKind::PointerMove | EventKind::ControllerMove)
    }
}
