//! Input devices.
//!
//! Every device variant implements [`InputDevice`]: it can be paused and
//! resumed, flushed, asked to gather raw notifications into its own queue, and
//! drained one [`LogicalEvent`] at a time. The backend is passed in on every
//! call rather than stored, so devices stay plain owned values inside the
//! [`crate::InputSubsystem`].

pub mod controller;
pub mod keyboard;
pub mod pointer;

use crate::backend::{EventClass, RawBackend};
use crate::event::LogicalEvent;
use std::collections::VecDeque;
use std::fmt;

pub use controller::ControllerDevice;
pub use keyboard::KeyboardDevice;
pub use pointer::{PointerDevice, RawPointerDevice};

/// The three device variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Keyboard.
    Keyboard,
    /// Mouse or other pointer.
    Pointer,
    /// Joystick or gamepad.
    Controller,
}

impl DeviceKind {
    /// Lowercase name used in device descriptors and log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::Keyboard => "keyboard",
            DeviceKind::Pointer => "mouse",
            DeviceKind::Controller => "joystick",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable device, as listed for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Id to pass to the matching `init_*` call.
    pub id: usize,
    /// Human readable name.
    pub name: String,
}

impl DeviceInfo {
    /// Create a new descriptor.
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// FIFO of translated events owned by one device.
pub type EventQueue = VecDeque<LogicalEvent>;

/// The lifecycle and polling contract shared by all device variants.
///
/// Implementors supply the primitives (enabled flag, queue, raw classes and
/// the translating [`gather_events`](InputDevice::gather_events)); the
/// lifecycle operations are provided on top of them and overridden where a
/// variant needs extra work.
pub trait InputDevice {
    /// Which variant this is.
    fn kind(&self) -> DeviceKind;

    /// Raw notification classes this device consumes.
    fn classes(&self) -> EventClass;

    /// Internal enabled flag, independent of focus.
    fn is_enabled(&self) -> bool;

    /// Set the internal enabled flag.
    fn set_enabled(&mut self, enabled: bool);

    /// The translated event queue.
    fn queue(&self) -> &EventQueue;

    /// The translated event queue, mutably.
    fn queue_mut(&mut self) -> &mut EventQueue;

    /// Pull every currently buffered notification of this device's classes
    /// from the backend, translate, and append to the queue. Does nothing
    /// unless [`active`](InputDevice::active).
    fn gather_events(&mut self, backend: &mut dyn RawBackend);

    /// True iff enabled and the window has focus. Focus is queried every time.
    fn active(&self, backend: &dyn RawBackend) -> bool {
        self.is_enabled() && backend.is_focused()
    }

    /// Stop producing events and stop backend delivery of this device's classes.
    ///
    /// Disabling a class discards its queued notifications, so callers gather
    /// anything they still want first.
    fn pause(&mut self, backend: &mut dyn RawBackend) {
        self.set_enabled(false);
        backend.set_event_class_enabled(self.classes(), false);
    }

    /// Start producing events again. Stale input is flushed before backend
    /// delivery is re-enabled.
    fn resume(&mut self, backend: &mut dyn RawBackend) {
        self.set_enabled(true);
        self.reset(backend);
        backend.set_event_class_enabled(self.classes(), true);
    }

    /// Bring the device to a clean state. Same as a flush unless overridden.
    fn reset(&mut self, backend: &mut dyn RawBackend) {
        self.flush_events(backend);
    }

    /// Gather once, then discard everything queued.
    fn flush_events(&mut self, backend: &mut dyn RawBackend) {
        self.gather_events(backend);
        self.queue_mut().clear();
    }

    /// Check if a translated event is waiting.
    fn has_event(&self) -> bool {
        !self.queue().is_empty()
    }

    /// Pop the oldest translated event.
    fn get_event(&mut self) -> Option<LogicalEvent> {
        self.queue_mut().pop_front()
    }

    /// Release backend resources held by the device. The device is paused
    /// afterwards and must not be used again.
    fn shutdown(&mut self, backend: &mut dyn RawBackend) {
        self.pause(backend);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MemoryBackend, RawEvent};
    use crate::event::EventKind;

    /// Passes pointer motion through untranslated; enough to exercise the
    /// provided lifecycle methods.
    struct EchoDevice {
        enabled: bool,
        queue: EventQueue,
    }

    impl InputDevice for EchoDevice {
        fn kind(&self) -> DeviceKind {
            DeviceKind::Pointer
        }

        fn classes(&self) -> EventClass {
            EventClass::POINTER_MOTION
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
            for event in backend.take_events(self.classes()) {
                if let RawEvent::PointerMotion { xrel, yrel, .. } = event {
                    self.queue.push_back(LogicalEvent::pointer_move(xrel, yrel));
                }
            }
        }
    }

    fn echo() -> EchoDevice {
        EchoDevice {
            enabled: true,
            queue: EventQueue::new(),
        }
    }

    #[test]
    fn test_active_tracks_focus() {
        let mut backend = MemoryBackend::new();
        let device = echo();
        assert!(device.active(&backend));
        backend.set_focused(false);
        assert!(!device.active(&backend));
        backend.set_focused(true);
        assert!(device.active(&backend));
    }

    #[test]
    fn test_gather_and_drain_in_order() {
        let mut backend = MemoryBackend::new();
        let mut device = echo();
        backend.inject_motion(1, 0);
        backend.inject_motion(2, 0);
        device.gather_events(&mut backend);

        assert!(device.has_event());
        assert_eq!(device.get_event().map(|e| e.value), Some(1));
        assert_eq!(device.get_event().map(|e| e.value), Some(2));
        assert!(!device.has_event());
        assert_eq!(device.get_event(), None);
    }

    #[test]
    fn test_paused_device_gathers_nothing() {
        let mut backend = MemoryBackend::new();
        let mut device = echo();
        device.pause(&mut backend);
        assert!(!device.active(&backend));
        assert!(!backend.is_class_enabled(EventClass::POINTER_MOTION));

        backend.inject_motion(4, 4);
        device.gather_events(&mut backend);
        assert!(!device.has_event());
    }

    #[test]
    fn test_pause_keeps_leftovers_until_resume() {
        let mut backend = MemoryBackend::new();
        let mut device = echo();
        backend.inject_motion(1, 1);
        device.gather_events(&mut backend);

        device.pause(&mut backend);
        assert!(device.has_event());

        device.resume(&mut backend);
        assert!(device.active(&backend));
        assert!(!device.has_event());
        assert!(backend.is_class_enabled(EventClass::POINTER_MOTION));
    }

    #[test]
    fn test_flush_discards_pending_backend_input() {
        let mut backend = MemoryBackend::new();
        let mut device = echo();
        backend.inject_motion(3, 3);
        device.flush_events(&mut backend);
        assert!(!device.has_event());
        assert_eq!(backend.queued(), 0);

        backend.inject_motion(1, 0);
        device.gather_events(&mut backend);
        assert_eq!(device.get_event().map(|e| e.kind), Some(EventKind::PointerMove));
    }

    #[test]
    fn test_device_info() {
        let info = DeviceInfo::new(0, "memory keyboard");
        assert_eq!(info.id, 0);
        assert_eq!(info.name, "memory keyboard");
        assert_eq!(DeviceKind::Controller.to_string(), "joystick");
    }
}
