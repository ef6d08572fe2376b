//! Pointer devices.
//!
//! Two drivers share the button and wheel mapping:
//!
//! - [`PointerDevice`] reads the backend's motion notifications and keeps the
//!   cursor warped to the window center, filtering the motion the warp
//!   itself produces.
//! - [`RawPointerDevice`] reads raw capture deltas, which never saturate at
//!   the window edge, so it needs no centering. It only exists when the
//!   backend can register for raw capture.
//!
//! Vertical motion is inverted on the way in so that moving the pointer up
//! yields a positive logical delta.

use super::{DeviceKind, EventQueue, InputDevice};
use crate::backend::{EventClass, PointerButton, RawBackend, RawEvent};
use crate::config::{MotionMode, PointerDriver};
use crate::event::{EventKind, LogicalEvent};
use crate::keycode::{self, KeyCode};

/// Logical code of a physical pointer button.
pub fn button_code(button: PointerButton) -> Option<KeyCode> {
    match button {
        PointerButton::Left => Some(keycode::MOUSE1),
        PointerButton::Right => Some(keycode::MOUSE2),
        PointerButton::Middle => Some(keycode::MOUSE3),
        PointerButton::X1 => Some(keycode::MOUSE4),
        PointerButton::X2 => Some(keycode::MOUSE5),
        PointerButton::WheelUp => Some(keycode::MWHEELUP),
        PointerButton::WheelDown => Some(keycode::MWHEELDOWN),
        PointerButton::Other(_) => None,
    }
}

/// Wheel direction code for a vertical wheel amount, or `None` for a
/// purely horizontal roll.
pub fn wheel_code(y: i32, flipped: bool) -> Option<KeyCode> {
    if y == 0 {
        return None;
    }
    let direction = if flipped { -1 } else { 1 };
    Some(if direction * y > 0 {
        keycode::MWHEELUP
    } else {
        keycode::MWHEELDOWN
    })
}

/// Translate a button or wheel notification. Motion is handled by the caller.
fn translate_button(event: &RawEvent) -> Option<LogicalEvent> {
    match *event {
        RawEvent::PointerButtonDown { button } => {
            button_code(button).map(|code| LogicalEvent::button(EventKind::KeyDown, code))
        }
        RawEvent::PointerButtonUp { button } => {
            button_code(button).map(|code| LogicalEvent::button(EventKind::KeyUp, code))
        }
        RawEvent::PointerWheel { y, flipped, .. } => {
            wheel_code(y, flipped).map(|code| LogicalEvent::button(EventKind::KeyDown, code))
        }
        _ => None,
    }
}

/// Standard pointer driver with continuous re-centering.
pub struct PointerDevice {
    enabled: bool,
    queue: EventQueue,
    motion_mode: MotionMode,
}

impl PointerDevice {
    /// Create a paused pointer.
    pub fn new(motion_mode: MotionMode) -> Self {
        Self {
            enabled: false,
            queue: EventQueue::new(),
            motion_mode,
        }
    }

    /// How motion notifications are turned into events.
    pub fn motion_mode(&self) -> MotionMode {
        self.motion_mode
    }

    /// Warp the cursor to the window center and remove the motion
    /// notification the warp produced. Other motion is pushed back untouched.
    ///
    /// Does nothing unless active.
    pub fn center(&mut self, backend: &mut dyn RawBackend) {
        if !self.active(backend) {
            return;
        }

        let (width, height) = backend.video_size();
        let (cx, cy) = ((width / 2) as i32, (height / 2) as i32);
        let (prevx, prevy) = backend.pointer_position();

        backend.warp_pointer(cx, cy);

        for event in backend.take_events(EventClass::POINTER_MOTION) {
            if let RawEvent::PointerMotion { x, y, xrel, yrel } = event
                && x == cx
                && y == cy
                && xrel == cx - prevx
                && yrel == cy - prevy
            {
                continue;
            }
            backend.push_event(event);
        }
    }
}

impl InputDevice for PointerDevice {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Pointer
    }

    fn classes(&self) -> EventClass {
        EventClass::POINTER
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

        let mut total = (0, 0);
        for event in backend.take_events(self.classes()) {
            if let RawEvent::PointerMotion { xrel, yrel, .. } = event {
                match self.motion_mode {
                    MotionMode::PerNotification => {
                        self.queue.push_back(LogicalEvent::pointer_move(xrel, -yrel));
                    }
                    MotionMode::Aggregate => {
                        total.0 += xrel;
                        total.1 -= yrel;
                    }
                }
            } else if let Some(logical) = translate_button(&event) {
                self.queue.push_back(logical);
            }
        }

        if total != (0, 0) {
            self.queue.push_back(LogicalEvent::pointer_move(total.0, total.1));
        }

        self.center(backend);
    }

    fn pause(&mut self, backend: &mut dyn RawBackend) {
        self.set_enabled(false);
        backend.set_event_class_enabled(self.classes(), false);
        backend.show_cursor(true);
    }

    fn resume(&mut self, backend: &mut dyn RawBackend) {
        self.set_enabled(true);
        backend.show_cursor(false);
        self.reset(backend);
        backend.set_event_class_enabled(self.classes(), true);
    }

    fn reset(&mut self, backend: &mut dyn RawBackend) {
        self.flush_events(backend);
        self.center(backend);
    }
}

/// Raw capture pointer driver. Motion is summed into at most one event per
/// gather and the cursor is never warped.
pub struct RawPointerDevice {
    enabled: bool,
    queue: EventQueue,
}

impl RawPointerDevice {
    /// Register for raw capture with the backend. Returns `None` if the
    /// backend has no raw capture facility.
    pub fn create(backend: &mut dyn RawBackend) -> Option<Self> {
        if !backend.register_raw_pointer() {
            log::warn!("{}: raw pointer capture unavailable", backend.name());
            return None;
        }
        Some(Self {
            enabled: false,
            queue: EventQueue::new(),
        })
    }
}

impl InputDevice for RawPointerDevice {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Pointer
    }

    fn classes(&self) -> EventClass {
        EventClass::POINTER
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

        let (mut dx, mut dy) = (0, 0);
        for event in backend.take_events(self.classes()) {
            if let RawEvent::PointerMotion { xrel, yrel, .. } = event {
                dx += xrel;
                dy -= yrel;
            } else if let Some(logical) = translate_button(&event) {
                self.queue.push_back(logical);
            }
        }

        if dx != 0 || dy != 0 {
            self.queue.push_back(LogicalEvent::pointer_move(dx, dy));
        }
    }

    fn pause(&mut self, backend: &mut dyn RawBackend) {
        self.set_enabled(false);
        backend.set_event_class_enabled(self.classes(), false);
        backend.show_cursor(true);
    }

    fn resume(&mut self, backend: &mut dyn RawBackend) {
        self.set_enabled(true);
        backend.show_cursor(false);
        self.reset(backend);
        backend.set_event_class_enabled(self.classes(), true);
    }

    fn shutdown(&mut self, backend: &mut dyn RawBackend) {
        self.pause(backend);
        backend.unregister_raw_pointer();
    }
}

/// Build the pointer driver selected by `driver`, falling back to the
/// standard driver when raw capture cannot be registered.
pub fn create_pointer(
    driver: PointerDriver,
    motion_mode: MotionMode,
    backend: &mut dyn RawBackend,
) -> Box<dyn InputDevice> {
    if driver == PointerDriver::Raw {
        if let Some(device) = RawPointerDevice::create(backend) {
            log::info!("using raw pointer driver");
            return Box::new(device);
        }
        log::info!("falling back to standard pointer driver");
    }
    Box::new(PointerDevice::new(motion_mode))
}
