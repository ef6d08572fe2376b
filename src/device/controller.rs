//! Controller device.
//!
//! Buttons become key events in the `JOY*` range. Axes become
//! [`EventKind::ControllerMove`] events with small values clamped to zero.
//! Hats are level-triggered in the backend (one bitmask per notification);
//! the device keeps the last mask per hat and emits one key down or key up
//! per direction whose bit changed.

use super::{DeviceKind, EventQueue, InputDevice};
use crate::backend::{
    ControllerHandle, EventClass, HAT_CENTERED, HAT_DOWN, HAT_LEFT, HAT_RIGHT, HAT_UP, RawBackend,
    RawEvent,
};
use crate::event::{EventKind, LogicalEvent};
use crate::keycode::{self, HAT_DIRECTIONS, MAX_HATS, NUM_JOY_BUTTONS};

/// Default axis deadzone.
pub const DEFAULT_DEADZONE: i32 = 6000;

/// Hat bits in direction order, matching [`keycode::HAT_UP`] and friends.
const HAT_FLAGS: [u8; HAT_DIRECTIONS] = [HAT_UP, HAT_RIGHT, HAT_DOWN, HAT_LEFT];

/// Clamp `value` to zero if its magnitude is below `deadzone`.
#[inline]
pub fn apply_deadzone(value: i32, deadzone: i32) -> i32 {
    if value.abs() < deadzone { 0 } else { value }
}

/// A single game controller.
pub struct ControllerDevice {
    enabled: bool,
    queue: EventQueue,
    handle: Option<ControllerHandle>,
    hat_states: Vec<u8>,
    deadzone: i32,
}

impl ControllerDevice {
    /// Open controller `index`. If the backend cannot open it the device is
    /// still created but never becomes active.
    pub fn new(index: usize, deadzone: i32, backend: &mut dyn RawBackend) -> Self {
        let handle = backend.open_controller(index);
        let num_hats = match &handle {
            Some(handle) => {
                if handle.num_hats > MAX_HATS {
                    log::debug!(
                        "{}: {} hats, only the first {} are mapped",
                        handle.name,
                        handle.num_hats,
                        MAX_HATS
                    );
                }
                backend.set_controller_polling(true);
                handle.num_hats.min(MAX_HATS)
            }
            None => {
                log::warn!("{}: could not open controller {}", backend.name(), index);
                0
            }
        };

        Self {
            enabled: false,
            queue: EventQueue::new(),
            handle,
            hat_states: vec![HAT_CENTERED; num_hats],
            deadzone,
        }
    }

    /// Check if the controller handle was opened.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// The open handle, if any.
    pub fn handle(&self) -> Option<&ControllerHandle> {
        self.handle.as_ref()
    }

    /// Axis deadzone in effect.
    pub fn deadzone(&self) -> i32 {
        self.deadzone
    }

    /// Last observed direction bitmask of `hat`.
    pub fn hat_state(&self, hat: usize) -> Option<u8> {
        self.hat_states.get(hat).copied()
    }

    fn instance_id(&self) -> Option<u32> {
        self.handle.as_ref().map(|h| h.instance_id)
    }

    fn push_button(&mut self, kind: EventKind, button: u8) {
        let button = button as usize;
        if button >= NUM_JOY_BUTTONS {
            log::debug!("ignoring controller button {}", button);
            return;
        }
        let code = keycode::controller_button_code(button);
        self.queue.push_back(LogicalEvent::controller_button(kind, code));
    }

    fn update_hat(&mut self, hat: u8, new_state: u8) {
        let hat = hat as usize;
        let Some(old_state) = self.hat_states.get(hat).copied() else {
            log::debug!("ignoring controller hat {}", hat);
            return;
        };

        for (direction, flag) in HAT_FLAGS.iter().enumerate() {
            let was = old_state & flag != 0;
            let is = new_state & flag != 0;
            let kind = match (was, is) {
                (false, true) => EventKind::KeyDown,
                (true, false) => EventKind::KeyUp,
                _ => continue,
            };
            let code = keycode::hat_code(hat, direction);
            self.queue.push_back(LogicalEvent::controller_button(kind, code));
        }

        self.hat_states[hat] = new_state;
    }
}

impl InputDevice for ControllerDevice {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Controller
    }

    fn classes(&self) -> EventClass {
        EventClass::CONTROLLER
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

    fn active(&self, backend: &dyn RawBackend) -> bool {
        self.handle.is_some() && self.enabled && backend.is_focused()
    }

    fn gather_events(&mut self, backend: &mut dyn RawBackend) {
        if !self.active(backend) {
            return;
        }
        let Some(id) = self.instance_id() else {
            return;
        };

        // Notifications from other controllers are consumed and dropped.
        for event in backend.take_events(self.classes()) {
            match event {
                RawEvent::ControllerButtonDown { which, button } if which == id => {
                    self.push_button(EventKind::KeyDown, button);
                }
                RawEvent::ControllerButtonUp { which, button } if which == id => {
                    self.push_button(EventKind::KeyUp, button);
                }
                RawEvent::ControllerAxis { which, axis, value } if which == id => {
                    let value = apply_deadzone(value as i32, self.deadzone);
                    self.queue
                        .push_back(LogicalEvent::controller_move(axis as i32, value));
                }
                RawEvent::ControllerHat { which, hat, value } if which == id => {
                    self.update_hat(hat, value);
                }
                _ => {}
            }
        }
    }

    fn flush_events(&mut self, backend: &mut dyn RawBackend) {
        self.gather_events(backend);
        self.queue.clear();
        self.hat_states.fill(HAT_CENTERED);
    }

    fn shutdown(&mut self, backend: &mut dyn RawBackend) {
        self.pause(backend);
        if let Some(handle) = self.handle.take() {
            backend.set_controller_polling(false);
            backend.close_controller(&handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::backend::memory::MemoryController;
    use crate::keycode::{HAT_LEFT as DIR_LEFT, HAT_RIGHT as DIR_RIGHT, HAT_UP as DIR_UP};

    fn backend_with_pad(num_hats: usize) -> MemoryBackend {
        let mut backend = MemoryBackend::new().with_controller(MemoryController::new("pad", num_hats));
        backend.init_controllers().unwrap();
        backend
    }

    fn active_controller(backend: &mut MemoryBackend) -> ControllerDevice {
        let mut controller = ControllerDevice::new(0, DEFAULT_DEADZONE, backend);
        controller.resume(backend);
        controller
    }

    fn hat(backend: &mut MemoryBackend, value: u8) {
        backend.inject(RawEvent::ControllerHat {
            which: 0,
            hat: 0,
            value,
        });
    }

    fn axis(backend: &mut MemoryBackend, axis: u8, value: i16) {
        backend.inject(RawEvent::ControllerAxis {
            which: 0,
            axis,
            value,
        });
    }

    fn drain(device: &mut ControllerDevice) -> Vec<LogicalEvent> {
        std::iter::from_fn(|| device.get_event()).collect()
    }

    #[test]
    fn test_apply_deadzone() {
        assert_eq!(apply_deadzone(3000, 6000), 0);
        assert_eq!(apply_deadzone(-5999, 6000), 0);
        assert_eq!(apply_deadzone(6000, 6000), 6000);
        assert_eq!(apply_deadzone(-6000, 6000), -6000);
        assert_eq!(apply_deadzone(9000, 6000), 9000);
        assert_eq!(apply_deadzone(-32768, 6000), -32768);
    }

    #[test]
    fn test_hat_edge_detection() {
        let mut backend = backend_with_pad(1);
        let mut controller = active_controller(&mut backend);

        hat(&mut backend, 0b0011);
        controller.gather_events(&mut backend);
        assert_eq!(
            drain(&mut controller),
            vec![
                LogicalEvent::controller_button(EventKind::KeyDown, keycode::hat_code(0, DIR_UP)),
                LogicalEvent::controller_button(
                    EventKind::KeyDown,
                    keycode::hat_code(0, DIR_RIGHT)
                ),
            ]
        );
        assert_eq!(controller.hat_state(0), Some(0b0011));

        hat(&mut backend, 0b0001);
        controller.gather_events(&mut backend);
        assert_eq!(
            drain(&mut controller),
            vec![LogicalEvent::controller_button(
                EventKind::KeyUp,
                keycode::hat_code(0, DIR_RIGHT)
            )]
        );
        assert_eq!(controller.hat_state(0), Some(0b0001));
    }

    #[test]
    fn test_hat_unchanged_produces_nothing() {
        let mut backend = backend_with_pad(1);
        let mut controller = active_controller(&mut backend);

        hat(&mut backend, HAT_LEFT);
        hat(&mut backend, HAT_LEFT);
        controller.gather_events(&mut backend);
        let events = drain(&mut controller);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].code, keycode::hat_code(0, DIR_LEFT));
    }

    #[test]
    fn test_flush_resets_hats() {
        let mut backend = backend_with_pad(1);
        let mut controller = active_controller(&mut backend);

        hat(&mut backend, HAT_UP);
        controller.gather_events(&mut backend);
        controller.flush_events(&mut backend);
        assert_eq!(controller.hat_state(0), Some(HAT_CENTERED));

        // the held direction is reported as a fresh press, never a stray release
        hat(&mut backend, HAT_UP);
        controller.gather_events(&mut backend);
        let events = drain(&mut controller);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::KeyDown);
    }

    #[test]
    fn test_axis_deadzone_scenario() {
        let mut backend = backend_with_pad(1);
        let mut controller = active_controller(&mut backend);

        axis(&mut backend, 0, 3000);
        axis(&mut backend, 0, 9000);
        controller.gather_events(&mut backend);
        assert_eq!(
            drain(&mut controller),
            vec![
                LogicalEvent::controller_move(0, 0),
                LogicalEvent::controller_move(0, 9000),
            ]
        );
    }

    #[test]
    fn test_custom_deadzone() {
        let mut backend = backend_with_pad(0);
        let mut controller = ControllerDevice::new(0, 1000, &mut backend);
        controller.resume(&mut backend);
        assert_eq!(controller.deadzone(), 1000);

        axis(&mut backend, 2, 3000);
        controller.gather_events(&mut backend);
        assert_eq!(controller.get_event(), Some(LogicalEvent::controller_move(2, 3000)));
    }

    #[test]
    fn test_buttons() {
        let mut backend = backend_with_pad(0);
        let mut controller = active_controller(&mut backend);

        backend.inject(RawEvent::ControllerButtonDown { which: 0, button: 2 });
        backend.inject(RawEvent::ControllerButtonUp { which: 0, button: 2 });
        backend.inject(RawEvent::ControllerButtonDown { which: 0, button: 40 });
        controller.gather_events(&mut backend);

        let code = keycode::controller_button_code(2);
        assert_eq!(
            drain(&mut controller),
            vec![
                LogicalEvent::controller_button(EventKind::KeyDown, code),
                LogicalEvent::controller_button(EventKind::KeyUp, code),
            ]
        );
    }

    #[test]
    fn test_other_controllers_are_ignored() {
        let mut backend = backend_with_pad(1);
        let mut controller = active_controller(&mut backend);

        backend.inject(RawEvent::ControllerButtonDown { which: 7, button: 0 });
        backend.inject(RawEvent::ControllerHat {
            which: 7,
            hat: 0,
            value: HAT_UP,
        });
        controller.gather_events(&mut backend);
        assert!(!controller.has_event());
        assert_eq!(controller.hat_state(0), Some(HAT_CENTERED));
    }

    #[test]
    fn test_out_of_range_hat_is_ignored() {
        let mut backend = backend_with_pad(1);
        let mut controller = active_controller(&mut backend);

        backend.inject(RawEvent::ControllerHat {
            which: 0,
            hat: 3,
            value: HAT_UP,
        });
        controller.gather_events(&mut backend);
        assert!(!controller.has_event());
        assert_eq!(controller.hat_state(3), None);
    }

    #[test]
    fn test_unopenable_controller_is_inactive() {
        let mut backend =
            MemoryBackend::new().with_controller(MemoryController::unopenable("ghost"));
        backend.init_controllers().unwrap();
        let mut controller = ControllerDevice::new(0, DEFAULT_DEADZONE, &mut backend);
        controller.resume(&mut backend);

        assert!(!controller.is_open());
        assert!(!controller.active(&backend));
        axis(&mut backend, 0, 20000);
        controller.gather_events(&mut backend);
        assert!(!controller.has_event());
    }

    #[test]
    fn test_pause_resume_round_trip() {
        let mut backend = backend_with_pad(1);
        let mut controller = active_controller(&mut backend);
        axis(&mut backend, 0, 12000);
        controller.gather_events(&mut backend);
        axis(&mut backend, 1, 12000);

        controller.pause(&mut backend);
        controller.resume(&mut backend);
        assert!(controller.active(&backend));
        assert!(!controller.has_event());
    }

    #[test]
    fn test_shutdown_closes_handle() {
        let mut backend = backend_with_pad(1);
        let mut controller = active_controller(&mut backend);
        assert!(backend.controller_polling());
        assert_eq!(backend.open_controller_count(), 1);

        controller.shutdown(&mut backend);
        assert!(!backend.controller_polling());
        assert_eq!(backend.open_controller_count(), 0);
        assert!(!controller.active(&backend));
    }
}
