//! In-process backend.
//!
//! `MemoryBackend` keeps its notification queue and window state in plain
//! fields. It behaves like a real windowing backend where it matters to the
//! input layer: disabled classes are not queued, toggling a class discards
//! what is queued for it, and warping the pointer produces a motion
//! notification. Tests and the demos drive the input layer through it.

use super::{
    ControllerHandle, EventClass, GrabMode, PointerButton, RawBackend, RawEvent, Sym, TextMode,
};
use crate::error::{Error, Result};
use crate::state::ModMask;
use std::collections::VecDeque;

/// A controller known to a [`MemoryBackend`].
#[derive(Debug, Clone)]
pub struct MemoryController {
    /// Driver name.
    pub name: String,
    /// Number of hats.
    pub num_hats: usize,
    /// If false, opening the controller fails.
    pub openable: bool,
}

impl MemoryController {
    /// A controller with `num_hats` hats that opens normally.
    pub fn new(name: impl Into<String>, num_hats: usize) -> Self {
        Self {
            name: name.into(),
            num_hats,
            openable: true,
        }
    }

    /// A controller that shows up in enumeration but cannot be opened.
    pub fn unopenable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_hats: 0,
            openable: false,
        }
    }
}

/// A backend whose queue and window state live in memory.
#[derive(Debug)]
pub struct MemoryBackend {
    queue: VecDeque<RawEvent>,
    disabled: EventClass,
    focused: bool,
    fullscreen: bool,
    video_size: (u32, u32),
    pointer: (i32, i32),
    cursor_visible: bool,
    grab_mode: GrabMode,
    window_capture: bool,
    relative_pointer: bool,
    text_mode: TextMode,
    text_input: bool,
    raw_pointer_available: bool,
    raw_pointer_registered: bool,
    controllers: Vec<MemoryController>,
    controllers_ready: bool,
    controller_init_error: Option<String>,
    open_controllers: Vec<u32>,
    controller_polling: bool,
    warp_count: usize,
}

impl MemoryBackend {
    /// A focused 640x480 window with an empty queue and no controllers.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            disabled: EventClass::empty(),
            focused: true,
            fullscreen: false,
            video_size: (640, 480),
            pointer: (0, 0),
            cursor_visible: true,
            grab_mode: GrabMode::RelativePointer,
            window_capture: false,
            relative_pointer: false,
            text_mode: TextMode::Translated,
            text_input: false,
            raw_pointer_available: false,
            raw_pointer_registered: false,
            controllers: Vec::new(),
            controllers_ready: false,
            controller_init_error: None,
            open_controllers: Vec::new(),
            controller_polling: false,
            warp_count: 0,
        }
    }

    /// Set the window size.
    pub fn with_video_size(mut self, width: u32, height: u32) -> Self {
        self.video_size = (width, height);
        self
    }

    /// Set the grab mechanism.
    pub fn with_grab_mode(mut self, mode: GrabMode) -> Self {
        self.grab_mode = mode;
        self
    }

    /// Set the text delivery mode.
    pub fn with_text_mode(mut self, mode: TextMode) -> Self {
        self.text_mode = mode;
        self
    }

    /// Attach a controller.
    pub fn with_controller(mut self, controller: MemoryController) -> Self {
        self.controllers.push(controller);
        self
    }

    /// Offer raw pointer capture.
    pub fn with_raw_pointer(mut self) -> Self {
        self.raw_pointer_available = true;
        self
    }

    /// Make controller initialisation fail with `reason`.
    pub fn with_controller_init_error(mut self, reason: impl Into<String>) -> Self {
        self.controller_init_error = Some(reason.into());
        self
    }

    /// Set window focus without queueing a notification.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Set focus and queue the matching window notification.
    pub fn change_focus(&mut self, focused: bool) {
        self.focused = focused;
        self.inject(RawEvent::WindowFocus { gained: focused });
    }

    /// Set the fullscreen flag.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    /// Queue a notification as if it came from the platform. Notifications of
    /// disabled classes are dropped, and motion updates the pointer position.
    pub fn inject(&mut self, event: RawEvent) {
        if let RawEvent::PointerMotion { x, y, .. } = event {
            self.pointer = (x, y);
        }
        if self.disabled.intersects(event.class()) {
            return;
        }
        self.queue.push_back(event);
    }

    /// Queue a relative pointer movement from the current position.
    pub fn inject_motion(&mut self, xrel: i32, yrel: i32) {
        let (x, y) = self.pointer;
        self.inject(RawEvent::PointerMotion {
            x: x + xrel,
            y: y + yrel,
            xrel,
            yrel,
        });
    }

    /// Queue a key down.
    pub fn inject_key_down(&mut self, sym: Sym, mods: ModMask) {
        self.inject(RawEvent::KeyDown {
            sym,
            mods,
            repeat: false,
        });
    }

    /// Queue a key up.
    pub fn inject_key_up(&mut self, sym: Sym, mods: ModMask) {
        self.inject(RawEvent::KeyUp { sym, mods });
    }

    /// Queue a pointer button press.
    pub fn inject_button_down(&mut self, button: PointerButton) {
        self.inject(RawEvent::PointerButtonDown { button });
    }

    /// Number of notifications currently queued.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Queued notifications, oldest first.
    pub fn queue(&self) -> impl Iterator<Item = &RawEvent> {
        self.queue.iter()
    }

    /// Check if delivery of `class` is enabled.
    pub fn is_class_enabled(&self, class: EventClass) -> bool {
        !self.disabled.intersects(class)
    }

    /// Check if the cursor is visible.
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Check if window capture is engaged.
    pub fn window_capture(&self) -> bool {
        self.window_capture
    }

    /// Check if relative pointer mode is engaged.
    pub fn relative_pointer(&self) -> bool {
        self.relative_pointer
    }

    /// Check if text input is enabled.
    pub fn text_input(&self) -> bool {
        self.text_input
    }

    /// Check if a raw pointer driver is registered.
    pub fn raw_pointer_registered(&self) -> bool {
        self.raw_pointer_registered
    }

    /// Check if controller support is up.
    pub fn controllers_ready(&self) -> bool {
        self.controllers_ready
    }

    /// Number of open controller handles.
    pub fn open_controller_count(&self) -> usize {
        self.open_controllers.len()
    }

    /// Check if controller polling is enabled.
    pub fn controller_polling(&self) -> bool {
        self.controller_polling
    }

    /// Number of pointer warps performed.
    pub fn warp_count(&self) -> usize {
        self.warp_count
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RawBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    fn take_events(&mut self, classes: EventClass) -> Vec<RawEvent> {
        let (taken, kept): (VecDeque<_>, VecDeque<_>) = self
            .queue
            .drain(..)
            .partition(|event| classes.intersects(event.class()));
        self.queue = kept;
        taken.into()
    }

    fn push_event(&mut self, event: RawEvent) {
        if !self.disabled.intersects(event.class()) {
            self.queue.push_back(event);
        }
    }

    fn set_event_class_enabled(&mut self, classes: EventClass, enabled: bool) {
        self.queue.retain(|event| !classes.intersects(event.class()));
        if enabled {
            self.disabled = self.disabled.difference(classes);
        } else {
            self.disabled |= classes;
        }
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn video_size(&self) -> (u32, u32) {
        self.video_size
    }

    fn pointer_position(&self) -> (i32, i32) {
        self.pointer
    }

    fn warp_pointer(&mut self, x: i32, y: i32) {
        let (px, py) = self.pointer;
        self.warp_count += 1;
        self.inject(RawEvent::PointerMotion {
            x,
            y,
            xrel: x - px,
            yrel: y - py,
        });
        self.pointer = (x, y);
    }

    fn show_cursor(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn grab_mode(&self) -> GrabMode {
        self.grab_mode
    }

    fn set_window_capture(&mut self, on: bool) {
        self.window_capture = on;
    }

    fn set_relative_pointer(&mut self, on: bool) {
        self.relative_pointer = on;
    }

    fn text_mode(&self) -> TextMode {
        self.text_mode
    }

    fn set_text_input(&mut self, enabled: bool) {
        self.text_input = enabled;
    }

    fn register_raw_pointer(&mut self) -> bool {
        self.raw_pointer_registered = self.raw_pointer_available;
        self.raw_pointer_registered
    }

    fn unregister_raw_pointer(&mut self) {
        self.raw_pointer_registered = false;
    }

    fn init_controllers(&mut self) -> Result<()> {
        if let Some(reason) = &self.controller_init_error {
            return Err(Error::BackendInit(reason.clone()));
        }
        self.controllers_ready = true;
        Ok(())
    }

    fn shutdown_controllers(&mut self) {
        self.open_controllers.clear();
        self.controllers_ready = false;
    }

    fn controller_count(&self) -> usize {
        if self.controllers_ready {
            self.controllers.len()
        } else {
            0
        }
    }

    fn controller_name(&self, index: usize) -> Option<String> {
        self.controllers.get(index).map(|c| c.name.clone())
    }

    fn open_controller(&mut self, index: usize) -> Option<ControllerHandle> {
        if !self.controllers_ready {
            return None;
        }
        let controller = self.controllers.get(index).filter(|c| c.openable)?;
        let handle = ControllerHandle {
            index,
            instance_id: index as u32,
            num_hats: controller.num_hats,
            name: controller.name.clone(),
        };
        self.open_controllers.push(handle.instance_id);
        Some(handle)
    }

    fn close_controller(&mut self, handle: &ControllerHandle) {
        self.open_controllers.retain(|id| *id != handle.instance_id);
    }

    fn set_controller_polling(&mut self, enabled: bool) {
        self.controller_polling = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_events_keeps_other_classes_in_order() {
        let mut backend = MemoryBackend::new();
        backend.inject_key_down(b'a' as Sym, ModMask::NONE);
        backend.inject_motion(1, 1);
        backend.inject_key_up(b'a' as Sym, ModMask::NONE);
        backend.inject_motion(2, 2);

        let keys = backend.take_events(EventClass::KEYBOARD);
        assert_eq!(keys.len(), 2);
        assert!(matches!(keys[0], RawEvent::KeyDown { .. }));
        assert!(matches!(keys[1], RawEvent::KeyUp { .. }));

        let motion = backend.take_events(EventClass::POINTER);
        assert_eq!(motion.len(), 2);
        assert_eq!(backend.queued(), 0);
    }

    #[test]
    fn test_disabled_classes_are_not_queued() {
        let mut backend = MemoryBackend::new();
        backend.set_event_class_enabled(EventClass::POINTER, false);
        backend.inject_motion(3, 4);
        assert_eq!(backend.queued(), 0);
        assert_eq!(backend.pointer_position(), (3, 4));

        backend.set_event_class_enabled(EventClass::POINTER, true);
        backend.inject_motion(1, 0);
        assert_eq!(backend.queued(), 1);
    }

    #[test]
    fn test_toggling_a_class_discards_queued_events() {
        let mut backend = MemoryBackend::new();
        backend.inject_motion(1, 1);
        backend.inject_key_down(b'x' as Sym, ModMask::NONE);
        backend.set_event_class_enabled(EventClass::POINTER, true);
        assert_eq!(backend.queued(), 1);
        assert!(matches!(
            backend.queue().next(),
            Some(RawEvent::KeyDown { .. })
        ));
    }

    #[test]
    fn test_warp_produces_motion() {
        let mut backend = MemoryBackend::new();
        backend.inject_motion(10, 20);
        backend.take_events(EventClass::ALL);

        backend.warp_pointer(320, 240);
        let events = backend.take_events(EventClass::POINTER_MOTION);
        assert_eq!(
            events,
            vec![RawEvent::PointerMotion {
                x: 320,
                y: 240,
                xrel: 310,
                yrel: 220,
            }]
        );
        assert_eq!(backend.warp_count(), 1);
    }

    #[test]
    fn test_controllers_require_init() {
        let mut backend = MemoryBackend::new()
            .with_controller(MemoryController::new("pad", 1))
            .with_controller(MemoryController::unopenable("broken"));
        assert_eq!(backend.controller_count(), 0);
        assert!(backend.open_controller(0).is_none());

        backend.init_controllers().unwrap();
        assert_eq!(backend.controller_count(), 2);
        let handle = backend.open_controller(0).unwrap();
        assert_eq!(handle.num_hats, 1);
        assert!(backend.open_controller(1).is_none());
        assert_eq!(backend.open_controller_count(), 1);

        backend.close_controller(&handle);
        assert_eq!(backend.open_controller_count(), 0);
    }

    #[test]
    fn test_controller_init_error() {
        let mut backend = MemoryBackend::new().with_controller_init_error("no joystick driver");
        assert!(matches!(
            backend.init_controllers(),
            Err(Error::BackendInit(_))
        ));
    }
}
