//! The input subsystem.
//!
//! [`InputSubsystem`] owns the backend and at most one device of each kind.
//! Once per tick the application calls [`InputSubsystem::start_tic`], which
//! re-evaluates pointer capture, gathers every device and handles window
//! notifications, then drains the translated events with
//! [`InputSubsystem::next_event`] or [`InputSubsystem::drain_events`].
//!
//! # Example
//!
//! ```
//! use frameinput::backend::sym;
//! use frameinput::{AppState, InputConfig, InputSubsystem, MemoryBackend, ModMask};
//!
//! let mut input = InputSubsystem::new(MemoryBackend::new(), InputConfig::default()).unwrap();
//! input.init_from_config();
//!
//! input.backend_mut().inject_key_down(sym::from_char('w'), ModMask::NONE);
//!
//! let mut commands: Vec<String> = Vec::new();
//! input.start_tic(&AppState::playing(), &mut commands);
//! while let Some(event) = input.next_event() {
//!     println!("{:?}", event);
//! }
//! ```

use crate::backend::{EventClass, GrabMode, RawBackend, RawEvent};
use crate::config::InputConfig;
use crate::device::pointer::create_pointer;
use crate::device::{ControllerDevice, DeviceInfo, DeviceKind, InputDevice, KeyboardDevice};
use crate::error::Result;
use crate::event::LogicalEvent;
use crate::focus::{AppState, should_grab};
use crate::sink::{CommandSink, EventSink};

/// Device slots, in drain order.
const DRAIN_ORDER: [DeviceKind; 3] = [
    DeviceKind::Keyboard,
    DeviceKind::Pointer,
    DeviceKind::Controller,
];

fn slot(kind: DeviceKind) -> usize {
    match kind {
        DeviceKind::Keyboard => 0,
        DeviceKind::Pointer => 1,
        DeviceKind::Controller => 2,
    }
}

/// Owns the backend and the active devices, and arbitrates input grab.
pub struct InputSubsystem<B: RawBackend> {
    backend: B,
    config: InputConfig,
    devices: [Option<Box<dyn InputDevice>>; 3],
    input_grabbed: bool,
    window_focused: bool,
}

impl<B: RawBackend> InputSubsystem<B> {
    /// Take ownership of `backend`, bring up controller support, silence
    /// every device class until a device is initialised, hide the cursor
    /// and grab input.
    pub fn new(mut backend: B, config: InputConfig) -> Result<Self> {
        log::info!("{}: initializing controller support", backend.name());
        backend.init_controllers()?;

        backend.set_event_class_enabled(
            EventClass::KEYBOARD | EventClass::POINTER | EventClass::CONTROLLER,
            false,
        );
        backend.show_cursor(false);

        let window_focused = backend.is_focused();
        let mut subsystem = Self {
            backend,
            config,
            devices: [None, None, None],
            input_grabbed: false,
            window_focused,
        };
        subsystem.grab_input();
        Ok(subsystem)
    }

    /// Open the devices the configuration asks for.
    pub fn init_from_config(&mut self) {
        self.init_keyboard(self.config.keyboard_id);
        if !self.config.disable_pointer {
            self.init_pointer(self.config.pointer_id);
        }
        if self.config.use_controller && self.backend.controller_count() > 0 {
            self.init_controller(self.config.controller_id);
        }
    }

    /// The backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The backend, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The configuration the subsystem was created with.
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Check if input is currently grabbed.
    pub fn is_grabbed(&self) -> bool {
        self.input_grabbed
    }

    /// Focus state as of the last arbitration.
    pub fn window_focused(&self) -> bool {
        self.window_focused
    }

    /// The device of `kind`, if one is initialised.
    pub fn device(&self, kind: DeviceKind) -> Option<&dyn InputDevice> {
        self.devices[slot(kind)].as_deref()
    }

    fn device_name(&self, kind: DeviceKind, id: usize) -> String {
        let devices = match kind {
            DeviceKind::Keyboard => self.keyboard_devices(),
            DeviceKind::Pointer => self.pointer_devices(),
            DeviceKind::Controller => self.controller_devices(),
        };
        devices
            .into_iter()
            .find(|info| info.id == id)
            .map(|info| info.name)
            .unwrap_or_else(|| format!("{} {}", kind, id))
    }

    fn install(&mut self, kind: DeviceKind, id: usize, mut device: Box<dyn InputDevice>) {
        log::info!("initializing {}", self.device_name(kind, id));
        // The pointer only runs while input is grabbed.
        if kind == DeviceKind::Pointer && !self.input_grabbed {
            device.pause(&mut self.backend);
        } else {
            device.resume(&mut self.backend);
        }
        self.devices[slot(kind)] = Some(device);
    }

    fn shutdown_device(&mut self, kind: DeviceKind) {
        if let Some(mut device) = self.devices[slot(kind)].take() {
            device.shutdown(&mut self.backend);
            log::info!("{} shut down", kind);
        }
    }

    fn pause_device(&mut self, kind: DeviceKind) {
        if let Some(device) = self.devices[slot(kind)].as_mut() {
            device.pause(&mut self.backend);
        }
    }

    fn resume_device(&mut self, kind: DeviceKind) {
        if let Some(device) = self.devices[slot(kind)].as_mut() {
            device.resume(&mut self.backend);
        }
    }

    fn device_active(&self, kind: DeviceKind) -> bool {
        self.devices[slot(kind)]
            .as_ref()
            .is_some_and(|device| device.active(&self.backend))
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    /// Keyboards available for selection. Backends expose one logical keyboard.
    pub fn keyboard_devices(&self) -> Vec<DeviceInfo> {
        vec![DeviceInfo::new(0, format!("{} keyboard", self.backend.name()))]
    }

    /// Replace the keyboard with keyboard `id`.
    pub fn init_keyboard(&mut self, id: usize) {
        self.shutdown_keyboard();
        let device = Box::new(KeyboardDevice::new(&self.backend));
        self.install(DeviceKind::Keyboard, id, device);
    }

    /// Shut the keyboard down.
    pub fn shutdown_keyboard(&mut self) {
        self.shutdown_device(DeviceKind::Keyboard);
    }

    /// Pause the keyboard.
    pub fn pause_keyboard(&mut self) {
        self.pause_device(DeviceKind::Keyboard);
    }

    /// Resume the keyboard.
    pub fn resume_keyboard(&mut self) {
        self.resume_device(DeviceKind::Keyboard);
    }

    /// Check if a keyboard is initialised and active.
    pub fn keyboard_active(&self) -> bool {
        self.device_active(DeviceKind::Keyboard)
    }

    /// Start or stop composed text delivery, for text entry fields.
    pub fn set_text_entry(&mut self, enabled: bool) {
        self.backend.set_text_input(enabled);
    }

    // ========================================================================
    // Pointer
    // ========================================================================

    /// Pointers available for selection. Backends expose one logical pointer.
    pub fn pointer_devices(&self) -> Vec<DeviceInfo> {
        vec![DeviceInfo::new(0, format!("{} mouse", self.backend.name()))]
    }

    /// Replace the pointer with pointer `id`, using the configured driver.
    /// The new pointer stays paused while input is released.
    pub fn init_pointer(&mut self, id: usize) {
        self.shutdown_pointer();
        let device = create_pointer(
            self.config.pointer_driver,
            self.config.motion_mode,
            &mut self.backend,
        );
        self.install(DeviceKind::Pointer, id, device);
    }

    /// Shut the pointer down.
    pub fn shutdown_pointer(&mut self) {
        self.shutdown_device(DeviceKind::Pointer);
    }

    /// Pause the pointer. The cursor becomes visible.
    pub fn pause_pointer(&mut self) {
        self.pause_device(DeviceKind::Pointer);
    }

    /// Resume the pointer. The cursor is hidden.
    pub fn resume_pointer(&mut self) {
        self.resume_device(DeviceKind::Pointer);
    }

    /// Check if a pointer is initialised and active.
    pub fn pointer_active(&self) -> bool {
        self.device_active(DeviceKind::Pointer)
    }

    // ========================================================================
    // Controller
    // ========================================================================

    /// Attached controllers. Listing does not open anything.
    pub fn controller_devices(&self) -> Vec<DeviceInfo> {
        (0..self.backend.controller_count())
            .map(|index| {
                let name = self.backend.controller_name(index).unwrap_or_default();
                DeviceInfo::new(index, format!("{} joystick ({})", self.backend.name(), name))
            })
            .collect()
    }

    /// Replace the controller with controller `id`. An id past the attached
    /// controllers falls back to 0. A controller that cannot be opened is
    /// still installed but stays inactive.
    pub fn init_controller(&mut self, id: usize) {
        self.shutdown_controller();
        let id = if id < self.backend.controller_count() {
            id
        } else {
            log::warn!("controller {} not attached, using controller 0", id);
            0
        };
        let device = Box::new(ControllerDevice::new(
            id,
            self.config.controller_deadzone,
            &mut self.backend,
        ));
        self.install(DeviceKind::Controller, id, device);
    }

    /// Shut the controller down.
    pub fn shutdown_controller(&mut self) {
        self.shutdown_device(DeviceKind::Controller);
    }

    /// Pause the controller.
    pub fn pause_controller(&mut self) {
        self.pause_device(DeviceKind::Controller);
    }

    /// Resume the controller.
    pub fn resume_controller(&mut self) {
        self.resume_device(DeviceKind::Controller);
    }

    /// Check if a controller is initialised and active.
    pub fn controller_active(&self) -> bool {
        self.device_active(DeviceKind::Controller)
    }

    // ========================================================================
    // Grab
    // ========================================================================

    /// Engage pointer capture.
    pub fn grab_input(&mut self) {
        match self.backend.grab_mode() {
            GrabMode::WindowCapture => self.backend.set_window_capture(true),
            GrabMode::RelativePointer => self.backend.set_relative_pointer(true),
        }
        self.input_grabbed = true;
        log::debug!("input grabbed");
    }

    /// Release pointer capture.
    pub fn release_input(&mut self) {
        match self.backend.grab_mode() {
            GrabMode::WindowCapture => self.backend.set_window_capture(false),
            GrabMode::RelativePointer => self.backend.set_relative_pointer(false),
        }
        self.input_grabbed = false;
        log::debug!("input released");
    }

    /// Discard everything every device has pending.
    pub fn flush_input(&mut self) {
        for device in self.devices.iter_mut().flatten() {
            device.flush_events(&mut self.backend);
        }
        log::debug!("input flushed");
    }

    /// Re-evaluate focus and pointer capture.
    ///
    /// Regaining focus flushes every device. Capture is only touched when the
    /// desired state differs from the current one.
    pub fn update_focus(&mut self, app: &AppState) {
        let focused = self.backend.is_focused();
        if focused && !self.window_focused {
            self.flush_input();
        }
        self.window_focused = focused;

        let can_grab = should_grab(
            focused,
            self.backend.is_fullscreen(),
            self.config.disable_pointer,
            app,
        );

        if can_grab && !self.input_grabbed {
            self.grab_input();
            self.flush_input();
            self.resume_pointer();
        } else if self.input_grabbed && !can_grab {
            self.release_input();
            self.pause_pointer();
        }
    }

    // ========================================================================
    // Per-tick polling
    // ========================================================================

    /// Gather every device.
    pub fn gather_events(&mut self) {
        for device in self.devices.iter_mut().flatten() {
            device.gather_events(&mut self.backend);
        }
    }

    fn process_window_events(&mut self, app: &AppState, commands: &mut dyn CommandSink) {
        for event in self.backend.take_events(EventClass::APPLICATION) {
            match event {
                RawEvent::Quit => commands.command("quit"),
                RawEvent::WindowResize { width, height } => {
                    if !self.backend.is_fullscreen() {
                        commands.command(&format!("vid_setmode {} {}", width, height));
                    }
                }
                RawEvent::WindowFocus { .. } => self.update_focus(app),
                _ => {}
            }
        }
    }

    /// Run one tick: arbitrate capture, gather every device, then turn
    /// window notifications into commands.
    pub fn start_tic(&mut self, app: &AppState, commands: &mut dyn CommandSink) {
        self.update_focus(app);
        self.gather_events();
        self.process_window_events(app, commands);
    }

    /// Pop the next translated event. The keyboard queue is drained first,
    /// then the pointer, then the controller.
    pub fn next_event(&mut self) -> Option<LogicalEvent> {
        self.devices
            .iter_mut()
            .flatten()
            .find_map(|device| device.get_event())
    }

    /// Post every pending event to `sink`. Returns how many were posted.
    pub fn drain_events(&mut self, sink: &mut dyn EventSink) -> usize {
        let mut count = 0;
        while let Some(event) = self.next_event() {
            sink.post(event);
            count += 1;
        }
        count
    }
}

impl<B: RawBackend> Drop for InputSubsystem<B> {
    fn drop(&mut self) {
        for kind in DRAIN_ORDER {
            self.shutdown_device(kind);
        }
        if self.input_grabbed {
            self.release_input();
        }
        self.backend.show_cursor(true);
        self.backend.shutdown_controllers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::MemoryController;
    use crate::backend::{HAT_UP, MemoryBackend, PointerButton, sym};
    use crate::config::PointerDriver;
    use crate::event::EventKind;
    use crate::focus::GameState;
    use crate::keycode;
    use crate::state::{MASK_LALT, ModMask};

    fn subsystem(backend: MemoryBackend, config: InputConfig) -> InputSubsystem<MemoryBackend> {
        let mut input = InputSubsystem::new(backend, config).unwrap();
        input.init_from_config();
        input
    }

    fn tick(input: &mut InputSubsystem<MemoryBackend>, app: &AppState) -> Vec<String> {
        let mut commands = Vec::new();
        input.start_tic(app, &mut commands);
        commands
    }

    fn drain(input: &mut InputSubsystem<MemoryBackend>) -> Vec<LogicalEvent> {
        let mut events = Vec::new();
        input.drain_events(&mut events);
        events
    }

    fn menu() -> AppState {
        AppState {
            menu_active: true,
            ..AppState::playing()
        }
    }

    #[test]
    fn test_new_silences_devices_and_grabs() {
        let input = InputSubsystem::new(MemoryBackend::new(), InputConfig::default()).unwrap();
        let backend = input.backend();
        assert!(!backend.is_class_enabled(EventClass::KEYBOARD));
        assert!(!backend.is_class_enabled(EventClass::POINTER));
        assert!(!backend.is_class_enabled(EventClass::CONTROLLER));
        assert!(backend.is_class_enabled(EventClass::APPLICATION));
        assert!(!backend.cursor_visible());
        assert!(backend.relative_pointer());
        assert!(backend.controllers_ready());
        assert!(input.is_grabbed());
    }

    #[test]
    fn test_new_reports_backend_failure() {
        let backend = MemoryBackend::new().with_controller_init_error("no driver");
        assert!(InputSubsystem::new(backend, InputConfig::default()).is_err());
    }

    #[test]
    fn test_init_from_config() {
        let backend = MemoryBackend::new().with_controller(MemoryController::new("pad", 1));
        let input = subsystem(backend, InputConfig::new().with_controller(0));
        assert!(input.keyboard_active());
        assert!(input.pointer_active());
        assert!(input.controller_active());
    }

    #[test]
    fn test_init_from_config_without_pointer_or_controllers() {
        let input = subsystem(
            MemoryBackend::new(),
            InputConfig::new().with_controller(0).without_pointer(),
        );
        assert!(input.keyboard_active());
        assert!(input.device(DeviceKind::Pointer).is_none());
        assert!(input.device(DeviceKind::Controller).is_none());
    }

    #[test]
    fn test_device_enumeration() {
        let backend = MemoryBackend::new()
            .with_controller(MemoryController::new("pad", 1))
            .with_controller(MemoryController::new("stick", 0));
        let input = InputSubsystem::new(backend, InputConfig::default()).unwrap();

        assert_eq!(
            input.keyboard_devices(),
            vec![DeviceInfo::new(0, "memory keyboard")]
        );
        assert_eq!(input.pointer_devices(), vec![DeviceInfo::new(0, "memory mouse")]);
        assert_eq!(
            input.controller_devices(),
            vec![
                DeviceInfo::new(0, "memory joystick (pad)"),
                DeviceInfo::new(1, "memory joystick (stick)"),
            ]
        );
        assert_eq!(input.backend().open_controller_count(), 0);
    }

    #[test]
    fn test_reinit_replaces_device() {
        let backend = MemoryBackend::new()
            .with_controller(MemoryController::new("pad", 1))
            .with_controller(MemoryController::new("stick", 0));
        let mut input = subsystem(backend, InputConfig::new().with_controller(0));
        assert_eq!(input.backend().open_controller_count(), 1);

        input.init_controller(1);
        assert_eq!(input.backend().open_controller_count(), 1);
        assert!(input.controller_active());

        input.shutdown_controller();
        assert_eq!(input.backend().open_controller_count(), 0);
        assert!(!input.controller_active());
    }

    #[test]
    fn test_out_of_range_controller_falls_back_to_first() {
        let backend = MemoryBackend::new().with_controller(MemoryController::new("pad", 1));
        let mut input = subsystem(backend, InputConfig::default());
        input.init_controller(5);
        assert!(input.controller_active());

        input.backend_mut().inject(RawEvent::ControllerButtonDown { which: 0, button: 0 });
        tick(&mut input, &AppState::playing());
        assert_eq!(
            input.next_event().map(|e| e.code),
            Some(keycode::controller_button_code(0))
        );
    }

    #[test]
    fn test_tick_drains_keyboard_then_pointer_then_controller() {
        let backend = MemoryBackend::new().with_controller(MemoryController::new("pad", 1));
        let mut input = subsystem(backend, InputConfig::new().with_controller(0));
        tick(&mut input, &AppState::playing());

        let backend = input.backend_mut();
        backend.inject(RawEvent::ControllerHat {
            which: 0,
            hat: 0,
            value: HAT_UP,
        });
        backend.inject_motion(4, 0);
        backend.inject_key_down(sym::from_char('e'), ModMask::NONE);
        tick(&mut input, &AppState::playing());

        let kinds: Vec<_> = drain(&mut input).iter().map(|e| (e.kind, e.code)).collect();
        assert_eq!(
            kinds,
            vec![
                (EventKind::KeyDown, b'e' as i32),
                (EventKind::PointerMove, 0),
                (EventKind::KeyDown, keycode::hat_code(0, keycode::HAT_UP)),
            ]
        );
    }

    #[test]
    fn test_menu_releases_and_gameplay_regrabs() {
        let mut input = subsystem(MemoryBackend::new(), InputConfig::default());
        tick(&mut input, &AppState::playing());
        assert!(input.is_grabbed());
        assert!(input.pointer_active());

        tick(&mut input, &menu());
        assert!(!input.is_grabbed());
        assert!(!input.backend().relative_pointer());
        assert!(!input.pointer_active());
        assert!(input.backend().cursor_visible());

        // pointer input while the menu is up never reaches the game
        input.backend_mut().inject_motion(30, 30);
        tick(&mut input, &menu());
        assert!(drain(&mut input).is_empty());

        tick(&mut input, &AppState::playing());
        assert!(input.is_grabbed());
        assert!(input.pointer_active());
        assert!(!input.backend().cursor_visible());
    }

    #[test]
    fn test_reinit_pointer_while_released_stays_paused() {
        let mut input = subsystem(MemoryBackend::new(), InputConfig::default());
        tick(&mut input, &menu());
        assert!(!input.is_grabbed());

        input.init_pointer(0);
        let warps = input.backend().warp_count();
        input.backend_mut().inject_motion(30, 30);
        tick(&mut input, &menu());

        assert!(!input.pointer_active());
        assert!(input.backend().cursor_visible());
        assert_eq!(input.backend().warp_count(), warps);
        assert!(drain(&mut input).is_empty());

        // the next engage picks the new pointer up
        tick(&mut input, &AppState::playing());
        assert!(input.is_grabbed());
        assert!(input.pointer_active());
        assert!(!input.backend().cursor_visible());
    }

    #[test]
    fn test_engaging_grab_discards_input_queued_while_released() {
        let backend = MemoryBackend::new().with_controller(MemoryController::new("pad", 1));
        let mut input = subsystem(backend, InputConfig::new().with_controller(0));
        tick(&mut input, &menu());
        assert!(!input.is_grabbed());
        assert!(drain(&mut input).is_empty());

        let backend = input.backend_mut();
        backend.inject_key_down(sym::from_char('w'), ModMask::NONE);
        backend.inject(RawEvent::ControllerButtonDown { which: 0, button: 3 });
        tick(&mut input, &AppState::playing());

        assert!(input.is_grabbed());
        assert!(drain(&mut input).is_empty());

        // input after the engage is delivered
        input
            .backend_mut()
            .inject_key_down(sym::from_char('w'), ModMask::NONE);
        tick(&mut input, &AppState::playing());
        assert_eq!(input.next_event().map(|e| e.code), Some(b'w' as i32));
    }

    #[test]
    fn test_grab_uses_window_capture_when_backend_asks() {
        let backend = MemoryBackend::new().with_grab_mode(GrabMode::WindowCapture);
        let mut input = subsystem(backend, InputConfig::default());
        assert!(input.backend().window_capture());
        assert!(!input.backend().relative_pointer());

        tick(&mut input, &menu());
        assert!(!input.backend().window_capture());
    }

    #[test]
    fn test_focus_loss_releases_and_regain_flushes() {
        let mut input = subsystem(MemoryBackend::new(), InputConfig::default());
        tick(&mut input, &AppState::playing());

        input.backend_mut().set_focused(false);
        tick(&mut input, &AppState::playing());
        assert!(!input.is_grabbed());
        assert!(!input.keyboard_active());

        // typed while another window had focus
        input
            .backend_mut()
            .inject_key_down(sym::from_char('x'), ModMask::NONE);
        input.backend_mut().set_focused(true);
        tick(&mut input, &AppState::playing());
        assert!(input.is_grabbed());
        assert!(drain(&mut input).is_empty());
    }

    #[test]
    fn test_fullscreen_grabs_even_in_menu() {
        let mut backend = MemoryBackend::new();
        backend.set_fullscreen(true);
        let mut input = subsystem(backend, InputConfig::default());
        tick(&mut input, &menu());
        assert!(input.is_grabbed());
    }

    #[test]
    fn test_demo_screen_does_not_grab() {
        let mut input = subsystem(MemoryBackend::new(), InputConfig::default());
        let title = AppState {
            game_state: GameState::DemoScreen,
            ..AppState::default()
        };
        tick(&mut input, &title);
        assert!(!input.is_grabbed());
    }

    #[test]
    fn test_close_combination_becomes_quit_command() {
        let mut input = subsystem(MemoryBackend::new(), InputConfig::default());
        input
            .backend_mut()
            .inject_key_down(sym::F4, ModMask::new(MASK_LALT));
        let commands = tick(&mut input, &AppState::playing());
        assert_eq!(commands, vec!["quit".to_string()]);
        assert!(drain(&mut input).is_empty());
    }

    #[test]
    fn test_resize_command_only_when_windowed() {
        let mut input = subsystem(MemoryBackend::new(), InputConfig::default());
        input.backend_mut().inject(RawEvent::WindowResize {
            width: 1024,
            height: 768,
        });
        let commands = tick(&mut input, &AppState::playing());
        assert_eq!(commands, vec!["vid_setmode 1024 768".to_string()]);

        input.backend_mut().set_fullscreen(true);
        input.backend_mut().inject(RawEvent::WindowResize {
            width: 800,
            height: 600,
        });
        assert!(tick(&mut input, &AppState::playing()).is_empty());
    }

    #[test]
    fn test_focus_notification_rearbitrates_same_tick() {
        let mut input = subsystem(MemoryBackend::new(), InputConfig::default());
        tick(&mut input, &AppState::playing());
        assert!(input.is_grabbed());

        input.backend_mut().change_focus(false);
        // no arbitration has run yet, the notification triggers it
        input.process_window_events(&AppState::playing(), &mut Vec::<String>::new());
        assert!(!input.is_grabbed());
    }

    #[test]
    fn test_raw_pointer_driver_and_fallback() {
        let config = InputConfig::new().with_pointer_driver(PointerDriver::Raw);
        let input = subsystem(MemoryBackend::new().with_raw_pointer(), config.clone());
        assert!(input.backend().raw_pointer_registered());

        let mut input = subsystem(MemoryBackend::new(), config);
        assert!(input.pointer_active());
        input.backend_mut().inject_button_down(PointerButton::Right);
        tick(&mut input, &AppState::playing());
        assert_eq!(input.next_event().map(|e| e.code), Some(keycode::MOUSE2));
    }

    #[test]
    fn test_text_entry_toggle() {
        let mut input = subsystem(MemoryBackend::new(), InputConfig::default());
        input.set_text_entry(true);
        assert!(input.backend().text_input());
        input.set_text_entry(false);
        assert!(!input.backend().text_input());
    }

    #[test]
    fn test_pause_and_resume_by_kind() {
        let mut input = subsystem(MemoryBackend::new(), InputConfig::default());
        input.pause_keyboard();
        assert!(!input.keyboard_active());
        input.resume_keyboard();
        assert!(input.keyboard_active());

        input.pause_pointer();
        assert!(input.backend().cursor_visible());
        input.resume_pointer();
        assert!(!input.backend().cursor_visible());
    }

    #[test]
    fn test_shutdown_keyboard_and_pointer() {
        let mut input = subsystem(MemoryBackend::new(), InputConfig::default());
        input.shutdown_keyboard();
        input.shutdown_pointer();
        assert!(input.device(DeviceKind::Keyboard).is_none());
        assert!(input.device(DeviceKind::Pointer).is_none());
        assert!(!input.backend().is_class_enabled(EventClass::KEYBOARD));

        input.backend_mut().inject_key_down(sym::from_char('a'), ModMask::NONE);
        tick(&mut input, &AppState::playing());
        assert_eq!(input.next_event(), None);
    }
}
