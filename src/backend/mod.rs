//! The raw backend capability.
//!
//! A windowing library (SDL, winit, a terminal, a test harness) is adapted to
//! the input layer by implementing [`RawBackend`]. The translation and edge
//! detection logic in [`crate::device`] is written once against this trait.

pub mod memory;
pub mod sym;

use crate::error::Result;
use crate::state::ModMask;
use bitflags::bitflags;

pub use memory::MemoryBackend;
pub use sym::Sym;

/// Physical pointer buttons as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button.
    Left,
    /// Middle button.
    Middle,
    /// Secondary button.
    Right,
    /// Wheel rolled up, on backends that report the wheel as buttons.
    WheelUp,
    /// Wheel rolled down, on backends that report the wheel as buttons.
    WheelDown,
    /// First extended button (typically back).
    X1,
    /// Second extended button (typically forward).
    X2,
    /// Anything else.
    Other(u8),
}

/// A raw notification from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEvent {
    /// A key went down.
    KeyDown {
        /// Backend symbol.
        sym: Sym,
        /// Modifiers in effect.
        mods: ModMask,
        /// Set when this is an auto-repeat continuation.
        repeat: bool,
    },
    /// A key was released.
    KeyUp {
        /// Backend symbol.
        sym: Sym,
        /// Modifiers in effect.
        mods: ModMask,
    },
    /// Text produced by the preceding key down, on backends that compose
    /// text separately from key notifications.
    TextInput {
        /// The composed text.
        text: String,
    },
    /// The pointer moved.
    PointerMotion {
        /// Absolute x after the move.
        x: i32,
        /// Absolute y after the move.
        y: i32,
        /// Horizontal delta.
        xrel: i32,
        /// Vertical delta, down positive.
        yrel: i32,
    },
    /// A pointer button went down.
    PointerButtonDown {
        /// The button.
        button: PointerButton,
    },
    /// A pointer button was released.
    PointerButtonUp {
        /// The button.
        button: PointerButton,
    },
    /// The wheel rolled.
    PointerWheel {
        /// Horizontal amount.
        x: i32,
        /// Vertical amount, away from the user positive.
        y: i32,
        /// Set when the platform reports "natural" (inverted) scrolling.
        flipped: bool,
    },
    /// A controller axis moved.
    ControllerAxis {
        /// Controller instance id.
        which: u32,
        /// Axis index.
        axis: u8,
        /// Raw axis value.
        value: i16,
    },
    /// A controller trackball moved.
    ControllerBall {
        /// Controller instance id.
        which: u32,
        /// Ball index.
        ball: u8,
        /// Horizontal delta.
        xrel: i16,
        /// Vertical delta.
        yrel: i16,
    },
    /// A controller hat changed position.
    ControllerHat {
        /// Controller instance id.
        which: u32,
        /// Hat index.
        hat: u8,
        /// Direction bitmask, see [`HAT_UP`] and friends.
        value: u8,
    },
    /// A controller button went down.
    ControllerButtonDown {
        /// Controller instance id.
        which: u32,
        /// Button index.
        button: u8,
    },
    /// A controller button was released.
    ControllerButtonUp {
        /// Controller instance id.
        which: u32,
        /// Button index.
        button: u8,
    },
    /// The application was asked to quit.
    Quit,
    /// The window was resized.
    WindowResize {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },
    /// The window gained or lost input focus.
    WindowFocus {
        /// True if focus was gained.
        gained: bool,
    },
}

/// Hat bitmask bit for up.
pub const HAT_UP: u8 = 1 << 0;
/// Hat bitmask bit for right.
pub const HAT_RIGHT: u8 = 1 << 1;
/// Hat bitmask bit for down.
pub const HAT_DOWN: u8 = 1 << 2;
/// Hat bitmask bit for left.
pub const HAT_LEFT: u8 = 1 << 3;
/// Hat at rest.
pub const HAT_CENTERED: u8 = 0;

impl RawEvent {
    /// The class this notification belongs to.
    pub fn class(&self) -> EventClass {
        match self {
            RawEvent::KeyDown { .. } => EventClass::KEY_DOWN,
            RawEvent::KeyUp { .. } => EventClass::KEY_UP,
            RawEvent::TextInput { .. } => EventClass::TEXT_INPUT,
            RawEvent::PointerMotion { .. } => EventClass::POINTER_MOTION,
            RawEvent::PointerButtonDown { .. } => EventClass::POINTER_BUTTON_DOWN,
            RawEvent::PointerButtonUp { .. } => EventClass::POINTER_BUTTON_UP,
            RawEvent::PointerWheel { .. } => EventClass::POINTER_WHEEL,
            RawEvent::ControllerAxis { .. } => EventClass::CONTROLLER_AXIS,
            RawEvent::ControllerBall { .. } => EventClass::CONTROLLER_BALL,
            RawEvent::ControllerHat { .. } => EventClass::CONTROLLER_HAT,
            RawEvent::ControllerButtonDown { .. } => EventClass::CONTROLLER_BUTTON_DOWN,
            RawEvent::ControllerButtonUp { .. } => EventClass::CONTROLLER_BUTTON_UP,
            RawEvent::Quit => EventClass::QUIT,
            RawEvent::WindowResize { .. } | RawEvent::WindowFocus { .. } => EventClass::WINDOW,
        }
    }
}

bitflags! {
    /// A set of raw notification classes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EventClass: u32 {
        const KEY_DOWN = 1 << 0;
        const KEY_UP = 1 << 1;
        const TEXT_INPUT = 1 << 2;
        const POINTER_MOTION = 1 << 3;
        const POINTER_BUTTON_DOWN = 1 << 4;
        const POINTER_BUTTON_UP = 1 << 5;
        const POINTER_WHEEL = 1 << 6;
        const CONTROLLER_AXIS = 1 << 7;
        const CONTROLLER_BALL = 1 << 8;
        const CONTROLLER_HAT = 1 << 9;
        const CONTROLLER_BUTTON_DOWN = 1 << 10;
        const CONTROLLER_BUTTON_UP = 1 << 11;
        const QUIT = 1 << 12;
        const WINDOW = 1 << 13;

        /// Everything the keyboard device consumes.
        const KEYBOARD = Self::KEY_DOWN.bits() | Self::KEY_UP.bits() | Self::TEXT_INPUT.bits();

        /// Everything the pointer device consumes.
        const POINTER = Self::POINTER_MOTION.bits()
            | Self::POINTER_BUTTON_DOWN.bits()
            | Self::POINTER_BUTTON_UP.bits()
            | Self::POINTER_WHEEL.bits();

        /// Everything the controller device consumes.
        const CONTROLLER = Self::CONTROLLER_AXIS.bits()
            | Self::CONTROLLER_BALL.bits()
            | Self::CONTROLLER_HAT.bits()
            | Self::CONTROLLER_BUTTON_DOWN.bits()
            | Self::CONTROLLER_BUTTON_UP.bits();

        /// Window and application notifications handled by the subsystem itself.
        const APPLICATION = Self::QUIT.bits() | Self::WINDOW.bits();

        /// Every class.
        const ALL = Self::KEYBOARD.bits()
            | Self::POINTER.bits()
            | Self::CONTROLLER.bits()
            | Self::APPLICATION.bits();
    }
}

/// How the backend expresses exclusive pointer capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrabMode {
    /// An explicit window capture toggle; the pointer is kept inside by warping.
    WindowCapture,
    /// A relative pointer mode toggle; the backend hides and confines the cursor.
    RelativePointer,
}

/// How the backend delivers composed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextMode {
    /// No separate text notifications; text is derived from key symbols.
    Translated,
    /// Text arrives as [`RawEvent::TextInput`] after the key down that produced it.
    Separate,
}

/// An open controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerHandle {
    /// Enumeration index the controller was opened from.
    pub index: usize,
    /// Instance id carried in this controller's notifications.
    pub instance_id: u32,
    /// Number of hats on the controller.
    pub num_hats: usize,
    /// Name reported by the driver.
    pub name: String,
}

/// The capabilities the input layer needs from a windowing backend.
///
/// All calls happen on the polling thread and must return promptly.
pub trait RawBackend {
    /// Short backend name, used to build device descriptors.
    fn name(&self) -> &str;

    /// Remove and return every buffered notification whose class is in
    /// `classes`, in delivery order. Other notifications stay queued.
    fn take_events(&mut self, classes: EventClass) -> Vec<RawEvent>;

    /// Append a notification to the tail of the backend queue.
    fn push_event(&mut self, event: RawEvent);

    /// Enable or disable delivery of `classes`. Either way, notifications of
    /// those classes that are already queued are discarded.
    fn set_event_class_enabled(&mut self, classes: EventClass, enabled: bool);

    /// Check if the window currently has input focus.
    fn is_focused(&self) -> bool;

    /// Check if the window is fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Current video size as `(width, height)`.
    fn video_size(&self) -> (u32, u32);

    /// Current absolute pointer position inside the window.
    fn pointer_position(&self) -> (i32, i32);

    /// Move the pointer to `(x, y)` inside the window.
    fn warp_pointer(&mut self, x: i32, y: i32);

    /// Show or hide the cursor.
    fn show_cursor(&mut self, visible: bool);

    /// How this backend expresses input grab.
    fn grab_mode(&self) -> GrabMode;

    /// Engage or release window capture. Used with [`GrabMode::WindowCapture`].
    fn set_window_capture(&mut self, on: bool);

    /// Engage or release relative pointer mode. Used with [`GrabMode::RelativePointer`].
    fn set_relative_pointer(&mut self, on: bool);

    /// How this backend delivers composed text.
    fn text_mode(&self) -> TextMode {
        TextMode::Translated
    }

    /// Start or stop delivering composed text notifications.
    fn set_text_input(&mut self, _enabled: bool) {}

    /// Register for raw (unaccelerated, uncentered) pointer capture.
    /// Returns false if the platform offers no such facility.
    fn register_raw_pointer(&mut self) -> bool {
        false
    }

    /// Undo [`RawBackend::register_raw_pointer`].
    fn unregister_raw_pointer(&mut self) {}

    /// Bring up controller support.
    fn init_controllers(&mut self) -> Result<()>;

    /// Tear down controller support.
    fn shutdown_controllers(&mut self);

    /// Number of attached controllers.
    fn controller_count(&self) -> usize;

    /// Driver name of controller `index`.
    fn controller_name(&self, index: usize) -> Option<String>;

    /// Open controller `index`. Returns `None` if it cannot be opened.
    fn open_controller(&mut self, index: usize) -> Option<ControllerHandle>;

    /// Close a handle returned by [`RawBackend::open_controller`].
    fn close_controller(&mut self, handle: &ControllerHandle);

    /// Enable or disable controller state polling inside the backend.
    fn set_controller_polling(&mut self, enabled: bool);
}
