//! Input configuration.
//!
//! The values are owned by the application's settings layer; the input layer
//! only reads them. With the `serde` feature the struct can be loaded straight
//! from a settings file.

use crate::device::controller::DEFAULT_DEADZONE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which pointer driver to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerDriver {
    /// Backend motion notifications with continuous re-centering.
    #[default]
    Standard,
    /// Raw capture deltas. Falls back to `Standard` when unavailable.
    Raw,
}

/// How the standard pointer driver turns motion notifications into events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MotionMode {
    /// One `PointerMove` per backend notification.
    #[default]
    PerNotification,
    /// At most one `PointerMove` per gather, summing every notification.
    Aggregate,
}

/// Settings read by the input subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputConfig {
    /// Keyboard to open.
    pub keyboard_id: usize,
    /// Pointer to open.
    pub pointer_id: usize,
    /// Pointer driver selection.
    pub pointer_driver: PointerDriver,
    /// Motion event granularity of the standard pointer driver.
    pub motion_mode: MotionMode,
    /// Never open a pointer and never grab for it.
    pub disable_pointer: bool,
    /// Open a controller at start-up.
    pub use_controller: bool,
    /// Controller to open. Out of range ids fall back to 0.
    pub controller_id: usize,
    /// Axis values with a smaller magnitude are reported as 0.
    pub controller_deadzone: i32,
}

impl InputConfig {
    /// Default settings.
    pub fn new() -> Self {
        Self {
            keyboard_id: 0,
            pointer_id: 0,
            pointer_driver: PointerDriver::Standard,
            motion_mode: MotionMode::PerNotification,
            disable_pointer: false,
            use_controller: false,
            controller_id: 0,
            controller_deadzone: DEFAULT_DEADZONE,
        }
    }

    /// Select the pointer driver.
    pub fn with_pointer_driver(mut self, driver: PointerDriver) -> Self {
        self.pointer_driver = driver;
        self
    }

    /// Select the motion mode.
    pub fn with_motion_mode(mut self, mode: MotionMode) -> Self {
        self.motion_mode = mode;
        self
    }

    /// Open controller `id` at start-up.
    pub fn with_controller(mut self, id: usize) -> Self {
        self.use_controller = true;
        self.controller_id = id;
        self
    }

    /// Set the controller deadzone.
    pub fn with_deadzone(mut self, deadzone: i32) -> Self {
        self.controller_deadzone = deadzone;
        self
    }

    /// Disable the pointer.
    pub fn without_pointer(mut self) -> Self {
        self.disable_pointer = true;
        self
    }

    /// Apply command line flags. Recognised: `-nomouse`, `-nojoy`,
    /// `-rawmouse`. Everything else is ignored.
    pub fn apply_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            match arg.as_ref() {
                "-nomouse" => self.disable_pointer = true,
                "-nojoy" => self.use_controller = false,
                "-rawmouse" => self.pointer_driver = PointerDriver::Raw,
                _ => {}
            }
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new()
    }
}
