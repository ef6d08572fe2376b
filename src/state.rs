//! Modifier state carried on raw key notifications.
//!
//! The backend reports the modifier mask that was in effect when a key went
//! down. The keyboard device reads it to detect the reserved combinations and
//! to decide whether composed text is shifted.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Keyboard modifier masks
/// Left shift key mask.
pub const MASK_LSHIFT: u32 = 1 << 0;
/// Right shift key mask.
pub const MASK_RSHIFT: u32 = 1 << 1;
/// Left control key mask.
pub const MASK_LCTRL: u32 = 1 << 2;
/// Right control key mask.
pub const MASK_RCTRL: u32 = 1 << 3;
/// Left alt key mask.
pub const MASK_LALT: u32 = 1 << 4;
/// Right alt key mask.
pub const MASK_RALT: u32 = 1 << 5;
/// Left meta/windows key mask.
pub const MASK_LMETA: u32 = 1 << 6;
/// Right meta/windows key mask.
pub const MASK_RMETA: u32 = 1 << 7;
/// Caps Lock mask.
pub const MASK_CAPS_LOCK: u32 = 1 << 8;
/// Num Lock mask.
pub const MASK_NUM_LOCK: u32 = 1 << 9;

/// Either shift key.
pub const MASK_SHIFT: u32 = MASK_LSHIFT | MASK_RSHIFT;
/// Either control key.
pub const MASK_CTRL: u32 = MASK_LCTRL | MASK_RCTRL;
/// Either alt key.
pub const MASK_ALT: u32 = MASK_LALT | MASK_RALT;
/// Either meta key.
pub const MASK_META: u32 = MASK_LMETA | MASK_RMETA;

/// A snapshot of held modifiers and lock states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModMask(pub u32);

impl ModMask {
    /// No modifiers held.
    pub const NONE: ModMask = ModMask(0);

    /// Create a mask from raw bits.
    #[inline]
    pub const fn new(bits: u32) -> Self {
        ModMask(bits)
    }

    /// Raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check if any of the bits in `mask` are set.
    #[inline]
    pub const fn intersects(self, mask: u32) -> bool {
        self.0 & mask != 0
    }

    /// Return a copy with the bits in `mask` set.
    #[inline]
    pub const fn with(self, mask: u32) -> Self {
        ModMask(self.0 | mask)
    }

    /// Return a copy with the bits in `mask` cleared.
    #[inline]
    pub const fn without(self, mask: u32) -> Self {
        ModMask(self.0 & !mask)
    }

    /// Check if either shift key is held.
    #[inline]
    pub const fn shift(self) -> bool {
        self.intersects(MASK_SHIFT)
    }

    /// Check if either control key is held.
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.intersects(MASK_CTRL)
    }

    /// Check if either alt key is held.
    #[inline]
    pub const fn alt(self) -> bool {
        self.intersects(MASK_ALT)
    }

    /// Check if either meta key is held.
    #[inline]
    pub const fn meta(self) -> bool {
        self.intersects(MASK_META)
    }

    /// Check if caps lock is on.
    #[inline]
    pub const fn caps_lock(self) -> bool {
        self.intersects(MASK_CAPS_LOCK)
    }

    /// Check if num lock is on.
    #[inline]
    pub const fn num_lock(self) -> bool {
        self.intersects(MASK_NUM_LOCK)
    }
}

impl From<u32> for ModMask {
    fn from(bits: u32) -> Self {
        ModMask(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_mask_operations() {
        let mask = ModMask::NONE;
        assert!(!mask.shift());
        assert!(!mask.alt());

        let mask = mask.with(MASK_LSHIFT);
        assert!(mask.shift());
        assert!(!mask.ctrl());

        let mask = mask.with(MASK_RALT);
        assert!(mask.shift());
        assert!(mask.alt());

        let mask = mask.without(MASK_SHIFT);
        assert!(!mask.shift());
        assert!(mask.alt());
    }

    #[test]
    fn test_either_side_counts() {
        assert!(ModMask::new(MASK_LALT).alt());
        assert!(ModMask::new(MASK_RALT).alt());
        assert!(ModMask::new(MASK_RCTRL).ctrl());
        assert!(ModMask::new(MASK_LMETA).meta());
    }

    #[test]
    fn test_lock_states() {
        let mask = ModMask::from(MASK_CAPS_LOCK);
        assert!(mask.caps_lock());
        assert!(!mask.num_lock());
        assert!(!mask.shift());
        assert_eq!(mask.bits(), MASK_CAPS_LOCK);
    }
}
