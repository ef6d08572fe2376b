//! Backend key symbols.
//!
//! Symbols follow the SDL2 keycode numbering: keys that produce a character
//! use that character's code, every other key is its scancode with
//! [`SCANCODE_MASK`] set. Backends built on other windowing libraries convert
//! to this numbering before handing notifications over.

/// A backend key symbol.
pub type Sym = i32;

/// Bit set on symbols derived from a scancode.
pub const SCANCODE_MASK: Sym = 1 << 30;

/// Symbol for a scancode-only key.
#[inline]
pub const fn from_scancode(scancode: i32) -> Sym {
    scancode | SCANCODE_MASK
}

/// Symbol for a key that produces `c`.
#[inline]
pub const fn from_char(c: char) -> Sym {
    c as Sym
}

pub const UNKNOWN: Sym = 0;

pub const RETURN: Sym = b'\r' as Sym;
pub const ESCAPE: Sym = 0x1B;
pub const BACKSPACE: Sym = 0x08;
pub const TAB: Sym = b'\t' as Sym;
pub const SPACE: Sym = b' ' as Sym;
pub const DELETE: Sym = 0x7F;

pub const CAPSLOCK: Sym = from_scancode(57);
pub const F1: Sym = from_scancode(58);
pub const F2: Sym = from_scancode(59);
pub const F3: Sym = from_scancode(60);
pub const F4: Sym = from_scancode(61);
pub const F5: Sym = from_scancode(62);
pub const F6: Sym = from_scancode(63);
pub const F7: Sym = from_scancode(64);
pub const F8: Sym = from_scancode(65);
pub const F9: Sym = from_scancode(66);
pub const F10: Sym = from_scancode(67);
pub const F11: Sym = from_scancode(68);
pub const F12: Sym = from_scancode(69);
pub const PRINTSCREEN: Sym = from_scancode(70);
pub const SCROLLLOCK: Sym = from_scancode(71);
pub const PAUSE: Sym = from_scancode(72);
pub const INSERT: Sym = from_scancode(73);
pub const HOME: Sym = from_scancode(74);
pub const PAGEUP: Sym = from_scancode(75);
pub const END: Sym = from_scancode(77);
pub const PAGEDOWN: Sym = from_scancode(78);
pub const RIGHT: Sym = from_scancode(79);
pub const LEFT: Sym = from_scancode(80);
pub const DOWN: Sym = from_scancode(81);
pub const UP: Sym = from_scancode(82);
pub const NUMLOCKCLEAR: Sym = from_scancode(83);
pub const KP_DIVIDE: Sym = from_scancode(84);
pub const KP_MULTIPLY: Sym = from_scancode(85);
pub const KP_MINUS: Sym = from_scancode(86);
pub const KP_PLUS: Sym = from_scancode(87);
pub const KP_ENTER: Sym = from_scancode(88);
pub const KP_1: Sym = from_scancode(89);
pub const KP_2: Sym = from_scancode(90);
pub const KP_3: Sym = from_scancode(91);
pub const KP_4: Sym = from_scancode(92);
pub const KP_5: Sym = from_scancode(93);
pub const KP_6: Sym = from_scancode(94);
pub const KP_7: Sym = from_scancode(95);
pub const KP_8: Sym = from_scancode(96);
pub const KP_9: Sym = from_scancode(97);
pub const KP_0: Sym = from_scancode(98);
pub const KP_PERIOD: Sym = from_scancode(99);
pub const KP_EQUALS: Sym = from_scancode(103);
pub const F13: Sym = from_scancode(104);
pub const F14: Sym = from_scancode(105);
pub const F15: Sym = from_scancode(106);
pub const HELP: Sym = from_scancode(117);
pub const MENU: Sym = from_scancode(118);
pub const SYSREQ: Sym = from_scancode(154);
pub const LCTRL: Sym = from_scancode(224);
pub const LSHIFT: Sym = from_scancode(225);
pub const LALT: Sym = from_scancode(226);
pub const LGUI: Sym = from_scancode(227);
pub const RCTRL: Sym = from_scancode(228);
pub const RSHIFT: Sym = from_scancode(229);
pub const RALT: Sym = from_scancode(230);
pub const RGUI: Sym = from_scancode(231);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_symbols_are_plain() {
        assert_eq!(from_char('a'), 97);
        assert_eq!(RETURN, 13);
        assert_eq!(from_char('a') & SCANCODE_MASK, 0);
    }

    #[test]
    fn test_scancode_symbols_are_masked() {
        assert_eq!(F4, 61 | (1 << 30));
        assert_ne!(UP & SCANCODE_MASK, 0);
        assert_ne!(F1, F2);
    }
}
