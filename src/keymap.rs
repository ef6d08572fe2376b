//! Symbol translation tables.
//!
//! Three immutable tables are built on first use and shared by every
//! keyboard device:
//!
//! - symbol to logical key code
//! - symbol to printable character
//! - character to its shifted counterpart

use crate::backend::sym::{self, Sym};
use crate::keycode::{self, KeyCode};
use crate::state::ModMask;
use std::collections::HashMap;
use std::sync::LazyLock;

static TABLES: LazyLock<KeyTables> = LazyLock::new(KeyTables::build);

/// Backend symbol translation tables.
#[derive(Debug)]
pub struct KeyTables {
    keys: HashMap<Sym, KeyCode>,
    text: HashMap<Sym, char>,
    shift: HashMap<char, char>,
}

impl KeyTables {
    /// The process-wide tables.
    pub fn shared() -> &'static KeyTables {
        &TABLES
    }

    fn build() -> Self {
        let mut keys = HashMap::new();
        let mut text = HashMap::new();

        // Printable ASCII symbols are their own logical code and character.
        for c in (b'!'..=b'~').filter(|c| !c.is_ascii_uppercase()) {
            keys.insert(c as Sym, c as KeyCode);
            text.insert(c as Sym, c as char);
        }

        keys.extend([
            (sym::BACKSPACE, keycode::BACKSPACE),
            (sym::TAB, keycode::TAB),
            (sym::RETURN, keycode::ENTER),
            (sym::ESCAPE, keycode::ESCAPE),
            (sym::SPACE, keycode::SPACE),
            (sym::DELETE, keycode::DEL),
            (sym::UP, keycode::UPARROW),
            (sym::DOWN, keycode::DOWNARROW),
            (sym::LEFT, keycode::LEFTARROW),
            (sym::RIGHT, keycode::RIGHTARROW),
            (sym::F1, keycode::F1),
            (sym::F2, keycode::F2),
            (sym::F3, keycode::F3),
            (sym::F4, keycode::F4),
            (sym::F5, keycode::F5),
            (sym::F6, keycode::F6),
            (sym::F7, keycode::F7),
            (sym::F8, keycode::F8),
            (sym::F9, keycode::F9),
            (sym::F10, keycode::F10),
            (sym::F11, keycode::F11),
            (sym::F12, keycode::F12),
            (sym::F13, keycode::F13),
            (sym::F14, keycode::F14),
            (sym::F15, keycode::F15),
            (sym::LSHIFT, keycode::LSHIFT),
            (sym::RSHIFT, keycode::RSHIFT),
            (sym::LCTRL, keycode::LCTRL),
            (sym::RCTRL, keycode::RCTRL),
            (sym::LALT, keycode::LALT),
            (sym::RALT, keycode::RALT),
            (sym::LGUI, keycode::LWIN),
            (sym::RGUI, keycode::RWIN),
            (sym::INSERT, keycode::INS),
            (sym::HOME, keycode::HOME),
            (sym::END, keycode::END),
            (sym::PAGEUP, keycode::PGUP),
            (sym::PAGEDOWN, keycode::PGDN),
            (sym::PAUSE, keycode::PAUSE),
            (sym::CAPSLOCK, keycode::CAPSLOCK),
            (sym::NUMLOCKCLEAR, keycode::NUMLOCK),
            (sym::SCROLLLOCK, keycode::SCRLCK),
            (sym::PRINTSCREEN, keycode::PRINT),
            (sym::SYSREQ, keycode::SYSRQ),
            (sym::HELP, keycode::HELP),
            (sym::MENU, keycode::MENU),
            (sym::KP_0, keycode::KEYP_0),
            (sym::KP_1, keycode::KEYP_1),
            (sym::KP_2, keycode::KEYP_2),
            (sym::KP_3, keycode::KEYP_3),
            (sym::KP_4, keycode::KEYP_4),
            (sym::KP_5, keycode::KEYP_5),
            (sym::KP_6, keycode::KEYP_6),
            (sym::KP_7, keycode::KEYP_7),
            (sym::KP_8, keycode::KEYP_8),
            (sym::KP_9, keycode::KEYP_9),
            (sym::KP_PERIOD, keycode::KEYP_PERIOD),
            (sym::KP_DIVIDE, keycode::KEYP_DIVIDE),
            (sym::KP_MULTIPLY, keycode::KEYP_MULTIPLY),
            (sym::KP_MINUS, keycode::KEYP_MINUS),
            (sym::KP_PLUS, keycode::KEYP_PLUS),
            (sym::KP_ENTER, keycode::KEYP_ENTER),
            (sym::KP_EQUALS, keycode::KEYP_EQUALS),
        ]);

        text.extend([
            (sym::BACKSPACE, '\x08'),
            (sym::TAB, '\t'),
            (sym::RETURN, '\r'),
            (sym::SPACE, ' '),
            (sym::KP_0, '0'),
            (sym::KP_1, '1'),
            (sym::KP_2, '2'),
            (sym::KP_3, '3'),
            (sym::KP_4, '4'),
            (sym::KP_5, '5'),
            (sym::KP_6, '6'),
            (sym::KP_7, '7'),
            (sym::KP_8, '8'),
            (sym::KP_9, '9'),
            (sym::KP_PERIOD, '.'),
            (sym::KP_DIVIDE, '/'),
            (sym::KP_MULTIPLY, '*'),
            (sym::KP_MINUS, '-'),
            (sym::KP_PLUS, '+'),
            (sym::KP_ENTER, '\r'),
            (sym::KP_EQUALS, '='),
        ]);

        let mut shift: HashMap<char, char> = ('a'..='z')
            .map(|c| (c, c.to_ascii_uppercase()))
            .chain(('A'..='Z').map(|c| (c, c.to_ascii_lowercase())))
            .collect();
        shift.extend(
            "1!2@3#4$5%6^7&8*9(0)`~-_=+[{]}\\|;:'\",<.>/?"
                .chars()
                .collect::<Vec<_>>()
                .chunks(2)
                .map(|pair| (pair[0], pair[1])),
        );

        Self { keys, text, shift }
    }

    /// Logical code for `sym`, or [`keycode::NONE`] if the symbol is unknown.
    pub fn translate_key(&self, sym: Sym) -> KeyCode {
        self.keys.get(&sym).copied().unwrap_or(keycode::NONE)
    }

    /// Printable character produced by `sym` under `mods`, or 0.
    ///
    /// Caps lock shifts letters, then shift is applied to whatever the
    /// character is at that point, so caps lock plus shift yields lowercase.
    pub fn translate_text(&self, sym: Sym, mods: ModMask) -> i32 {
        let Some(&base) = self.text.get(&sym) else {
            return 0;
        };
        let mut c = base;
        if c.is_ascii_lowercase() && mods.caps_lock() {
            c = self.shifted(c);
        }
        if mods.shift() {
            c = self.shifted(c);
        }
        c as i32
    }

    /// Shifted counterpart of `c`, or `c` itself if shift does not change it.
    pub fn shifted(&self, c: char) -> char {
        self.shift.get(&c).copied().unwrap_or(c)
    }
}
