//! Logical key codes.
//!
//! Every key, pointer button, wheel direction, controller button and hat
//! direction lives in one flat integer code space so that the application can
//! bind any of them the same way:
//!
//! | Range | Meaning |
//! |---|---|
//! | `0` | no key |
//! | `1..=0x7F` | ASCII: control keys plus printable characters (letters lowercase) |
//! | `0x80..=0xFF` | non-printable keyboard keys |
//! | `0x100..=0x10F` | pointer buttons and wheel |
//! | `0x110..=0x12F` | controller buttons |
//! | `0x130..=0x14F` | controller hats, four directions per hat |

/// A logical key code.
pub type KeyCode = i32;

/// No key. Translation of an unknown symbol yields this and the event is dropped.
pub const NONE: KeyCode = 0;

pub const TAB: KeyCode = 9;
pub const ENTER: KeyCode = 13;
pub const ESCAPE: KeyCode = 27;
pub const SPACE: KeyCode = 32;
pub const BACKSPACE: KeyCode = 127;

// Arrows
pub const RIGHTARROW: KeyCode = 0x80;
pub const LEFTARROW: KeyCode = 0x81;
pub const UPARROW: KeyCode = 0x82;
pub const DOWNARROW: KeyCode = 0x83;

// Function keys
pub const F1: KeyCode = 0x84;
pub const F2: KeyCode = 0x85;
pub const F3: KeyCode = 0x86;
pub const F4: KeyCode = 0x87;
pub const F5: KeyCode = 0x88;
pub const F6: KeyCode = 0x89;
pub const F7: KeyCode = 0x8A;
pub const F8: KeyCode = 0x8B;
pub const F9: KeyCode = 0x8C;
pub const F10: KeyCode = 0x8D;
pub const F11: KeyCode = 0x8E;
pub const F12: KeyCode = 0x8F;
pub const F13: KeyCode = 0x90;
pub const F14: KeyCode = 0x91;
pub const F15: KeyCode = 0x92;

// Modifiers
pub const LSHIFT: KeyCode = 0x93;
pub const RSHIFT: KeyCode = 0x94;
pub const LCTRL: KeyCode = 0x95;
pub const RCTRL: KeyCode = 0x96;
pub const LALT: KeyCode = 0x97;
pub const RALT: KeyCode = 0x98;
pub const LWIN: KeyCode = 0x99;
pub const RWIN: KeyCode = 0x9A;

// Navigation
pub const INS: KeyCode = 0x9B;
pub const DEL: KeyCode = 0x9C;
pub const HOME: KeyCode = 0x9D;
pub const END: KeyCode = 0x9E;
pub const PGUP: KeyCode = 0x9F;
pub const PGDN: KeyCode = 0xA0;

// Locks and system keys
pub const PAUSE: KeyCode = 0xA1;
pub const CAPSLOCK: KeyCode = 0xA2;
pub const NUMLOCK: KeyCode = 0xA3;
pub const SCRLCK: KeyCode = 0xA4;
pub const PRINT: KeyCode = 0xA5;
pub const SYSRQ: KeyCode = 0xA6;
pub const BREAK: KeyCode = 0xA7;
pub const HELP: KeyCode = 0xA8;
pub const MENU: KeyCode = 0xA9;

// Keypad
pub const KEYP_0: KeyCode = 0xB0;
pub const KEYP_1: KeyCode = 0xB1;
pub const KEYP_2: KeyCode = 0xB2;
pub const KEYP_3: KeyCode = 0xB3;
pub const KEYP_4: KeyCode = 0xB4;
pub const KEYP_5: KeyCode = 0xB5;
pub const KEYP_6: KeyCode = 0xB6;
pub const KEYP_7: KeyCode = 0xB7;
pub const KEYP_8: KeyCode = 0xB8;
pub const KEYP_9: KeyCode = 0xB9;
pub const KEYP_PERIOD: KeyCode = 0xBA;
pub const KEYP_DIVIDE: KeyCode = 0xBB;
pub const KEYP_MULTIPLY: KeyCode = 0xBC;
pub const KEYP_MINUS: KeyCode = 0xBD;
pub const KEYP_PLUS: KeyCode = 0xBE;
pub const KEYP_ENTER: KeyCode = 0xBF;
pub const KEYP_EQUALS: KeyCode = 0xC0;

// Pointer
pub const MOUSE1: KeyCode = 0x100;
pub const MOUSE2: KeyCode = 0x101;
pub const MOUSE3: KeyCode = 0x102;
pub const MOUSE4: KeyCode = 0x103;
pub const MOUSE5: KeyCode = 0x104;
pub const MWHEELUP: KeyCode = 0x105;
pub const MWHEELDOWN: KeyCode = 0x106;

/// First controller button code. Button `n` maps to `JOY1 + n`.
pub const JOY1: KeyCode = 0x110;
/// Number of controller buttons with a reserved code.
pub const NUM_JOY_BUTTONS: usize = 32;

/// First hat code. Each hat owns four consecutive codes.
pub const HAT1: KeyCode = 0x130;
/// Number of hats with a reserved code range.
pub const MAX_HATS: usize = 8;

/// Hat directions, in the order of their bit in the hat bitmask.
pub const HAT_UP: usize = 0;
pub const HAT_RIGHT: usize = 1;
pub const HAT_DOWN: usize = 2;
pub const HAT_LEFT: usize = 3;
/// Number of directions per hat.
pub const HAT_DIRECTIONS: usize = 4;

/// One past the highest assigned code.
pub const NUM_KEYS: KeyCode = 0x150;

/// Code for direction `direction` (one of the `HAT_*` constants) of hat `hat`.
#[inline]
pub fn hat_code(hat: usize, direction: usize) -> KeyCode {
    HAT1 + (hat * HAT_DIRECTIONS + direction) as KeyCode
}

/// Code for controller button `button`.
#[inline]
pub fn controller_button_code(button: usize) -> KeyCode {
    JOY1 + button as KeyCode
}

/// Check if a code is a pointer button or wheel direction.
pub fn is_pointer(code: KeyCode) -> bool {
    (MOUSE1..=MWHEELDOWN).contains(&code)
}

/// Check if a code is a controller button.
pub fn is_controller_button(code: KeyCode) -> bool {
    (JOY1..JOY1 + NUM_JOY_BUTTONS as KeyCode).contains(&code)
}

/// Check if a code is a controller hat direction.
pub fn is_hat(code: KeyCode) -> bool {
    (HAT1..HAT1 + (MAX_HATS * HAT_DIRECTIONS) as KeyCode).contains(&code)
}

/// Check if a code is a keypad key.
pub fn is_keypad(code: KeyCode) -> bool {
    (KEYP_0..=KEYP_EQUALS).contains(&code)
}

/// Check if a code is a modifier key.
pub fn is_modifier(code: KeyCode) -> bool {
    (LSHIFT..=RWIN).contains(&code)
}

/// Check if a code is a function key.
pub fn is_function_key(code: KeyCode) -> bool {
    (F1..=F15).contains(&code)
}

/// Human readable name of a code, or `None` if the code is unassigned.
///
/// Printable keys are named by their character; everything else gets an
/// upper-case name (`"UPARROW"`, `"MOUSE1"`, `"JOY12"`, `"HAT2LEFT"`).
pub fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        TAB => "TAB",
        ENTER => "ENTER",
        ESCAPE => "ESCAPE",
        SPACE => "SPACE",
        BACKSPACE => "BACKSPACE",
        RIGHTARROW => "RIGHTARROW",
        LEFTARROW => "LEFTARROW",
        UPARROW => "UPARROW",
        DOWNARROW => "DOWNARROW",
        LSHIFT => "LSHIFT",
        RSHIFT => "RSHIFT",
        LCTRL => "LCTRL",
        RCTRL => "RCTRL",
        LALT => "LALT",
        RALT => "RALT",
        LWIN => "LWIN",
        RWIN => "RWIN",
        INS => "INS",
        DEL => "DEL",
        HOME => "HOME",
        END => "END",
        PGUP => "PGUP",
        PGDN => "PGDN",
        PAUSE => "PAUSE",
        CAPSLOCK => "CAPSLOCK",
        NUMLOCK => "NUMLOCK",
        SCRLCK => "SCROLLLOCK",
        PRINT => "PRINT",
        SYSRQ => "SYSRQ",
        BREAK => "BREAK",
        HELP => "HELP",
        MENU => "MENU",
        KEYP_PERIOD => "KP.",
        KEYP_DIVIDE => "KP/",
        KEYP_MULTIPLY => "KP*",
        KEYP_MINUS => "KP-",
        KEYP_PLUS => "KP+",
        KEYP_ENTER => "KPENTER",
        KEYP_EQUALS => "KP=",
        MWHEELUP => "MWHEELUP",
        MWHEELDOWN => "MWHEELDOWN",
        c if (F1..=F15).contains(&c) => return Some(format!("F{}", c - F1 + 1)),
        c if (KEYP_0..=KEYP_9).contains(&c) => return Some(format!("KP{}", c - KEYP_0)),
        c if (MOUSE1..=MOUSE5).contains(&c) => return Some(format!("MOUSE{}", c - MOUSE1 + 1)),
        c if is_controller_button(c) => return Some(format!("JOY{}", c - JOY1 + 1)),
        c if is_hat(c) => {
            let offset = (c - HAT1) as usize;
            let direction = match offset % HAT_DIRECTIONS {
                HAT_UP => "UP",
                HAT_RIGHT => "RIGHT",
                HAT_DOWN => "DOWN",
                _ => "LEFT",
            };
            return Some(format!("HAT{}{}", offset / HAT_DIRECTIONS + 1, direction));
        }
        c if (33..127).contains(&c) => return char::from_u32(c as u32).map(String::from),
        _ => return None,
    };
    Some(name.to_string())
}
