//! Live input from the terminal.
//!
//! Run with: cargo run --example terminal
//!
//! Implements `RawBackend` over crossterm so the subsystem can be driven by
//! real keyboard and mouse input. Terminals do not report key releases, so a
//! key up is queued right after every key down. Press Esc to exit.

use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event as CEvent, KeyCode as CKeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode},
};
use frameinput::backend::{ControllerHandle, PointerButton, Sym, sym};
use frameinput::state::{MASK_LALT, MASK_LCTRL, MASK_LSHIFT};
use frameinput::{
    AppState, EventClass, EventKind, GrabMode, InputConfig, InputSubsystem, ModMask, RawBackend,
    RawEvent, keycode,
};
use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(1000 / 35);

struct TerminalBackend {
    queue: VecDeque<RawEvent>,
    disabled: EventClass,
    focused: bool,
    size: (u32, u32),
    pointer: (i32, i32),
}

impl TerminalBackend {
    fn new() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self {
            queue: VecDeque::new(),
            disabled: EventClass::empty(),
            focused: true,
            size: (cols as u32, rows as u32),
            pointer: (0, 0),
        })
    }

    fn queue_event(&mut self, event: RawEvent) {
        if !self.disabled.intersects(event.class()) {
            self.queue.push_back(event);
        }
    }

    /// Move everything crossterm has buffered into the queue.
    fn pump(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                CEvent::Key(key) => self.key(key),
                CEvent::Mouse(mouse) => {
                    let (x, y) = (mouse.column as i32, mouse.row as i32);
                    match mouse.kind {
                        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                            let (px, py) = self.pointer;
                            self.pointer = (x, y);
                            self.queue_event(RawEvent::PointerMotion {
                                x,
                                y,
                                xrel: x - px,
                                yrel: y - py,
                            });
                        }
                        MouseEventKind::Down(button) => {
                            self.queue_event(RawEvent::PointerButtonDown {
                                button: pointer_button(button),
                            });
                        }
                        MouseEventKind::Up(button) => {
                            self.queue_event(RawEvent::PointerButtonUp {
                                button: pointer_button(button),
                            });
                        }
                        MouseEventKind::ScrollUp => self.queue_event(RawEvent::PointerWheel {
                            x: 0,
                            y: 1,
                            flipped: false,
                        }),
                        MouseEventKind::ScrollDown => self.queue_event(RawEvent::PointerWheel {
                            x: 0,
                            y: -1,
                            flipped: false,
                        }),
                        _ => {}
                    }
                }
                CEvent::FocusGained => {
                    self.focused = true;
                    self.queue_event(RawEvent::WindowFocus { gained: true });
                }
                CEvent::FocusLost => {
                    self.focused = false;
                    self.queue_event(RawEvent::WindowFocus { gained: false });
                }
                CEvent::Resize(cols, rows) => {
                    self.size = (cols as u32, rows as u32);
                    self.queue_event(RawEvent::WindowResize {
                        width: cols as u32,
                        height: rows as u32,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        let Some(sym) = key_sym(key.code) else {
            return;
        };

        let mut mods = ModMask::NONE;
        if key.modifiers.contains(KeyModifiers::SHIFT) {
            mods = mods.with(MASK_LSHIFT);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            mods = mods.with(MASK_LCTRL);
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            mods = mods.with(MASK_LALT);
        }
        if let CKeyCode::Char(c) = key.code
            && c.is_ascii_uppercase()
        {
            mods = mods.with(MASK_LSHIFT);
        }

        self.queue_event(RawEvent::KeyDown {
            sym,
            mods,
            repeat: key.kind == KeyEventKind::Repeat,
        });
        self.queue_event(RawEvent::KeyUp { sym, mods });
    }
}

fn key_sym(code: CKeyCode) -> Option<Sym> {
    let sym = match code {
        CKeyCode::Char(c) if c.is_ascii() => sym::from_char(c.to_ascii_lowercase()),
        CKeyCode::Enter => sym::RETURN,
        CKeyCode::Esc => sym::ESCAPE,
        CKeyCode::Backspace => sym::BACKSPACE,
        CKeyCode::Tab => sym::TAB,
        CKeyCode::Delete => sym::DELETE,
        CKeyCode::Insert => sym::INSERT,
        CKeyCode::Home => sym::HOME,
        CKeyCode::End => sym::END,
        CKeyCode::PageUp => sym::PAGEUP,
        CKeyCode::PageDown => sym::PAGEDOWN,
        CKeyCode::Up => sym::UP,
        CKeyCode::Down => sym::DOWN,
        CKeyCode::Left => sym::LEFT,
        CKeyCode::Right => sym::RIGHT,
        CKeyCode::F(n @ 1..=12) => sym::from_scancode(57 + n as i32),
        _ => return None,
    };
    Some(sym)
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
    }
}

impl RawBackend for TerminalBackend {
    fn name(&self) -> &str {
        "terminal"
    }

    fn take_events(&mut self, classes: EventClass) -> Vec<RawEvent> {
        let (taken, kept): (Vec<_>, Vec<_>) = self
            .queue
            .drain(..)
            .partition(|event| classes.intersects(event.class()));
        self.queue = kept.into();
        taken
    }

    fn push_event(&mut self, event: RawEvent) {
        self.queue_event(event);
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
        false
    }

    fn video_size(&self) -> (u32, u32) {
        self.size
    }

    fn pointer_position(&self) -> (i32, i32) {
        self.pointer
    }

    // Terminals cannot move the pointer.
    fn warp_pointer(&mut self, _x: i32, _y: i32) {}

    fn show_cursor(&mut self, visible: bool) {
        let mut stdout = io::stdout();
        let _ = if visible {
            execute!(stdout, cursor::Show)
        } else {
            execute!(stdout, cursor::Hide)
        };
    }

    fn grab_mode(&self) -> GrabMode {
        GrabMode::WindowCapture
    }

    fn set_window_capture(&mut self, _on: bool) {}

    fn set_relative_pointer(&mut self, _on: bool) {}

    fn init_controllers(&mut self) -> frameinput::Result<()> {
        Ok(())
    }

    fn shutdown_controllers(&mut self) {}

    fn controller_count(&self) -> usize {
        0
    }

    fn controller_name(&self, _index: usize) -> Option<String> {
        None
    }

    fn open_controller(&mut self, _index: usize) -> Option<ControllerHandle> {
        None
    }

    fn close_controller(&mut self, _handle: &ControllerHandle) {}

    fn set_controller_polling(&mut self, _enabled: bool) {}
}

fn run() -> frameinput::Result<()> {
    let mut config = InputConfig::default();
    config.apply_args(std::env::args());

    let mut input = InputSubsystem::new(TerminalBackend::new()?, config)?;
    input.init_from_config();

    let app = AppState::playing();
    let mut commands: Vec<String> = Vec::new();
    let mut stdout = io::stdout();

    loop {
        input.backend_mut().pump()?;
        input.start_tic(&app, &mut commands);

        while let Some(event) = input.next_event() {
            let name = keycode::key_name(event.code).unwrap_or_else(|| format!("#{}", event.code));
            match event.kind {
                EventKind::KeyDown if event.code == keycode::ESCAPE => return Ok(()),
                EventKind::KeyDown => write!(stdout, "down {:<12} text={:?}\r\n", name, event.text())?,
                EventKind::KeyUp => write!(stdout, "up   {}\r\n", name)?,
                EventKind::PointerMove => {
                    write!(stdout, "move {:?}\r\n", event.pointer_delta().unwrap_or_default())?
                }
                EventKind::ControllerMove => {}
            }
        }
        for command in commands.drain(..) {
            write!(stdout, "> {}\r\n", command)?;
            if command == "quit" {
                return Ok(());
            }
        }
        stdout.flush()?;

        std::thread::sleep(TICK);
    }
}

fn main() -> io::Result<()> {
    println!("frameinput terminal example");
    println!("Press Esc to exit.\n");

    enable_raw_mode()?;
    execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)?;

    let result = run();

    execute!(io::stdout(), DisableFocusChange, DisableMouseCapture, cursor::Show)?;
    disable_raw_mode()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
    Ok(())
}
