//! Scripted session against the in-memory backend.
//!
//! Run with: cargo run --example scripted
//!
//! Feeds a short session of keyboard, pointer and controller input through
//! the subsystem, including a focus loss and the close combination, and
//! prints the translated event stream tick by tick.

use frameinput::backend::memory::MemoryController;
use frameinput::backend::{HAT_RIGHT, HAT_UP, PointerButton, sym};
use frameinput::state::{MASK_LALT, MASK_LSHIFT};
use frameinput::{
    AppState, EventKind, InputConfig, InputSubsystem, LogicalEvent, MemoryBackend, ModMask,
    RawEvent, keycode,
};

fn describe(event: &LogicalEvent) -> String {
    let name = keycode::key_name(event.code).unwrap_or_else(|| format!("#{}", event.code));
    match event.kind {
        EventKind::KeyDown => match event.text() {
            Some(c) if !c.is_control() => format!("down {} '{}'", name, c),
            _ => format!("down {}", name),
        },
        EventKind::KeyUp => format!("up   {}", name),
        EventKind::PointerMove => format!("move {:?}", event.pointer_delta().unwrap_or_default()),
        EventKind::ControllerMove => format!("axis {:?}", event.axis().unwrap_or_default()),
    }
}

fn run_tick(input: &mut InputSubsystem<MemoryBackend>, tick: u32, app: &AppState) -> bool {
    let mut commands: Vec<String> = Vec::new();
    input.start_tic(app, &mut commands);

    let grab = if input.is_grabbed() { "grabbed" } else { "free" };
    println!("tick {:>2} [{}]", tick, grab);
    while let Some(event) = input.next_event() {
        println!("    {}", describe(&event));
    }
    for command in &commands {
        println!("    > {}", command);
    }
    commands.iter().any(|c| c == "quit")
}

fn main() {
    println!("frameinput scripted example");
    println!("===========================\n");

    let backend = MemoryBackend::new()
        .with_video_size(800, 600)
        .with_controller(MemoryController::new("Demo Pad", 1));
    let config = InputConfig::new().with_controller(0);

    let mut input = match InputSubsystem::new(backend, config) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    input.init_from_config();

    for device in input.controller_devices() {
        println!("found {}", device.name);
    }
    println!();

    let playing = AppState::playing();
    let mut tick = 0;

    // Walk forward while strafing with the mouse
    let backend = input.backend_mut();
    backend.inject_key_down(sym::UP, ModMask::NONE);
    backend.inject_motion(12, -4);
    backend.inject_motion(6, 0);
    run_tick(&mut input, tick, &playing);
    tick += 1;

    // Shifted text and a mouse button
    let backend = input.backend_mut();
    backend.inject_key_down(sym::from_char('1'), ModMask::new(MASK_LSHIFT));
    backend.inject_key_up(sym::UP, ModMask::NONE);
    backend.inject_button_down(PointerButton::Left);
    run_tick(&mut input, tick, &playing);
    tick += 1;

    // Controller: hat diagonal, then back to up only, plus one stick axis
    let backend = input.backend_mut();
    backend.inject(RawEvent::ControllerHat {
        which: 0,
        hat: 0,
        value: HAT_UP | HAT_RIGHT,
    });
    backend.inject(RawEvent::ControllerAxis {
        which: 0,
        axis: 1,
        value: -20000,
    });
    backend.inject(RawEvent::ControllerAxis {
        which: 0,
        axis: 0,
        value: 3000,
    });
    run_tick(&mut input, tick, &playing);
    tick += 1;

    input.backend_mut().inject(RawEvent::ControllerHat {
        which: 0,
        hat: 0,
        value: HAT_UP,
    });
    run_tick(&mut input, tick, &playing);
    tick += 1;

    // Another window takes focus; what is typed there never arrives
    input.backend_mut().change_focus(false);
    run_tick(&mut input, tick, &playing);
    tick += 1;
    input.backend_mut().inject_key_down(sym::from_char('q'), ModMask::NONE);
    input.backend_mut().change_focus(true);
    run_tick(&mut input, tick, &playing);
    tick += 1;

    // Opening the menu frees the pointer
    let menu = AppState {
        menu_active: true,
        ..playing
    };
    input.backend_mut().inject_key_down(sym::ESCAPE, ModMask::NONE);
    run_tick(&mut input, tick, &menu);
    tick += 1;

    // The window is resized, then closed with Alt+F4
    input.backend_mut().inject(RawEvent::WindowResize {
        width: 1024,
        height: 768,
    });
    input.backend_mut().inject_key_down(sym::F4, ModMask::new(MASK_LALT));
    if run_tick(&mut input, tick, &menu) {
        println!("\nquit requested");
    }
}
