//! Event recorder example - record a scripted session and replay it.
//!
//! Usage:
//!   cargo run --example recorder --features recorder -- record session.json
//!   cargo run --example recorder --features recorder -- replay session.json

use frameinput::backend::sym;
use frameinput::backend::PointerButton;
use frameinput::{
    AppState, EventRecorder, InputConfig, InputSubsystem, LogicalEvent, MemoryBackend, ModMask,
    Recording, keycode,
};
use std::env;

fn record(filename: &str) -> frameinput::Result<()> {
    let mut input = InputSubsystem::new(MemoryBackend::new(), InputConfig::default())?;
    input.init_from_config();

    let app = AppState::playing();
    let mut recorder = EventRecorder::new();
    let mut commands: Vec<String> = Vec::new();

    for tick in 0..70u32 {
        let backend = input.backend_mut();
        match tick {
            5 => backend.inject_key_down(sym::from_char('d'), ModMask::NONE),
            30 => backend.inject_key_up(sym::from_char('d'), ModMask::NONE),
            40 => backend.inject_button_down(PointerButton::Left),
            _ if tick.is_multiple_of(3) => backend.inject_motion(-1, 2),
            _ => {}
        }

        input.start_tic(&app, &mut commands);
        input.drain_events(&mut recorder);
        recorder.next_tick();
    }

    let recording = recorder.finish().with_description("scripted strafe");
    println!("Total events: {}", recording.event_count());
    println!("Ticks: {}", recording.tick_count());

    recording.save(filename)?;
    println!("Saved to: {}", filename);
    Ok(())
}

fn replay(filename: &str) -> frameinput::Result<()> {
    let recording = Recording::load(filename)?;
    if let Some(description) = &recording.description {
        println!("Replaying \"{}\"", description);
    }

    for tick in 0..recording.tick_count() {
        recording.replay_tick(tick, &mut |event: LogicalEvent| {
            let name = keycode::key_name(event.code).unwrap_or_else(|| format!("#{}", event.code));
            println!("tick {:>3}: {:?} {} ({}, {})", tick, event.kind, name, event.value, event.extra);
        });
    }
    Ok(())
}

fn main() -> frameinput::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        println!("Usage:");
        println!("  {} record <filename>  - Record a scripted session", args[0]);
        println!("  {} replay <filename>  - Print a recorded session tick by tick", args[0]);
        return Ok(());
    }

    let command = &args[1];
    let filename = &args[2];

    match command.as_str() {
        "record" => record(filename),
        "replay" => replay(filename),
        _ => {
            println!("Unknown command: {}", command);
            Ok(())
        }
    }
}
