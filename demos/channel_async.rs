//! Async channel example with Tokio.
//!
//! Run with: cargo run --example channel_async --features tokio
//!
//! A polling thread runs the input loop at 35 ticks per second against a
//! scripted in-memory backend and forwards translated events to an async
//! task through a tokio channel.

use frameinput::backend::sym;
use frameinput::channel::async_event_channel;
use frameinput::{AppState, EventKind, InputConfig, InputSubsystem, MemoryBackend, ModMask};
use std::time::Duration;
use tokio::time::interval;

const TICKS: u32 = 140;

#[tokio::main]
async fn main() {
    println!("frameinput channel example (async/tokio)");
    println!("========================================\n");

    let (mut sink, mut rx) = async_event_channel(256);

    // The subsystem is not Send; it lives entirely on the polling thread.
    let poller = std::thread::spawn(move || {
        let mut input = match InputSubsystem::new(MemoryBackend::new(), InputConfig::default()) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 0;
            }
        };
        input.init_from_config();

        let app = AppState::playing();
        let mut commands: Vec<String> = Vec::new();
        for tick in 0..TICKS {
            let backend = input.backend_mut();
            match tick % 35 {
                0 => backend.inject_key_down(sym::from_char('w'), ModMask::NONE),
                20 => backend.inject_key_up(sym::from_char('w'), ModMask::NONE),
                _ => backend.inject_motion(2, 0),
            }

            input.start_tic(&app, &mut commands);
            input.drain_events(&mut sink);
            std::thread::sleep(Duration::from_millis(1000 / 35));
        }
        sink.dropped()
    });

    let mut event_count = 0u32;
    let mut heartbeat = interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            event = rx.recv() => {
                match event {
                    Some(event) => {
                        event_count += 1;
                        match event.kind {
                            EventKind::KeyDown => println!("[{}] key down {}", event_count, event.code),
                            EventKind::KeyUp => println!("[{}] key up {}", event_count, event.code),
                            // Only print every 20th motion event
                            EventKind::PointerMove if event_count.is_multiple_of(20) => {
                                println!("[{}] move {:?}", event_count, event.pointer_delta());
                            }
                            _ => {}
                        }
                    }
                    None => {
                        println!("Channel closed, polling thread finished.");
                        break;
                    }
                }
            }

            _ = heartbeat.tick() => {
                println!("... heartbeat (received {} events so far)", event_count);
            }
        }
    }

    match poller.join() {
        Ok(dropped) => println!("{} events received, {} dropped", event_count, dropped),
        Err(_) => eprintln!("polling thread panicked"),
    }
}
