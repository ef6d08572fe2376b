//! Consumers of the input layer's output.
//!
//! [`EventSink`] receives translated events, [`CommandSink`] receives the text
//! commands the subsystem issues for window notifications (`quit`,
//! `vid_setmode <w> <h>`). Closures and vectors implement both, so tests and
//! small programs rarely need a dedicated type.

use crate::event::LogicalEvent;

/// Trait for receiving translated events.
pub trait EventSink {
    /// Called once per event, in delivery order.
    fn post(&mut self, event: LogicalEvent);
}

/// Implement EventSink for closures.
impl<F> EventSink for F
where
    F: FnMut(LogicalEvent),
{
    fn post(&mut self, event: LogicalEvent) {
        self(event);
    }
}

impl EventSink for Vec<LogicalEvent> {
    fn post(&mut self, event: LogicalEvent) {
        self.push(event);
    }
}

/// Trait for receiving console commands.
pub trait CommandSink {
    /// Called with a complete command line.
    fn command(&mut self, command: &str);
}

/// Implement CommandSink for closures.
impl<F> CommandSink for F
where
    F: FnMut(&str),
{
    fn command(&mut self, command: &str) {
        self(command);
    }
}

impl CommandSink for Vec<String> {
    fn command(&mut self, command: &str) {
        self.push(command.to_string());
    }
}
