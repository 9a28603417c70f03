//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events into display-independent
//! [`InputEvent`](crate::types::InputEvent)s, maps those to session
//! [`Command`](crate::types::Command)s, and runs the blocking reader task that
//! feeds the event loop's input queue.

pub mod map;
pub mod reader;

pub use tui_life_types as types;

pub use map::{command_for, translate_event};
pub use reader::{spawn_reader, EventSource, Polled, ScriptedEvents, TerminalEvents, POLL_INTERVAL};
