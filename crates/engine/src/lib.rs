//! Session engine: state machine, scheduler and render trigger.
//!
//! Two producer tasks feed one consumer:
//!
//! - the input reader (see `tui_life_input::spawn_reader`) forwards key events,
//! - the [`ticker`] sends one tick per period,
//! - the [`EventLoop`] consumes both, mutates the [`Game`], and draws through a
//!   [`Renderer`] whenever the grid is dirty.
//!
//! Shutdown goes through the broadcast [`QuitSignal`]; the renderer is wrapped
//! in a [`DisplayGuard`] so the display is released on every exit path.

pub mod display;
pub mod event_loop;
pub mod game;
pub mod signal;
pub mod ticker;

pub use tui_life_core as core;
pub use tui_life_input as input;
pub use tui_life_types as types;

pub use display::{DisplayGuard, Renderer};
pub use event_loop::{run_session, EventLoop, INPUT_QUEUE_CAPACITY};
pub use game::{Game, Outcome};
pub use signal::QuitSignal;
pub use ticker::{spawn_ticker, tick_period};
