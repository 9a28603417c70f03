//! TUI Life (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_life::{core,engine,input,term,types}`
//! and hosts the binary's outer layers: command line, configuration file,
//! user-facing reports and logger setup.

pub use tui_life_core as core;
pub use tui_life_engine as engine;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;

pub mod cli;
pub mod config;
pub mod logging;
pub mod report;
