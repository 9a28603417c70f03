//! Terminal renderer for Game of Life sessions.
//!
//! Renders into a simple framebuffer that is diffed and flushed to the
//! terminal through crossterm, rather than drawing cell by cell.
//!
//! - [`LifeView`] is pure: grid + session state → framebuffer
//! - [`TerminalRenderer`] owns the terminal and implements the engine's
//!   `Renderer` trait

pub mod fb;
pub mod life_view;
pub mod palette;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_engine as engine;
pub use tui_life_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use life_view::{LifeView, Viewport, ALIVE_CHAR};
pub use palette::{named_color, Palette};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
