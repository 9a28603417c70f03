//! Core types module - shared data structures and constants
//!
//! This module defines the plain data passed between the simulation, the
//! event loop, the input layer and the renderer. Nothing here performs I/O.
//!
//! # Session Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_RATE_HZ` | 23 | Generations per second when the configured rate is 0 |
//! | `DEFAULT_ALIVE_PROBABILITY` | 0.25 | Chance of a cell starting alive in a random fill |
//! | `RANDOM_PATTERN` | `"random"` | Sentinel preset name for a random fill |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{Command, InputEvent, SessionConfig, DEFAULT_TICK_RATE_HZ};
//!
//! // A zero rate is corrected before any timer is built
//! let config = SessionConfig::new("blinker", 0);
//! assert_eq!(config.tick_rate().get(), DEFAULT_TICK_RATE_HZ);
//!
//! assert_eq!(Command::TogglePause.as_str(), "togglePause");
//!
//! assert_eq!(InputEvent::Char('p'), InputEvent::Char('p'));
//! ```

use std::fmt;
use std::num::NonZeroU32;

/// Generations per second used when no positive rate is configured.
pub const DEFAULT_TICK_RATE_HZ: u32 = 23;

/// Probability of a cell being alive after a random fill.
pub const DEFAULT_ALIVE_PROBABILITY: f32 = 0.25;

/// Preset name that selects a random fill.
pub const RANDOM_PATTERN: &str = "random";

/// User commands derived from keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Switch between paused and running
    TogglePause,
    /// Advance exactly one generation (only honoured while paused)
    Step,
    /// End the session
    Quit,
}

impl Command {
    /// Name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::TogglePause => "togglePause",
            Command::Step => "step",
            Command::Quit => "quit",
        }
    }
}

/// Lifecycle state of a session.
///
/// The cycle is: Paused ⇄ Running, and either → Terminated (final).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Paused,
    Running,
    Terminated,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Paused => "PAUSED",
            RunState::Running => "RUNNING",
            RunState::Terminated => "TERMINATED",
        }
    }
}

/// Read-only snapshot of the session record owned by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub running: bool,
    pub paused: bool,
    pub turn: u64,
    pub tick_rate_hz: u32,
}

impl SessionState {
    pub fn run_state(&self) -> RunState {
        if !self.running {
            RunState::Terminated
        } else if self.paused {
            RunState::Paused
        } else {
            RunState::Running
        }
    }
}

/// Immutable session configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Preset name; empty or unknown names fall back to a random fill.
    pub preset: String,
    /// Requested generations per second; 0 selects the default.
    pub tick_rate_hz: u32,
}

impl SessionConfig {
    pub fn new(preset: impl Into<String>, tick_rate_hz: u32) -> Self {
        Self {
            preset: preset.into(),
            tick_rate_hz,
        }
    }

    /// Effective tick rate, with 0 corrected to [`DEFAULT_TICK_RATE_HZ`].
    pub fn tick_rate(&self) -> NonZeroU32 {
        NonZeroU32::new(self.tick_rate_hz)
            .or(NonZeroU32::new(DEFAULT_TICK_RATE_HZ))
            .unwrap_or(NonZeroU32::MIN)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(RANDOM_PATTERN, DEFAULT_TICK_RATE_HZ)
    }
}

/// Non-character keys the core cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    Escape,
    /// Ctrl-C
    Interrupt,
    Enter,
    Other,
}

/// Display-independent input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Special(SpecialKey),
    Resize { width: u16, height: u16 },
}

/// Error taxonomy shared by every crate in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Zero-sized grid, or a replacement matrix whose shape differs from the grid.
    InvalidDimensions { width: usize, height: usize },
    /// Cell access outside the grid; callers must check `in_bounds` first.
    OutOfBounds { x: i32, y: i32 },
    /// Preset name that matches nothing; recoverable, falls back to random.
    UnknownPattern(String),
    DisplayInit(String),
    DisplayTeardown(String),
}

impl LifeError {
    /// Whether the session can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LifeError::UnknownPattern(_))
    }
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
            LifeError::OutOfBounds { x, y } => write!(f, "cell ({}, {}) is out of bounds", x, y),
            LifeError::UnknownPattern(name) => write!(f, "unknown pattern '{}'", name),
            LifeError::DisplayInit(msg) => write!(f, "cannot initialise the display: {}", msg),
            LifeError::DisplayTeardown(msg) => write!(f, "cannot release the display: {}", msg),
        }
    }
}

impl std::error::Error for LifeError {}
