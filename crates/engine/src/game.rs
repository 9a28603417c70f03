//! Game module - the session state machine
//!
//! `Game` owns the grid, the simulation and the pause/running flags. It is the
//! only writer of any of them; the event loop feeds it commands and ticks.
//!
//! ```text
//! Paused --toggle--> Running --toggle--> Paused
//! Paused --step----> Paused   (one generation)
//! Running --tick---> Running  (one generation)
//! any ----quit-----> Terminated
//! ```

use std::num::NonZeroU32;

use crate::core::{Grid, Simulation};
use crate::input::command_for;
use crate::types::{Command, InputEvent, RunState, SessionConfig, SessionState};

/// What the event loop should do after the game handled something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing visible changed
    Ignored,
    /// State changed and should be drawn now
    Render,
    /// Display was resized; drop diff state and redraw
    Redraw,
    /// Session is over
    Quit,
}

#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    simulation: Simulation,
    running: bool,
    paused: bool,
    tick_rate: NonZeroU32,
}

impl Game {
    /// Start a session on a seeded grid. Sessions begin paused at turn 0.
    pub fn new(grid: Grid, config: &SessionConfig) -> Self {
        Self {
            grid,
            simulation: Simulation::new(),
            running: true,
            paused: true,
            tick_rate: config.tick_rate(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Effective ticks per second (never zero).
    pub fn tick_rate(&self) -> NonZeroU32 {
        self.tick_rate
    }

    pub fn turn(&self) -> u64 {
        self.simulation.turn()
    }

    pub fn run_state(&self) -> RunState {
        self.state().run_state()
    }

    pub fn is_terminated(&self) -> bool {
        !self.running
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            running: self.running,
            paused: self.paused,
            turn: self.simulation.turn(),
            tick_rate_hz: self.tick_rate.get(),
        }
    }

    /// Apply a user command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        if !self.running {
            return Outcome::Ignored;
        }
        log::trace!("command {} at turn {}", command.as_str(), self.turn());

        match command {
            Command::TogglePause => {
                self.paused = !self.paused;
                log::debug!("toggled pause: now {}", self.run_state().as_str());
                Outcome::Render
            }
            Command::Step if self.paused => {
                self.simulation.advance(&mut self.grid);
                Outcome::Render
            }
            Command::Step => Outcome::Ignored,
            Command::Quit => {
                self.running = false;
                log::info!("quit requested at turn {}", self.turn());
                Outcome::Quit
            }
        }
    }

    /// Handle a raw input event.
    pub fn handle_input(&mut self, event: &InputEvent) -> Outcome {
        if let InputEvent::Resize { width, height } = *event {
            log::debug!("display resized to {}x{}", width, height);
            self.grid.mark_dirty();
            return Outcome::Redraw;
        }

        match command_for(event) {
            Some(command) => self.apply(command),
            None => Outcome::Ignored,
        }
    }

    /// Handle one timer tick. Returns true if a generation was advanced.
    pub fn on_tick(&mut self) -> bool {
        if !self.running || self.paused {
            return false;
        }
        self.simulation.advance(&mut self.grid);
        true
    }
}
