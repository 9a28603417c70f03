//! The main loop: sole consumer of input and ticks, sole writer of game state.
//!
//! Each iteration draws the grid if it is dirty, then waits for whichever of
//! quit / input / tick is ready first. Waiting is an `await`, so an idle
//! session costs nothing. Input is preferred over ticks so a quit key is never
//! starved by a fast timer.

use anyhow::{Context, Result};
use tokio::sync::{mpsc, watch};

use crate::display::{DisplayGuard, Renderer};
use crate::game::{Game, Outcome};
use crate::signal::QuitSignal;
use crate::ticker::spawn_ticker;
use crate::types::{Command, InputEvent, LifeError, SessionState};

/// Capacity of the input queue between the reader task and the loop.
pub const INPUT_QUEUE_CAPACITY: usize = 64;

pub struct EventLoop<R: Renderer> {
    game: Game,
    display: DisplayGuard<R>,
    input_rx: mpsc::Receiver<InputEvent>,
    tick_rx: mpsc::Receiver<()>,
    quit: QuitSignal,
    quit_rx: watch::Receiver<bool>,
}

impl<R: Renderer> EventLoop<R> {
    /// `renderer` must already own the display; it is released when the loop ends.
    pub fn new(
        game: Game,
        renderer: R,
        input_rx: mpsc::Receiver<InputEvent>,
        tick_rx: mpsc::Receiver<()>,
        quit: QuitSignal,
    ) -> Self {
        let quit_rx = quit.subscribe();
        Self {
            game,
            display: DisplayGuard::new(renderer),
            input_rx,
            tick_rx,
            quit,
            quit_rx,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run until quit. Returns the final (terminated) session state.
    ///
    /// The display is released exactly once whether the loop ends normally,
    /// with an error, or by unwinding.
    pub async fn run(mut self) -> Result<SessionState> {
        let result = self.drive().await;
        self.quit.trigger();

        let released = self
            .display
            .release()
            .map_err(|e| LifeError::DisplayTeardown(format!("{:#}", e)));

        let state = result?;
        released?;
        log::info!("session ended at turn {}", state.turn);
        Ok(state)
    }

    async fn drive(&mut self) -> Result<SessionState> {
        log::info!(
            "session started: {}x{} grid, {} ticks/s",
            self.game.grid().width(),
            self.game.grid().height(),
            self.game.state().tick_rate_hz
        );

        loop {
            if self.game.grid().is_dirty() {
                self.redraw()?;
            }
            if self.game.is_terminated() {
                break;
            }
            if *self.quit_rx.borrow() {
                self.game.apply(Command::Quit);
                break;
            }

            tokio::select! {
                biased;

                changed = self.quit_rx.changed() => {
                    if changed.is_err() || *self.quit_rx.borrow() {
                        self.game.apply(Command::Quit);
                    }
                }

                event = self.input_rx.recv() => match event {
                    Some(event) => match self.game.handle_input(&event) {
                        Outcome::Render => self.redraw()?,
                        Outcome::Redraw => {
                            self.display.renderer_mut().invalidate();
                            self.redraw()?;
                        }
                        Outcome::Quit | Outcome::Ignored => {}
                    },
                    None => {
                        log::info!("input closed, ending session");
                        self.game.apply(Command::Quit);
                    }
                },

                Some(()) = self.tick_rx.recv() => {
                    if self.game.on_tick() {
                        self.redraw()?;
                    }
                }
            }
        }

        Ok(self.game.state())
    }

    fn redraw(&mut self) -> Result<()> {
        let state = self.game.state();
        self.display
            .draw(self.game.grid_mut(), &state)
            .context("drawing frame")
    }
}

impl<R: Renderer> Drop for EventLoop<R> {
    fn drop(&mut self) {
        // Stops the ticker and reader on every exit, unwinding included.
        self.quit.trigger();
    }
}

/// Run a session with a real ticker at the game's configured rate.
///
/// The caller owns the input side: it creates the queue, spawns a reader that
/// watches `quit`, and passes the receiving end here.
pub async fn run_session<R: Renderer>(
    game: Game,
    renderer: R,
    input_rx: mpsc::Receiver<InputEvent>,
    quit: QuitSignal,
) -> Result<SessionState> {
    let (ticker, tick_rx) = spawn_ticker(game.tick_rate(), quit.subscribe());
    let result = EventLoop::new(game, renderer, input_rx, tick_rx, quit)
        .run()
        .await;

    if let Err(e) = ticker.await {
        log::warn!("ticker task failed: {}", e);
    }
    result
}
