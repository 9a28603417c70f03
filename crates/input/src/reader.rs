//! Input reader task.
//!
//! Runs on a blocking thread, pulls events from an [`EventSource`] and forwards
//! them into the main loop's queue. The source is polled with a short timeout
//! so the quit signal is observed between waits.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::map::translate_event;
use crate::types::InputEvent;

/// How long a single poll blocks before the quit signal is re-checked.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Result of one poll of an event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polled {
    Event(InputEvent),
    /// Nothing arrived within the timeout.
    Idle,
    /// The source is gone; no more events will arrive.
    Closed,
}

/// A blocking source of input events.
pub trait EventSource: Send + 'static {
    fn poll_event(&mut self, timeout: Duration) -> Result<Polled>;
}

/// Reads events from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll_event(&mut self, timeout: Duration) -> Result<Polled> {
        if !event::poll(timeout).context("polling terminal events")? {
            return Ok(Polled::Idle);
        }
        let raw = event::read().context("reading terminal event")?;
        Ok(translate_event(raw).map_or(Polled::Idle, Polled::Event))
    }
}

/// Replays a fixed list of events, then reports `Closed`.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<InputEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self, _timeout: Duration) -> Result<Polled> {
        Ok(self.events.pop_front().map_or(Polled::Closed, Polled::Event))
    }
}

/// Spawn the reader on tokio's blocking pool.
///
/// The task ends when quit is signaled, the source closes, or the receiving
/// side of `tx` is dropped. Source errors end the task with that error.
pub fn spawn_reader<S: EventSource>(
    source: S,
    tx: mpsc::Sender<InputEvent>,
    quit: watch::Receiver<bool>,
) -> JoinHandle<Result<()>> {
    tokio::task::spawn_blocking(move || read_loop(source, tx, quit))
}

fn read_loop<S: EventSource>(
    mut source: S,
    tx: mpsc::Sender<InputEvent>,
    quit: watch::Receiver<bool>,
) -> Result<()> {
    log::debug!("input reader started");
    loop {
        if *quit.borrow() {
            log::debug!("input reader stopping: quit signaled");
            return Ok(());
        }

        match source.poll_event(POLL_INTERVAL) {
            Ok(Polled::Event(ev)) => {
                if tx.blocking_send(ev).is_err() {
                    log::debug!("input reader stopping: queue closed");
                    return Ok(());
                }
            }
            Ok(Polled::Idle) => {}
            Ok(Polled::Closed) => {
                log::debug!("input reader stopping: source closed");
                return Ok(());
            }
            Err(e) => {
                log::warn!("input reader failed: {:#}", e);
                return Err(e);
            }
        }
    }
}
