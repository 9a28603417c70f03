//! Broadcast quit signal.
//!
//! A single transition from unset to set; it is never cleared. Tasks hold a
//! `watch::Receiver` and check it between waits.

use std::sync::Arc;

use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct QuitSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl QuitSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Set the signal. Idempotent.
    pub fn trigger(&self) {
        if !self.tx.send_replace(true) {
            log::debug!("quit signaled");
        }
    }

    pub fn is_set(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for QuitSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_see_the_transition() {
        let quit = QuitSignal::new();
        let mut rx = quit.subscribe();
        assert!(!*rx.borrow());

        let remote = quit.clone();
        remote.trigger();
        rx.changed().await.unwrap();
        assert!(*rx.borrow());
        assert!(quit.is_set());

        // Triggering again is harmless.
        quit.trigger();
        assert!(quit.is_set());
    }
}
