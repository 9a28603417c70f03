//! Fixed-rate tick source.
//!
//! Ticks go through a capacity-1 channel with `try_send`, so a slow consumer
//! sees at most one pending tick instead of a backlog.

use std::num::NonZeroU32;
use std::time::Duration;

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

const MIN_TICK_PERIOD: Duration = Duration::from_nanos(1);

/// Period between ticks for `rate` ticks per second.
///
/// Never zero: rates above one per nanosecond tick every nanosecond.
pub fn tick_period(rate: NonZeroU32) -> Duration {
    (Duration::from_secs(1) / rate.get()).max(MIN_TICK_PERIOD)
}

/// Spawn the ticker task. It stops when quit is set or the receiver is dropped.
pub fn spawn_ticker(
    rate: NonZeroU32,
    mut quit: watch::Receiver<bool>,
) -> (JoinHandle<()>, mpsc::Receiver<()>) {
    let (tx, rx) = mpsc::channel(1);
    let period = tick_period(rate);

    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately; the first generation should
        // come one full period after start.
        interval.tick().await;
        log::debug!("ticker started: {:?} per tick", period);

        loop {
            if *quit.borrow() {
                break;
            }
            tokio::select! {
                _ = interval.tick() => match tx.try_send(()) {
                    Ok(()) | Err(TrySendError::Full(())) => {}
                    Err(TrySendError::Closed(())) => break,
                },
                changed = quit.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }
        log::debug!("ticker stopped");
    });

    (handle, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_divides_one_second() {
        assert_eq!(tick_period(NonZeroU32::new(1).unwrap()), Duration::from_secs(1));
        assert_eq!(tick_period(NonZeroU32::new(10).unwrap()), Duration::from_millis(100));
        assert_eq!(
            tick_period(NonZeroU32::new(23).unwrap()),
            Duration::from_nanos(43_478_260)
        );
    }

    #[test]
    fn period_is_never_zero() {
        let rate = NonZeroU32::new(2_000_000_000).unwrap();
        assert_eq!(tick_period(rate), Duration::from_nanos(1));
        assert_eq!(tick_period(NonZeroU32::MAX), Duration::from_nanos(1));
    }

    #[tokio::test]
    async fn huge_rate_still_ticks() {
        let (quit_tx, quit_rx) = watch::channel(false);
        let (handle, mut rx) = spawn_ticker(NonZeroU32::MAX, quit_rx);

        for _ in 0..2 {
            tokio::time::timeout(Duration::from_secs(2), rx.recv())
                .await
                .expect("timeout waiting for tick")
                .expect("ticker closed early");
        }

        quit_tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("ticker did not stop")
            .unwrap();
    }

    #[tokio::test]
    async fn ticks_until_quit() {
        let (quit_tx, quit_rx) = watch::channel(false);
        let (handle, mut rx) = spawn_ticker(NonZeroU32::new(500).unwrap(), quit_rx);

        for _ in 0..3 {
            tokio::time::timeout(Duration::from_secs(2), rx.recv())
                .await
                .expect("timeout waiting for tick")
                .expect("ticker closed early");
        }

        quit_tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("ticker did not stop")
            .unwrap();
    }

    #[tokio::test]
    async fn stops_when_receiver_dropped() {
        let (_quit_tx, quit_rx) = watch::channel(false);
        let (handle, rx) = spawn_ticker(NonZeroU32::new(500).unwrap(), quit_rx);
        drop(rx);
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("ticker did not stop")
            .unwrap();
    }
}
