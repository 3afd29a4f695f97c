//! Ticker Actor: Dedicated thread for generating playback ticks.
//!
//! The ticker provides the regular "tick" that paces playback. It runs on
//! its own thread so the scheduler can wait on ticks and operator signals
//! with a single `select!`.

use super::messages::Tick;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Longest the ticker sleeps before re-checking its shutdown flag.
const SHUTDOWN_POLL: Duration = Duration::from_millis(5);

/// Ticker actor that generates regular timing events.
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for tick events.
    tick_rx: Receiver<Tick>,
}

impl TickerActor {
    /// Spawn a new ticker actor firing every `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the ticker thread.
    pub fn spawn(interval: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // Single slot: ticks are dropped, never queued, when the consumer lags
        let (tick_tx, tick_rx) = bounded(1);

        let handle = thread::Builder::new()
            .name("scroller-ticker".to_string())
            .spawn(move || {
                Self::run_loop(&tick_tx, &shutdown_clone, interval);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        })
    }

    /// Get a reference to the tick receiver.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main ticker loop.
    fn run_loop(tick_tx: &Sender<Tick>, shutdown: &AtomicBool, interval: Duration) {
        let start = Instant::now();
        let mut seq = 0u64;
        let mut next_tick = start + interval;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let now = Instant::now();
            if now >= next_tick {
                let tick = Tick {
                    seq,
                    elapsed: now - start,
                };

                // Non-blocking send - a full slot means the previous tick is
                // still unconsumed, so this one is skipped
                if let Err(TrySendError::Disconnected(_)) = tick_tx.try_send(tick) {
                    break;
                }

                seq += 1;
                next_tick += interval;

                // Behind schedule: restart the cadence rather than burst
                if next_tick < now {
                    next_tick = now + interval;
                }
            } else {
                thread::sleep((next_tick - now).min(SHUTDOWN_POLL));
            }
        }
        tracing::trace!(ticks = seq, "ticker stopped");
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_basic() {
        let ticker = TickerActor::spawn(Duration::from_millis(10)).unwrap();

        let tick = ticker.receiver().recv_timeout(Duration::from_millis(200));
        assert!(tick.is_ok());
        assert_eq!(tick.unwrap().seq, 0);

        let tick2 = ticker.receiver().recv_timeout(Duration::from_millis(200));
        assert!(tick2.is_ok());
        assert!(tick2.unwrap().seq >= 1);

        ticker.join();
    }

    #[test]
    fn test_ticks_do_not_accumulate() {
        let ticker = TickerActor::spawn(Duration::from_millis(5)).unwrap();

        // Many intervals pass while nobody is listening
        thread::sleep(Duration::from_millis(60));
        assert!(ticker.receiver().len() <= 1);

        ticker.join();
    }

    #[test]
    fn test_ticker_respects_interval() {
        let interval = Duration::from_millis(20);
        let ticker = TickerActor::spawn(interval).unwrap();

        let first = ticker.receiver().recv_timeout(Duration::from_millis(500)).unwrap();
        assert!(first.elapsed >= interval);

        ticker.join();
    }

    #[test]
    fn test_ticker_shutdown() {
        let ticker = TickerActor::spawn(Duration::from_millis(100)).unwrap();
        ticker.shutdown();

        thread::sleep(Duration::from_millis(20));
        ticker.join();
    }
}
