//! Message types for actor communication.
//!
//! The input listener talks to the scheduler through two single-slot
//! channels: one for pause toggles, one for abort. Posting never blocks the
//! listener; a toggle posted while another is still pending is coalesced.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use std::time::Duration;

/// A tick event sent at regular intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Tick number (monotonically increasing, gaps mean dropped ticks).
    pub seq: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

/// Operator requests raised by the input listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Flip the pause state.
    Toggle,
    /// End playback now.
    Abort,
}

/// Result of posting a [`Signal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Posted {
    /// The signal is queued for the scheduler.
    Delivered,
    /// A signal of the same kind was already pending; this one was dropped.
    Coalesced,
    /// The scheduler is gone.
    Disconnected,
}

/// Listener side of the signal channels.
#[derive(Debug, Clone)]
pub struct SignalSender {
    toggle: Sender<()>,
    abort: Sender<()>,
}

/// Scheduler side of the signal channels.
#[derive(Debug)]
pub struct SignalReceiver {
    pub(crate) toggle: Receiver<()>,
    pub(crate) abort: Receiver<()>,
}

/// Create the toggle and abort channels, each with room for one signal.
pub fn signal_channel() -> (SignalSender, SignalReceiver) {
    let (toggle_tx, toggle_rx) = bounded(1);
    let (abort_tx, abort_rx) = bounded(1);
    (
        SignalSender {
            toggle: toggle_tx,
            abort: abort_tx,
        },
        SignalReceiver {
            toggle: toggle_rx,
            abort: abort_rx,
        },
    )
}

impl SignalSender {
    /// Post a signal without blocking.
    pub fn post(&self, signal: Signal) -> Posted {
        let tx = match signal {
            Signal::Toggle => &self.toggle,
            Signal::Abort => &self.abort,
        };
        match tx.try_send(()) {
            Ok(()) => Posted::Delivered,
            Err(TrySendError::Full(())) => Posted::Coalesced,
            Err(TrySendError::Disconnected(())) => Posted::Disconnected,
        }
    }
}

impl SignalReceiver {
    /// Take a pending abort, if any, without blocking.
    pub fn abort_pending(&self) -> bool {
        self.abort.try_recv().is_ok()
    }

    /// Number of toggles waiting to be applied (0 or 1).
    pub fn pending_toggles(&self) -> usize {
        self.toggle.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rapid_toggles_coalesce() {
        let (tx, rx) = signal_channel();
        assert_eq!(tx.post(Signal::Toggle), Posted::Delivered);
        assert_eq!(tx.post(Signal::Toggle), Posted::Coalesced);
        assert_eq!(tx.post(Signal::Toggle), Posted::Coalesced);
        assert_eq!(rx.pending_toggles(), 1);

        assert!(rx.toggle.try_recv().is_ok());
        assert!(rx.toggle.try_recv().is_err());
        assert_eq!(tx.post(Signal::Toggle), Posted::Delivered);
    }

    #[test]
    fn test_abort_does_not_share_the_toggle_slot() {
        let (tx, rx) = signal_channel();
        assert_eq!(tx.post(Signal::Toggle), Posted::Delivered);
        assert_eq!(tx.post(Signal::Abort), Posted::Delivered);
        assert!(rx.abort_pending());
        assert!(!rx.abort_pending());
        assert_eq!(rx.pending_toggles(), 1);
    }

    #[test]
    fn test_post_after_receiver_dropped() {
        let (tx, rx) = signal_channel();
        drop(rx);
        assert_eq!(tx.post(Signal::Toggle), Posted::Disconnected);
        assert_eq!(tx.post(Signal::Abort), Posted::Disconnected);
    }
}
