//! Playback scheduler: one loop, one thread, every effect serialised.
//!
//! The session waits on whichever of {tick, toggle, abort} is ready first.
//! A tick emits one unit unless playback is paused; ticks seen while paused
//! are dropped, so resuming never catches up. Only this loop reads or
//! writes the pause flag, and only this loop decides that playback is over.

use super::messages::{SignalReceiver, Tick};
use crate::error::ScrollError;
use crate::producer::{Produced, UnitProducer};
use crossbeam_channel::{select, Receiver};
use std::time::Duration;

/// How a session ended without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The producer ran out of input.
    Exhausted,
    /// The operator pressed the abort key.
    Aborted,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Exhausted => 0,
            Self::Aborted => 1,
        }
    }
}

/// One thing the scheduler's wait can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The timer fired.
    Tick(Tick),
    /// Flip the pause state.
    Toggle,
    /// Stop now.
    Abort,
}

/// Whether the loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Wait for the next event.
    Continue,
    /// Playback is over.
    Finished(Outcome),
}

/// The scheduler instance.
pub struct PlaybackSession<P> {
    rate: Duration,
    paused: bool,
    units: u64,
    producer: P,
}

impl<P: UnitProducer> PlaybackSession<P> {
    /// Bind a producer to a session ticking every `rate`.
    pub const fn new(rate: Duration, producer: P) -> Self {
        Self {
            rate,
            paused: false,
            units: 0,
            producer,
        }
    }

    /// Interval between units.
    #[inline]
    pub const fn rate(&self) -> Duration {
        self.rate
    }

    /// Whether ticks are currently ignored.
    #[inline]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Units emitted so far.
    #[inline]
    pub const fn units_emitted(&self) -> u64 {
        self.units
    }

    /// Recover the producer.
    pub fn into_producer(self) -> P {
        self.producer
    }

    /// Apply one event.
    ///
    /// A producer failure is returned as `Err`; the session must not be
    /// driven further after that.
    pub fn handle(&mut self, event: SessionEvent) -> Result<Step, ScrollError> {
        match event {
            SessionEvent::Toggle => {
                self.paused = !self.paused;
                tracing::debug!(paused = self.paused, "playback toggled");
                Ok(Step::Continue)
            }
            SessionEvent::Tick(tick) if self.paused => {
                tracing::trace!(seq = tick.seq, "tick while paused");
                Ok(Step::Continue)
            }
            SessionEvent::Tick(tick) => {
                tracing::trace!(seq = tick.seq, "tick");
                match self.producer.produce_one() {
                    Ok(Produced::Unit) => {
                        self.units += 1;
                        Ok(Step::Continue)
                    }
                    Ok(Produced::Exhausted) => {
                        tracing::info!(units = self.units, "source exhausted");
                        Ok(Step::Finished(Outcome::Exhausted))
                    }
                    Err(e) => {
                        tracing::error!(units = self.units, "playback failed: {e}");
                        Err(e)
                    }
                }
            }
            SessionEvent::Abort => {
                tracing::info!(units = self.units, paused = self.paused, "playback aborted");
                Ok(Step::Finished(Outcome::Aborted))
            }
        }
    }

    /// Run until the source is exhausted, the operator aborts, or a
    /// failure occurs.
    pub fn run(
        &mut self,
        ticks: &Receiver<Tick>,
        signals: &SignalReceiver,
    ) -> Result<Outcome, ScrollError> {
        tracing::info!(rate = ?self.rate, "playback started");
        loop {
            let event = Self::next_event(ticks, signals)?;
            if let Step::Finished(outcome) = self.handle(event)? {
                return Ok(outcome);
            }
        }
    }

    /// Block until one of the sources is ready.
    fn next_event(
        ticks: &Receiver<Tick>,
        signals: &SignalReceiver,
    ) -> Result<SessionEvent, ScrollError> {
        select! {
            recv(ticks) -> tick => tick
                .map(SessionEvent::Tick)
                .map_err(|_| ScrollError::TimerStopped),
            recv(signals.toggle) -> msg => match msg {
                Ok(()) => Ok(SessionEvent::Toggle),
                Err(_) => Self::listener_gone(signals),
            },
            recv(signals.abort) -> msg => match msg {
                Ok(()) => Ok(SessionEvent::Abort),
                Err(_) => Self::listener_gone(signals),
            },
        }
    }

    /// The listener dropped its channels; honour an abort it left behind.
    fn listener_gone(signals: &SignalReceiver) -> Result<SessionEvent, ScrollError> {
        if signals.abort_pending() {
            Ok(SessionEvent::Abort)
        } else {
            Err(ScrollError::ListenerLost)
        }
    }
}
