//! Engine: Main coordinator that ties actors together.
//!
//! The Engine owns the terminal for the duration of playback. It takes the
//! terminal into raw mode, spawns the input actor, and on [`Engine::run`]
//! spawns a ticker and drives a [`PlaybackSession`] to completion. Dropping
//! the Engine stops the actors and restores the terminal.

use super::input::{InputActor, KeyBindings};
use super::messages::{signal_channel, SignalReceiver};
use super::session::{Outcome, PlaybackSession};
use super::ticker::TickerActor;
use crate::config::Config;
use crate::error::ScrollError;
use crate::producer::UnitProducer;
use crate::terminal::RawTerminal;
use std::io;
use std::time::Duration;

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Interval between units.
    pub rate: Duration,
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Pause and abort keys.
    pub bindings: KeyBindings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rate: Duration::from_secs(1),
            input_poll_timeout: Duration::from_millis(50),
            bindings: KeyBindings::default(),
        }
    }
}

impl From<&Config> for EngineConfig {
    fn from(config: &Config) -> Self {
        Self {
            rate: config.rate,
            ..Self::default()
        }
    }
}

/// The playback engine.
pub struct Engine {
    /// Configuration.
    config: EngineConfig,
    /// Signals from the input actor.
    signals: SignalReceiver,
    /// Input actor handle.
    input_actor: Option<InputActor>,
    /// Raw mode guard; dropped last.
    terminal: Option<RawTerminal>,
}

impl Engine {
    /// Acquire the keyboard and start listening for keys.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollError::ListenerInit`] if raw mode cannot be entered or
    /// the input thread cannot be spawned.
    pub fn start(config: EngineConfig) -> Result<Self, ScrollError> {
        Self::start_with(config, || RawTerminal::enable().map(Some))
    }

    /// Like [`Engine::start`], with raw mode acquired by `acquire`.
    pub(crate) fn start_with(
        config: EngineConfig,
        acquire: impl FnOnce() -> io::Result<Option<RawTerminal>>,
    ) -> Result<Self, ScrollError> {
        let terminal = acquire().map_err(|e| {
            tracing::error!("failed to enter raw mode: {e}");
            ScrollError::ListenerInit(e)
        })?;

        let (signal_tx, signals) = signal_channel();
        let input_actor =
            InputActor::spawn(signal_tx, config.bindings, config.input_poll_timeout)
                .map_err(ScrollError::ListenerInit)?;

        Ok(Self {
            config,
            signals,
            input_actor: Some(input_actor),
            terminal,
        })
    }

    /// Play `producer` back at the configured rate until it is exhausted,
    /// the operator aborts, or a failure occurs.
    pub fn run<P: UnitProducer>(&self, producer: P) -> Result<Outcome, ScrollError> {
        let ticker = TickerActor::spawn(self.config.rate).map_err(|e| {
            tracing::error!("failed to spawn ticker: {e}");
            ScrollError::TimerStopped
        })?;

        let mut session = PlaybackSession::new(self.config.rate, producer);
        let result = session.run(ticker.receiver(), &self.signals);
        ticker.join();
        result
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }

        // Restore terminal state
        drop(self.terminal.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refuse(e: io::Error) -> impl FnOnce() -> io::Result<Option<RawTerminal>> {
        move || Err(e)
    }

    #[test]
    fn test_start_without_terminal_is_listener_init() {
        let no_tty = refuse(io::Error::other("not a terminal"));
        match Engine::start_with(EngineConfig::default(), no_tty) {
            Err(ScrollError::ListenerInit(e)) => assert_eq!(e.to_string(), "not a terminal"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("engine started without a terminal"),
        }
    }

    #[test]
    fn test_listener_init_exits_with_one() {
        let unsupported = refuse(io::Error::new(
            io::ErrorKind::Unsupported,
            "raw mode unavailable",
        ));
        let err = Engine::start_with(EngineConfig::default(), unsupported).err().unwrap();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("failed to initialize input handler"));
    }
}
