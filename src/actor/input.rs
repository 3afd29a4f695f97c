//! Input Actor: Dedicated thread for polling terminal key events.
//!
//! This actor runs in its own thread and uses crossterm's event polling to
//! turn key presses into [`Signal`]s for the scheduler. It never touches
//! playback state and never ends the process itself.

use super::messages::{Posted, Signal, SignalSender};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Which keys raise which signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Pause / resume playback.
    pub toggle: KeyCode,
    /// Stop playback.
    pub abort: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle: KeyCode::Char(' '),
            abort: KeyCode::Esc,
        }
    }
}

impl KeyBindings {
    /// Map a key event to a signal.
    ///
    /// Only presses count (not release or repeat). Ctrl-C always aborts,
    /// since raw mode keeps the terminal from turning it into SIGINT.
    pub fn classify(&self, key: &KeyEvent) -> Option<Signal> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Signal::Abort);
        }
        if key.code == self.abort {
            Some(Signal::Abort)
        } else if key.code == self.toggle {
            Some(Signal::Toggle)
        } else {
            None
        }
    }
}

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Signal channels to the scheduler.
    /// * `bindings` - Key to signal mapping.
    /// * `poll_timeout` - How long to wait for events before checking shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the input thread.
    pub fn spawn(
        sender: SignalSender,
        bindings: KeyBindings,
        poll_timeout: Duration,
    ) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("scroller-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, bindings, &shutdown_clone, poll_timeout);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    ///
    /// Exits on shutdown, after posting an abort, when the scheduler is
    /// gone, or on a terminal error. Dropping `sender` on exit is what lets
    /// the scheduler notice a listener that died.
    fn run_loop(
        sender: &SignalSender,
        bindings: KeyBindings,
        shutdown: &AtomicBool,
        poll_timeout: Duration,
    ) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Poll with timeout so the shutdown flag is observed
            let event = match event::poll(poll_timeout) {
                Ok(true) => event::read(),
                Ok(false) => continue,
                Err(e) => Err(e),
            };

            let key = match event {
                Ok(Event::Key(key)) => key,
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!("keyboard input failed: {e}");
                    break;
                }
            };

            let Some(signal) = bindings.classify(&key) else {
                continue;
            };

            match sender.post(signal) {
                Posted::Delivered => tracing::trace!(?signal, "signal posted"),
                Posted::Coalesced => tracing::debug!(?signal, "signal coalesced with pending one"),
                Posted::Disconnected => break,
            }

            if signal == Signal::Abort {
                break;
            }
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
