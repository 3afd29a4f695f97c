//! Terminal plumbing: raw-mode ownership and the line output sink.

mod output;

pub use output::{LineEnding, LineOutput};

use crossterm::terminal;
use std::io;

/// Holds the terminal in raw mode for as long as it lives.
///
/// Raw mode delivers key presses without waiting for Enter and stops the
/// terminal driver from echoing them. Cooked mode is restored on drop, on
/// every exit path that unwinds through the owner.
#[derive(Debug)]
pub struct RawTerminal {
    _private: (),
}

impl RawTerminal {
    /// Switch the controlling terminal into raw mode.
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!("terminal raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("failed to restore terminal mode: {e}");
        }
    }
}
