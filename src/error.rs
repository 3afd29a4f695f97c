//! Failure taxonomy for a playback run.
//!
//! Exhaustion of the source is not an error: it is reported as
//! [`Produced::Exhausted`](crate::producer::Produced::Exhausted) and ends a
//! session with [`Outcome::Exhausted`](crate::actor::Outcome::Exhausted).
//! Everything here is fatal; nothing is retried.

use std::io;
use std::path::PathBuf;

/// Errors that end a playback run.
#[derive(Debug, thiserror::Error)]
pub enum ScrollError {
    /// The input file could not be opened.
    #[error("failed to open file: {}: {source}", path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: io::Error,
    },

    /// Reading the source failed for a reason other than reaching its end.
    #[error("error during read: {0}")]
    Read(#[source] io::Error),

    /// Writing a unit to the output sink failed.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    /// The raw keyboard source could not be acquired.
    #[error("failed to initialize input handler: {0}")]
    ListenerInit(#[source] io::Error),

    /// The input listener went away without posting an abort.
    #[error("input listener stopped unexpectedly")]
    ListenerLost,

    /// The playback timer could not be started or stopped ticking.
    #[error("playback timer stopped")]
    TimerStopped,
}

impl ScrollError {
    /// Process exit code for this failure.
    pub const fn exit_code(&self) -> u8 {
        1
    }
}
