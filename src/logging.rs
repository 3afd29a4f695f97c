//! Tracing subscriber setup.
//!
//! The filter comes from `SCROLLER_LOG` (same syntax as `RUST_LOG`). Without
//! it, only warnings reach stderr, since anything more would interleave with
//! the playback itself; a log file gets `info` and above.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SCROLLER_LOG";

/// Install the global subscriber. Calling it again is a no-op.
///
/// # Errors
///
/// Returns an error if `log_file` cannot be opened for appending.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let default_level = if log_file.is_some() { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(true);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .ok();
        }
        None => {
            builder.with_writer(io::stderr).try_init().ok();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scroller.log");
        init(Some(&path)).unwrap();
        init(Some(&path)).unwrap();
        init(None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_log_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("scroller.log");
        assert!(init(Some(&path)).is_err());
    }
}
