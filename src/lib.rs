//! # Scroller
//!
//! Paced playback of a file in the terminal.
//!
//! Scroller shows a file one unit at a time, either a line of text or a row
//! of hex and printable bytes, at a fixed rate. Space pauses and resumes,
//! Esc stops.
//!
//! ## Core Concepts
//!
//! - **Session**: a scheduler that merges a ticker and key signals into one
//!   loop on one thread
//! - **Unit producers**: interchangeable "emit the next unit" strategies
//! - **Actor model**: isolated threads for input and timing, talking over
//!   single-slot channels
//!
//! ## Example
//!
//! ```rust,ignore
//! use scroller::{Engine, EngineConfig, LineOutput, TextProducer};
//! use std::io::BufReader;
//!
//! let file = std::fs::File::open("notes.txt")?;
//! let engine = Engine::start(EngineConfig::default())?;
//! let out = LineOutput::with_ending(std::io::stdout(), scroller::LineEnding::CrLf);
//! let outcome = engine.run(TextProducer::new(BufReader::new(file), out))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod producer;
pub mod terminal;

// Re-exports for convenience
pub use actor::{Engine, EngineConfig, KeyBindings, Outcome, PlaybackSession, Signal, Tick};
pub use cli::Cli;
pub use config::{Config, ConfigError, Mode};
pub use error::ScrollError;
pub use format::ByteCluster;
pub use producer::{ChunkProducer, Produced, TailPolicy, TextProducer, UnitProducer};
pub use terminal::{LineEnding, LineOutput, RawTerminal};
