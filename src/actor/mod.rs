//! Actor Model: Message-passing concurrency for paced playback.
//!
//! This module implements a small actor system using crossbeam channels:
//! - **Input Actor**: Polls key events, posts toggle / abort signals
//! - **Ticker Actor**: Emits a tick every `rate`
//! - **Session**: The scheduler loop; the only place state changes
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  Toggle (slot 1)   ┌──────────────┐
//! │ Input Thread │ ─────────────────▶ │              │
//! │              │  Abort  (slot 1)   │   Session    │ ──▶ UnitProducer
//! │              │ ─────────────────▶ │  (main loop) │
//! └──────────────┘                    │              │
//! ┌──────────────┐   Tick  (slot 1)   │              │
//! │Ticker Thread │ ─────────────────▶ │              │
//! └──────────────┘                    └──────────────┘
//! ```

mod engine;
mod input;
mod messages;
mod session;
mod ticker;

pub use engine::{Engine, EngineConfig};
pub use input::{InputActor, KeyBindings};
pub use messages::{signal_channel, Posted, Signal, SignalReceiver, SignalSender, Tick};
pub use session::{Outcome, PlaybackSession, SessionEvent, Step};
pub use ticker::TickerActor;
