//! Unit producers: the interchangeable "emit the next visible unit" step.
//!
//! The scheduler only sees [`UnitProducer`]; it never knows whether it is
//! paging lines of text or rows of hex.
//!
//! - [`TextProducer`]: one line of the source per call, verbatim.
//! - [`ChunkProducer`]: `width × 8` bytes per call, as hex + printable.

mod chunk;
mod text;

pub use chunk::{ChunkProducer, TailPolicy};
pub use text::TextProducer;

use crate::error::ScrollError;

/// What a successful call to [`UnitProducer::produce_one`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Produced {
    /// Exactly one unit was written to the output sink.
    Unit,
    /// The source has nothing left; nothing was written.
    Exhausted,
}

/// Produces one unit of output per call.
pub trait UnitProducer {
    /// Emit exactly one unit, or report exhaustion or failure.
    ///
    /// A failure is fatal: the caller must not call again.
    fn produce_one(&mut self) -> Result<Produced, ScrollError>;
}
