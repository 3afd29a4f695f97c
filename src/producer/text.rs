//! Text producer: one line of the source per unit.

use super::{Produced, UnitProducer};
use crate::error::ScrollError;
use crate::terminal::LineOutput;
use std::io::{BufRead, Write};

/// Emits successive lines of a reader, without their terminators.
///
/// Lines are passed through byte for byte; the source does not need to be
/// UTF-8. A final line with no trailing newline is still emitted.
pub struct TextProducer<R, W: Write> {
    reader: R,
    line: Vec<u8>,
    output: LineOutput<W>,
}

impl<R: BufRead, W: Write> TextProducer<R, W> {
    /// Create a producer reading lines from `reader` into `output`.
    pub fn new(reader: R, output: LineOutput<W>) -> Self {
        Self {
            reader,
            line: Vec::new(),
            output,
        }
    }

    /// Recover the output sink.
    pub fn into_output(self) -> LineOutput<W> {
        self.output
    }
}

impl<R: BufRead, W: Write> UnitProducer for TextProducer<R, W> {
    fn produce_one(&mut self) -> Result<Produced, ScrollError> {
        self.line.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.line)
            .map_err(ScrollError::Read)?;
        if read == 0 {
            return Ok(Produced::Exhausted);
        }

        let mut body: &[u8] = &self.line;
        if let Some(rest) = body.strip_suffix(b"\n") {
            body = rest.strip_suffix(b"\r").unwrap_or(rest);
        }
        self.output.write_raw(body);
        self.output.finish_line().map_err(ScrollError::Write)?;
        Ok(Produced::Unit)
    }
}
