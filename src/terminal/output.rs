//! `LineOutput`: single-syscall line sink for playback units.

use std::io::{self, Write};

/// Terminator appended after every unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`, for cooked terminals, pipes and files.
    #[default]
    Lf,
    /// `\r\n`, required while the terminal is in raw mode.
    CrLf,
}

impl LineEnding {
    /// The terminator bytes.
    #[inline]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Lf => b"\n",
            Self::CrLf => b"\r\n",
        }
    }
}

/// Pre-allocated buffer for assembling one line of output.
///
/// A unit is accumulated here, then written with its terminator in a single
/// `write_all()` and flushed, so a line never reaches the terminal in pieces.
pub struct LineOutput<W: Write> {
    data: Vec<u8>,
    ending: LineEnding,
    writer: W,
}

impl<W: Write> LineOutput<W> {
    /// Create a sink terminating lines with `\n`.
    pub fn new(writer: W) -> Self {
        Self::with_ending(writer, LineEnding::Lf)
    }

    /// Create a sink with an explicit line ending.
    pub fn with_ending(writer: W, ending: LineEnding) -> Self {
        Self {
            data: Vec::with_capacity(256),
            ending,
            writer,
        }
    }

    /// The pending line, for in-place rendering.
    #[inline]
    pub fn line_mut(&mut self) -> &mut Vec<u8> {
        &mut self.data
    }

    /// Append raw bytes to the pending line.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Terminate the pending line, write it and flush.
    ///
    /// The pending line is cleared whether or not the write succeeds.
    pub fn finish_line(&mut self) -> io::Result<()> {
        self.data.extend_from_slice(self.ending.as_bytes());
        let result = self
            .writer
            .write_all(&self.data)
            .and_then(|()| self.writer.flush());
        self.data.clear();
        result
    }

    /// The configured line ending.
    #[inline]
    pub const fn ending(&self) -> LineEnding {
        self.ending
    }

    /// Borrow the underlying writer.
    #[inline]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
