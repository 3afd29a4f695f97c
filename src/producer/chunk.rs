//! Chunk producer: fixed-width hex rows, hexdump style.

use super::{Produced, UnitProducer};
use crate::error::ScrollError;
use crate::format::{self, CLUSTER_LEN};
use crate::terminal::LineOutput;
use std::io::{self, Read, Write};

/// How the short final fill of a source is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TailPolicy {
    /// Render only the bytes actually read, padding the hex column so the
    /// printable column stays aligned.
    #[default]
    Truncate,
    /// Render the whole buffer, including bytes left over from the
    /// previous fill.
    Stale,
}

/// Emits `width × 8` bytes of a reader per unit as a hex + printable row.
pub struct ChunkProducer<R, W: Write> {
    reader: R,
    buf: Box<[u8]>,
    width: usize,
    tail: TailPolicy,
    finished: bool,
    output: LineOutput<W>,
}

impl<R: Read, W: Write> ChunkProducer<R, W> {
    /// Create a producer rendering `width` clusters of 8 bytes per row.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    pub fn new(reader: R, width: usize, tail: TailPolicy, output: LineOutput<W>) -> Self {
        assert!(width > 0, "chunk width must be positive");
        Self {
            reader,
            buf: vec![0; width * CLUSTER_LEN].into_boxed_slice(),
            width,
            tail,
            finished: false,
            output,
        }
    }

    /// Bytes consumed per unit.
    pub fn chunk_len(&self) -> usize {
        self.buf.len()
    }

    /// Recover the output sink.
    pub fn into_output(self) -> LineOutput<W> {
        self.output
    }

    /// Fill the buffer until it is full or the reader reports end of input.
    fn fill(&mut self) -> io::Result<usize> {
        let mut filled = 0;
        while filled < self.buf.len() {
            match self.reader.read(&mut self.buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read, W: Write> UnitProducer for ChunkProducer<R, W> {
    fn produce_one(&mut self) -> Result<Produced, ScrollError> {
        if self.finished {
            return Ok(Produced::Exhausted);
        }

        let filled = self.fill().map_err(ScrollError::Read)?;
        if filled == 0 {
            self.finished = true;
            return Ok(Produced::Exhausted);
        }

        let shown = if filled < self.buf.len() {
            self.finished = true;
            tracing::debug!(filled, chunk = self.buf.len(), tail = ?self.tail, "short final chunk");
            match self.tail {
                TailPolicy::Truncate => &self.buf[..filled],
                TailPolicy::Stale => &self.buf[..],
            }
        } else {
            &self.buf[..]
        };

        format::write_row(self.output.line_mut(), shown, self.width);
        self.output.finish_line().map_err(ScrollError::Write)?;
        Ok(Produced::Unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producer::testing::{FailingReader, Trickle};
    use std::io::Cursor;

    fn producer(
        input: &[u8],
        width: usize,
        tail: TailPolicy,
    ) -> ChunkProducer<Cursor<Vec<u8>>, Vec<u8>> {
        ChunkProducer::new(
            Cursor::new(input.to_vec()),
            width,
            tail,
            LineOutput::new(Vec::new()),
        )
    }

    #[test]
    fn test_sixteen_bytes_width_two() {
        let input: Vec<u8> = (0x00..=0x0f).collect();
        let mut p = producer(&input, 2, TailPolicy::Truncate);
        assert_eq!(p.chunk_len(), 16);

        assert_eq!(p.produce_one().unwrap(), Produced::Unit);
        assert_eq!(p.produce_one().unwrap(), Produced::Exhausted);

        let mut expected = b"00 01 02 03 04 05 06 07  08 09 0a 0b 0c 0d 0e 0f\t".to_vec();
        expected.extend_from_slice(b"\x00\x01\x02\x03\x04\x05\x06\x07\x08..\x0b\x0c.\x0e\x0f");
        expected.push(b'\n');
        assert_eq!(p.into_output().into_inner(), expected);
    }

    #[test]
    fn test_whitespace_is_replaced_in_printable_column() {
        let mut p = producer(b"A\n B\tcd\r", 1, TailPolicy::Truncate);
        assert_eq!(p.produce_one().unwrap(), Produced::Unit);
        assert_eq!(
            p.into_output().into_inner(),
            b"41 0a 20 42 09 63 64 0d\tA..B.cd.\n"
        );
    }

    #[test]
    fn test_short_reads_still_fill_a_full_row() {
        let input: Vec<u8> = (0..16).collect();
        let mut p = ChunkProducer::new(
            Trickle::new(&input, 3),
            2,
            TailPolicy::Truncate,
            LineOutput::new(Vec::new()),
        );
        assert_eq!(p.produce_one().unwrap(), Produced::Unit);
        assert_eq!(p.produce_one().unwrap(), Produced::Exhausted);
        let out = p.into_output().into_inner();
        assert!(out.starts_with(b"00 01 02 03 04 05 06 07  08 09 0a 0b 0c 0d 0e 0f\t"));
    }

    #[test]
    fn test_truncated_tail_renders_only_read_bytes() {
        let mut p = producer(b"ABCDEFGHIJ", 1, TailPolicy::Truncate);
        assert_eq!(p.produce_one().unwrap(), Produced::Unit);
        assert_eq!(p.produce_one().unwrap(), Produced::Unit);
        assert_eq!(p.produce_one().unwrap(), Produced::Exhausted);

        let out = p.into_output().into_inner();
        let mut expected = b"41 42 43 44 45 46 47 48\tABCDEFGH\n".to_vec();
        let mut tail = b"49 4a".to_vec();
        tail.resize(23, b' ');
        expected.extend_from_slice(&tail);
        expected.extend_from_slice(b"\tIJ\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_stale_tail_repeats_previous_fill() {
        let mut p = producer(b"ABCDEFGHIJ", 1, TailPolicy::Stale);
        assert_eq!(p.produce_one().unwrap(), Produced::Unit);
        assert_eq!(p.produce_one().unwrap(), Produced::Unit);
        assert_eq!(p.produce_one().unwrap(), Produced::Exhausted);

        let out = p.into_output().into_inner();
        let second = out.split(|&b| b == b'\n').nth(1).unwrap();
        assert_eq!(second, b"49 4a 43 44 45 46 47 48\tIJCDEFGH");
    }

    #[test]
    fn test_empty_source_is_exhausted_immediately() {
        let mut p = producer(b"", 2, TailPolicy::Truncate);
        assert_eq!(p.produce_one().unwrap(), Produced::Exhausted);
        assert!(p.into_output().into_inner().is_empty());
    }

    #[test]
    fn test_read_failure_surfaces() {
        let mut p = ChunkProducer::new(
            FailingReader::after(&[0u8; 8]),
            1,
            TailPolicy::Truncate,
            LineOutput::new(Vec::new()),
        );
        assert_eq!(p.produce_one().unwrap(), Produced::Unit);
        assert!(matches!(p.produce_one(), Err(ScrollError::Read(_))));
    }

    #[test]
    #[should_panic(expected = "chunk width must be positive")]
    fn test_zero_width_is_rejected() {
        let _ = producer(b"", 0, TailPolicy::Truncate);
    }
}
