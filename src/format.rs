//! Hex and printable renderings of raw bytes.
//!
//! A row is rendered as 8-byte [`ByteCluster`]s of space-separated lowercase
//! hex pairs, clusters joined by two spaces, then a tab, then the same bytes
//! with whitespace control characters replaced by [`PLACEHOLDER`]:
//!
//! ```text
//! 48 65 6c 6c 6f 2c 20 77  6f 72 6c 64 21 0a 00 00	Hello,.world!...
//! ```

use std::fmt;

/// Bytes per cluster.
pub const CLUSTER_LEN: usize = 8;

/// Glyph substituted for newline, carriage return, space and tab.
pub const PLACEHOLDER: u8 = b'.';

/// Separator between clusters in the hex rendering.
const CLUSTER_SEP: &[u8] = b"  ";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A borrowed view of at most [`CLUSTER_LEN`] bytes, rendered as hex pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteCluster<'a>(&'a [u8]);

impl<'a> ByteCluster<'a> {
    /// The bytes in this cluster.
    #[inline]
    pub const fn bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Append the hex rendering (`"de ad be ef"`) to `out`.
    pub fn write_hex(&self, out: &mut Vec<u8>) {
        for (i, &byte) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(b' ');
            }
            out.extend_from_slice(&hex_pair(byte));
        }
    }
}

impl fmt::Display for ByteCluster<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[inline]
const fn hex_pair(byte: u8) -> [u8; 2] {
    [HEX_DIGITS[(byte >> 4) as usize], HEX_DIGITS[(byte & 0x0f) as usize]]
}

/// Split `bytes` into consecutive clusters; only the last may be short.
pub fn clusters(bytes: &[u8]) -> impl Iterator<Item = ByteCluster<'_>> {
    bytes.chunks(CLUSTER_LEN).map(ByteCluster)
}

/// Width in columns of the hex rendering of a full row of `width` clusters.
pub const fn hex_width(width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    // "xx" per byte, one space between bytes, two between clusters.
    width * (CLUSTER_LEN * 3 - 1) + (width - 1) * CLUSTER_SEP.len()
}

/// Append the hex rendering of `bytes` to `out`.
pub fn write_hex(out: &mut Vec<u8>, bytes: &[u8]) {
    for (i, cluster) in clusters(bytes).enumerate() {
        if i > 0 {
            out.extend_from_slice(CLUSTER_SEP);
        }
        cluster.write_hex(out);
    }
}

/// Map one byte for the printable rendering.
#[inline]
pub const fn printable(byte: u8) -> u8 {
    match byte {
        b'\n' | b'\r' | b' ' | b'\t' => PLACEHOLDER,
        other => other,
    }
}

/// Append the printable rendering of `bytes` to `out`.
pub fn write_printable(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend(bytes.iter().map(|&b| printable(b)));
}

/// Append a full row for `bytes`: hex, padded to the width of a row of
/// `width` clusters, a tab, then the printable rendering.
pub fn write_row(out: &mut Vec<u8>, bytes: &[u8], width: usize) {
    let start = out.len();
    write_hex(out, bytes);
    let rendered = out.len() - start;
    let target = hex_width(width);
    if rendered < target {
        out.resize(out.len() + (target - rendered), b' ');
    }
    out.push(b'\t');
    write_printable(out, bytes);
}
