//! Normalized source buffer and line table.
//!
//! [`SourceBuffer::new`] takes ownership of the raw bytes, normalizes every
//! line terminator (`\r`, `\n`, `\r\n`) to a single `'\n'` in place, and
//! partitions the buffer into [`Line`] records. The buffer is mutated exactly
//! once, during construction; afterwards buffer and line table are read-only
//! and may be shared by any number of independent scanners.
//!
//! # The `\r\n` hole
//!
//! A two-byte `\r\n` terminator collapses to one logical terminator: the `\r`
//! is rewritten to `'\n'` and ends its line, while the physical `\n` that
//! followed it is left in the buffer but excluded from every line interval.
//! The cursor jumps over it when crossing the line boundary. The union of all
//! line intervals plus these skipped bytes covers the whole buffer.

use crate::cursor::Cursor;
use crate::error::SourceTooLarge;
use crate::Span;

/// One logical line: a half-open byte interval into the buffer.
///
/// The normalized `'\n'` terminator sits at `end - 1`, except possibly on the
/// final line, which may run to end-of-input without one. Lines are ascending
/// and non-overlapping.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Line {
    pub start: u32,
    pub end: u32,
}

impl Line {
    /// The line's interval as a [`Span`].
    #[inline]
    pub const fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Length of the line in bytes, terminator included.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` for a zero-length line. The builder never produces one.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Terminator-normalized source buffer plus its line table.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Normalized bytes. Immutable after construction.
    buf: Vec<u8>,
    /// Ascending, non-overlapping line records covering every reachable byte.
    lines: Vec<Line>,
}

impl SourceBuffer {
    /// Build a buffer from raw source bytes, normalizing terminators in place
    /// and recording the line table.
    ///
    /// Empty input yields an empty line table; scanners over it are exhausted
    /// immediately. Inputs larger than `u32::MAX` bytes are rejected so that
    /// every span and line record fits in `u32` positions.
    pub fn new(mut bytes: Vec<u8>) -> Result<Self, SourceTooLarge> {
        if u32::try_from(bytes.len()).is_err() {
            return Err(SourceTooLarge {
                size: bytes.len() as u64,
            });
        }
        let lines = split_lines(&mut bytes);
        Ok(Self { buf: bytes, lines })
    }

    /// The normalized source bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// The line table.
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Length of the buffer in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        // new() rejected anything that does not fit.
        #[allow(clippy::cast_possible_truncation)]
        {
            self.buf.len() as u32
        }
    }

    /// Returns `true` if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Create a [`Cursor`] positioned at the start of the first line.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, &self.lines)
    }
}

/// Pass 1: count logical lines without touching the buffer.
///
/// A `\r` counts one terminator and absorbs an immediately following `\n`;
/// a bare `\n` counts one; trailing bytes without a terminator count as an
/// implicit final line. Uses `memchr2` to jump between terminator bytes.
fn count_lines(buf: &[u8]) -> usize {
    let mut total = 0;
    let mut index = 0;
    while index < buf.len() {
        match memchr::memchr2(b'\r', b'\n', &buf[index..]) {
            Some(offset) => {
                total += 1;
                let pos = index + offset;
                index = pos + 1;
                if buf[pos] == b'\r' && buf.get(index) == Some(&b'\n') {
                    index += 1;
                }
            }
            None => {
                // Ran off the end mid-line: implicit final terminator.
                total += 1;
                break;
            }
        }
    }
    total
}

/// Pass 2: rewrite every `\r` to `'\n'` in place, skip the second byte of
/// each `\r\n` pair, and record one [`Line`] per terminator found.
#[allow(
    clippy::cast_possible_truncation,
    reason = "SourceBuffer::new rejects buffers longer than u32::MAX"
)]
fn split_lines(buf: &mut [u8]) -> Vec<Line> {
    let total = count_lines(buf);
    let mut lines = Vec::with_capacity(total);
    let mut start = 0usize;
    let mut index = 0usize;
    while index < buf.len() {
        match buf[index] {
            b'\r' => {
                buf[index] = b'\n';
                index += 1;
                lines.push(Line {
                    start: start as u32,
                    end: index as u32,
                });
                // The physical second byte of a \r\n pair belongs to no line.
                if index < buf.len() && buf[index] == b'\n' {
                    index += 1;
                }
                start = index;
            }
            b'\n' => {
                index += 1;
                lines.push(Line {
                    start: start as u32,
                    end: index as u32,
                });
                start = index;
            }
            _ => index += 1,
        }
    }
    if start < buf.len() {
        // Final line without a terminator.
        lines.push(Line {
            start: start as u32,
            end: buf.len() as u32,
        });
    }
    debug_assert_eq!(lines.len(), total, "counting and splitting passes disagree");
    lines
}
