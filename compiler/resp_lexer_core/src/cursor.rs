//! Line-aware cursor over a normalized buffer.
//!
//! The cursor tracks an absolute byte offset plus the index of the line it is
//! on, and crosses line boundaries transparently: when [`advance`](Cursor::advance)
//! reaches the current line's `end`, the position jumps to the next line's
//! `start`. That jump is what steps over the physically present but logically
//! unreachable second byte of an original `\r\n` pair.
//!
//! Once the last line's `end` is passed the cursor is exhausted: position
//! stays at that `end` and the line index stays on the last line, so spans
//! that close at end-of-input have well-defined coordinates. [`current`](Cursor::current)
//! is undefined after exhaustion. There is no backward movement.

use crate::source_buffer::Line;

/// Forward-only scan position over `(buffer, line table)`.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor). The
/// cursor is [`Copy`]; independent cursors over the same buffer never share
/// mutable state.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    lines: &'a [Line],
    /// Absolute byte offset. Always within the current line while not
    /// exhausted; parked at the last line's `end` afterwards.
    pos: u32,
    /// Index into `lines`. Stays on the last line after exhaustion.
    line: u32,
    exhausted: bool,
}

impl<'a> Cursor<'a> {
    /// Position a cursor at the first line's start.
    ///
    /// An empty line table yields an immediately exhausted cursor.
    pub(crate) fn new(buf: &'a [u8], lines: &'a [Line]) -> Self {
        match lines.first() {
            Some(first) => Self {
                buf,
                lines,
                pos: first.start,
                line: 0,
                exhausted: false,
            },
            None => Self {
                buf,
                lines,
                pos: 0,
                line: 0,
                exhausted: true,
            },
        }
    }

    /// The byte under the cursor.
    ///
    /// # Contract
    ///
    /// Undefined once the cursor is exhausted; callers check
    /// [`is_exhausted`](Self::is_exhausted) first.
    #[inline]
    pub fn current(&self) -> u8 {
        debug_assert!(!self.exhausted, "current() on an exhausted cursor");
        self.buf[self.pos as usize]
    }

    /// Move one byte forward, crossing into the next line when the current
    /// line's `end` is reached.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(!self.exhausted, "advance() on an exhausted cursor");
        self.pos += 1;
        if self.pos == self.lines[self.line as usize].end {
            let next = self.line as usize + 1;
            if next == self.lines.len() {
                self.exhausted = true;
                return;
            }
            self.line += 1;
            self.pos = self.lines[self.line as usize].start;
        }
    }

    /// Returns `true` once the last line's `end` has been passed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Current absolute byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Index of the current line (last line once exhausted).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Extract raw bytes from the buffer.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the buffer. Token and line spans produced
    /// by this crate always do.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }
}

#[cfg(test)]
mod tests;
