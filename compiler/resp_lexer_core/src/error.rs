//! Positioned lexical diagnostics.
//!
//! Every [`LexError`] is fatal to the token stream that raised it: the
//! scanner latches the error and replays it on every subsequent pull. There
//! is no resynchronization or skip-and-continue; the consumer decides whether
//! to abort the compilation unit or report and stop.
//!
//! Invariant violations inside the scanner (a keyword candidate spanning
//! multiple lines) are scanner defects, not malformed input, and panic
//! instead of producing a `LexError`.

use crate::Span;

/// A fatal lexical fault with the precise offending span.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span} (lines {start_line}..={end_line})")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Offending byte range.
    pub span: Span,
    /// Line index of the first byte of the fault.
    pub start_line: u32,
    /// Line index of the last byte of the fault.
    pub end_line: u32,
}

/// What kind of lexical fault occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// `\\` comment still open at end of input.
    #[error("unterminated multi-line comment")]
    UnterminatedMultiLineComment,
    /// Byte after a lone `\` is neither `\` nor `-`.
    #[error("unknown symbol after `\\`")]
    UnknownSymbol,
    /// Byte starts no recognized lexeme.
    #[error("invalid character")]
    InvalidCharacter,
    /// `"` lead byte. String literals are a documented gap, not a silently
    /// mis-tokenized form.
    #[error("string literals are not supported")]
    StringUnsupported,
    /// `r` lead byte. Raw string literals are a documented gap.
    #[error("raw string literals are not supported")]
    RawStringUnsupported,
}

/// Input buffer too large for `u32` positions.
///
/// Raised by [`SourceBuffer::new`](crate::SourceBuffer::new) before any
/// scanning happens; spans and line records store `u32` offsets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("source buffer is {size} bytes, which exceeds the {max}-byte limit", max = u32::MAX)]
pub struct SourceTooLarge {
    /// Size of the rejected input in bytes.
    pub size: u64,
}
