//! Low-level tokenizer for the Resp toolchain.
//!
//! Pipeline, leaf-first:
//!
//! 1. [`SourceBuffer`] takes ownership of the raw bytes, normalizes every
//!    line terminator to a single `'\n'` in place, and records the line
//!    table.
//! 2. [`Cursor`] walks the buffer byte-by-byte, crossing line boundaries
//!    transparently.
//! 3. [`Scanner`] classifies lexemes into [`Token`]s, resolving keywords
//!    through an external [`KeywordTable`], or raises a fatal positioned
//!    [`LexError`].
//!
//! The crate is standalone and language-agnostic: the Resp reserved words
//! live in the `resp_lexer` integration crate, which supplies them through
//! the [`KeywordTable`] seam. Everything here is single-threaded and
//! pull-based; after construction the buffer and line table are read-only,
//! so independent scanners may share one buffer.

mod cursor;
mod error;
mod scanner;
mod source_buffer;
mod span;
mod token;

pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, SourceTooLarge};
pub use scanner::{KeywordTable, NoKeywords, Scanner};
pub use source_buffer::{Line, SourceBuffer};
pub use span::Span;
pub use token::{Token, TokenKind};
