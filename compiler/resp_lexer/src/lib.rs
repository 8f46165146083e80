//! Lexer for Resp.
//!
//! Binds the language-agnostic scanning machinery from `resp_lexer_core` to
//! the Resp reserved-word table. The typical entry point is [`tokenize`],
//! which takes ownership of the source bytes and produces the full token
//! stream or the first fatal diagnostic. [`Lexer`] is the reusable form: it
//! holds the normalized [`SourceBuffer`] so callers can run several scans or
//! inspect the line table after tokenizing.

mod keywords;

pub use keywords::{lookup as keyword_lookup, RespKeywords};
pub use resp_lexer_core::{
    LexError, LexErrorKind, Line, Scanner, SourceBuffer, SourceTooLarge, Span, Token, TokenKind,
};

/// Any failure the lexing pipeline can produce.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source did not fit the `u32` position space.
    #[error(transparent)]
    SourceTooLarge(#[from] SourceTooLarge),
    /// The scanner raised a fatal diagnostic.
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// A normalized source buffer bound to the Resp keyword table.
pub struct Lexer {
    buffer: SourceBuffer,
}

impl Lexer {
    /// Take ownership of the source bytes, normalize line terminators, and
    /// build the line table.
    pub fn new(source: Vec<u8>) -> Result<Self, Error> {
        Ok(Self {
            buffer: SourceBuffer::new(source)?,
        })
    }

    /// The normalized buffer and its line table.
    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    /// Start a fresh scan from the beginning of the buffer.
    pub fn scanner(&self) -> Scanner<'_, RespKeywords> {
        Scanner::new(self.buffer.cursor(), RespKeywords)
    }

    /// Scan the whole buffer, collecting every token.
    ///
    /// Stops at the first diagnostic; there is no resynchronization.
    pub fn tokenize(&self) -> Result<Vec<Token>, LexError> {
        let mut scanner = self.scanner();
        let mut tokens = Vec::new();
        while let Some(token) = scanner.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

/// One-shot lexing: source bytes in, token stream out.
pub fn tokenize(source: Vec<u8>) -> Result<Vec<Token>, Error> {
    let lexer = Lexer::new(source)?;
    Ok(lexer.tokenize()?)
}
