//! Hand-written token scanner.
//!
//! The scanner owns a [`Cursor`] plus an external [`KeywordTable`] and
//! produces one [`Token`] per pull. Dispatch is a dense `match` on the first
//! byte of each lexeme feeding per-family resolver methods; the operator
//! families use bounded lookahead (depth 1 to 4) with longest-match-wins.
//!
//! Classification consumes at least one byte per token. Blank bytes (space
//! and tab) are skipped before classification; a maximal skip that reaches
//! end-of-input yields end-of-stream.
//!
//! # Failure semantics
//!
//! Every [`LexError`] is fatal: the scanner latches the first error and every
//! later call to [`next_token`](Scanner::next_token) returns the same value.
//! There is no resynchronization.
//!
//! This type is single-threaded and not reentrant. Multiple scanners may read
//! the same [`SourceBuffer`](crate::SourceBuffer) concurrently, each with its
//! own cursor.

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};
use crate::Span;

/// External keyword resolution: a pure mapping from identifier bytes to an
/// optional reserved-word kind.
///
/// Queried only for single-line, all-lowercase candidates. Any
/// `Fn(&[u8]) -> Option<TokenKind>` closure implements this.
pub trait KeywordTable {
    fn lookup(&self, lexeme: &[u8]) -> Option<TokenKind>;
}

impl<F> KeywordTable for F
where
    F: Fn(&[u8]) -> Option<TokenKind>,
{
    fn lookup(&self, lexeme: &[u8]) -> Option<TokenKind> {
        self(lexeme)
    }
}

/// Keyword table that recognizes nothing; every candidate becomes a name.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoKeywords;

impl KeywordTable for NoKeywords {
    fn lookup(&self, _lexeme: &[u8]) -> Option<TokenKind> {
        None
    }
}

/// Cursor coordinates captured at the start of a lexeme.
#[derive(Clone, Copy)]
struct Mark {
    pos: u32,
    line: u32,
}

/// Pull-based token producer over one normalized buffer.
pub struct Scanner<'a, K> {
    cursor: Cursor<'a>,
    keywords: K,
    /// First fatal diagnostic, replayed on every later pull.
    failed: Option<LexError>,
}

impl<'a, K: KeywordTable> Scanner<'a, K> {
    /// Create a scanner from a cursor and a keyword table.
    pub fn new(cursor: Cursor<'a>, keywords: K) -> Self {
        Self {
            cursor,
            keywords,
            failed: None,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Ok(None)` once the cursor is exhausted with no pending
    /// lexeme. After a diagnostic, this and all subsequent calls return that
    /// same error.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if let Some(err) = self.failed.clone() {
            return Err(err);
        }
        match self.scan() {
            Ok(token) => Ok(token),
            Err(err) => {
                self.failed = Some(err.clone());
                Err(err)
            }
        }
    }

    fn scan(&mut self) -> Result<Option<Token>, LexError> {
        if self.cursor.is_exhausted() {
            return Ok(None);
        }
        while is_blank(self.cursor.current()) {
            self.cursor.advance();
            if self.cursor.is_exhausted() {
                return Ok(None);
            }
        }

        let token = match self.cursor.current() {
            b'\n' => Ok(self.single(TokenKind::Newline)),
            b'a'..=b'z' => self.keyword_or_name(),
            b'A'..=b'Z' | b'_' => Ok(self.name()),
            b'"' => Err(self.fault_here(LexErrorKind::StringUnsupported)),
            b'0'..=b'9' => Ok(self.number()),
            b'\\' => self.backslash(),

            b',' => Ok(self.single(TokenKind::Comma)),
            b'.' => Ok(self.single(TokenKind::Dot)),
            b'(' => Ok(self.single(TokenKind::LeftParen)),
            b')' => Ok(self.single(TokenKind::RightParen)),
            b'{' => Ok(self.single(TokenKind::LeftBrace)),
            b'}' => Ok(self.single(TokenKind::RightBrace)),
            b'[' => Ok(self.single(TokenKind::LeftBracket)),
            b']' => Ok(self.single(TokenKind::RightBracket)),
            b'~' => Ok(self.single(TokenKind::Tilde)),

            b'=' => Ok(self.with_eq(TokenKind::EqualEqual, TokenKind::Equal)),
            b'!' => Ok(self.with_eq(TokenKind::BangEqual, TokenKind::Bang)),
            b'<' => Ok(self.extended(
                TokenKind::LessEqual,
                TokenKind::Shl,
                TokenKind::ShlAssign,
                TokenKind::Less,
            )),
            b'>' => Ok(self.extended(
                TokenKind::GreaterEqual,
                TokenKind::Shr,
                TokenKind::ShrAssign,
                TokenKind::Greater,
            )),
            b'&' => Ok(self.doubled_or_eq(
                TokenKind::AmpersandAmpersand,
                TokenKind::AmpersandEqual,
                TokenKind::Ampersand,
            )),
            b'|' => Ok(self.doubled_or_eq(
                TokenKind::PipePipe,
                TokenKind::PipeEqual,
                TokenKind::Pipe,
            )),
            b'^' => Ok(self.doubled_or_eq(
                TokenKind::CaretCaret,
                TokenKind::CaretEqual,
                TokenKind::Caret,
            )),
            b'+' => Ok(self.with_eq(TokenKind::PlusEqual, TokenKind::Plus)),
            b'-' => Ok(self.minus_comment_or_eq()),
            b'/' => Ok(self.extended(
                TokenKind::SlashEqual,
                TokenKind::SlashSlash,
                TokenKind::SlashSlashEqual,
                TokenKind::Slash,
            )),
            b'*' => Ok(self.extended(
                TokenKind::StarEqual,
                TokenKind::StarStar,
                TokenKind::StarStarEqual,
                TokenKind::Star,
            )),
            b'%' => Ok(self.with_eq(TokenKind::PercentEqual, TokenKind::Percent)),

            _ => Err(self.invalid_character()),
        };
        token.map(Some)
    }

    // ─── Identifiers & keywords ──────────────────────────────────────────

    /// Lowercase-led lexeme: keyword candidate, generic name, or the
    /// unimplemented raw-string form.
    fn keyword_or_name(&mut self) -> Result<Token, LexError> {
        let start = self.mark();

        // A leading `r` announces a raw string literal, which this layer
        // does not implement. Fault instead of mis-tokenizing.
        if self.cursor.current() == b'r' {
            return Err(self.fault_here(LexErrorKind::RawStringUnsupported));
        }

        self.cursor.advance();
        while !self.cursor.is_exhausted() && self.cursor.current().is_ascii_lowercase() {
            self.cursor.advance();
        }

        // An uppercase letter, digit, or underscore directly after the
        // lowercase run switches to generic-name scanning; the lexeme is
        // never keyword-checked.
        if !self.cursor.is_exhausted() && is_name_extension(self.cursor.current()) {
            self.cursor.advance();
            while !self.cursor.is_exhausted() && is_name_continue(self.cursor.current()) {
                self.cursor.advance();
            }
            return Ok(self.finish_name(start));
        }

        Ok(self.resolve_keyword(start))
    }

    /// Uppercase- or underscore-led lexeme: always a name.
    fn name(&mut self) -> Token {
        let start = self.mark();
        self.cursor.advance();
        while !self.cursor.is_exhausted() && is_name_continue(self.cursor.current()) {
            self.cursor.advance();
        }
        self.finish_name(start)
    }

    /// Run the keyword table over a completed lowercase lexeme.
    ///
    /// # Panics
    ///
    /// A candidate spanning multiple lines is a scanner defect (the lowercase
    /// character class cannot cross a terminator); this aborts rather than
    /// raising a recoverable diagnostic.
    fn resolve_keyword(&mut self, start: Mark) -> Token {
        assert_eq!(
            start.line,
            self.cursor.line(),
            "keyword candidate spans multiple lines"
        );
        let lexeme = self.cursor.slice(start.pos, self.cursor.pos());
        match self.keywords.lookup(lexeme) {
            Some(kind) => self.finish(kind, start),
            None => self.finish_name(start),
        }
    }

    // ─── Literals ────────────────────────────────────────────────────────

    /// Maximal run of ASCII digits. No sign, radix prefix, or fraction at
    /// this layer.
    fn number(&mut self) -> Token {
        let start = self.mark();
        self.cursor.advance();
        while !self.cursor.is_exhausted() && self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }
        self.finish(TokenKind::Number, start)
    }

    // ─── Comments & continuation ─────────────────────────────────────────

    /// Backslash-led forms: `\\` opens a multi-line comment, `\-` is a line
    /// continuation, anything else is an unknown symbol.
    fn backslash(&mut self) -> Result<Token, LexError> {
        let start = self.mark();
        self.cursor.advance();
        if !self.cursor.is_exhausted() {
            if self.cursor.current() == b'\\' {
                self.cursor.advance();
                return self.multi_line_comment(start);
            }
            if self.cursor.current() == b'-' {
                self.cursor.advance();
                return Ok(self.finish(TokenKind::NextLine, start));
            }
        }
        Err(self.fault_from(start, LexErrorKind::UnknownSymbol))
    }

    /// Scan forward (across line boundaries) for the doubled-backslash
    /// closer. Reaching end-of-input first is a fatal diagnostic spanning
    /// opener to end-of-input.
    fn multi_line_comment(&mut self, start: Mark) -> Result<Token, LexError> {
        while !self.cursor.is_exhausted() {
            if self.cursor.current() == b'\\' {
                self.cursor.advance();
                if self.cursor.is_exhausted() {
                    break;
                }
                if self.cursor.current() == b'\\' {
                    self.cursor.advance();
                    return Ok(self.finish(TokenKind::MultiLineComment, start));
                }
            } else {
                self.cursor.advance();
            }
        }
        Err(self.fault_from(start, LexErrorKind::UnterminatedMultiLineComment))
    }

    /// `-`, `-=`, or a `--` line comment running to (but excluding) the
    /// terminator.
    fn minus_comment_or_eq(&mut self) -> Token {
        let start = self.mark();
        self.cursor.advance();
        if !self.cursor.is_exhausted() {
            if self.cursor.current() == b'=' {
                self.cursor.advance();
                return self.finish(TokenKind::MinusEqual, start);
            }
            if self.cursor.current() == b'-' {
                self.cursor.advance();
                while !self.cursor.is_exhausted() && self.cursor.current() != b'\n' {
                    self.cursor.advance();
                }
                return self.finish(TokenKind::Comment, start);
            }
        }
        self.finish(TokenKind::Minus, start)
    }

    // ─── Operator family resolvers ───────────────────────────────────────

    /// Single-byte token.
    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.mark();
        self.cursor.advance();
        self.finish(kind, start)
    }

    /// Depth-1 family: `X=` else `X`.
    fn with_eq(&mut self, eq: TokenKind, base: TokenKind) -> Token {
        let start = self.mark();
        self.cursor.advance();
        if !self.cursor.is_exhausted() && self.cursor.current() == b'=' {
            self.cursor.advance();
            return self.finish(eq, start);
        }
        self.finish(base, start)
    }

    /// Depth-1 family with a doubled form: `XX` else `X=` else `X`.
    fn doubled_or_eq(&mut self, doubled: TokenKind, eq: TokenKind, base: TokenKind) -> Token {
        let start = self.mark();
        let lead = self.cursor.current();
        self.cursor.advance();
        if !self.cursor.is_exhausted() {
            if self.cursor.current() == lead {
                self.cursor.advance();
                return self.finish(doubled, start);
            }
            if self.cursor.current() == b'=' {
                self.cursor.advance();
                return self.finish(eq, start);
            }
        }
        self.finish(base, start)
    }

    /// Depth-2 family: `X=` else `XX` (which extends to `XX=`) else `X`.
    fn extended(
        &mut self,
        eq: TokenKind,
        doubled: TokenKind,
        doubled_eq: TokenKind,
        base: TokenKind,
    ) -> Token {
        let start = self.mark();
        let lead = self.cursor.current();
        self.cursor.advance();
        if !self.cursor.is_exhausted() {
            if self.cursor.current() == b'=' {
                self.cursor.advance();
                return self.finish(eq, start);
            }
            if self.cursor.current() == lead {
                self.cursor.advance();
                if !self.cursor.is_exhausted() && self.cursor.current() == b'=' {
                    self.cursor.advance();
                    return self.finish(doubled_eq, start);
                }
                return self.finish(doubled, start);
            }
        }
        self.finish(base, start)
    }

    // ─── Faults ──────────────────────────────────────────────────────────

    /// Consume the offending byte and describe it.
    fn invalid_character(&mut self) -> LexError {
        let start = self.mark();
        self.cursor.advance();
        self.fault_from(start, LexErrorKind::InvalidCharacter)
    }

    /// Fault spanning `start` to the current cursor position.
    fn fault_from(&self, start: Mark, kind: LexErrorKind) -> LexError {
        LexError {
            kind,
            span: Span::new(start.pos, self.cursor.pos()),
            start_line: start.line,
            end_line: self.cursor.line(),
        }
    }

    /// Fault at the single byte under the cursor, without consuming it.
    fn fault_here(&self, kind: LexErrorKind) -> LexError {
        let pos = self.cursor.pos();
        let line = self.cursor.line();
        LexError {
            kind,
            span: Span::new(pos, pos + 1),
            start_line: line,
            end_line: line,
        }
    }

    // ─── Token assembly ──────────────────────────────────────────────────

    fn mark(&self) -> Mark {
        Mark {
            pos: self.cursor.pos(),
            line: self.cursor.line(),
        }
    }

    fn finish(&self, kind: TokenKind, start: Mark) -> Token {
        Token {
            kind,
            span: Span::new(start.pos, self.cursor.pos()),
            start_line: start.line,
            end_line: self.cursor.line(),
        }
    }

    fn finish_name(&mut self, start: Mark) -> Token {
        let bytes = self.cursor.slice(start.pos, self.cursor.pos());
        self.finish(TokenKind::Name(bytes.into()), start)
    }
}

/// Iterator view of the token stream.
///
/// Yields the fatal diagnostic once, then fuses: the underlying scanner keeps
/// replaying the error, but the iterator stops so `collect()` terminates.
impl<K: KeywordTable> Iterator for Scanner<'_, K> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed.is_some() {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

/// 256-byte lookup table for name continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// Table lookup replaces the multi-range `matches!` with one indexed read.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_NAME_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` may continue a generic name.
#[inline]
fn is_name_continue(b: u8) -> bool {
    IS_NAME_CONTINUE_TABLE[b as usize]
}

/// Returns `true` if `b` ends a lowercase run by switching it into a generic
/// name (uppercase, digit, or underscore).
#[inline]
fn is_name_extension(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'0'..=b'9' | b'_')
}

/// Returns `true` for the blank bytes skipped before classification.
#[inline]
fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}
