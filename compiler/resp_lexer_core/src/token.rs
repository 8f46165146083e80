//! Token kinds and positioned tokens.
//!
//! A [`Token`] carries absolute byte offsets (via [`Span`]) plus the line
//! indices of its first and last byte. Every kind except comments is
//! single-line; a multi-line comment may have `end_line > start_line`.
//!
//! [`TokenKind::Name`] owns the raw identifier bytes. It is only produced
//! when a lexeme did not resolve to a keyword, so downstream consumers never
//! need to re-slice the buffer to get an identifier's text.

use crate::Span;

/// Classification of a single token.
///
/// Keyword variants are never produced by the scanner on its own; they come
/// out of the external [`KeywordTable`](crate::KeywordTable) when a
/// single-line lowercase lexeme matches a reserved word.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Structure
    /// A single normalized `\n` byte.
    Newline,
    /// Line continuation `\-`.
    NextLine,

    // Literals
    /// Identifier, owning its raw bytes.
    Name(Box<[u8]>),
    /// Unsigned decimal digit run.
    Number,

    // Comments
    /// Line comment `--` running to (but excluding) the terminator.
    Comment,
    /// `\\ ... \\` comment, may cross line boundaries.
    MultiLineComment,

    // Punctuation
    Comma,
    Dot,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    /// Bitwise not `~`.
    Tilde,

    // Operators
    Equal,
    EqualEqual,
    Bang,
    BangEqual,
    Less,
    LessEqual,
    Shl,
    ShlAssign,
    Greater,
    GreaterEqual,
    Shr,
    ShrAssign,
    Ampersand,
    AmpersandAmpersand,
    AmpersandEqual,
    Pipe,
    PipePipe,
    PipeEqual,
    Caret,
    CaretCaret,
    CaretEqual,
    Plus,
    PlusEqual,
    Minus,
    MinusEqual,
    Slash,
    SlashEqual,
    /// Floor division `//`.
    SlashSlash,
    SlashSlashEqual,
    Star,
    StarEqual,
    /// Exponentiation `**`.
    StarStar,
    StarStarEqual,
    Percent,
    PercentEqual,

    // Keywords (resolved by name through the keyword table)
    And,
    Break,
    Class,
    Continue,
    Def,
    Elif,
    Else,
    End,
    False,
    For,
    Global,
    If,
    Import,
    In,
    Loop,
    Nil,
    Not,
    Or,
    Pass,
    Then,
    True,
    Var,
    While,
}

impl TokenKind {
    /// Returns `true` for keyword kinds.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Break
                | TokenKind::Class
                | TokenKind::Continue
                | TokenKind::Def
                | TokenKind::Elif
                | TokenKind::Else
                | TokenKind::End
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Global
                | TokenKind::If
                | TokenKind::Import
                | TokenKind::In
                | TokenKind::Loop
                | TokenKind::Nil
                | TokenKind::Not
                | TokenKind::Or
                | TokenKind::Pass
                | TokenKind::Then
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }
}

/// A classified token with its absolute byte span and line span.
///
/// Owned by the caller once returned from the scanner. `span` is a half-open
/// byte interval into the normalized buffer; `start_line` and `end_line`
/// index the [`Line`](crate::Line) table.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub start_line: u32,
    pub end_line: u32,
}

impl Token {
    /// Length of the token's lexeme in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.span.len()
    }

    /// Returns `true` for a zero-length token. Never true for tokens the
    /// scanner emits; kept for symmetry with [`Span::is_empty`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Returns `true` if the token crosses a line boundary.
    #[inline]
    pub fn is_multi_line(&self) -> bool {
        self.end_line > self.start_line
    }
}
