//! Reserved-word resolution for Resp.
//!
//! The lookup function uses the lexeme's length as a first-pass filter
//! (keywords range from 2-8 bytes), then matches against the specific
//! keywords of that length. Candidates arrive from the scanner already
//! all-lowercase and single-line, but the function guards its own
//! preconditions so it is safe on arbitrary input.
//!
//! No keyword starts with `r`: the scanner reserves that lead byte for the
//! (unimplemented) raw string form and faults before any lookup happens.

use resp_lexer_core::{KeywordTable, TokenKind};

/// Keyword table for Resp, plugged into
/// [`Scanner`](resp_lexer_core::Scanner) at construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct RespKeywords;

impl KeywordTable for RespKeywords {
    fn lookup(&self, lexeme: &[u8]) -> Option<TokenKind> {
        lookup(lexeme)
    }
}

/// Look up a reserved keyword by its bytes.
///
/// Returns the corresponding `TokenKind` if the lexeme is a Resp reserved
/// word, `None` if it's a regular name.
///
/// Uses length-bucketing for fast rejection: lexemes whose length falls
/// outside the 2-8 range are immediately rejected without any comparison.
#[inline]
pub fn lookup(lexeme: &[u8]) -> Option<TokenKind> {
    let len = lexeme.len();

    // Guard: all keywords are 2-8 bytes of lowercase ASCII
    if !(2..=8).contains(&len) {
        return None;
    }
    if !lexeme[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match lexeme {
            b"if" => Some(TokenKind::If),
            b"in" => Some(TokenKind::In),
            b"or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match lexeme {
            b"and" => Some(TokenKind::And),
            b"def" => Some(TokenKind::Def),
            b"end" => Some(TokenKind::End),
            b"for" => Some(TokenKind::For),
            b"nil" => Some(TokenKind::Nil),
            b"not" => Some(TokenKind::Not),
            b"var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match lexeme {
            b"elif" => Some(TokenKind::Elif),
            b"else" => Some(TokenKind::Else),
            b"loop" => Some(TokenKind::Loop),
            b"pass" => Some(TokenKind::Pass),
            b"then" => Some(TokenKind::Then),
            b"true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match lexeme {
            b"break" => Some(TokenKind::Break),
            b"class" => Some(TokenKind::Class),
            b"false" => Some(TokenKind::False),
            b"while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match lexeme {
            b"global" => Some(TokenKind::Global),
            b"import" => Some(TokenKind::Import),
            _ => None,
        },
        8 => match lexeme {
            b"continue" => Some(TokenKind::Continue),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
