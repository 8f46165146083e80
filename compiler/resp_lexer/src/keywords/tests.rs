use super::lookup;
use pretty_assertions::assert_eq;
use resp_lexer_core::TokenKind;

#[test]
fn control_flow_keywords() {
    assert_eq!(lookup(b"if"), Some(TokenKind::If));
    assert_eq!(lookup(b"elif"), Some(TokenKind::Elif));
    assert_eq!(lookup(b"else"), Some(TokenKind::Else));
    assert_eq!(lookup(b"then"), Some(TokenKind::Then));
    assert_eq!(lookup(b"for"), Some(TokenKind::For));
    assert_eq!(lookup(b"in"), Some(TokenKind::In));
    assert_eq!(lookup(b"while"), Some(TokenKind::While));
    assert_eq!(lookup(b"loop"), Some(TokenKind::Loop));
    assert_eq!(lookup(b"break"), Some(TokenKind::Break));
    assert_eq!(lookup(b"continue"), Some(TokenKind::Continue));
    assert_eq!(lookup(b"end"), Some(TokenKind::End));
    assert_eq!(lookup(b"pass"), Some(TokenKind::Pass));
}

#[test]
fn declaration_keywords() {
    assert_eq!(lookup(b"def"), Some(TokenKind::Def));
    assert_eq!(lookup(b"class"), Some(TokenKind::Class));
    assert_eq!(lookup(b"var"), Some(TokenKind::Var));
    assert_eq!(lookup(b"global"), Some(TokenKind::Global));
    assert_eq!(lookup(b"import"), Some(TokenKind::Import));
}

#[test]
fn value_keywords() {
    assert_eq!(lookup(b"true"), Some(TokenKind::True));
    assert_eq!(lookup(b"false"), Some(TokenKind::False));
    assert_eq!(lookup(b"nil"), Some(TokenKind::Nil));
}

#[test]
fn logical_keywords() {
    assert_eq!(lookup(b"and"), Some(TokenKind::And));
    assert_eq!(lookup(b"or"), Some(TokenKind::Or));
    assert_eq!(lookup(b"not"), Some(TokenKind::Not));
}

#[test]
fn non_keywords_return_none() {
    assert_eq!(lookup(b"foo"), None);
    assert_eq!(lookup(b"bar"), None);
    assert_eq!(lookup(b"my_var"), None);
    assert_eq!(lookup(b"whilee"), None);
    assert_eq!(lookup(b"whil"), None);
}

#[test]
fn case_sensitivity() {
    assert_eq!(lookup(b"If"), None);
    assert_eq!(lookup(b"IF"), None);
    assert_eq!(lookup(b"True"), None);
}

#[test]
fn empty_and_single_byte_are_not_keywords() {
    assert_eq!(lookup(b""), None);
    assert_eq!(lookup(b"a"), None);
    assert_eq!(lookup(b"i"), None);
}

#[test]
fn length_boundary_rejection() {
    // Longer than 8 bytes is rejected immediately
    assert_eq!(lookup(b"continues"), None);
    assert_eq!(lookup(b"continue_"), None);
}

#[test]
fn non_lowercase_start_rejection() {
    assert_eq!(lookup(b"_if"), None);
    assert_eq!(lookup(b"1if"), None);
}

#[test]
fn no_keyword_starts_with_r() {
    // The scanner faults on an `r` lead before any lookup; the table must
    // not contradict that.
    for word in [&b"return"[..], b"raise", b"repeat", b"rest"] {
        assert_eq!(lookup(word), None);
    }
}
