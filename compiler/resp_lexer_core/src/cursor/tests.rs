#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::SourceBuffer;
use pretty_assertions::assert_eq;

fn buf(source: &str) -> SourceBuffer {
    SourceBuffer::new(source.as_bytes().to_vec()).expect("test input fits in u32")
}

// === Basic navigation ===

#[test]
fn current_returns_first_byte() {
    let buffer = buf("abc");
    let cursor = buffer.cursor();
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.line(), 0);
}

#[test]
fn advance_moves_forward() {
    let buffer = buf("abc");
    let mut cursor = buffer.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_source() {
    let buffer = buf("hi");
    let mut cursor = buffer.cursor();
    assert_eq!(cursor.current(), b'h');
    cursor.advance();
    assert_eq!(cursor.current(), b'i');
    cursor.advance();
    assert!(cursor.is_exhausted());
}

// === Line crossing ===

#[test]
fn advance_crosses_lf_boundary() {
    let buffer = buf("a\nb");
    let mut cursor = buffer.cursor();
    cursor.advance(); // at '\n', still line 0
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.line(), 0);
    cursor.advance(); // crossed into line 1
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.line(), 1);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn advance_skips_crlf_hole() {
    let buffer = buf("a\r\nb");
    let mut cursor = buffer.cursor();
    cursor.advance(); // at normalized '\n' (offset 1)
    assert_eq!(cursor.current(), b'\n');
    cursor.advance(); // jumps over offset 2 straight to line 1
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.line(), 1);
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn visits_every_reachable_byte_once() {
    let buffer = buf("ab\r\ncd\ne");
    let mut cursor = buffer.cursor();
    let mut visited = Vec::new();
    while !cursor.is_exhausted() {
        visited.push(cursor.pos());
        cursor.advance();
    }
    // Offset 3 (second byte of the \r\n pair) is never visited.
    assert_eq!(visited, vec![0, 1, 2, 4, 5, 6, 7]);
}

// === Exhaustion ===

#[test]
fn exhaustion_parks_at_last_line_end() {
    let buffer = buf("ab\ncd");
    let mut cursor = buffer.cursor();
    while !cursor.is_exhausted() {
        cursor.advance();
    }
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.line(), 1);
}

#[test]
fn empty_buffer_is_immediately_exhausted() {
    let buffer = buf("");
    let cursor = buffer.cursor();
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn trailing_terminator_exhausts_after_it() {
    let buffer = buf("a\n");
    let mut cursor = buffer.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'\n');
    cursor.advance();
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.line(), 0);
}

// === Slicing & copies ===

#[test]
fn slice_extracts_raw_bytes() {
    let buffer = buf("hello world");
    let cursor = buffer.cursor();
    assert_eq!(cursor.slice(0, 5), b"hello");
    assert_eq!(cursor.slice(6, 11), b"world");
    assert_eq!(cursor.slice(3, 3), b"");
}

#[test]
fn cursor_is_copy_for_independent_scans() {
    let buffer = buf("abcdef");
    let mut cursor = buffer.cursor();
    cursor.advance();
    let saved = cursor;
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 3);
    assert_eq!(saved.pos(), 1);
    assert_eq!(saved.current(), b'b');
}
