//! Delimiter scanning.
//!
//! The scanner answers one question: where, at or after the cursor, is the
//! next byte that could start a construct? Everything in between is plain
//! text as far as the parser is concerned.

use super::kinds::{Emphasis, Heading, LineBreak, ListMarker, Strikethrough};

/// Every byte that triggers a parsing decision.
///
/// The bullet `-` is absent: dash lists are only recognised at line starts,
/// which the parser reaches through `\n`.
pub const DELIMITERS: [u8; 6] = [
    Heading::HASH,
    LineBreak::NEWLINE,
    Emphasis::STAR,
    Emphasis::UNDERSCORE,
    Strikethrough::TILDE,
    ListMarker::ORDINAL_DOT,
];

/// Returns true if `byte` is one of [`DELIMITERS`].
pub fn is_delimiter(byte: u8) -> bool {
    DELIMITERS.contains(&byte)
}

/// Returns the lowest offset `>= cursor` holding a delimiter, or `None`.
///
/// A cursor at or past the end of `text` yields `None`.
pub fn next_delimiter(text: &str, cursor: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if cursor >= bytes.len() {
        return None;
    }
    bytes[cursor..]
        .iter()
        .position(|&b| is_delimiter(b))
        .map(|i| cursor + i)
}
