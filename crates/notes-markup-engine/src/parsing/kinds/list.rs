//! List markers and item extents.
//!
//! Indentation is counted in leading tab characters only. A list's depth is
//! the tab count of its markers; an item runs until the next line that is
//! indented no deeper than its list, so deeper lines (nested lists,
//! continuation text) stay inside the item.

use crate::parsing::node::NodeKind;

use super::LineBreak;

pub struct ListMarker;

/// The shape of a marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `digits.`; `starts_at_one` is true only for the exact number `1`.
    Ordered { starts_at_one: bool },
    /// `-` or `*`.
    Bullet,
}

/// A list marker located on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    /// Offset of the first byte of the marker's line.
    pub line_start: usize,
    /// Leading tabs before the marker.
    pub tabs: usize,
    /// Offset of the `.` of an ordinal or of the bullet character.
    pub punct: usize,
    /// Offset just past the space that follows the marker.
    pub content_start: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    /// Whether a marker can continue a list of this kind.
    pub fn accepts(self, marker: MarkerKind) -> bool {
        matches!(
            (self, marker),
            (ListKind::Ordered, MarkerKind::Ordered { .. }) | (ListKind::Unordered, MarkerKind::Bullet)
        )
    }

    pub fn node_kind(self, depth: usize) -> NodeKind {
        match self {
            ListKind::Ordered => NodeKind::OrderedList { depth },
            ListKind::Unordered => NodeKind::UnorderedList { depth },
        }
    }
}

impl ListMarker {
    pub const ORDINAL_DOT: u8 = b'.';
    pub const DASH: u8 = b'-';
    pub const STAR: u8 = b'*';
    pub const INDENT: u8 = b'\t';

    /// Number of tab characters at `at`.
    pub fn leading_tabs(text: &str, at: usize) -> usize {
        text.as_bytes()
            .get(at..)
            .map_or(0, |rest| rest.iter().take_while(|&&b| b == Self::INDENT).count())
    }

    /// Parses the marker at the start of the line beginning at `line_start`:
    /// `tabs digits '.' ' '` or `tabs ('-' | '*') ' '`.
    pub fn on_line(text: &str, line_start: usize) -> Option<Marker> {
        let bytes = text.as_bytes();
        let tabs = Self::leading_tabs(text, line_start);
        let first = line_start + tabs;

        let digits = bytes
            .get(first..)?
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();

        let (kind, punct) = if digits > 0 {
            let punct = first + digits;
            if bytes.get(punct) != Some(&Self::ORDINAL_DOT) {
                return None;
            }
            let starts_at_one = &text[first..punct] == "1";
            (MarkerKind::Ordered { starts_at_one }, punct)
        } else {
            match bytes.get(first) {
                Some(&Self::DASH) | Some(&Self::STAR) => (MarkerKind::Bullet, first),
                _ => return None,
            }
        };

        if bytes.get(punct + 1) != Some(&b' ') {
            return None;
        }

        Some(Marker {
            kind,
            line_start,
            tabs,
            punct,
            content_start: punct + 2,
        })
    }

    /// Returns the marker whose punctuation byte sits at `at`.
    pub fn at(text: &str, at: usize) -> Option<Marker> {
        let line_start = LineBreak::line_start(text, at);
        Self::on_line(text, line_start).filter(|m| m.punct == at)
    }

    /// End of an item whose content starts at `from` in a list at `depth`:
    /// the first line break followed by a line with at most `depth` leading
    /// tabs, or the end of `text`.
    pub fn item_end(text: &str, from: usize, depth: usize) -> usize {
        let mut search = from;
        while let Some(i) = text[search..].find(LineBreak::NEWLINE as char) {
            let newline = search + i;
            let next_line = newline + 1;
            if Self::leading_tabs(text, next_line) <= depth {
                return newline;
            }
            search = next_line;
        }
        text.len()
    }
}
