use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::span::Span;

/// Bold: doubled delimiter, a non-empty single-line run, the shortest one
/// that is closed by the doubled delimiter.
static BOLD_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*[ \t]?([^\n]+?)\*\*").expect("valid bold regex"));
static BOLD_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^__[ \t]?([^\n]+?)__").expect("valid bold regex"));

/// Italic: single delimiter, a run that may contain doubled delimiters (nested
/// bold) but no lone one, closed by a lone delimiter.
static ITALIC_STAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*[ \t]?((?:[^\n*]|\*\*)+)\*").expect("valid italic regex")
});
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^_[ \t]?((?:[^\n_]|__)+)_").expect("valid italic regex"));

/// A delimited construct: the content between the delimiters and the offset
/// just past the closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited {
    pub content: Span,
    pub end: usize,
}

impl Delimited {
    /// Runs an anchored regex against `text[at..]`, taking capture group 1 as
    /// the content.
    pub(crate) fn capture(re: &Regex, text: &str, at: usize) -> Option<Self> {
        let caps = re.captures(&text[at..])?;
        let content = caps.get(1)?;
        let whole = caps.get(0)?;
        Some(Self {
            content: Span {
                start: at + content.start(),
                end: at + content.end(),
            },
            end: at + whole.end(),
        })
    }
}

pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// Returns the emphasis delimiter at `at`, if any.
    pub fn delimiter_at(text: &str, at: usize) -> Option<u8> {
        text.as_bytes()
            .get(at)
            .copied()
            .filter(|&b| b == Self::STAR || b == Self::UNDERSCORE)
    }

    /// True when the delimiter at `at` is immediately repeated.
    pub fn is_doubled(text: &str, at: usize) -> bool {
        let bytes = text.as_bytes();
        at + 1 < bytes.len() && bytes[at + 1] == bytes[at]
    }

    /// Matches `**content**` (or `__content__`) starting at `at`.
    pub fn bold(text: &str, at: usize) -> Option<Delimited> {
        let re = match Self::delimiter_at(text, at)? {
            Self::STAR => &*BOLD_STAR,
            _ => &*BOLD_UNDERSCORE,
        };
        Delimited::capture(re, text, at)
    }

    /// Matches `*content*` (or `_content_`) starting at `at`.
    ///
    /// The closing delimiter must not be followed by another copy of itself,
    /// so `*a**` is not italic.
    pub fn italic(text: &str, at: usize) -> Option<Delimited> {
        let delimiter = Self::delimiter_at(text, at)?;
        let re = match delimiter {
            Self::STAR => &*ITALIC_STAR,
            _ => &*ITALIC_UNDERSCORE,
        };
        let m = Delimited::capture(re, text, at)?;
        if text.as_bytes().get(m.end) == Some(&delimiter) {
            return None;
        }
        Some(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn content<'a>(text: &'a str, m: Delimited) -> &'a str {
        &text[m.content.range()]
    }

    #[rstest]
    #[case("**bold**", "bold", 8)]
    #[case("__bold__ rest", "bold", 8)]
    #[case("** spaced**", "spaced", 11)]
    #[case("**a** and **b**", "a", 5)]
    fn bold_matches(#[case] text: &str, #[case] expected: &str, #[case] end: usize) {
        let m = Emphasis::bold(text, 0).unwrap();
        assert_eq!(content(text, m), expected);
        assert_eq!(m.end, end);
    }

    #[rstest]
    #[case("**open")]
    #[case("****")]
    #[case("**split\nline**")]
    fn bold_rejects(#[case] text: &str) {
        assert_eq!(Emphasis::bold(text, 0), None);
    }

    #[rstest]
    #[case("*it*", "it", 4)]
    #[case("_it_ rest", "it", 4)]
    #[case("*a **b** c*", "a **b** c", 11)]
    #[case("*a* and *b*", "a", 3)]
    fn italic_matches(#[case] text: &str, #[case] expected: &str, #[case] end: usize) {
        let m = Emphasis::italic(text, 0).unwrap();
        assert_eq!(content(text, m), expected);
        assert_eq!(m.end, end);
    }

    #[rstest]
    #[case("*lonely")]
    #[case("*a**")]
    #[case("**")]
    #[case("*\n*")]
    #[case("*")]
    fn italic_rejects(#[case] text: &str) {
        assert_eq!(Emphasis::italic(text, 0), None);
    }

    #[test]
    fn matches_at_offset() {
        let text = "say *hi* now";
        let m = Emphasis::italic(text, 4).unwrap();
        assert_eq!(m.content, Span::new(5, 7));
        assert_eq!(m.end, 8);
    }

    #[test]
    fn doubled_detection() {
        assert!(Emphasis::is_doubled("**x", 0));
        assert!(!Emphasis::is_doubled("*_x", 0));
        assert!(!Emphasis::is_doubled("*", 0));
    }
}
