use crate::parsing::span::Span;

use super::LineBreak;

pub struct Heading;

/// A recognised heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingMatch {
    /// Number of leading `#` characters, always at least one.
    pub level: usize,
    /// Heading text, from the first non-space byte after the `#` run to the
    /// end of the line (exclusive of the line break).
    pub content: Span,
}

impl Heading {
    pub const HASH: u8 = b'#';

    /// Matches a heading whose `#` run starts at `at`.
    ///
    /// The run must begin a line and be followed by at least one space;
    /// `#tag` and `issue #5` are plain text.
    pub fn match_at(text: &str, at: usize) -> Option<HeadingMatch> {
        if !LineBreak::is_line_start(text, at) {
            return None;
        }
        let bytes = text.as_bytes();
        let level = bytes[at..].iter().take_while(|&&b| b == Self::HASH).count();
        let after_run = at + level;
        if bytes.get(after_run) != Some(&b' ') {
            return None;
        }

        let start = after_run
            + bytes[after_run..]
                .iter()
                .take_while(|&&b| b == b' ')
                .count();
        let end = text[start..]
            .find(LineBreak::NEWLINE as char)
            .map_or(text.len(), |i| start + i);

        Some(HeadingMatch {
            level,
            content: Span { start, end },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1, (2, 7))]
    #[case("### Deep\nnext", 3, (4, 8))]
    #[case("##   spaced", 2, (5, 11))]
    #[case("# ", 1, (2, 2))]
    fn matches_heading_lines(
        #[case] text: &str,
        #[case] level: usize,
        #[case] content: (usize, usize),
    ) {
        let m = Heading::match_at(text, 0).unwrap();
        assert_eq!(m.level, level);
        assert_eq!(m.content, Span::new(content.0, content.1));
    }

    #[rstest]
    #[case("#tag", 0)]
    #[case("issue # 5", 6)]
    #[case("#\n", 0)]
    #[case("#", 0)]
    fn rejects_non_headings(#[case] text: &str, #[case] at: usize) {
        assert_eq!(Heading::match_at(text, at), None);
    }

    #[test]
    fn heading_on_second_line() {
        let text = "intro\n## Next";
        let m = Heading::match_at(text, 6).unwrap();
        assert_eq!(m.level, 2);
        assert_eq!(&text[m.content.range()], "Next");
    }
}
