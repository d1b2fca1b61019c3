pub struct LineBreak;

impl LineBreak {
    pub const NEWLINE: u8 = b'\n';
    pub const PARAGRAPH_BREAK: &'static str = "\n\n";

    /// True when `at` is the first byte of a line.
    pub fn is_line_start(text: &str, at: usize) -> bool {
        at == 0 || text.as_bytes().get(at - 1) == Some(&Self::NEWLINE)
    }

    /// Offset of the line containing `at`.
    pub fn line_start(text: &str, at: usize) -> usize {
        text[..at].rfind('\n').map_or(0, |i| i + 1)
    }

    /// Offset of the next `\n\n` at or after `from`, or the end of `text`.
    pub fn paragraph_end(text: &str, from: usize) -> usize {
        text[from..]
            .find(Self::PARAGRAPH_BREAK)
            .map_or(text.len(), |i| from + i)
    }
}
