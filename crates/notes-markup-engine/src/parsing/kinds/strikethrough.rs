use std::sync::LazyLock;

use regex::Regex;

use super::Delimited;

static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^~~[ \t]?([^\n]+?)~~").expect("valid strikethrough regex"));

pub struct Strikethrough;

impl Strikethrough {
    pub const TILDE: u8 = b'~';

    /// Matches `~~content~~` starting at `at`.
    pub fn match_at(text: &str, at: usize) -> Option<Delimited> {
        Delimited::capture(&STRIKETHROUGH, text, at)
    }
}
