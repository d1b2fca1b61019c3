use serde::Serialize;

use super::style::{Color, RenderStyle};

/// A contiguous piece of text with one resolved style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledRun {
    pub text: String,
    pub font_size_pt: f32,
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub color: Color,
}

impl StyledRun {
    /// A run with the style's defaults and no emphasis.
    pub fn plain(text: impl Into<String>, style: &RenderStyle) -> Self {
        Self {
            text: text.into(),
            font_size_pt: style.base_font_size,
            bold: false,
            italic: false,
            strikethrough: false,
            color: style.color,
        }
    }

    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.strikethrough)
    }
}

/// Concatenates the text of `runs`.
pub fn plain_text(runs: &[StyledRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}
