use crate::rendering::{RenderStyle, StyledRun, render_with};

/// A note as handed to the renderer: a title line and a free-text body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub body: String,
}

impl Note {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// The markup the renderer parses: title and body separated by a blank
    /// line, so the body always lands in a paragraph.
    pub fn text(&self) -> String {
        format!("{}\n\n{}", self.title, self.body)
    }

    pub fn render(&self) -> Vec<StyledRun> {
        self.render_with(&RenderStyle::default())
    }

    /// Builds a fresh tree for this call and drops it once flattened.
    pub fn render_with(&self, style: &RenderStyle) -> Vec<StyledRun> {
        render_with(&self.text(), style)
    }
}
