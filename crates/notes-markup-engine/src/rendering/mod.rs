//! # Rendering
//!
//! Flattens a parsed [`Node`](crate::parsing::Node) tree into a sequence of
//! [`StyledRun`]s for a display surface.
//!
//! ```
//! use notes_markup_engine::rendering::render;
//!
//! let runs = render("# Hi\n\n*there*");
//! assert_eq!(runs[0].text, "Hi");
//! assert_eq!(runs[0].font_size_pt, 32.0);
//! assert!(runs[2].italic);
//! ```

mod flatten;
mod run;
mod style;

pub use flatten::{flatten, flatten_with};
pub use run::{StyledRun, plain_text};
pub use style::{Color, ColorParseError, RenderStyle};

use crate::parsing::parse;

/// Parses and flattens `text` with the default style.
pub fn render(text: &str) -> Vec<StyledRun> {
    render_with(text, &RenderStyle::default())
}

pub fn render_with(text: &str, style: &RenderStyle) -> Vec<StyledRun> {
    flatten_with(&parse(text), style)
}
