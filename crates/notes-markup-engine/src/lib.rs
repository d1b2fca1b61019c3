pub mod io;
pub mod models;
pub mod parsing;
pub mod rendering;

// Re-export key types for easier usage
pub use io::*;
pub use models::{Note, NoteFile};
pub use parsing::{ItemMarker, Node, NodeKind, ParseObserver, parse, parse_with};
pub use rendering::{
    Color, ColorParseError, RenderStyle, StyledRun, flatten, flatten_with, plain_text, render,
    render_with,
};
