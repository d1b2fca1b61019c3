//! # Construct Kinds
//!
//! Each construct owns its delimiter bytes and the matching rules that
//! recognise it. The parser dispatches on delimiters and asks these types
//! whether a construct starts at a given offset; it never hardcodes `#`,
//! `**` or list marker shapes itself.
//!
//! ## Types
//!
//! - **`Heading`**: `#` runs at line start followed by a space
//! - **`LineBreak`**: single line breaks and `\n\n` paragraph breaks
//! - **`Emphasis`**: `**bold**` / `__bold__` and `*italic*` / `_italic_`
//! - **`Strikethrough`**: `~~struck~~`
//! - **`ListMarker`**: `1.` ordinals and `-` / `*` bullets, indentation in tabs

pub mod emphasis;
pub mod heading;
pub mod line_break;
pub mod list;
pub mod strikethrough;

pub use emphasis::{Delimited, Emphasis};
pub use heading::{Heading, HeadingMatch};
pub use line_break::LineBreak;
pub use list::{ListKind, ListMarker, Marker, MarkerKind};
pub use strikethrough::Strikethrough;
