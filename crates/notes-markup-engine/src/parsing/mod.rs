//! # Parsing
//!
//! Turns note text into an immutable [`Node`] tree.
//!
//! ## Pipeline
//!
//! ```text
//! text → scanner (next delimiter) → parser (dispatch to kinds) → Node tree
//! ```
//!
//! ## Modules
//!
//! - **`scanner`**: finds the next delimiter byte from a cursor
//! - **`kinds`**: per-construct delimiters and matching rules
//! - **`parser`**: the recursive descent loop
//! - **`node`**: `Node` / `NodeKind` tree types
//! - **`observer`**: `ParseObserver` hooks (logging, recording)
//! - **`snapshot`**: invariant checks and stable outlines for tests
//!
//! Malformed input never fails: unmatched delimiters stay in the text.
//!
//! ```
//! use notes_markup_engine::parsing::{parse, NodeKind};
//!
//! let root = parse("# Title\n\nSome *text*");
//! assert_eq!(root.children()[0].kind(), &NodeKind::Heading { level: 1 });
//! assert_eq!(root.children()[1].kind(), &NodeKind::Paragraph);
//! ```

pub mod kinds;
pub mod node;
pub mod observer;
mod parser;
pub mod scanner;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

pub use node::{ItemMarker, Node, NodeKind};
pub use observer::{LogObserver, NoopObserver, ParseEvent, ParseObserver, RecordingObserver};
pub use span::Span;

/// Parses `text` into a `Root` node, logging parse events at trace level.
pub fn parse(text: &str) -> Node<'_> {
    parse_with(text, &mut LogObserver)
}

/// Parses `text` into a `Root` node, reporting events to `observer`.
///
/// Blank input yields a `Root` without children.
pub fn parse_with<'a, O>(text: &'a str, observer: &mut O) -> Node<'a>
where
    O: ParseObserver + ?Sized,
{
    let span = Span::new(0, text.len());
    if text.trim().is_empty() {
        let root = Node::new(NodeKind::Root, span, text, Vec::new());
        observer.node_created(&root);
        return root;
    }
    parser::build(NodeKind::Root, span, text, observer)
}
