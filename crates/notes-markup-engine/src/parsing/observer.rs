//! Parse event hooks.
//!
//! The parser reports what it builds and which delimiters it gave up on
//! through a [`ParseObserver`]. Observers see events; they never influence
//! parsing.

use super::{node::Node, node::NodeKind, span::Span};

pub trait ParseObserver {
    /// Called once per node, after its children are complete.
    fn node_created(&mut self, _node: &Node<'_>) {}

    /// Called when a delimiter opened no construct and was kept as text.
    /// `offset` is local to the slice being parsed.
    fn fallback(&mut self, _delimiter: char, _offset: usize) {}
}

/// Ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {}

/// Forwards events to the `log` facade at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ParseObserver for LogObserver {
    fn node_created(&mut self, node: &Node<'_>) {
        log::trace!(
            "built {:?} at {}..{} ({} children)",
            node.kind(),
            node.span().start,
            node.span().end,
            node.children().len()
        );
    }

    fn fallback(&mut self, delimiter: char, offset: usize) {
        log::trace!("unmatched {delimiter:?} at {offset}, kept as text");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseEvent {
    NodeCreated { kind: NodeKind, span: Span },
    Fallback { delimiter: char, offset: usize },
}

/// Records events in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<ParseEvent>,
}

impl RecordingObserver {
    pub fn fallbacks(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.events.iter().filter_map(|e| match e {
            ParseEvent::Fallback { delimiter, offset } => Some((*delimiter, *offset)),
            ParseEvent::NodeCreated { .. } => None,
        })
    }
}

impl ParseObserver for RecordingObserver {
    fn node_created(&mut self, node: &Node<'_>) {
        self.events.push(ParseEvent::NodeCreated {
            kind: node.kind().clone(),
            span: node.span(),
        });
    }

    fn fallback(&mut self, delimiter: char, offset: usize) {
        self.events.push(ParseEvent::Fallback { delimiter, offset });
    }
}
