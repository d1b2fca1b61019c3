use serde::Serialize;

use super::span::Span;

/// How a list item is numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemMarker {
    /// 1-based position within an ordered list.
    Ordinal(usize),
    /// Item of an unordered list.
    Bullet,
}

/// The syntactic construct a [`Node`] represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Root,
    /// Literal text leaf.
    Normal,
    Heading {
        /// Count of leading `#`, at least 1.
        level: usize,
    },
    Paragraph,
    Bold,
    Italic,
    Strikethrough,
    OrderedList {
        /// Leading tabs on the list's markers.
        depth: usize,
    },
    UnorderedList {
        depth: usize,
    },
    ListItem {
        marker: ItemMarker,
        /// Parent list depth + 1.
        indent: usize,
    },
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Normal => "Normal",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Bold => "Bold",
            NodeKind::Italic => "Italic",
            NodeKind::Strikethrough => "Strikethrough",
            NodeKind::OrderedList { .. } => "OrderedList",
            NodeKind::UnorderedList { .. } => "UnorderedList",
            NodeKind::ListItem { .. } => "ListItem",
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(
            self,
            NodeKind::OrderedList { .. } | NodeKind::UnorderedList { .. }
        )
    }
}

/// One node of a parsed tree.
///
/// Nodes borrow their text from the input given to
/// [`parse`](crate::parsing::parse) and are immutable once built: a node's
/// children are produced by its own parse call before the node exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node<'a> {
    kind: NodeKind,
    span: Span,
    raw: &'a str,
    children: Vec<Node<'a>>,
}

impl<'a> Node<'a> {
    pub(crate) fn new(kind: NodeKind, span: Span, raw: &'a str, children: Vec<Node<'a>>) -> Self {
        Self {
            kind,
            span,
            raw,
            children,
        }
    }

    pub(crate) fn text(span: Span, raw: &'a str) -> Self {
        Self::new(NodeKind::Normal, span, raw, Vec::new())
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Range of [`raw_value`](Self::raw_value) within the parent's text.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The text this node was built from, delimiters excluded.
    pub fn raw_value(&self) -> &'a str {
        self.raw
    }

    pub fn children(&self) -> &[Node<'a>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn heading_level(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Heading { level } => Some(level),
            _ => None,
        }
    }

    /// Nesting depth: item indent for list items, marker tabs for lists.
    pub fn indent_depth(&self) -> Option<usize> {
        match self.kind {
            NodeKind::ListItem { indent, .. } => Some(indent),
            NodeKind::OrderedList { depth } | NodeKind::UnorderedList { depth } => Some(depth),
            _ => None,
        }
    }

    /// Position of an ordered-list item, or for an ordered list the number
    /// of items it holds.
    pub fn ordinal(&self) -> Option<usize> {
        match self.kind {
            NodeKind::ListItem {
                marker: ItemMarker::Ordinal(n),
                ..
            } => Some(n),
            NodeKind::OrderedList { .. } => Some(self.children.len()),
            _ => None,
        }
    }

    /// Pre-order iterator over this node and all of its descendants.
    pub fn descendants(&self) -> Descendants<'_, 'a> {
        Descendants { stack: vec![self] }
    }
}

pub struct Descendants<'n, 'a> {
    stack: Vec<&'n Node<'a>>,
}

impl<'n, 'a> Iterator for Descendants<'n, 'a> {
    type Item = &'n Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
