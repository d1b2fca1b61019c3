use std::fmt::Write;

use crate::parsing::node::{ItemMarker, Node, NodeKind};

/// Renders a tree as one line per node, indented two spaces per level:
/// `Kind@start..end`, with the text of `Normal` leaves quoted.
pub fn outline(root: &Node<'_>) -> String {
    let mut out = String::new();
    write_node(&mut out, root, 0);
    out
}

fn write_node(out: &mut String, node: &Node<'_>, indent: usize) {
    let span = node.span();
    let _ = write!(
        out,
        "{}{}@{}..{}",
        "  ".repeat(indent),
        label(node.kind()),
        span.start,
        span.end
    );
    if matches!(node.kind(), NodeKind::Normal) {
        let _ = write!(out, " {:?}", node.raw_value());
    }
    out.push('\n');

    for child in node.children() {
        write_node(out, child, indent + 1);
    }
}

fn label(kind: &NodeKind) -> String {
    match kind {
        NodeKind::Heading { level } => format!("Heading({level})"),
        NodeKind::OrderedList { depth } => format!("OrderedList({depth})"),
        NodeKind::UnorderedList { depth } => format!("UnorderedList({depth})"),
        NodeKind::ListItem {
            marker: ItemMarker::Ordinal(n),
            indent,
        } => format!("ListItem(#{n}, indent {indent})"),
        NodeKind::ListItem {
            marker: ItemMarker::Bullet,
            indent,
        } => format!("ListItem(bullet, indent {indent})"),
        other => other.name().to_string(),
    }
}
