use crate::parsing::{ItemMarker, Node, NodeKind};

use super::run::StyledRun;
use super::style::RenderStyle;

/// Flattens a parsed tree using the default [`RenderStyle`].
pub fn flatten(node: &Node<'_>) -> Vec<StyledRun> {
    flatten_with(node, &RenderStyle::default())
}

/// Flattens a parsed tree into styled runs in document order.
///
/// Style cascades top-down: the nearest enclosing heading decides the font
/// size and each emphasis ancestor switches its flag on for everything below
/// it. Only `Normal` leaves and the separators emitted for paragraphs and list
/// items produce text.
pub fn flatten_with(node: &Node<'_>, style: &RenderStyle) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    walk(node, StyledRun::plain(String::new(), style), style, &mut runs);
    runs
}

/// `current` carries the cascaded style; its text is always empty.
fn walk(node: &Node<'_>, mut current: StyledRun, style: &RenderStyle, out: &mut Vec<StyledRun>) {
    match node.kind() {
        NodeKind::Normal => {
            push(out, &current, node.raw_value());
            return;
        }
        NodeKind::Paragraph => push(out, &current, "\n\n"),
        NodeKind::ListItem { marker, indent } => {
            push(out, &current, &item_prefix(*marker, *indent, style))
        }
        NodeKind::Heading { level } => current.font_size_pt = style.heading_size(*level),
        NodeKind::Bold => current.bold = true,
        NodeKind::Italic => current.italic = true,
        NodeKind::Strikethrough => current.strikethrough = true,
        NodeKind::Root | NodeKind::OrderedList { .. } | NodeKind::UnorderedList { .. } => {}
    }

    for child in node.children() {
        walk(child, current.clone(), style, out);
    }
}

fn push(out: &mut Vec<StyledRun>, current: &StyledRun, text: &str) {
    if text.is_empty() {
        return;
    }
    out.push(StyledRun {
        text: text.to_string(),
        ..current.clone()
    });
}

/// `"\n"`, one tab per nesting level below the top, then the marker.
fn item_prefix(marker: ItemMarker, indent: usize, style: &RenderStyle) -> String {
    let tabs = "\t".repeat(indent.saturating_sub(1));
    match marker {
        ItemMarker::Ordinal(n) => format!("\n{tabs}{n}. "),
        ItemMarker::Bullet => format!("\n{tabs}{} ", style.bullet),
    }
}
