use crate::parsing::node::{ItemMarker, Node, NodeKind};

/// Panics if the tree parsed from `text` violates a structural invariant.
pub fn check(text: &str, root: &Node<'_>) {
    assert_eq!(root.kind(), &NodeKind::Root, "tree must be rooted at Root");
    assert_eq!(root.raw_value(), text, "root must cover the whole input");
    check_node(root);
}

fn check_node(node: &Node<'_>) {
    let raw = node.raw_value();

    match node.kind() {
        NodeKind::Normal => {
            assert!(node.is_leaf(), "text leaves have no children");
            assert!(!raw.is_empty(), "text leaves are never empty");
        }
        NodeKind::Heading { level } => {
            assert!(*level >= 1, "heading level must be at least 1");
            assert!(!raw.contains('\n'), "heading spans one line: {raw:?}");
        }
        NodeKind::Bold | NodeKind::Italic | NodeKind::Strikethrough => {
            assert!(!raw.contains('\n'), "emphasis spans one line: {raw:?}");
        }
        NodeKind::OrderedList { depth } | NodeKind::UnorderedList { depth } => {
            assert!(!node.is_leaf(), "lists hold at least one item");
            for (i, item) in node.children().iter().enumerate() {
                let NodeKind::ListItem { marker, indent } = item.kind() else {
                    panic!("list child is not an item: {:?}", item.kind());
                };
                assert_eq!(*indent, depth + 1, "item indent is list depth + 1");
                match (node.kind(), marker) {
                    (NodeKind::OrderedList { .. }, ItemMarker::Ordinal(n)) => {
                        assert_eq!(*n, i + 1, "ordinals count from 1 in order")
                    }
                    (NodeKind::UnorderedList { .. }, ItemMarker::Bullet) => {}
                    (kind, marker) => panic!("{marker:?} item inside {kind:?}"),
                }
            }
        }
        NodeKind::ListItem { indent, .. } => {
            for nested in node.children().iter().filter(|c| c.kind().is_list()) {
                assert!(
                    nested.indent_depth() >= Some(*indent),
                    "nested list at depth {:?} inside item at indent {indent}",
                    nested.indent_depth()
                );
            }
        }
        NodeKind::Root | NodeKind::Paragraph => {}
    }

    for child in node.children() {
        let span = child.span();
        assert!(
            span.start <= span.end && span.end <= raw.len(),
            "child span out of bounds: {:?} (parent len: {})",
            span,
            raw.len()
        );
        assert_eq!(
            &raw[span.range()],
            child.raw_value(),
            "child span does not slice back to its raw value"
        );
        check_node(child);
    }
}
