//! Integration tests for the parsing module.
//!
//! Trees are compared as indented outlines (see
//! [`snapshot::outline`](crate::parsing::snapshot::outline)) using inline
//! `insta` snapshots. Every parsed tree also goes through the invariant
//! checker.

mod termination;

use crate::parsing::{Node, parse, snapshot};

/// Parses `text`, asserting the tree invariants along the way.
fn parse_checked(text: &str) -> Node<'_> {
    let root = parse(text);
    snapshot::invariants(text, &root);
    root
}

fn outline(text: &str) -> String {
    snapshot::outline(&parse_checked(text))
}
