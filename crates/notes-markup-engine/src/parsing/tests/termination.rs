//! Exhaustive small-input checks: every string up to four characters over
//! an alphabet of delimiters and filler must parse, satisfy the tree
//! invariants, and keep every letter.

use crate::parsing::{NodeKind, NoopObserver, parse_with, snapshot};

const ALPHABET: [char; 11] = ['#', '\n', '*', '_', '~', '.', '1', '-', ' ', '\t', 'a'];

fn all_strings(max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * ALPHABET.len());
        for prefix in &frontier {
            for c in ALPHABET {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

fn letters(text: &str) -> usize {
    text.chars().filter(|&c| c == 'a').count()
}

#[test]
fn every_short_input_parses_and_keeps_letters() {
    for text in all_strings(4) {
        let root = parse_with(&text, &mut NoopObserver);
        snapshot::invariants(&text, &root);

        let kept: usize = root
            .descendants()
            .filter(|n| matches!(n.kind(), NodeKind::Normal))
            .map(|n| letters(n.raw_value()))
            .sum();
        assert_eq!(kept, letters(&text), "letters lost parsing {text:?}");
    }
}

#[test]
fn long_pathological_inputs_terminate() {
    let inputs = [
        "*".repeat(500),
        "_".repeat(500),
        "~".repeat(500),
        "#".repeat(500),
        "\n".repeat(500),
        "1. ".repeat(200),
        "- \t".repeat(200),
        "**a*".repeat(200),
        "\t".repeat(50) + "1. deep",
    ];
    for text in &inputs {
        let root = parse_with(text, &mut NoopObserver);
        snapshot::invariants(text, &root);
    }
}
