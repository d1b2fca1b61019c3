// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_note_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** *content* and ~~old~~ text.\n\n1. First item\n\t1. Nested item\n2. Another item\n\n- bullet\n- another\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_lists(items: usize, depth: usize) -> String {
    let mut content = String::new();
    for i in 0..items {
        for level in 0..depth {
            content.push_str(&"\t".repeat(level));
            content.push_str(&format!("{}. item {i} at level {level}\n", i + 1));
        }
    }
    content
}

/// Long runs of delimiters that never close.
#[allow(dead_code)]
pub fn generate_unmatched_delimiters(size: usize) -> String {
    "*_~#. ".repeat(size)
}
