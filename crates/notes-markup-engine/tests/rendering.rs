use notes_markup_engine::parsing::{RecordingObserver, parse_with, snapshot};
use notes_markup_engine::{Note, StyledRun, flatten, parse, plain_text, read_note, render};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn find<'r>(runs: &'r [StyledRun], text: &str) -> &'r StyledRun {
    runs.iter()
        .find(|r| r.text == text)
        .unwrap_or_else(|| panic!("no run {text:?} in {runs:#?}"))
}

#[test]
fn fixture_weekly_plan() {
    let md = fixture("weekly_plan");
    snapshot::invariants(&md, &parse(&md));

    let runs = render(&md);
    assert_eq!(
        plain_text(&runs),
        "Weekly plan\n\nThings to get done this week:\n\n\n1. Finish the draft\n\t1. intro\n\t2. outline conclusion\n2. Send it off\n\nNotes\nKeep it short."
    );
    assert_eq!(find(&runs, "Weekly plan").font_size_pt, 32.0);
    assert_eq!(find(&runs, "Notes").font_size_pt, 24.0);
    assert!(find(&runs, "done").bold);
    assert!(find(&runs, "draft").italic);
    assert!(find(&runs, "outline").strikethrough);
    assert!(!find(&runs, " conclusion").strikethrough);
    assert_eq!(find(&runs, "\nKeep it short.").font_size_pt, 12.0);
}

#[test]
fn fixture_bullets() {
    let md = fixture("bullets");
    snapshot::invariants(&md, &parse(&md));

    assert_eq!(
        plain_text(&render(&md)),
        "\n• apples\n• pears\n\t• conference\n• plums"
    );
}

#[test]
fn note_file_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("Weekly.md");
    std::fs::write(&path, fixture("bullets")).unwrap();

    let note = read_note(&path).unwrap();
    let runs = note.render();

    assert_eq!(runs[0].text, "Weekly\n");
    assert_eq!(runs[1].text, "\n\n");
    assert_eq!(runs[2].text, "\n• ");
}

#[test]
fn ordered_items_are_prefixed_with_ordinals() {
    let runs = render("1. first\n2. second\n");
    let texts: Vec<_> = runs.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, ["\n1. ", "first", "\n2. ", "second"]);
}

#[rstest]
#[case("*lonely", "*lonely")]
#[case("_open", "_open")]
#[case("~~nope~", "~~nope~")]
#[case("a ** b", "a ** b")]
#[case("#nospace", "#nospace")]
fn unmatched_delimiters_survive(#[case] text: &str, #[case] expected: &str) {
    let runs = render(text);
    assert_eq!(plain_text(&runs), expected);
    assert!(runs.iter().all(StyledRun::is_plain));
}

#[test]
fn unmatched_delimiters_are_reported() {
    let mut observer = RecordingObserver::default();
    parse_with("*lonely and ~tilde", &mut observer);
    let fallbacks: Vec<_> = observer.fallbacks().collect();
    assert_eq!(fallbacks, [('*', 0), ('~', 12)]);
}

#[test]
fn flatten_is_repeatable() {
    let md = fixture("weekly_plan");
    let root = parse(&md);
    assert_eq!(flatten(&root), flatten(&root));
}

#[test]
fn runs_are_never_empty() {
    for text in [
        fixture("weekly_plan"),
        fixture("bullets"),
        Note::new("", "").text(),
        "**".to_string(),
        "\n".to_string(),
    ] {
        assert!(render(&text).iter().all(|r| !r.text.is_empty()));
    }
}

#[test]
fn star_line_closing_italic_renders_italic() {
    let runs = render("* note*");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "note");
    assert!(runs[0].italic);
}

#[rstest]
#[case("- - x", "\n• - x")]
#[case("1. 1. x", "\n1. 1. x")]
fn repeated_marker_renders_as_item_text(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(plain_text(&render(text)), expected);
}
