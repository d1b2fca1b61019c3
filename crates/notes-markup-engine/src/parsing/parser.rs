//! Recursive descent over delimiters.
//!
//! Each call works on one text slice: it scans for the nearest delimiter,
//! asks the matching construct in [`kinds`](super::kinds) whether it opens
//! there, and on success builds the child node by recursing into the
//! construct's content. Text between constructs becomes `Normal` leaves.
//! Delimiters that open nothing stay in the surrounding text.

use super::{
    kinds::{
        Delimited, Emphasis, Heading, LineBreak, ListKind, ListMarker, Marker, MarkerKind,
        Strikethrough,
    },
    node::{ItemMarker, Node, NodeKind},
    observer::ParseObserver,
    scanner,
    span::Span,
};

/// Which constructs a slice may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// Headings, paragraphs and lists are recognised, plus everything inline.
    Block,
    /// Emphasis and strikethrough only.
    Inline,
}

impl Context {
    fn of(kind: &NodeKind) -> Self {
        match kind {
            NodeKind::Root | NodeKind::Paragraph | NodeKind::ListItem { .. } => Context::Block,
            _ => Context::Inline,
        }
    }
}

/// What to do with the delimiter under the cursor.
enum Step<'a> {
    /// A construct was recognised: literal text up to `literal_end` is
    /// emitted first, then `node`, and parsing resumes at `resume`.
    Node {
        node: Node<'a>,
        literal_end: usize,
        resume: usize,
    },
    /// Nothing to build; emit literal text up to `literal_end` and drop
    /// everything before `resume`.
    Skip { literal_end: usize, resume: usize },
    /// The delimiter is ordinary text.
    Literal,
    /// A construct was attempted but not closed; the delimiter is text.
    Fallback,
}

/// Builds a node of `kind` over `raw`, parsing its children first.
pub(crate) fn build<'a, O>(kind: NodeKind, span: Span, raw: &'a str, observer: &mut O) -> Node<'a>
where
    O: ParseObserver + ?Sized,
{
    let item = matches!(kind, NodeKind::ListItem { .. });
    let children = Parser::new(Context::of(&kind), item, raw, observer).run();
    let node = Node::new(kind, span, raw, children);
    observer.node_created(&node);
    node
}

struct Parser<'a, 'o, O: ParseObserver + ?Sized> {
    text: &'a str,
    context: Context,
    /// The slice is a list item's content, whose first line follows the
    /// item's own marker.
    item: bool,
    observer: &'o mut O,
    children: Vec<Node<'a>>,
    /// Start of the literal text not yet emitted.
    text_start: usize,
    /// Where the next delimiter scan begins.
    cursor: usize,
}

impl<'a, 'o, O: ParseObserver + ?Sized> Parser<'a, 'o, O> {
    fn new(context: Context, item: bool, text: &'a str, observer: &'o mut O) -> Self {
        Self {
            text,
            context,
            item,
            observer,
            children: Vec::new(),
            text_start: 0,
            cursor: 0,
        }
    }

    fn run(mut self) -> Vec<Node<'a>> {
        let len = self.text.len();
        // `-` is not a delimiter; a dash list on the first line is found here.
        if let Some(step) = self.dash_list(0) {
            self.apply(0, step);
        }
        while self.cursor < len {
            let Some(at) = scanner::next_delimiter(self.text, self.cursor) else {
                break;
            };
            let before = self.cursor;

            let step = self.step(at);
            self.apply(at, step);

            debug_assert!(
                self.cursor > before,
                "parser made no progress at offset {before} of {:?}",
                self.text
            );
        }
        self.flush(len);
        self.children
    }

    fn apply(&mut self, at: usize, step: Step<'a>) {
        match step {
            Step::Node {
                node,
                literal_end,
                resume,
            } => {
                self.flush(literal_end);
                self.children.push(node);
                self.resume_at(resume);
            }
            Step::Skip {
                literal_end,
                resume,
            } => {
                self.flush(literal_end);
                self.resume_at(resume);
            }
            Step::Literal => self.cursor = at + 1,
            Step::Fallback => {
                let delimiter = char::from(self.text.as_bytes()[at]);
                self.observer.fallback(delimiter, at);
                self.cursor = at + 1;
            }
        }
    }

    fn resume_at(&mut self, offset: usize) {
        self.cursor = offset;
        self.text_start = offset;
    }

    /// Emits `text[text_start..end]` as a `Normal` leaf if it is non-empty.
    fn flush(&mut self, end: usize) {
        let span = Span::new(self.text_start, end);
        if span.is_empty() {
            return;
        }
        let text = self.text;
        let node = Node::text(span, &text[span.range()]);
        self.observer.node_created(&node);
        self.children.push(node);
    }

    fn child(&mut self, kind: NodeKind, span: Span) -> Node<'a> {
        let text = self.text;
        build(kind, span, &text[span.range()], &mut *self.observer)
    }

    fn step(&mut self, at: usize) -> Step<'a> {
        match self.text.as_bytes()[at] {
            Heading::HASH => self.heading(at),
            LineBreak::NEWLINE => self.line_break(at),
            Emphasis::STAR | Emphasis::UNDERSCORE => self.emphasis(at),
            Strikethrough::TILDE => self.strikethrough(at),
            ListMarker::ORDINAL_DOT => self.list(at).unwrap_or(Step::Literal),
            _ => Step::Literal,
        }
    }

    fn heading(&mut self, at: usize) -> Step<'a> {
        if self.context != Context::Block {
            return Step::Literal;
        }
        match Heading::match_at(self.text, at) {
            Some(m) => Step::Node {
                node: self.child(NodeKind::Heading { level: m.level }, m.content),
                literal_end: at,
                resume: m.content.end,
            },
            None => Step::Fallback,
        }
    }

    fn line_break(&mut self, at: usize) -> Step<'a> {
        let len = self.text.len();
        if at + 1 == len {
            return Step::Skip {
                literal_end: at,
                resume: len,
            };
        }
        if self.context != Context::Block {
            return Step::Literal;
        }
        if self.text.as_bytes()[at + 1] != LineBreak::NEWLINE {
            return self.dash_list(at + 1).unwrap_or(Step::Literal);
        }

        let start = at + LineBreak::PARAGRAPH_BREAK.len();
        if start >= len {
            // trailing blank line
            return Step::Skip {
                literal_end: at,
                resume: len,
            };
        }
        let end = LineBreak::paragraph_end(self.text, start);
        // Text running up to the break keeps its newline.
        let literal_end = if self.text_start < at { at + 1 } else { at };
        Step::Node {
            node: self.child(NodeKind::Paragraph, Span::new(start, end)),
            literal_end,
            resume: end,
        }
    }

    /// Emphasis takes precedence; a `* ` that closes no italic span may
    /// still start a bullet list.
    fn emphasis(&mut self, at: usize) -> Step<'a> {
        let text = self.text;
        let (kind, found) = if Emphasis::is_doubled(text, at) {
            (NodeKind::Bold, Emphasis::bold(text, at))
        } else {
            (NodeKind::Italic, Emphasis::italic(text, at))
        };
        if let Some(d) = found {
            return self.delimited(kind, at, d);
        }
        if text.as_bytes()[at] == ListMarker::STAR
            && let Some(step) = self.list(at)
        {
            return step;
        }
        Step::Fallback
    }

    fn strikethrough(&mut self, at: usize) -> Step<'a> {
        match Strikethrough::match_at(self.text, at) {
            Some(d) => self.delimited(NodeKind::Strikethrough, at, d),
            None => Step::Fallback,
        }
    }

    fn delimited(&mut self, kind: NodeKind, at: usize, d: Delimited) -> Step<'a> {
        Step::Node {
            node: self.child(kind, d.content),
            literal_end: at,
            resume: d.end,
        }
    }

    /// Starts a dash list when the line at `line_start` opens with a `-`
    /// marker.
    fn dash_list(&mut self, line_start: usize) -> Option<Step<'a>> {
        if self.context != Context::Block {
            return None;
        }
        let marker = ListMarker::on_line(self.text, line_start)?;
        if self.text.as_bytes()[marker.punct] != ListMarker::DASH {
            return None;
        }
        self.list(marker.punct)
    }

    /// Starts a list when the marker at `at` opens one: `1.` for ordered
    /// lists, `-` or `*` for unordered ones, at line start after tabs.
    fn list(&mut self, at: usize) -> Option<Step<'a>> {
        if self.context != Context::Block {
            return None;
        }
        let marker = ListMarker::at(self.text, at)?;
        // A marker straight after an item's own marker is text.
        if self.item && marker.line_start == 0 {
            return None;
        }
        let kind = match marker.kind {
            MarkerKind::Ordered {
                starts_at_one: true,
            } => ListKind::Ordered,
            MarkerKind::Ordered {
                starts_at_one: false,
            } => return None,
            MarkerKind::Bullet => ListKind::Unordered,
        };

        let (node, end) = parse_list(self.text, kind, marker, &mut *self.observer);
        Some(Step::Node {
            node,
            // The line break before the marker belongs to the list.
            literal_end: marker.line_start.saturating_sub(1),
            resume: end,
        })
    }
}

/// Collects consecutive items of one list, starting at `first`.
///
/// The list ends at a blank line, at the end of the text, or at a line that
/// is not a marker of the same kind at the same depth. Returns the list node
/// and the offset just past its last item.
fn parse_list<'a, O>(
    text: &'a str,
    kind: ListKind,
    first: Marker,
    observer: &mut O,
) -> (Node<'a>, usize)
where
    O: ParseObserver + ?Sized,
{
    let depth = first.tabs;
    let base = first.line_start;
    let mut items = Vec::new();
    let mut marker = first;

    let end = loop {
        let item_end = ListMarker::item_end(text, marker.content_start, depth);
        let content = trimmed(text, Span::new(marker.content_start, item_end));
        let item_marker = match kind {
            ListKind::Ordered => ItemMarker::Ordinal(items.len() + 1),
            ListKind::Unordered => ItemMarker::Bullet,
        };
        items.push(build(
            NodeKind::ListItem {
                marker: item_marker,
                indent: depth + 1,
            },
            content.relative_to(base),
            &text[content.range()],
            observer,
        ));

        let next_line = item_end + 1;
        if next_line >= text.len() || text.as_bytes()[next_line] == LineBreak::NEWLINE {
            break item_end;
        }
        match ListMarker::on_line(text, next_line) {
            Some(m) if m.tabs == depth && kind.accepts(m.kind) && !opens_italic(text, m) => {
                marker = m
            }
            _ => break item_end,
        }
    };

    let span = Span::new(base, end);
    let node = Node::new(kind.node_kind(depth), span, &text[span.range()], items);
    observer.node_created(&node);
    (node, end)
}

/// A `*` bullet line that closes an italic span is emphasis, not an item.
fn opens_italic(text: &str, marker: Marker) -> bool {
    text.as_bytes()[marker.punct] == ListMarker::STAR
        && Emphasis::italic(text, marker.punct).is_some()
}

/// Narrows `span` to exclude surrounding whitespace.
fn trimmed(text: &str, span: Span) -> Span {
    let slice = &text[span.range()];
    let start = span.start + (slice.len() - slice.trim_start().len());
    Span::new(start, start + slice.trim().len())
}
