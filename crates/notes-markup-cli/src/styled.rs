//! Conversion of styled runs into terminal text.

use crossterm::style::{Attribute, ContentStyle};
use notes_markup_engine::{RenderStyle, StyledRun, rendering};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const TAB: &str = "  ";

/// Heading level for a run, recovered from its font size.
fn heading_level(run: &StyledRun, style: &RenderStyle) -> Option<usize> {
    if run.font_size_pt == style.base_font_size {
        return None;
    }
    style
        .heading_sizes
        .iter()
        .position(|size| *size == run.font_size_pt)
        .map(|i| i + 1)
}

fn heading_color(level: usize) -> Color {
    match level {
        1 => Color::Magenta,
        2 => Color::Cyan,
        3 => Color::Blue,
        _ => Color::Green,
    }
}

fn run_style(run: &StyledRun, style: &RenderStyle) -> Style {
    let mut out = Style::default();
    if run.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    if run.italic {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if run.strikethrough {
        out = out.add_modifier(Modifier::CROSSED_OUT);
    }
    if let Some(level) = heading_level(run, style) {
        out = out.add_modifier(Modifier::BOLD).fg(heading_color(level));
    } else if run.color != rendering::Color::WHITE {
        out = out.fg(Color::Rgb(run.color.r, run.color.g, run.color.b));
    }
    out
}

/// Splits runs at line breaks into ratatui lines, keeping each run's style.
pub fn to_lines(runs: &[StyledRun], style: &RenderStyle) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for run in runs {
        let span_style = run_style(run, style);
        for (i, piece) in run.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
            if !piece.is_empty() {
                current.push(Span::styled(piece.replace('\t', TAB), span_style));
            }
        }
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Terminal attributes for a run printed to stdout.
pub fn content_style(run: &StyledRun, style: &RenderStyle) -> ContentStyle {
    let mut out = ContentStyle::new();
    if run.bold {
        out.attributes.set(Attribute::Bold);
    }
    if run.italic {
        out.attributes.set(Attribute::Italic);
    }
    if run.strikethrough {
        out.attributes.set(Attribute::CrossedOut);
    }
    if let Some(level) = heading_level(run, style) {
        out.attributes.set(Attribute::Bold);
        out.foreground_color = Some(match level {
            1 => crossterm::style::Color::Magenta,
            2 => crossterm::style::Color::Cyan,
            3 => crossterm::style::Color::Blue,
            _ => crossterm::style::Color::Green,
        });
    } else if run.color != rendering::Color::WHITE {
        out.foreground_color = Some(crossterm::style::Color::Rgb {
            r: run.color.r,
            g: run.color.g,
            b: run.color.b,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_markup_engine::render;
    use pretty_assertions::assert_eq;

    fn line_texts(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn splits_runs_into_lines() {
        let style = RenderStyle::default();
        let lines = to_lines(&render("# Title\n\n1. a\n\t1. b"), &style);
        assert_eq!(line_texts(&lines), ["Title", "", "", "1. a", "  1. b"]);
    }

    #[test]
    fn heading_runs_are_bold_and_coloured() {
        let style = RenderStyle::default();
        let lines = to_lines(&render("## Sub"), &style);
        let span = &lines[0].spans[0];
        assert_eq!(span.style.fg, Some(Color::Cyan));
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn emphasis_maps_to_modifiers() {
        let style = RenderStyle::default();
        let lines = to_lines(&render("**b** *i* ~~s~~"), &style);
        let modifiers: Vec<_> = lines[0]
            .spans
            .iter()
            .filter(|s| s.content.trim() != "")
            .map(|s| s.style.add_modifier)
            .collect();
        assert_eq!(
            modifiers,
            [Modifier::BOLD, Modifier::ITALIC, Modifier::CROSSED_OUT]
        );
    }

    #[test]
    fn custom_color_becomes_foreground() {
        let style = RenderStyle {
            color: rendering::Color::rgb(1, 2, 3),
            ..RenderStyle::default()
        };
        let runs = rendering::render_with("plain", &style);
        assert_eq!(
            to_lines(&runs, &style)[0].spans[0].style.fg,
            Some(Color::Rgb(1, 2, 3))
        );
        assert_eq!(
            content_style(&runs[0], &style).foreground_color,
            Some(crossterm::style::Color::Rgb { r: 1, g: 2, b: 3 })
        );
    }
}
