//! Non-interactive output modes.

use anyhow::Result;
use crossterm::{queue, style::PrintStyledContent};
use notes_markup_engine::parsing::{parse, snapshot};
use notes_markup_engine::{Note, RenderStyle};
use std::io::Write;

/// Writes the note's runs with terminal styling.
pub fn styled(out: &mut impl Write, note: &Note, style: &RenderStyle) -> Result<()> {
    for run in note.render_with(style) {
        let content_style = crate::styled::content_style(&run, style);
        queue!(out, PrintStyledContent(content_style.apply(run.text)))?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Writes the parsed node outline.
pub fn tree(out: &mut impl Write, note: &Note) -> Result<()> {
    let text = note.text();
    write!(out, "{}", snapshot::outline(&parse(&text)))?;
    Ok(())
}

/// Writes one debug line per run.
pub fn runs(out: &mut impl Write, note: &Note, style: &RenderStyle) -> Result<()> {
    for run in note.render_with(style) {
        let mut flags = Vec::new();
        if run.bold {
            flags.push("bold");
        }
        if run.italic {
            flags.push("italic");
        }
        if run.strikethrough {
            flags.push("strike");
        }
        writeln!(
            out,
            "{:?} {}pt {} [{}]",
            run.text,
            run.font_size_pt,
            run.color,
            flags.join(",")
        )?;
    }
    Ok(())
}
