use anyhow::Result;
use notes_markup_engine::{NoteFile, RenderStyle, io};
use ratatui::text::Line;
use ratatui::widgets::ListState;
use std::path::Path;

use crate::styled;

pub struct App {
    pub files: Vec<NoteFile>,
    pub file_list_state: ListState,
    pub current_content: Vec<Line<'static>>,
    style: RenderStyle,
}

impl App {
    pub fn new(notes_path: &Path, style: RenderStyle) -> Result<Self> {
        let files = io::scan_note_files(notes_path)?;
        log::info!("Loaded {} notes from {}", files.len(), notes_path.display());

        let mut app = Self {
            files,
            file_list_state: ListState::default(),
            current_content: Vec::new(),
            style,
        };

        // Select first item if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    pub fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn selected_file(&self) -> Option<&NoteFile> {
        self.file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
    }

    fn update_content_for_selection(&mut self) {
        let Some(file) = self.selected_file() else {
            return;
        };
        self.current_content = match io::read_note(file.path()) {
            Ok(note) => styled::to_lines(&note.render_with(&self.style), &self.style),
            Err(e) => {
                log::warn!("Failed to read {}: {e}", file.path().display());
                vec![Line::from(format!("Error reading file: {e}"))]
            }
        };
    }
}
