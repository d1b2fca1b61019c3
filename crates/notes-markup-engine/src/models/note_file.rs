use std::path::{Path, PathBuf};

/// A note file found under a notes directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    path: PathBuf,
    display_name: String,
}

impl NoteFile {
    /// `notes_root` only affects the display name, which is the path
    /// relative to it without the extension.
    pub fn new(path: PathBuf, notes_root: &Path) -> Self {
        let relative = path.strip_prefix(notes_root).unwrap_or(&path);
        let display_name = relative.with_extension("").to_string_lossy().into_owned();
        Self { path, display_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
