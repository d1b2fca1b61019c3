use crate::models::{Note, NoteFile};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions treated as note files.
pub const NOTE_EXTENSIONS: [&str; 2] = ["md", "txt"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidNotesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// Recursively collects note files under `notes_root`, sorted by path.
pub fn scan_note_files(notes_root: &Path) -> Result<Vec<NoteFile>, IoError> {
    validate_notes_dir(notes_root)?;

    let mut paths = Vec::new();
    scan_directory_recursive(notes_root, &mut paths)?;
    paths.sort();
    log::debug!("Found {} note files in {}", paths.len(), notes_root.display());

    Ok(paths
        .into_iter()
        .map(|path| NoteFile::new(path, notes_root))
        .collect())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_note_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_note_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| NOTE_EXTENSIONS.contains(&ext))
}

/// Reads a note file; the file stem becomes the title and the contents the
/// body.
pub fn read_note(path: &Path) -> Result<Note, IoError> {
    if !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let body = fs::read_to_string(path)?;
    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Note::new(title, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_notes_dir() -> TempDir {
        TempDir::new().unwrap()
    }

    fn create_test_file(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn names(files: &[NoteFile]) -> Vec<&str> {
        files.iter().map(|f| f.display_name()).collect()
    }

    #[test]
    fn test_scan_finds_md_and_txt_sorted() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "b.md", "# B");
        create_test_file(&notes_dir, "a.txt", "plain");
        create_test_file(&notes_dir, "sub/c.md", "1. one");

        let files = scan_note_files(notes_dir.path()).unwrap();

        assert_eq!(names(&files), ["a", "b", "sub/c"]);
    }

    #[test]
    fn test_scan_ignores_other_files() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "document.md", "# Markdown");
        create_test_file(&notes_dir, "image.png", "fake image data");
        create_test_file(&notes_dir, "config.json", "{}");
        create_test_file(&notes_dir, "no_extension", "text");

        let files = scan_note_files(notes_dir.path()).unwrap();

        assert_eq!(names(&files), ["document"]);
    }

    #[test]
    fn test_scan_invalid_directory() {
        let result = scan_note_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidNotesDir(_))));
    }

    #[test]
    fn test_validate_notes_dir_rejects_file() {
        let notes_dir = create_test_notes_dir();
        let file = create_test_file(&notes_dir, "note.md", "x");

        assert!(validate_notes_dir(notes_dir.path()).is_ok());
        assert!(matches!(
            validate_notes_dir(&file),
            Err(IoError::InvalidNotesDir(_))
        ));
    }

    #[test]
    fn test_read_note_uses_file_stem_as_title() {
        let notes_dir = create_test_notes_dir();
        let path = create_test_file(&notes_dir, "Groceries.md", "1. milk\n2. eggs\n");

        let note = read_note(&path).unwrap();

        assert_eq!(note.title, "Groceries");
        assert_eq!(note.body, "1. milk\n2. eggs\n");
    }

    #[test]
    fn test_read_note_not_found() {
        let notes_dir = create_test_notes_dir();
        let result = read_note(&notes_dir.path().join("missing.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
