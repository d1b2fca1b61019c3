pub mod note;
pub mod note_file;

pub use note::Note;
pub use note_file::NoteFile;
