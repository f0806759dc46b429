// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List all notes, most recently modified first
    ///
    /// # Returns
    /// Empty vector if the store holds no notes
    pub fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.repository.list_notes()
    }

    pub fn get_note(&mut self, note_id: i64) -> Result<Note, DomainError> {
        self.repository.get_note(note_id)
    }
}
