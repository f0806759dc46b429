// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::DomainError;
use tracing::debug;

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note and return the number of rows removed
    ///
    /// Deleting an id that does not exist is not an error and returns 0.
    pub fn delete_note(&mut self, note_id: i64) -> Result<usize, DomainError> {
        let removed = self.repository.delete_note(note_id)?;
        if removed == 0 {
            debug!(note_id, "Nothing to delete");
        }
        Ok(removed)
    }
}
