// src/application/note_saver.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};
use tracing::info;

pub struct NoteSaver<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteSaver<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Store a new note. Always inserts a fresh row.
    pub fn save_note(&mut self, title: &str, content: &str) -> Result<Note, DomainError> {
        let note = self.repository.save_note(title, content)?;
        info!(note_id = note.id, "Saved note");
        Ok(note)
    }

    /// Overwrite an existing note in place
    pub fn update_note(
        &mut self,
        note_id: i64,
        title: &str,
        content: &str,
    ) -> Result<Note, DomainError> {
        let note = self.repository.update_note(note_id, title, content)?;
        info!(note_id, "Updated note");
        Ok(note)
    }

    /// Change only the given fields of an existing note
    ///
    /// # Errors
    /// `InvalidInput` if neither field is given, `NoteNotFound` if the id is unknown
    pub fn edit_note(
        &mut self,
        note_id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Note, DomainError> {
        if title.is_none() && content.is_none() {
            return Err(DomainError::InvalidInput(
                "Nothing to change: give a title or content".to_string(),
            ));
        }

        let current = self.repository.get_note(note_id)?;
        let title = title.unwrap_or(&current.title);
        let content = content.unwrap_or(&current.content);
        self.update_note(note_id, title, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockStore;

    #[test]
    fn given_same_title_twice_when_saving_then_creates_two_notes() {
        // Arrange
        let mock = MockStore::builder().build();
        let mut saver = NoteSaver::new(mock);

        // Act
        let first = saver.save_note("Todo", "a").unwrap();
        let second = saver.save_note("Todo", "a").unwrap();

        // Assert
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn given_only_content_when_editing_then_keeps_title() {
        // Arrange
        let mock = MockStore::builder()
            .with_note("Recipe", "flour")
            .build();
        let mut saver = NoteSaver::new(mock);

        // Act
        let note = saver.edit_note(1, None, Some("flour, eggs")).unwrap();

        // Assert
        assert_eq!(note.id, 1);
        assert_eq!(note.title, "Recipe");
        assert_eq!(note.content, "flour, eggs");
    }

    #[test]
    fn given_no_fields_when_editing_then_returns_invalid_input() {
        // Arrange
        let mock = MockStore::builder().with_note("Recipe", "").build();
        let mut saver = NoteSaver::new(mock);

        // Act
        let result = saver.edit_note(1, None, None);

        // Assert
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn given_unknown_id_when_editing_then_returns_not_found() {
        // Arrange
        let mock = MockStore::builder().build();
        let mut saver = NoteSaver::new(mock);

        // Act
        let result = saver.edit_note(5, Some("New"), None);

        // Assert
        assert!(matches!(result, Err(DomainError::NoteNotFound(5))));
    }

    #[test]
    fn given_failing_store_when_saving_then_error_is_returned_not_raised() {
        // Arrange
        let mock = MockStore::builder().with_failing_writes().build();
        let mut saver = NoteSaver::new(mock);

        // Act
        let result = saver.save_note("Lost", "");

        // Assert
        assert!(matches!(result, Err(DomainError::QueryFailed(_))));
    }
}
