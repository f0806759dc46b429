// src/application/repository.rs
use crate::domain::{DomainError, Folder, FolderItem, FolderMap, Note};

pub trait NoteRepository {
    /// All notes, most recently modified first
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError>;

    /// Insert a new note. Never updates an existing row.
    fn save_note(&mut self, title: &str, content: &str) -> Result<Note, DomainError>;

    /// Overwrite title and content of an existing note
    fn update_note(&mut self, id: i64, title: &str, content: &str) -> Result<Note, DomainError>;

    /// Delete a note and return the number of rows removed (0 if absent)
    fn delete_note(&mut self, id: i64) -> Result<usize, DomainError>;
}

pub trait FolderRepository {
    fn list_folders(&mut self) -> Result<Vec<Folder>, DomainError>;

    fn get_folder(&mut self, id: i64) -> Result<Folder, DomainError>;

    fn save_folder(&mut self, title: &str) -> Result<Folder, DomainError>;

    fn update_folder(&mut self, id: i64, title: &str) -> Result<Folder, DomainError>;

    fn delete_folder(&mut self, id: i64) -> Result<usize, DomainError>;

    fn save_folder_map(
        &mut self,
        parent_id: i64,
        child: FolderItem,
    ) -> Result<FolderMap, DomainError>;

    /// Remove every edge matching exactly `(parent_id, child)`
    ///
    /// The child's kind is part of the pair: removing `Note(2)` leaves an
    /// edge to `Folder(2)` under the same parent in place.
    fn delete_folder_map(&mut self, parent_id: i64, child: FolderItem)
        -> Result<usize, DomainError>;

    fn list_folder_items(&mut self, parent_id: i64) -> Result<Vec<FolderMap>, DomainError>;
}

impl<R: NoteRepository + ?Sized> NoteRepository for &mut R {
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        (**self).list_notes()
    }

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        (**self).get_note(id)
    }

    fn save_note(&mut self, title: &str, content: &str) -> Result<Note, DomainError> {
        (**self).save_note(title, content)
    }

    fn update_note(&mut self, id: i64, title: &str, content: &str) -> Result<Note, DomainError> {
        (**self).update_note(id, title, content)
    }

    fn delete_note(&mut self, id: i64) -> Result<usize, DomainError> {
        (**self).delete_note(id)
    }
}

impl<R: FolderRepository + ?Sized> FolderRepository for &mut R {
    fn list_folders(&mut self) -> Result<Vec<Folder>, DomainError> {
        (**self).list_folders()
    }

    fn get_folder(&mut self, id: i64) -> Result<Folder, DomainError> {
        (**self).get_folder(id)
    }

    fn save_folder(&mut self, title: &str) -> Result<Folder, DomainError> {
        (**self).save_folder(title)
    }

    fn update_folder(&mut self, id: i64, title: &str) -> Result<Folder, DomainError> {
        (**self).update_folder(id, title)
    }

    fn delete_folder(&mut self, id: i64) -> Result<usize, DomainError> {
        (**self).delete_folder(id)
    }

    fn save_folder_map(
        &mut self,
        parent_id: i64,
        child: FolderItem,
    ) -> Result<FolderMap, DomainError> {
        (**self).save_folder_map(parent_id, child)
    }

    fn delete_folder_map(
        &mut self,
        parent_id: i64,
        child: FolderItem,
    ) -> Result<usize, DomainError> {
        (**self).delete_folder_map(parent_id, child)
    }

    fn list_folder_items(&mut self, parent_id: i64) -> Result<Vec<FolderMap>, DomainError> {
        (**self).list_folder_items(parent_id)
    }
}
