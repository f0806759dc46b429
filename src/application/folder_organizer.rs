// src/application/folder_organizer.rs
use crate::application::FolderRepository;
use crate::domain::{DomainError, Folder, FolderItem, FolderMap};
use tracing::info;

/// Folder management and containment edges
pub struct FolderOrganizer<R: FolderRepository> {
    repository: R,
}

impl<R: FolderRepository> FolderOrganizer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn list_folders(&mut self) -> Result<Vec<Folder>, DomainError> {
        self.repository.list_folders()
    }

    pub fn save_folder(&mut self, title: &str) -> Result<Folder, DomainError> {
        let folder = self.repository.save_folder(title)?;
        info!(folder_id = folder.id, "Saved folder");
        Ok(folder)
    }

    pub fn rename_folder(&mut self, folder_id: i64, title: &str) -> Result<Folder, DomainError> {
        self.repository.update_folder(folder_id, title)
    }

    /// Delete a folder; its edges go with it
    pub fn delete_folder(&mut self, folder_id: i64) -> Result<usize, DomainError> {
        self.repository.delete_folder(folder_id)
    }

    /// Put `child` into folder `parent_id`
    pub fn add_item(&mut self, parent_id: i64, child: FolderItem) -> Result<FolderMap, DomainError> {
        if child == FolderItem::Folder(parent_id) {
            return Err(DomainError::InvalidInput(format!(
                "Folder {} cannot contain itself",
                parent_id
            )));
        }
        let edge = self.repository.save_folder_map(parent_id, child)?;
        info!(parent_id, %child, "Linked item");
        Ok(edge)
    }

    /// Remove every `(parent_id, child)` edge, returning how many were removed
    pub fn remove_item(&mut self, parent_id: i64, child: FolderItem) -> Result<usize, DomainError> {
        self.repository.delete_folder_map(parent_id, child)
    }

    pub fn list_items(&mut self, parent_id: i64) -> Result<Vec<FolderMap>, DomainError> {
        self.repository.list_folder_items(parent_id)
    }
}
