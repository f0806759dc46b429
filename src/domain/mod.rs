// src/domain/mod.rs
pub mod error;
pub mod folder;
pub mod folder_map;
pub mod note;

pub use error::DomainError;
pub use folder::Folder;
pub use folder_map::{FolderItem, FolderMap};
pub use note::Note;
