// src/application/mod.rs
pub mod folder_organizer;
pub mod note_deleter;
pub mod note_lister;
pub mod note_saver;
pub mod repository;

pub use folder_organizer::FolderOrganizer;
pub use note_deleter::NoteDeleter;
pub use note_lister::NoteLister;
pub use note_saver::NoteSaver;
pub use repository::{FolderRepository, NoteRepository};
