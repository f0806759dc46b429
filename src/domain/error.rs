// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Folder not found: {0}")]
    FolderNotFound(i64),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
