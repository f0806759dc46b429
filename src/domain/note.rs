// src/domain/note.rs
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    /// Markdown source, stored verbatim
    pub content: String,
    pub last_modified: String,
}
