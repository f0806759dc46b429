// src/ports/listing.rs
use crate::domain::{Folder, FolderMap, Note};

/// Plain-text rows for terminal output, one record per line
#[derive(Debug, Default)]
pub struct ListingPresenter;

impl ListingPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn note_row(&self, note: &Note) -> String {
        format!("{}\t{}\t{}", note.id, note.last_modified, single_line(&note.title))
    }

    pub fn folder_row(&self, folder: &Folder) -> String {
        format!(
            "{}\t{}\t{}",
            folder.id,
            folder.last_modified,
            single_line(&folder.title)
        )
    }

    pub fn item_row(&self, edge: &FolderMap) -> String {
        format!("{}\t{}\t{}", edge.parent_id, edge.child, edge.last_modified)
    }

    /// Header block followed by the raw markdown body
    pub fn note_detail(&self, note: &Note) -> String {
        format!(
            "# {}\nid: {}\nlast modified: {}\n\n{}",
            note.title, note.id, note.last_modified, note.content
        )
    }
}

// Titles may contain tabs or newlines, which would break the columns
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
