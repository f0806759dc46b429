// src/domain/folder_map.rs
use serde::Serialize;
use std::fmt;

/// The sub-item side of a containment edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum FolderItem {
    Folder(i64),
    Note(i64),
}

impl FolderItem {
    pub fn id(&self) -> i64 {
        match self {
            FolderItem::Folder(id) | FolderItem::Note(id) => *id,
        }
    }

    /// Value stored in the `kind` column
    pub fn kind(&self) -> &'static str {
        match self {
            FolderItem::Folder(_) => "folder",
            FolderItem::Note(_) => "note",
        }
    }

    pub fn from_kind(kind: &str, id: i64) -> Option<Self> {
        match kind {
            "folder" => Some(FolderItem::Folder(id)),
            "note" => Some(FolderItem::Note(id)),
            _ => None,
        }
    }
}

impl fmt::Display for FolderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.id())
    }
}

/// Edge recording that folder `parent_id` contains `child`.
///
/// Duplicate edges are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderMap {
    pub parent_id: i64,
    pub child: FolderItem,
    pub last_modified: String,
}
