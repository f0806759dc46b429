// src/infrastructure/sqlite.rs
use crate::application::{FolderRepository, NoteRepository};
use crate::domain::{DomainError, Folder, FolderItem, FolderMap, Note};
use crate::infrastructure::{clock, schema};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Notes, folders and containment edges in one SQLite file.
///
/// The connection lives exactly as long as the store: it is opened by
/// [`SqliteStore::open`] and closed by [`SqliteStore::close`] or on drop.
/// Every operation is a single parameterized statement.
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open the store at `path`, creating the file and its parent directory
    /// if needed, and bring the schema up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = PathBuf::from(path.as_ref());
        debug!(?path, "Opening note store");

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                DomainError::StoreUnavailable(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Serialization is left to SQLite itself
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
        let conn = Connection::open_with_flags(&path, flags).map_err(|e| {
            DomainError::StoreUnavailable(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            ))
        })?;

        let store = Self::initialize(conn, Some(path.clone()))?;
        info!(?path, "Opened note store");
        Ok(store)
    }

    /// Private database that disappears with the store
    pub fn open_in_memory() -> Result<Self, DomainError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        Self::initialize(conn, None)
    }

    fn initialize(mut conn: Connection, path: Option<PathBuf>) -> Result<Self, DomainError> {
        conn.pragma_update(None, "foreign_keys", true)
            .map_err(|e| DomainError::StoreUnavailable(format!("Failed to enable foreign keys: {}", e)))?;
        schema::run_migrations(&mut conn)
            .map_err(|e| DomainError::StoreUnavailable(format!("Failed to migrate schema: {}", e)))?;
        Ok(Self { conn, path })
    }

    /// Backing file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the connection, reporting any error SQLite raises on the way out
    pub fn close(self) -> Result<(), DomainError> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| {
            warn!(?path, error = %e, "Failed to close note store");
            DomainError::QueryFailed(format!("close: {}", e))
        })?;
        debug!(?path, "Closed note store");
        Ok(())
    }
}

fn query_failed(operation: &str, err: rusqlite::Error) -> DomainError {
    warn!(operation, error = %err, "SQLite statement failed");
    DomainError::QueryFailed(format!("{}: {}", operation, err))
}

// Columns written by older files may be NULL
fn text(row: &Row, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

fn note_from_row(row: &Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: text(row, 1)?,
        content: text(row, 2)?,
        last_modified: text(row, 3)?,
    })
}

fn folder_from_row(row: &Row) -> rusqlite::Result<Folder> {
    Ok(Folder {
        id: row.get(0)?,
        title: text(row, 1)?,
        last_modified: text(row, 2)?,
    })
}

fn folder_map_from_row(row: &Row) -> rusqlite::Result<FolderMap> {
    let kind: String = row.get(2)?;
    let child = FolderItem::from_kind(&kind, row.get(1)?)
        .ok_or_else(|| rusqlite::Error::InvalidColumnType(2, "kind".to_string(), Type::Text))?;
    Ok(FolderMap {
        parent_id: row.get(0)?,
        child,
        last_modified: text(row, 3)?,
    })
}

impl NoteRepository for SqliteStore {
    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, content, lastModified FROM Notes
                 ORDER BY lastModified DESC, id DESC",
            )
            .map_err(|e| query_failed("list notes", e))?;
        let notes = stmt
            .query_map([], note_from_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| query_failed("list notes", e))?;

        debug!(count = notes.len(), "Listed notes");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.conn
            .query_row(
                "SELECT id, title, content, lastModified FROM Notes WHERE id = ?1",
                params![id],
                note_from_row,
            )
            .optional()
            .map_err(|e| query_failed("get note", e))?
            .ok_or(DomainError::NoteNotFound(id))
    }

    #[instrument(level = "debug", skip(self, content))]
    fn save_note(&mut self, title: &str, content: &str) -> Result<Note, DomainError> {
        let last_modified = clock::now();
        self.conn
            .execute(
                "INSERT INTO Notes (title, content, lastModified) VALUES (?1, ?2, ?3)",
                params![title, content, last_modified],
            )
            .map_err(|e| query_failed("save note", e))?;

        let id = self.conn.last_insert_rowid();
        debug!(note_id = id, "Inserted note");
        Ok(Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            last_modified,
        })
    }

    #[instrument(level = "debug", skip(self, content))]
    fn update_note(&mut self, id: i64, title: &str, content: &str) -> Result<Note, DomainError> {
        let last_modified = clock::now();
        let changed = self
            .conn
            .execute(
                "UPDATE Notes SET title = ?1, content = ?2, lastModified = ?3 WHERE id = ?4",
                params![title, content, last_modified, id],
            )
            .map_err(|e| query_failed("update note", e))?;

        if changed == 0 {
            return Err(DomainError::NoteNotFound(id));
        }
        Ok(Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            last_modified,
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: i64) -> Result<usize, DomainError> {
        let removed = self
            .conn
            .execute("DELETE FROM Notes WHERE id = ?1", params![id])
            .map_err(|e| query_failed("delete note", e))?;

        debug!(note_id = id, removed, "Deleted note");
        Ok(removed)
    }
}

impl FolderRepository for SqliteStore {
    #[instrument(level = "debug", skip(self))]
    fn list_folders(&mut self) -> Result<Vec<Folder>, DomainError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, lastModified FROM Folder
                 ORDER BY lastModified DESC, id DESC",
            )
            .map_err(|e| query_failed("list folders", e))?;
        let folders = stmt
            .query_map([], folder_from_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| query_failed("list folders", e))?;

        debug!(count = folders.len(), "Listed folders");
        Ok(folders)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_folder(&mut self, id: i64) -> Result<Folder, DomainError> {
        self.conn
            .query_row(
                "SELECT id, title, lastModified FROM Folder WHERE id = ?1",
                params![id],
                folder_from_row,
            )
            .optional()
            .map_err(|e| query_failed("get folder", e))?
            .ok_or(DomainError::FolderNotFound(id))
    }

    #[instrument(level = "debug", skip(self))]
    fn save_folder(&mut self, title: &str) -> Result<Folder, DomainError> {
        let last_modified = clock::now();
        self.conn
            .execute(
                "INSERT INTO Folder (title, lastModified) VALUES (?1, ?2)",
                params![title, last_modified],
            )
            .map_err(|e| query_failed("save folder", e))?;

        Ok(Folder {
            id: self.conn.last_insert_rowid(),
            title: title.to_string(),
            last_modified,
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn update_folder(&mut self, id: i64, title: &str) -> Result<Folder, DomainError> {
        let last_modified = clock::now();
        let changed = self
            .conn
            .execute(
                "UPDATE Folder SET title = ?1, lastModified = ?2 WHERE id = ?3",
                params![title, last_modified, id],
            )
            .map_err(|e| query_failed("update folder", e))?;

        if changed == 0 {
            return Err(DomainError::FolderNotFound(id));
        }
        Ok(Folder {
            id,
            title: title.to_string(),
            last_modified,
        })
    }

    /// Edges under and pointing at the folder are removed with it
    #[instrument(level = "debug", skip(self))]
    fn delete_folder(&mut self, id: i64) -> Result<usize, DomainError> {
        let removed = self
            .conn
            .execute("DELETE FROM Folder WHERE id = ?1", params![id])
            .map_err(|e| query_failed("delete folder", e))?;

        debug!(folder_id = id, removed, "Deleted folder");
        Ok(removed)
    }

    #[instrument(level = "debug", skip(self))]
    fn save_folder_map(
        &mut self,
        parent_id: i64,
        child: FolderItem,
    ) -> Result<FolderMap, DomainError> {
        let last_modified = clock::now();
        self.conn
            .execute(
                "INSERT INTO FolderMap (id, subid, kind, lastModified) VALUES (?1, ?2, ?3, ?4)",
                params![parent_id, child.id(), child.kind(), last_modified],
            )
            .map_err(|e| query_failed("save folder map", e))?;

        Ok(FolderMap {
            parent_id,
            child,
            last_modified,
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_folder_map(
        &mut self,
        parent_id: i64,
        child: FolderItem,
    ) -> Result<usize, DomainError> {
        self.conn
            .execute(
                "DELETE FROM FolderMap WHERE id = ?1 AND subid = ?2 AND kind = ?3",
                params![parent_id, child.id(), child.kind()],
            )
            .map_err(|e| query_failed("delete folder map", e))
    }

    #[instrument(level = "debug", skip(self))]
    fn list_folder_items(&mut self, parent_id: i64) -> Result<Vec<FolderMap>, DomainError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, subid, kind, lastModified FROM FolderMap WHERE id = ?1
                 ORDER BY lastModified DESC, rowid DESC",
            )
            .map_err(|e| query_failed("list folder items", e))?;
        let items = stmt
            .query_map(params![parent_id], folder_map_from_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| query_failed("list folder items", e))?;

        debug!(parent_id, count = items.len(), "Listed folder items");
        Ok(items)
    }
}
