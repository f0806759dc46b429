//! Database schema and migrations
//!
//! Versions are tracked in `PRAGMA user_version`. Version 1 is the layout
//! older note files already carry, so opening one of those adopts it as is.

use rusqlite::Connection;
use tracing::info;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 2;

/// SQL migrations, indexed by version number
const MIGRATIONS: &[&str] = &[
    // Version 1: notes, folders and containment edges
    r#"
    CREATE TABLE IF NOT EXISTS Notes (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        title        TEXT,
        content      TEXT,
        lastModified TEXT
    );

    CREATE TABLE IF NOT EXISTS Folder (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        title        TEXT,
        lastModified TEXT
    );

    CREATE TABLE IF NOT EXISTS FolderMap (
        id           INTEGER,
        subid        INTEGER,
        lastModified TEXT
    );
    "#,
    // Version 2: typed children and referential integrity for FolderMap
    r#"
    CREATE TABLE FolderMap_v2 (
        id           INTEGER NOT NULL REFERENCES Folder(id) ON DELETE CASCADE,
        subid        INTEGER NOT NULL,
        kind         TEXT NOT NULL CHECK(kind IN ('folder', 'note')),
        lastModified TEXT,
        CHECK(NOT (kind = 'folder' AND subid = id))
    );

    -- Legacy rows carry no kind: prefer a folder match, then a note match.
    -- Edges whose parent or child is gone are dropped.
    INSERT INTO FolderMap_v2 (id, subid, kind, lastModified)
    SELECT m.id, m.subid,
           CASE WHEN EXISTS (SELECT 1 FROM Folder f WHERE f.id = m.subid)
                THEN 'folder' ELSE 'note' END,
           m.lastModified
    FROM FolderMap m
    WHERE EXISTS (SELECT 1 FROM Folder p WHERE p.id = m.id)
      AND (EXISTS (SELECT 1 FROM Folder f WHERE f.id = m.subid)
           OR EXISTS (SELECT 1 FROM Notes n WHERE n.id = m.subid))
      AND NOT (m.id = m.subid
               AND EXISTS (SELECT 1 FROM Folder f WHERE f.id = m.subid));

    DROP TABLE FolderMap;
    ALTER TABLE FolderMap_v2 RENAME TO FolderMap;

    CREATE INDEX IF NOT EXISTS idx_foldermap_parent ON FolderMap(id);
    CREATE INDEX IF NOT EXISTS idx_foldermap_child ON FolderMap(kind, subid);
    CREATE INDEX IF NOT EXISTS idx_notes_last_modified ON Notes(lastModified);
    CREATE INDEX IF NOT EXISTS idx_folder_last_modified ON Folder(lastModified);

    CREATE TRIGGER IF NOT EXISTS foldermap_child_exists
    BEFORE INSERT ON FolderMap
    WHEN (NEW.kind = 'note' AND NOT EXISTS (SELECT 1 FROM Notes WHERE id = NEW.subid))
      OR (NEW.kind = 'folder' AND NOT EXISTS (SELECT 1 FROM Folder WHERE id = NEW.subid))
    BEGIN
        SELECT RAISE(ABORT, 'FolderMap child does not exist');
    END;

    CREATE TRIGGER IF NOT EXISTS notes_delete_edges
    AFTER DELETE ON Notes
    BEGIN
        DELETE FROM FolderMap WHERE kind = 'note' AND subid = OLD.id;
    END;

    CREATE TRIGGER IF NOT EXISTS folder_delete_child_edges
    AFTER DELETE ON Folder
    BEGIN
        DELETE FROM FolderMap WHERE kind = 'folder' AND subid = OLD.id;
    END;
    "#,
];

/// Run all pending migrations
///
/// Each migration and its version bump commit together, so a failure
/// leaves the database at the last completed version.
pub fn run_migrations(conn: &mut Connection) -> rusqlite::Result<()> {
    let current_version = get_schema_version(conn)?;

    info!(
        current_version,
        target_version = SCHEMA_VERSION,
        "Checking database migrations"
    );

    for (i, migration) in MIGRATIONS.iter().enumerate() {
        let version = (i + 1) as i32;
        if version > current_version {
            info!(version, "Running migration");
            let tx = conn.transaction()?;
            tx.execute_batch(migration)?;
            tx.pragma_update(None, "user_version", version)?;
            tx.commit()?;
        }
    }

    if current_version < SCHEMA_VERSION {
        info!(
            from = current_version,
            to = SCHEMA_VERSION,
            "Migrations complete"
        );
    }

    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<i32> {
    conn.query_row("PRAGMA user_version", [], |r| r.get(0))
}
