use anyhow::{Context, Result};
use notebox::infrastructure::SqliteStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture owning a temporary directory for a note database
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub database_path: PathBuf,
}

impl TestStore {
    /// Create a fresh, not yet existing database location
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()
            .context("Failed to create temporary directory")?;
        let database_path = temp_dir.path().join("note.sqlite");

        Ok(Self {
            _temp_dir: temp_dir,
            database_path,
        })
    }

    /// Open (or reopen) the store backed by this fixture
    pub fn open(&self) -> Result<SqliteStore> {
        SqliteStore::open(&self.database_path).context("Failed to open test store")
    }

    /// Raw connection for seeding rows the store API cannot produce
    #[allow(dead_code)]
    pub fn raw_connection(&self) -> Result<rusqlite::Connection> {
        rusqlite::Connection::open(&self.database_path).context("Failed to open raw connection")
    }
}
