// src/util/testing.rs

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{FolderRepository, NoteRepository};
use crate::domain::{DomainError, Folder, FolderItem, FolderMap, Note};

/// In-memory stand-in for the SQLite store
///
/// Mirrors the store's observable behavior: ids are assigned monotonically,
/// saves always insert, listings are newest first, deletes of unknown ids
/// remove nothing. Writes can be configured to fail so use cases can be
/// exercised against a broken store.
///
/// # Examples
///
/// ```
/// use notebox::application::NoteRepository;
/// use notebox::util::testing::MockStore;
///
/// let mut mock = MockStore::builder()
///     .with_note("Groceries", "- milk")
///     .build();
///
/// let notes = mock.list_notes().unwrap();
/// assert_eq!(notes[0].title, "Groceries");
/// ```
pub struct MockStore {
    notes: Vec<Note>,
    folders: Vec<Folder>,
    edges: Vec<FolderMap>,
    next_id: i64,
    tick: u32,
    failing_writes: bool,
}

impl MockStore {
    pub fn builder() -> MockStoreBuilder {
        MockStoreBuilder::new()
    }

    /// Edges currently held, in insertion order
    pub fn edges(&self) -> &[FolderMap] {
        &self.edges
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    // Strictly increasing, so insertion order equals timestamp order
    fn timestamp(&mut self) -> String {
        self.tick += 1;
        format!(
            "2024-12-17 {:02}:{:02}:{:02} PM",
            12 + self.tick / 3600,
            (self.tick / 60) % 60,
            self.tick % 60
        )
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.failing_writes {
            return Err(DomainError::QueryFailed("disk I/O error".to_string()));
        }
        Ok(())
    }
}

impl NoteRepository for MockStore {
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        Ok(self.notes.iter().rev().cloned().collect())
    }

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(DomainError::NoteNotFound(id))
    }

    fn save_note(&mut self, title: &str, content: &str) -> Result<Note, DomainError> {
        self.check_writable()?;
        let note = Note {
            id: self.next_id(),
            title: title.to_string(),
            content: content.to_string(),
            last_modified: self.timestamp(),
        };
        self.notes.push(note.clone());
        Ok(note)
    }

    fn update_note(&mut self, id: i64, title: &str, content: &str) -> Result<Note, DomainError> {
        self.check_writable()?;
        let pos = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(DomainError::NoteNotFound(id))?;
        let mut note = self.notes.remove(pos);
        note.title = title.to_string();
        note.content = content.to_string();
        note.last_modified = self.timestamp();
        self.notes.push(note.clone());
        Ok(note)
    }

    fn delete_note(&mut self, id: i64) -> Result<usize, DomainError> {
        self.check_writable()?;
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.edges.retain(|e| e.child != FolderItem::Note(id));
        Ok(before - self.notes.len())
    }
}

impl FolderRepository for MockStore {
    fn list_folders(&mut self) -> Result<Vec<Folder>, DomainError> {
        Ok(self.folders.iter().rev().cloned().collect())
    }

    fn get_folder(&mut self, id: i64) -> Result<Folder, DomainError> {
        self.folders
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(DomainError::FolderNotFound(id))
    }

    fn save_folder(&mut self, title: &str) -> Result<Folder, DomainError> {
        self.check_writable()?;
        let folder = Folder {
            id: self.next_id(),
            title: title.to_string(),
            last_modified: self.timestamp(),
        };
        self.folders.push(folder.clone());
        Ok(folder)
    }

    fn update_folder(&mut self, id: i64, title: &str) -> Result<Folder, DomainError> {
        self.check_writable()?;
        let pos = self
            .folders
            .iter()
            .position(|f| f.id == id)
            .ok_or(DomainError::FolderNotFound(id))?;
        let mut folder = self.folders.remove(pos);
        folder.title = title.to_string();
        folder.last_modified = self.timestamp();
        self.folders.push(folder.clone());
        Ok(folder)
    }

    fn delete_folder(&mut self, id: i64) -> Result<usize, DomainError> {
        self.check_writable()?;
        let before = self.folders.len();
        self.folders.retain(|f| f.id != id);
        self.edges
            .retain(|e| e.parent_id != id && e.child != FolderItem::Folder(id));
        Ok(before - self.folders.len())
    }

    fn save_folder_map(
        &mut self,
        parent_id: i64,
        child: FolderItem,
    ) -> Result<FolderMap, DomainError> {
        self.check_writable()?;
        let edge = FolderMap {
            parent_id,
            child,
            last_modified: self.timestamp(),
        };
        self.edges.push(edge.clone());
        Ok(edge)
    }

    fn delete_folder_map(
        &mut self,
        parent_id: i64,
        child: FolderItem,
    ) -> Result<usize, DomainError> {
        self.check_writable()?;
        let before = self.edges.len();
        self.edges
            .retain(|e| !(e.parent_id == parent_id && e.child == child));
        Ok(before - self.edges.len())
    }

    fn list_folder_items(&mut self, parent_id: i64) -> Result<Vec<FolderMap>, DomainError> {
        Ok(self
            .edges
            .iter()
            .rev()
            .filter(|e| e.parent_id == parent_id)
            .cloned()
            .collect())
    }
}

/// Builder for MockStore
///
/// Provides a fluent interface for seeding records and configuring failures.
pub struct MockStoreBuilder {
    notes: Vec<(String, String)>,
    folders: Vec<String>,
    failing_writes: bool,
}

impl MockStoreBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            folders: vec![],
            failing_writes: false,
        }
    }

    /// Seed a note; ids are assigned in call order starting at 1
    pub fn with_note(mut self, title: &str, content: &str) -> Self {
        self.notes.push((title.to_string(), content.to_string()));
        self
    }

    /// Seed a folder; ids continue after the seeded notes
    pub fn with_folder(mut self, title: &str) -> Self {
        self.folders.push(title.to_string());
        self
    }

    /// Make every write fail with QueryFailed
    pub fn with_failing_writes(mut self) -> Self {
        self.failing_writes = true;
        self
    }

    pub fn build(self) -> MockStore {
        let mut mock = MockStore {
            notes: vec![],
            folders: vec![],
            edges: vec![],
            next_id: 0,
            tick: 0,
            failing_writes: false,
        };
        for (title, content) in &self.notes {
            mock.save_note(title, content)
                .expect("Seeding a note should succeed");
        }
        for title in &self.folders {
            mock.save_folder(title)
                .expect("Seeding a folder should succeed");
        }
        mock.failing_writes = self.failing_writes;
        mock
    }
}

impl Default for MockStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["rusqlite"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
