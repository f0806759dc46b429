mod helpers;

use anyhow::Result;
use helpers::TestStore;
use notebox::application::{FolderOrganizer, FolderRepository, NoteRepository};
use notebox::domain::{DomainError, FolderItem};

#[test]
fn given_empty_store_when_listing_folders_then_returns_empty_vec() -> Result<()> {
    let test_store = TestStore::new()?;
    let mut store = test_store.open()?;

    assert!(store.list_folders()?.is_empty());
    Ok(())
}

#[test]
fn given_folders_when_listing_then_newest_first() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut store = test_store.open()?;
    let work = store.save_folder("Work")?;
    let home = store.save_folder("Home")?;

    // Act
    let folders = store.list_folders()?;

    // Assert
    let ids: Vec<i64> = folders.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![home.id, work.id]);
    Ok(())
}

#[test]
fn given_edge_when_deleting_exact_pair_then_only_that_edge_is_removed() -> Result<()> {
    // Arrange: folders 1 and 2, edge 1 -> 2
    let test_store = TestStore::new()?;
    let mut store = test_store.open()?;
    let one = store.save_folder("One")?;
    let two = store.save_folder("Two")?;
    store.save_folder_map(one.id, FolderItem::Folder(two.id))?;

    // Act: other pairs leave it alone
    assert_eq!(store.delete_folder_map(two.id, FolderItem::Folder(one.id))?, 0);
    assert_eq!(store.delete_folder_map(one.id, FolderItem::Note(two.id))?, 0);
    assert_eq!(store.list_folder_items(one.id)?.len(), 1);

    let removed = store.delete_folder_map(one.id, FolderItem::Folder(two.id))?;

    // Assert
    assert_eq!(removed, 1);
    assert!(store.list_folder_items(one.id)?.is_empty());
    Ok(())
}

#[test]
fn given_note_and_folder_sharing_id_when_deleting_note_edge_then_folder_edge_stays() -> Result<()> {
    // Arrange: folder 2 and note 2 both linked under folder 1
    let test_store = TestStore::new()?;
    let mut store = test_store.open()?;
    let parent = store.save_folder("Parent")?;
    let sub = store.save_folder("Sub")?;
    store.save_note("First", "")?;
    let note = store.save_note("Second", "")?;
    assert_eq!(sub.id, note.id);
    store.save_folder_map(parent.id, FolderItem::Folder(sub.id))?;
    store.save_folder_map(parent.id, FolderItem::Note(note.id))?;

    // Act
    let removed = store.delete_folder_map(parent.id, FolderItem::Note(note.id))?;

    // Assert
    assert_eq!(removed, 1);
    let remaining = store.list_folder_items(parent.id)?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].child, FolderItem::Folder(sub.id));
    Ok(())
}

#[test]
fn given_duplicate_edges_when_deleting_pair_then_all_copies_go() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut store = test_store.open()?;
    let folder = store.save_folder("Box")?;
    let note = store.save_note("Item", "")?;
    store.save_folder_map(folder.id, FolderItem::Note(note.id))?;
    store.save_folder_map(folder.id, FolderItem::Note(note.id))?;
    assert_eq!(store.list_folder_items(folder.id)?.len(), 2);

    // Act
    let removed = store.delete_folder_map(folder.id, FolderItem::Note(note.id))?;

    // Assert
    assert_eq!(removed, 2);
    Ok(())
}

#[test]
fn given_folder_with_items_when_deleting_folder_then_its_edges_cascade() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut store = test_store.open()?;
    let parent = store.save_folder("Parent")?;
    let child = store.save_folder("Child")?;
    let note = store.save_note("Note", "")?;
    store.save_folder_map(parent.id, FolderItem::Folder(child.id))?;
    store.save_folder_map(child.id, FolderItem::Note(note.id))?;

    // Act
    store.delete_folder(child.id)?;

    // Assert: no edge from or to the deleted folder survives
    assert!(store.list_folder_items(parent.id)?.is_empty());
    assert!(store.list_folder_items(child.id)?.is_empty());
    assert_eq!(store.get_note(note.id)?.title, "Note");
    Ok(())
}

#[test]
fn given_linked_note_when_deleting_note_then_edge_is_removed() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut store = test_store.open()?;
    let folder = store.save_folder("Box")?;
    let note = store.save_note("Inside", "")?;
    store.save_folder_map(folder.id, FolderItem::Note(note.id))?;

    // Act
    store.delete_note(note.id)?;

    // Assert
    assert!(store.list_folder_items(folder.id)?.is_empty());
    Ok(())
}

#[test]
fn given_missing_child_when_linking_then_store_is_unchanged() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut store = test_store.open()?;
    let folder = store.save_folder("Box")?;

    // Act
    let result = store.save_folder_map(folder.id, FolderItem::Folder(404));

    // Assert
    assert!(matches!(result, Err(DomainError::QueryFailed(_))));
    assert!(store.list_folder_items(folder.id)?.is_empty());
    // a failed write does not poison the store
    store.save_folder("Still works")?;
    Ok(())
}

#[test]
fn given_folder_when_renaming_through_organizer_then_persists() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut store = test_store.open()?;
    let folder = store.save_folder("Drafts")?;

    // Act
    FolderOrganizer::new(&mut store).rename_folder(folder.id, "Archive")?;

    // Assert
    assert_eq!(store.get_folder(folder.id)?.title, "Archive");
    Ok(())
}

#[test]
fn given_folder_when_linking_into_itself_then_rejected() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let mut store = test_store.open()?;
    let folder = store.save_folder("Loop")?;

    // Act
    let direct = store.save_folder_map(folder.id, FolderItem::Folder(folder.id));
    let via_organizer =
        FolderOrganizer::new(&mut store).add_item(folder.id, FolderItem::Folder(folder.id));

    // Assert
    assert!(matches!(direct, Err(DomainError::QueryFailed(_))));
    assert!(matches!(via_organizer, Err(DomainError::InvalidInput(_))));
    Ok(())
}
