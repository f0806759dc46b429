// src/lib.rs
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use application::{FolderOrganizer, NoteDeleter, NoteLister, NoteSaver};
use cli::args::{Args, Command, FolderCommand};
use infrastructure::{Config, SqliteStore};
use ports::ListingPresenter;
use serde::Serialize;
use tracing::{debug, info, warn};

pub fn run(args: Args, config: Config) -> Result<()> {
    debug!(?args, "Starting notebox with arguments");

    // Initialize infrastructure; without a usable store there is nothing to do
    let database_path = config.database_path(args.database.as_deref());
    let mut store = SqliteStore::open(&database_path)
        .with_context(|| format!("Cannot open note store at {}", database_path.display()))?;

    let presenter = ListingPresenter::new();
    let result = execute(args.command, &mut store, &presenter);

    // Writes are committed per statement, so a close error never masks
    // the command's own outcome
    if let Err(e) = store.close() {
        warn!(error = %e, "Failed to close note store");
    }
    result
}

fn execute(command: Command, store: &mut SqliteStore, presenter: &ListingPresenter) -> Result<()> {
    match command {
        Command::List { json } => {
            let notes = NoteLister::new(store).list_notes()?;
            if json {
                print_json(&notes)?;
            } else {
                for note in &notes {
                    println!("{}", presenter.note_row(note));
                }
            }
        }
        Command::Show { note_id, json } => {
            let note = NoteLister::new(store).get_note(note_id)?;
            if json {
                print_json(&note)?;
            } else {
                println!("{}", presenter.note_detail(&note));
            }
        }
        Command::Add { title, content } => {
            let note = NoteSaver::new(store).save_note(&title, &content)?;
            println!("{}", note.id);
        }
        Command::Edit {
            note_id,
            title,
            content,
        } => {
            let note = NoteSaver::new(store).edit_note(
                note_id,
                title.as_deref(),
                content.as_deref(),
            )?;
            println!("{}", presenter.note_row(&note));
        }
        Command::Delete { note_id } => {
            let removed = NoteDeleter::new(store).delete_note(note_id)?;
            info!(note_id, removed, "Delete finished");
            println!("Deleted {} note(s)", removed);
        }
        Command::Folder(folder_command) => execute_folder(folder_command, store, presenter)?,
        Command::Link { parent_id, child } => {
            let child = child.item().context("Give either --note or --folder")?;
            let edge = FolderOrganizer::new(store).add_item(parent_id, child)?;
            println!("{}", presenter.item_row(&edge));
        }
        Command::Unlink { parent_id, child } => {
            let child = child.item().context("Give either --note or --folder")?;
            let removed = FolderOrganizer::new(store).remove_item(parent_id, child)?;
            println!("Removed {} link(s)", removed);
        }
    }
    Ok(())
}

fn execute_folder(
    command: FolderCommand,
    store: &mut SqliteStore,
    presenter: &ListingPresenter,
) -> Result<()> {
    let mut organizer = FolderOrganizer::new(store);
    match command {
        FolderCommand::List { json } => {
            let folders = organizer.list_folders()?;
            if json {
                print_json(&folders)?;
            } else {
                for folder in &folders {
                    println!("{}", presenter.folder_row(folder));
                }
            }
        }
        FolderCommand::Add { title } => {
            let folder = organizer.save_folder(&title)?;
            println!("{}", folder.id);
        }
        FolderCommand::Rename { folder_id, title } => {
            let folder = organizer.rename_folder(folder_id, &title)?;
            println!("{}", presenter.folder_row(&folder));
        }
        FolderCommand::Delete { folder_id } => {
            let removed = organizer.delete_folder(folder_id)?;
            println!("Deleted {} folder(s)", removed);
        }
        FolderCommand::Items { folder_id, json } => {
            let items = organizer.list_items(folder_id)?;
            if json {
                print_json(&items)?;
            } else {
                for edge in &items {
                    println!("{}", presenter.item_row(edge));
                }
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::util::testing;
    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }
}
