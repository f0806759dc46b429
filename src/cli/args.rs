// src/cli/args.rs
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::FolderItem;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the note database (optional)
    #[arg(short, long, value_name = "DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Path to the config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, most recently modified first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Show {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save a new note
    Add {
        #[arg(value_name = "TITLE")]
        title: String,

        /// Markdown body
        #[arg(short = 'm', long, default_value = "")]
        content: String,
    },

    /// Change the title and/or content of an existing note
    Edit {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short = 'm', long)]
        content: Option<String>,
    },

    /// Delete a note
    Delete {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// Manage folders
    #[command(subcommand)]
    Folder(FolderCommand),

    /// Put a note or folder into a folder
    Link {
        #[arg(value_name = "PARENT_ID")]
        parent_id: i64,

        #[command(flatten)]
        child: ChildArg,
    },

    /// Take a note or folder out of a folder
    Unlink {
        #[arg(value_name = "PARENT_ID")]
        parent_id: i64,

        #[command(flatten)]
        child: ChildArg,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum FolderCommand {
    /// List folders, most recently modified first
    List {
        #[arg(long)]
        json: bool,
    },

    /// Save a new folder
    Add {
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Rename a folder
    Rename {
        #[arg(value_name = "FOLDER_ID")]
        folder_id: i64,

        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Delete a folder and its containment edges
    Delete {
        #[arg(value_name = "FOLDER_ID")]
        folder_id: i64,
    },

    /// List the items contained in a folder
    Items {
        #[arg(value_name = "FOLDER_ID")]
        folder_id: i64,

        #[arg(long)]
        json: bool,
    },
}

/// Exactly one of `--note` or `--folder`
#[derive(ClapArgs, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ChildArg {
    /// Child note id
    #[arg(long, value_name = "NOTE_ID")]
    pub note: Option<i64>,

    /// Child folder id
    #[arg(long, value_name = "FOLDER_ID")]
    pub folder: Option<i64>,
}

impl ChildArg {
    /// The selected child; `None` only if neither flag was given
    pub fn item(&self) -> Option<FolderItem> {
        match (self.note, self.folder) {
            (Some(id), _) => Some(FolderItem::Note(id)),
            (None, Some(id)) => Some(FolderItem::Folder(id)),
            (None, None) => None,
        }
    }
}
