// src/infrastructure/mod.rs
pub mod clock;
pub mod config;
pub mod schema;
pub mod sqlite;

pub use config::Config;
pub use sqlite::SqliteStore;
