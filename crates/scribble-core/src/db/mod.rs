//! Database layer for Scribble

mod connection;
mod migrations;
mod note_repository;
mod user_repository;

pub use connection::Database;
pub use note_repository::{NoteRepository, SqliteNoteRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};
