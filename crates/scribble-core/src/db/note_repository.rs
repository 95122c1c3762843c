//! Note repository implementation

use crate::error::Result;
use crate::models::{Note, NoteDraft, NoteId, UserId};
use rusqlite::{params, Connection, OptionalExtension};

/// Trait for note storage operations
pub trait NoteRepository {
    /// Create a new note owned by `owner_id`
    fn create(&self, owner_id: &UserId, draft: NoteDraft) -> Result<Note>;

    /// Get a note by ID, only if it belongs to `owner_id`
    fn get_for_owner(&self, owner_id: &UserId, id: &NoteId) -> Result<Option<Note>>;
}

/// `SQLite` implementation of `NoteRepository`
pub struct SqliteNoteRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteNoteRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a note from a database row
    fn parse_note(row: &rusqlite::Row<'_>) -> rusqlite::Result<Note> {
        let id: String = row.get(0)?;
        let owner_id: String = row.get(1)?;
        Ok(Note {
            id: id.into(),
            owner_id: owner_id.into(),
            title: row.get(2)?,
            content: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn create(&self, owner_id: &UserId, draft: NoteDraft) -> Result<Note> {
        let note = Note::new(owner_id.clone(), draft);

        self.conn.execute(
            "INSERT INTO notes (id, owner_id, title, content, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                note.id.as_str(),
                note.owner_id.as_str(),
                note.title,
                note.content,
                note.created_at,
                note.updated_at
            ],
        )?;

        Ok(note)
    }

    fn get_for_owner(&self, owner_id: &UserId, id: &NoteId) -> Result<Option<Note>> {
        let note = self
            .conn
            .query_row(
                "SELECT id, owner_id, title, content, created_at, updated_at
                 FROM notes
                 WHERE id = ? AND owner_id = ?",
                params![id.as_str(), owner_id.as_str()],
                Self::parse_note,
            )
            .optional()?;
        Ok(note)
    }
}
