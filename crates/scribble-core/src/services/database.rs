//! Shared database service wrapper used by the server.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::db::{
    Database, NoteRepository, SqliteNoteRepository, SqliteUserRepository, UserRepository,
};
use crate::models::{ImageRef, Note, NoteDraft, NoteId, OwnerNotes, User, UserId, UserImage};
use crate::Result;

/// Thread-safe service for DB and repository operations.
#[derive(Clone)]
pub struct DatabaseService {
    db: Arc<Mutex<Database>>,
}

impl DatabaseService {
    /// Open a database service at the given filesystem path.
    pub fn open_path(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        let db = Database::open(&db_path)?;
        tracing::info!("Opened database at {}", db_path.display());
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    /// Open an in-memory database service (primarily for tests).
    pub fn open_in_memory() -> Result<Self> {
        let db = Database::open_in_memory()?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    /// Create a user.
    pub async fn create_user(&self, username: &str, name: Option<&str>) -> Result<User> {
        let db = self.db.lock().await;
        let repo = SqliteUserRepository::new(db.connection());
        repo.create(username, name)
    }

    /// Attach an avatar image to a user.
    pub async fn set_user_image(
        &self,
        user_id: &UserId,
        content_type: &str,
        blob: &[u8],
    ) -> Result<ImageRef> {
        let db = self.db.lock().await;
        let repo = SqliteUserRepository::new(db.connection());
        repo.set_image(user_id, content_type, blob)
    }

    /// Fetch the stored bytes of a user image.
    pub async fn find_user_image(&self, image_id: &str) -> Result<Option<UserImage>> {
        let db = self.db.lock().await;
        let repo = SqliteUserRepository::new(db.connection());
        repo.find_image(image_id)
    }

    /// Fetch a user by id.
    pub async fn find_user(&self, id: &UserId) -> Result<Option<User>> {
        let db = self.db.lock().await;
        let repo = SqliteUserRepository::new(db.connection());
        repo.find_by_id(id)
    }

    /// Fetch a user by username.
    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let db = self.db.lock().await;
        let repo = SqliteUserRepository::new(db.connection());
        repo.find_by_username(username)
    }

    /// Fetch a user and their note summaries by username.
    pub async fn find_owner_with_notes(&self, username: &str) -> Result<Option<OwnerNotes>> {
        let db = self.db.lock().await;
        let repo = SqliteUserRepository::new(db.connection());
        repo.find_owner_with_notes(username)
    }

    /// Search users by username or name.
    pub async fn search_users(&self, query: &str, limit: usize) -> Result<Vec<User>> {
        let db = self.db.lock().await;
        let repo = SqliteUserRepository::new(db.connection());
        repo.search(query, limit)
    }

    /// Create a note for a user.
    pub async fn create_note(&self, owner_id: &UserId, draft: NoteDraft) -> Result<Note> {
        let db = self.db.lock().await;
        let repo = SqliteNoteRepository::new(db.connection());
        repo.create(owner_id, draft)
    }

    /// Fetch one of a user's notes.
    pub async fn get_note(&self, owner_id: &UserId, id: &NoteId) -> Result<Option<Note>> {
        let db = self.db.lock().await;
        let repo = SqliteNoteRepository::new(db.connection());
        repo.get_for_owner(owner_id, id)
    }
}
