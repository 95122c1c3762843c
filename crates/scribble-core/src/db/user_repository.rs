//! User repository implementation

#![allow(clippy::cast_possible_wrap)] // SQLite uses i64 for LIMIT

use crate::error::{Error, Result};
use crate::models::{ImageRef, NoteSummary, OwnerNotes, User, UserId, UserImage};
use crate::util::{escape_like, normalize_text_option, unix_timestamp_millis};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

/// Trait for user storage operations
pub trait UserRepository {
    /// Create a new user
    fn create(&self, username: &str, name: Option<&str>) -> Result<User>;

    /// Attach (or replace) the avatar image of a user
    fn set_image(&self, user_id: &UserId, content_type: &str, blob: &[u8]) -> Result<ImageRef>;

    /// Get the stored bytes of an image by its ID
    fn find_image(&self, image_id: &str) -> Result<Option<UserImage>>;

    /// Get a user by ID
    fn find_by_id(&self, id: &UserId) -> Result<Option<User>>;

    /// Get a user by exact username
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Load a user by username together with their note summaries
    ///
    /// Returns `None` when no user has that username.
    fn find_owner_with_notes(&self, username: &str) -> Result<Option<OwnerNotes>>;

    /// Search users by username or name, alphabetically by username
    fn search(&self, query: &str, limit: usize) -> Result<Vec<User>>;
}

/// `SQLite` implementation of `UserRepository`
pub struct SqliteUserRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteUserRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a user from a database row
    fn parse_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
        let id: String = row.get(0)?;
        let image_id: Option<String> = row.get(3)?;
        Ok(User {
            id: UserId::from(id),
            username: row.get(1)?,
            name: row.get(2)?,
            image: image_id.map(|id| ImageRef { id }),
            created_at: row.get(4)?,
        })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create(&self, username: &str, name: Option<&str>) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::InvalidInput("Username is required".into()));
        }

        let user = User {
            id: UserId::new(),
            username: username.to_string(),
            name: normalize_text_option(name.map(str::to_string)),
            image: None,
            created_at: unix_timestamp_millis(),
        };

        self.conn.execute(
            "INSERT INTO users (id, username, name, created_at) VALUES (?, ?, ?, ?)",
            params![user.id.as_str(), user.username, user.name, user.created_at],
        )?;

        Ok(user)
    }

    fn set_image(&self, user_id: &UserId, content_type: &str, blob: &[u8]) -> Result<ImageRef> {
        if !content_type.starts_with("image/") {
            return Err(Error::InvalidInput(format!(
                "Unsupported image type: {content_type}"
            )));
        }
        if blob.is_empty() {
            return Err(Error::InvalidInput("Image is empty".into()));
        }

        let image = ImageRef {
            id: Uuid::now_v7().to_string(),
        };

        self.conn.execute(
            "INSERT INTO user_images (id, user_id, content_type, blob, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(user_id) DO UPDATE SET
                id = excluded.id,
                content_type = excluded.content_type,
                blob = excluded.blob,
                created_at = excluded.created_at",
            params![
                image.id,
                user_id.as_str(),
                content_type,
                blob,
                unix_timestamp_millis()
            ],
        )?;

        Ok(image)
    }

    fn find_image(&self, image_id: &str) -> Result<Option<UserImage>> {
        let image = self
            .conn
            .query_row(
                "SELECT content_type, blob FROM user_images WHERE id = ?",
                params![image_id],
                |row| {
                    Ok(UserImage {
                        content_type: row.get(0)?,
                        blob: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(image)
    }

    fn find_by_id(&self, id: &UserId) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT u.id, u.username, u.name, i.id, u.created_at
                 FROM users u
                 LEFT JOIN user_images i ON i.user_id = u.id
                 WHERE u.id = ?",
                params![id.as_str()],
                Self::parse_user,
            )
            .optional()?;
        Ok(user)
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT u.id, u.username, u.name, i.id, u.created_at
                 FROM users u
                 LEFT JOIN user_images i ON i.user_id = u.id
                 WHERE u.username = ?",
                params![username],
                Self::parse_user,
            )
            .optional()?;
        Ok(user)
    }

    fn find_owner_with_notes(&self, username: &str) -> Result<Option<OwnerNotes>> {
        let mut stmt = self.conn.prepare(
            "SELECT u.id, u.name, u.username, i.id, n.id, n.title
             FROM users u
             LEFT JOIN user_images i ON i.user_id = u.id
             LEFT JOIN notes n ON n.owner_id = u.id
             WHERE u.username = ?
             ORDER BY n.updated_at DESC, n.id ASC",
        )?;

        let mut rows = stmt.query(params![username])?;
        let mut owner: Option<OwnerNotes> = None;
        while let Some(row) = rows.next()? {
            if owner.is_none() {
                let id: String = row.get(0)?;
                let image_id: Option<String> = row.get(3)?;
                owner = Some(OwnerNotes {
                    id: UserId::from(id),
                    name: row.get(1)?,
                    username: row.get(2)?,
                    image: image_id.map(|id| ImageRef { id }),
                    notes: Vec::new(),
                });
            }

            let note_id: Option<String> = row.get(4)?;
            if let (Some(owner), Some(note_id)) = (owner.as_mut(), note_id) {
                owner.notes.push(NoteSummary {
                    id: note_id.into(),
                    title: row.get(5)?,
                });
            }
        }

        Ok(owner)
    }

    fn search(&self, query: &str, limit: usize) -> Result<Vec<User>> {
        let pattern = format!("%{}%", escape_like(query.trim()));
        let mut stmt = self.conn.prepare(
            "SELECT u.id, u.username, u.name, i.id, u.created_at
             FROM users u
             LEFT JOIN user_images i ON i.user_id = u.id
             WHERE u.username LIKE ?1 ESCAPE '\\' OR u.name LIKE ?1 ESCAPE '\\'
             ORDER BY u.username ASC
             LIMIT ?2",
        )?;

        let users = stmt
            .query_map(params![pattern, limit as i64], Self::parse_user)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(users)
    }
}
