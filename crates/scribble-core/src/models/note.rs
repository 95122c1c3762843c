//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::user::UserId;
use crate::util::unix_timestamp_millis;

/// Maximum title length in characters
pub const TITLE_MAX_LENGTH: usize = 100;
/// Maximum content length in characters
pub const CONTENT_MAX_LENGTH: usize = 10_000;

/// Ordered validation messages for one field.
///
/// `None` and empty entries are treated as absent by every consumer.
pub type ListOfErrors = Vec<Option<String>>;

/// A unique identifier for a note, generated as UUID v7 (time-sortable)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A note in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Owning user
    pub owner_id: UserId,
    pub title: String,
    /// Plain text body
    pub content: String,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
    /// Last update timestamp (Unix ms)
    pub updated_at: i64,
}

impl Note {
    /// Create a new note for `owner_id` from a validated draft
    #[must_use]
    pub fn new(owner_id: UserId, draft: NoteDraft) -> Self {
        let now = unix_timestamp_millis();
        Self {
            id: NoteId::new(),
            owner_id,
            title: draft.title,
            content: draft.content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Projection used by navigation lists
    #[must_use]
    pub fn summary(&self) -> NoteSummary {
        NoteSummary {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}

/// Id and title of a note; bodies are never loaded for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: NoteId,
    pub title: String,
}

/// Validated title and content for a new note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

/// Per-field validation failures for a note draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraftErrors {
    pub title: ListOfErrors,
    pub content: ListOfErrors,
}

impl NoteDraftErrors {
    pub fn is_empty(&self) -> bool {
        self.title.iter().chain(&self.content).all(Option::is_none)
    }
}

impl NoteDraft {
    /// Trim and validate submitted fields.
    pub fn parse(title: &str, content: &str) -> Result<Self, NoteDraftErrors> {
        let title = title.trim();
        let content = content.trim();

        let errors = NoteDraftErrors {
            title: vec![length_error("Title", title, TITLE_MAX_LENGTH)],
            content: vec![length_error("Content", content, CONTENT_MAX_LENGTH)],
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

fn length_error(field: &str, value: &str, max: usize) -> Option<String> {
    if value.is_empty() {
        Some(format!("{field} is required"))
    } else if value.chars().count() > max {
        Some(format!("{field} must be at most {max} characters"))
    } else {
        None
    }
}
