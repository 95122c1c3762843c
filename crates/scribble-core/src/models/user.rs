//! User model and the owner/notes projection

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::note::NoteSummary;

/// Fallback avatar served when a user has no uploaded image
pub const DEFAULT_USER_IMAGE: &str = "/img/user.svg";

/// A unique identifier for a user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a new unique user ID using UUID v7
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

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a stored user image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub id: String,
}

/// Stored bytes of an uploaded user image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserImage {
    pub content_type: String,
    pub blob: Vec<u8>,
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: Option<String>,
    pub image: Option<ImageRef>,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
}

impl User {
    /// Name shown in chrome, falling back to the username
    #[must_use]
    pub fn display_name(&self) -> &str {
        display_name(self.name.as_deref(), &self.username)
    }

    /// Avatar URL for this user
    #[must_use]
    pub fn image_src(&self) -> String {
        user_image_src(self.image.as_ref().map(|image| image.id.as_str()))
    }
}

/// A user together with the summaries of the notes they own.
///
/// Built per request by the notes loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerNotes {
    pub id: UserId,
    pub name: Option<String>,
    pub username: String,
    pub image: Option<ImageRef>,
    pub notes: Vec<NoteSummary>,
}

impl OwnerNotes {
    #[must_use]
    pub fn display_name(&self) -> &str {
        display_name(self.name.as_deref(), &self.username)
    }

    #[must_use]
    pub fn image_src(&self) -> String {
        user_image_src(self.image.as_ref().map(|image| image.id.as_str()))
    }

    /// Whether `viewer` is the owner of these notes
    #[must_use]
    pub fn is_owned_by(&self, viewer: Option<&UserId>) -> bool {
        viewer == Some(&self.id)
    }
}

/// Resolve the URL of a user image, or the default avatar
#[must_use]
pub fn user_image_src(image_id: Option<&str>) -> String {
    image_id.map_or_else(
        || DEFAULT_USER_IMAGE.to_string(),
        |id| format!("/resources/user-images/{id}"),
    )
}

fn display_name<'a>(name: Option<&'a str>, username: &'a str) -> &'a str {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => username,
    }
}
